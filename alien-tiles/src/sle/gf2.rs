//! Gauss–Jordan elimination over GF(2).
//!
//! Solves A·x ≡ b (mod 2), returning one particular solution together with a basis of the
//! homogeneous solutions, or `None` when the system is inconsistent.

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::errors::AlienTilesError;
use crate::ring::Matrix;
use crate::ring::matrix_ops::ensure_rectangular;
use crate::sle::{BitRow, Span};

/// A coefficient matrix reduced mod 2, one packed [`BitRow`] per equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf2Matrix {
    rows: Vec<BitRow>,
    cols: usize,
}

/// The full solution set of a consistent GF(2) system: `particular + span(basis)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gf2Solution {
    /// Pivot variables from the reduced right-hand side, free variables zero.
    pub particular: BitRow,
    /// One vector per free variable, in increasing column order.
    pub basis: Vec<BitRow>,
}

impl Gf2Matrix {
    /// Packs the parity of every entry of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::DimensionMismatch` for empty or ragged input.
    pub fn from_parities(matrix: &Matrix) -> Result<Self, AlienTilesError> {
        let (_, cols) = ensure_rectangular(matrix)?;

        Ok(Self {
            rows: matrix.iter().map(|row| BitRow::from_parities(row)).collect(),
            cols,
        })
    }

    /// Computes `A·x` over GF(2).
    pub fn mul_vector(&self, x: &BitRow) -> BitRow {
        let mut product = BitRow::zeros(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let dot = (0..self.cols).filter(|&j| row.get(j) && x.get(j)).count();
            product.set(i, dot % 2 == 1);
        }
        product
    }

    /// Solves `A·x ≡ rhs (mod 2)`.
    ///
    /// Each equation is packed as `cols` value bits followed by one right-hand-side bit, so
    /// eliminating a row is a single [`BitRow::xor_assign`]. Columns are processed left to
    /// right, the first row with a set bit becomes the pivot, and the pivot is cleared from
    /// every other row, so the result is already in reduced form and the pivot variables
    /// can be read off directly.
    ///
    /// Returns `Ok(None)` if some equation reduces to `0 = 1`.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::DimensionMismatch` if `rhs` does not have one bit per row.
    pub fn solve(&self, rhs: &BitRow) -> Result<Option<Gf2Solution>, AlienTilesError> {
        if rhs.len() != self.rows.len() {
            return Err(AlienTilesError::DimensionMismatch(format!(
                "Right-hand side has {} bits but the system has {} equations",
                rhs.len(),
                self.rows.len()
            )));
        }

        let cols = self.cols;
        let mut work: Vec<BitRow> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.augmented(rhs.get(i)))
            .collect();

        let mut pivot_cols = Vec::new();
        let mut next_row = 0;
        for col in 0..cols {
            if next_row == work.len() {
                break;
            }
            let Some(selected) = (next_row..work.len()).find(|&r| work[r].get(col)) else {
                continue;
            };
            work.swap(next_row, selected);

            let (done, rest) = work.split_at_mut(next_row);
            let (pivot, below) = rest.split_at_mut(1);
            let pivot = &pivot[0];
            for row in done.iter_mut().chain(below.iter_mut()) {
                if row.get(col) {
                    row.xor_assign(pivot);
                }
            }

            pivot_cols.push(col);
            next_row += 1;
        }

        // 0 .. 0 | 1
        if work[next_row..]
            .iter()
            .any(|row| !row.any_below(cols) && row.get(cols))
        {
            return Ok(None);
        }

        let mut particular = BitRow::zeros(cols);
        let mut is_pivot = vec![false; cols];
        for (r, &col) in pivot_cols.iter().enumerate() {
            particular.set(col, work[r].get(cols));
            is_pivot[col] = true;
        }

        let basis = (0..cols)
            .filter(|&free| !is_pivot[free])
            .map(|free| {
                let mut v = BitRow::singleton(cols, free);
                for (r, &col) in pivot_cols.iter().enumerate() {
                    if work[r].get(free) {
                        v.set(col, true);
                    }
                }
                v
            })
            .collect();

        Ok(Some(Gf2Solution { particular, basis }))
    }
}

impl Gf2Solution {
    /// A solution set with the single member `particular`.
    pub fn unique(particular: BitRow) -> Self {
        Self {
            particular,
            basis: Vec::new(),
        }
    }

    /// Number of free variables, i.e. the dimension of the solution space.
    pub fn free_dim(&self) -> usize {
        self.basis.len()
    }

    /// Lazily walks every solution, see [`Span`].
    pub fn span(&self) -> Span {
        Span::new(self.particular.clone(), self.basis.clone())
    }

    pub fn into_span(self) -> Span {
        Span::new(self.particular, self.basis)
    }

    /// Draws a solution by adding each basis vector with probability one half.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> BitRow {
        let mut x = self.particular.clone();
        for v in &self.basis {
            if rng.random_bool(0.5) {
                x.xor_assign(v);
            }
        }
        x
    }
}
