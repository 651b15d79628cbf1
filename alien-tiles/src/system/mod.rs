//! # System Module
//!
//! Reduces an m×n Alien Tiles grid to an (m+n)×(m+n) linear system over aggregate variables
//! and maps aggregate solutions back to per-tile toggle counts.
//!
//! Toggling tile (p, q) k times adds k to all of row p and to the rest of column q, so tile
//! (i, j) ends at `a_ij + R_i + C_j - x_ij`, where `R_i` is the toggle total of row i and
//! `C_j` the toggle total of column j. Zeroing every tile forces `x_ij = R_i + C_j + a_ij`;
//! summing that over a row (resp. column) gives the system solved here:
//!
//! ```text
//! (1 - n)·R_i - Σ_j C_j = rowsum_i(A)
//! (1 - m)·C_j - Σ_i R_i = colsum_j(A)
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::AlienTilesError;
use crate::ring::matrix_ops::{
    column_sums, ensure_rectangular, matrix_vector_mul, normalize_matrix, row_sums, vector_sub,
};
use crate::ring::{Matrix, Ring, Vector};

/// The reduced aggregate system `M·y ≡ s` for one grid.
///
/// `y[..rows]` are the row aggregates `R_i`, `y[rows..]` the column aggregates `C_j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedSystem {
    pub ring: Ring,
    pub rows: usize,
    pub cols: usize,
    /// The input grid with every cell reduced.
    pub cells: Matrix,
    /// N×N coefficient matrix, N = rows + cols.
    pub matrix_M: Matrix,
    /// Row sums followed by column sums of `cells`.
    pub vector_s: Vector,
}

impl ReducedSystem {
    /// Builds the aggregate system for `cells`.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::DimensionMismatch` if `cells` is empty or ragged.
    pub fn try_with(cells: &Matrix, ring: Ring) -> Result<Self, AlienTilesError> {
        let (rows, cols) = ensure_rectangular(cells)?;
        let cells = normalize_matrix(cells, &ring);

        let matrix_M = build_matrix(rows, cols, &ring);

        let mut vector_s = row_sums(&cells, &ring);
        vector_s.extend(column_sums(&cells, &ring));

        Ok(Self {
            ring,
            rows,
            cols,
            cells,
            matrix_M,
            vector_s,
        })
    }

    /// Number of aggregate variables, `rows + cols`.
    pub fn size(&self) -> usize {
        self.rows + self.cols
    }

    /// `s - M·y`, reduced.
    pub fn residual(&self, y: &Vector) -> Result<Vector, AlienTilesError> {
        let product = matrix_vector_mul(&self.matrix_M, y, &self.ring)?;
        vector_sub(&self.vector_s, &product, &self.ring)
    }

    /// Toggle matrix for aggregates `y`: `x_ij = R_i + C_j + a_ij`.
    ///
    /// # Panics
    /// Panics if `y.len() != self.size()`.
    pub fn reconstruct(&self, y: &[i64]) -> Matrix {
        assert_eq!(y.len(), self.size(), "aggregate vector has wrong length");
        let (R, C) = y.split_at(self.rows);
        self.cells
            .iter()
            .zip(R)
            .map(|(row, &r)| {
                row.iter()
                    .zip(C)
                    .map(|(&a, &c)| self.ring.add(self.ring.add(r, c), a))
                    .collect()
            })
            .collect()
    }

    /// Total toggle count of `reconstruct(y)` without building the matrix.
    ///
    /// # Panics
    /// Panics if `y.len() != self.size()`.
    pub fn toggle_sum(&self, y: &[i64]) -> u64 {
        assert_eq!(y.len(), self.size(), "aggregate vector has wrong length");
        let (R, C) = y.split_at(self.rows);
        self.cells
            .iter()
            .zip(R)
            .flat_map(|(row, &r)| {
                row.iter()
                    .zip(C)
                    .map(move |(&a, &c)| self.ring.add(self.ring.add(r, c), a) as u64)
            })
            .sum()
    }

    /// Row and column totals of a toggle matrix, i.e. the aggregates it was built from.
    pub fn aggregates_of(&self, toggles: &Matrix) -> Vector {
        let mut y = row_sums(toggles, &self.ring);
        y.extend(column_sums(toggles, &self.ring));
        y
    }
}

/// ```text
/// [ kR·I_m    -1_{m×n} ]
/// [ -1_{n×m}  kC·I_n   ]
/// ```
/// with `kR = 1 - n` and `kC = 1 - m`, all reduced.
fn build_matrix(rows: usize, cols: usize, ring: &Ring) -> Matrix {
    let kR = ring.normalize(1 - cols as i64);
    let kC = ring.normalize(1 - rows as i64);
    let minus_one = ring.neg(1);
    let size = rows + cols;

    let mut M = vec![vec![0; size]; size];
    for i in 0..rows {
        M[i][i] = kR;
        for j in 0..cols {
            M[i][rows + j] = minus_one;
            M[rows + j][i] = minus_one;
        }
    }
    for j in 0..cols {
        M[rows + j][rows + j] = kC;
    }
    M
}
