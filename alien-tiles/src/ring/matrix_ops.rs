use crate::errors::AlienTilesError;
use crate::ring::{Matrix, Ring, Vector};

use itertools::Itertools;

/// Checks that `grid` is a non-empty rectangle and returns its `(rows, cols)`.
///
/// # Errors
///
/// Returns `AlienTilesError::DimensionMismatch` for an empty grid, an empty first row,
/// or rows of differing lengths.
pub fn ensure_rectangular(grid: &Matrix) -> Result<(usize, usize), AlienTilesError> {
    if grid.is_empty() {
        return Err(AlienTilesError::DimensionMismatch(
            "Grid must have at least one row".into(),
        ));
    }

    let cols = grid
        .iter()
        .map(Vec::len)
        .all_equal_value()
        .map_err(|lengths| {
            AlienTilesError::DimensionMismatch(match lengths {
                Some((first, other)) => {
                    format!("Grid is ragged: rows of length {} and {}", first, other)
                }
                None => "Grid must have at least one row".into(),
            })
        })?;

    if cols == 0 {
        return Err(AlienTilesError::DimensionMismatch(
            "Grid must have at least one column".into(),
        ));
    }

    Ok((grid.len(), cols))
}

/// Reduces every entry of `matrix` into `[0, modulus)`.
pub fn normalize_matrix(matrix: &Matrix, ring: &Ring) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
        .collect()
}

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, AlienTilesError> {
    let mut y = Vec::with_capacity(a.len());
    for (i, row) in a.iter().enumerate() {
        if row.len() != x.len() {
            return Err(AlienTilesError::DimensionMismatch(format!(
                "Row {} has length {} but the vector has length {}",
                i,
                row.len(),
                x.len()
            )));
        }
        y.push(ring.sum(row.iter().zip(x).map(|(&aij, &xj)| ring.mul(aij, xj))));
    }
    Ok(y)
}

/// Computes the vector difference `c = a - b` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `AlienTilesError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_sub(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, AlienTilesError> {
    if a.len() != b.len() {
        return Err(AlienTilesError::DimensionMismatch(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.sub(x, y)).collect())
}

/// Per-row sums of a rectangular matrix, each reduced.
pub fn row_sums(matrix: &Matrix, ring: &Ring) -> Vector {
    matrix
        .iter()
        .map(|row| ring.sum(row.iter().copied()))
        .collect()
}

/// Per-column sums of a rectangular matrix, each reduced.
pub fn column_sums(matrix: &Matrix, ring: &Ring) -> Vector {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| ring.sum(matrix.iter().map(|row| row[j])))
        .collect()
}

/// Plain (unreduced) sum of every entry; the toggle count of a toggle matrix.
pub fn total(matrix: &Matrix) -> u64 {
    matrix.iter().flatten().map(|&v| v.unsigned_abs()).sum()
}
