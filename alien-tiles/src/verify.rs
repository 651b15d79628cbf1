//! Independent check of a toggle matrix by replaying every toggle on the grid.

use itertools::Itertools;

use crate::errors::AlienTilesError;
use crate::ring::matrix_ops::{ensure_rectangular, normalize_matrix};
use crate::ring::{Matrix, Ring};

/// Applies `toggles` to `cells` and returns the resulting grid.
///
/// Toggling tile (r, c) k times adds k to every tile of row r and to every other tile of
/// column c, so (r, c) itself receives k exactly once.
///
/// # Errors
///
/// Returns `AlienTilesError::DimensionMismatch` if either grid is malformed or the shapes differ.
pub fn simulate(cells: &Matrix, toggles: &Matrix, ring: &Ring) -> Result<Matrix, AlienTilesError> {
    let shape = ensure_rectangular(cells)?;
    let toggle_shape = ensure_rectangular(toggles)?;
    if shape != toggle_shape {
        return Err(AlienTilesError::DimensionMismatch(format!(
            "Grid is {:?} but toggle matrix is {:?}",
            shape, toggle_shape
        )));
    }

    let (rows, cols) = shape;
    let mut result = normalize_matrix(cells, ring);
    for (r, c) in (0..rows).cartesian_product(0..cols) {
        let k = ring.normalize(toggles[r][c]);
        if k == 0 {
            continue;
        }
        for cell in result[r].iter_mut() {
            *cell = ring.add(*cell, k);
        }
        for (i, row) in result.iter_mut().enumerate() {
            if i != r {
                row[c] = ring.add(row[c], k);
            }
        }
    }
    Ok(result)
}

/// Checks that `toggles` clears `cells`.
///
/// # Errors
///
/// Returns `AlienTilesError::VerificationFailed` listing every tile left non-zero, or
/// `AlienTilesError::DimensionMismatch` as in [`simulate`].
pub fn verify_solution(cells: &Matrix, toggles: &Matrix, ring: &Ring) -> Result<(), AlienTilesError> {
    let result = simulate(cells, toggles, ring)?;

    let nonzero: Vec<(usize, usize)> = result
        .iter()
        .enumerate()
        .flat_map(|(r, row)| row.iter().positions(|&v| v != 0).map(move |c| (r, c)))
        .collect();

    if nonzero.is_empty() {
        Ok(())
    } else {
        Err(AlienTilesError::VerificationFailed { nonzero })
    }
}
