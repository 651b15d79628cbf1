#![allow(non_snake_case)]

//! Solver for Alien Tiles, the mod-4 variant of Lights Out where toggling a tile advances its
//! whole row and column.

pub mod errors;
pub mod preset;
pub mod ring;
pub mod sle;
pub mod solver;
pub mod system;
pub mod verify;

use rand::Rng;

use crate::errors::AlienTilesError;
use crate::ring::Matrix;
use crate::solver::{AlienTilesSolver, SolveReport, SolverConfig};

/// Solves `cells` under `config` in one call.
///
/// # Example
///
/// ```
/// # use alien_tiles::solver::SolverConfig;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let report = alien_tiles::solve(&vec![vec![2]], SolverConfig::default(), &mut rng).unwrap();
/// assert_eq!(report.toggles(), Some(&vec![vec![2]]));
/// ```
pub fn solve<R: Rng>(
    cells: &Matrix,
    config: SolverConfig,
    rng: &mut R,
) -> Result<SolveReport, AlienTilesError> {
    AlienTilesSolver::try_with(cells, config)?.solve(rng)
}
