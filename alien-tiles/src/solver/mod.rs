//! # Solver Module
//!
//! Finds a toggle matrix for an Alien Tiles grid by solving the reduced aggregate system
//! mod 2 and lifting each mod-2 solution to mod 4 through a second GF(2) "carry" system.

pub mod config;
pub mod report;
pub mod search;
pub mod strategy;

pub use config::SolverConfig;
pub use report::{Diagnostics, Solution, SolveReport, Unsolvable};
pub use strategy::SearchStrategy;

use itertools::Either;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::AlienTilesError;
use crate::ring::{Matrix, Vector};
use crate::sle::{BitRow, Gf2Matrix, Gf2Solution};
use crate::solver::search::LiftSearch;
use crate::system::ReducedSystem;

/// Solver for one grid.
#[derive(Debug, Clone)]
pub struct AlienTilesSolver {
    config: SolverConfig,
    system: ReducedSystem,
    /// `matrix_M` reduced mod 2; shared by the mod-2 and carry stages.
    parity: Gf2Matrix,
}

impl AlienTilesSolver {
    /// Validates `config`, then reduces `cells` to the aggregate system.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::DimensionMismatch` for an empty or ragged grid and whatever
    /// [`SolverConfig::validate`] rejects.
    pub fn try_with(cells: &Matrix, config: SolverConfig) -> Result<Self, AlienTilesError> {
        config.validate()?;
        let system = ReducedSystem::try_with(cells, config.ring()?)?;
        let parity = Gf2Matrix::from_parities(&system.matrix_M)?;

        Ok(Self {
            config,
            system,
            parity,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn system(&self) -> &ReducedSystem {
        &self.system
    }

    /// Runs the lifting search, drawing randomness from `rng`.
    pub fn solve<R: Rng>(&self, rng: &mut R) -> Result<SolveReport, AlienTilesError> {
        LiftSearch::new(self, rng).run()
    }

    /// [`solve`](Self::solve) with a fresh `StdRng` seeded from `seed`.
    pub fn solve_seeded(&self, seed: u64) -> Result<SolveReport, AlienTilesError> {
        self.solve(&mut StdRng::seed_from_u64(seed))
    }

    /// Every distinct toggle matrix that clears the grid, produced lazily.
    ///
    /// Distinct aggregate vectors give distinct toggle matrices (the aggregates are the row and
    /// column totals of the matrix), so nothing is repeated. The space can be huge; bound it
    /// with `take`.
    pub fn solutions(
        &self,
    ) -> Result<impl Iterator<Item = Result<Matrix, AlienTilesError>> + '_, AlienTilesError> {
        let candidates = self.mod2_solutions()?.map(Gf2Solution::into_span);

        Ok(candidates.into_iter().flatten().flat_map(move |y2| {
            match self.carry_for(&y2) {
                Ok(Some(carry)) => Either::Left(
                    carry
                        .into_span()
                        .map(move |t| Ok(self.system.reconstruct(&self.lift(&y2, &t)))),
                ),
                Ok(None) => Either::Right(None.into_iter()),
                Err(e) => Either::Right(Some(Err(e)).into_iter()),
            }
        }))
    }

    /// Number of distinct toggle matrices that clear the grid.
    ///
    /// # Errors
    ///
    /// Returns `AlienTilesError::InvalidParameters` if the mod-2 free dimension exceeds
    /// `max_enum_bits`, since every mod-2 candidate has to be checked.
    pub fn count_solutions(&self) -> Result<u128, AlienTilesError> {
        let Some(mod2) = self.mod2_solutions()? else {
            return Ok(0);
        };
        if mod2.free_dim() > self.config.max_enum_bits as usize {
            return Err(AlienTilesError::InvalidParameters(format!(
                "mod-2 free dimension {} exceeds max_enum_bits {}",
                mod2.free_dim(),
                self.config.max_enum_bits
            )));
        }

        let mut count = 0u128;
        for y2 in mod2.into_span() {
            if let Some(carry) = self.carry_for(&y2)? {
                count += 1u128 << carry.free_dim();
            }
        }
        Ok(count)
    }

    /// Solutions of `M·y ≡ s (mod 2)`.
    pub(crate) fn mod2_solutions(&self) -> Result<Option<Gf2Solution>, AlienTilesError> {
        self.parity
            .solve(&BitRow::from_parities(&self.system.vector_s))
    }

    /// Carry vectors `t` with `M·(y2 + 2t) ≡ s`, or `None` if `y2` does not lift.
    ///
    /// `M·(y2 + 2t) ≡ s (mod 4)` holds iff the residual `r = s - M·y2` is even and
    /// `M·t ≡ r/2 (mod 2)`. Under modulus 2 every mod-2 solution is final and the only carry is
    /// zero.
    pub(crate) fn carry_for(&self, y2: &BitRow) -> Result<Option<Gf2Solution>, AlienTilesError> {
        if self.system.ring.is_binary() {
            return Ok(Some(Gf2Solution::unique(BitRow::zeros(y2.len()))));
        }

        let residual = self.system.residual(&y2.to_vector())?;
        if residual.iter().any(|r| r % 2 != 0) {
            log::trace!("candidate {:?} has an odd residual", y2);
            return Ok(None);
        }

        let halves: Vector = residual.iter().map(|r| r / 2).collect();
        let carry = self.parity.solve(&BitRow::from_parities(&halves))?;
        if carry.is_none() {
            log::trace!("candidate {:?} has no carry solution", y2);
        }
        Ok(carry)
    }

    /// `y = y2 + 2t`, reduced.
    pub(crate) fn lift(&self, y2: &BitRow, t: &BitRow) -> Vector {
        (0..y2.len())
            .map(|i| {
                self.system
                    .ring
                    .normalize(y2.get(i) as i64 + 2 * t.get(i) as i64)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Matrix {
        vec![vec![2, 2, 1], vec![0, 2, 3], vec![3, 3, 3]]
    }

    #[test]
    fn test_try_with_validates() {
        assert!(AlienTilesSolver::try_with(&Vec::new(), SolverConfig::default()).is_err());
        let config = SolverConfig {
            modulus: 6,
            ..SolverConfig::default()
        };
        assert!(matches!(
            AlienTilesSolver::try_with(&scenario(), config),
            Err(AlienTilesError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_every_lift_solves_the_system() -> Result<(), AlienTilesError> {
        let solver = AlienTilesSolver::try_with(&scenario(), SolverConfig::default())?;
        let mod2 = solver.mod2_solutions()?.expect("scenario is mod-2 feasible");
        assert_eq!(mod2.free_dim(), 4);

        for y2 in mod2.span() {
            if let Some(carry) = solver.carry_for(&y2)? {
                for t in carry.span() {
                    let y = solver.lift(&y2, &t);
                    assert!(solver.system().residual(&y)?.iter().all(|&r| r == 0));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_count_matches_enumeration() -> Result<(), AlienTilesError> {
        let solver = AlienTilesSolver::try_with(&scenario(), SolverConfig::default())?;
        let all: Vec<Matrix> = solver.solutions()?.collect::<Result<_, _>>()?;
        assert_eq!(solver.count_solutions()?, 16);
        assert_eq!(all.len(), 16);
        Ok(())
    }

    #[test]
    fn test_count_needs_enumerable_space() -> Result<(), AlienTilesError> {
        let config = SolverConfig {
            max_enum_bits: 2,
            ..SolverConfig::default()
        };
        let solver = AlienTilesSolver::try_with(&scenario(), config)?;
        assert!(matches!(
            solver.count_solutions(),
            Err(AlienTilesError::InvalidParameters(_))
        ));
        Ok(())
    }

    #[test]
    fn test_unsolvable_grid_has_no_solutions() -> Result<(), AlienTilesError> {
        let solver = AlienTilesSolver::try_with(&vec![vec![1, 2, 3, 0]], SolverConfig::default())?;
        assert_eq!(solver.count_solutions()?, 0);
        assert_eq!(solver.solutions()?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_binary_modulus_skips_carry() -> Result<(), AlienTilesError> {
        let config = SolverConfig {
            modulus: 2,
            ..SolverConfig::default()
        };
        let solver = AlienTilesSolver::try_with(&vec![vec![1, 1], vec![1, 1]], config)?;
        let y2 = BitRow::from_parities(&[1, 0, 1, 1]);
        let carry = solver.carry_for(&y2)?.expect("binary carry always exists");
        assert_eq!(carry.free_dim(), 0);
        assert_eq!(solver.lift(&y2, &carry.particular), vec![1, 0, 1, 1]);
        Ok(())
    }
}
