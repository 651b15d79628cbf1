//! The mod-2 → mod-4 lifting search.
//!
//! 1. Solve `M·y ≡ s (mod 2)`; if inconsistent the grid is unsolvable.
//! 2. Walk the mod-2 solutions, exactly or by random sampling.
//! 3. Lift each candidate through its carry system (see [`AlienTilesSolver::carry_for`]).
//! 4. Walk the carry solutions, exactly or by local search, keeping the smallest toggle total.

use std::time::Instant;

use rand::Rng;

use crate::errors::AlienTilesError;
use crate::sle::{BitRow, Gf2Solution};
use crate::solver::strategy::sample_draws;
use crate::solver::{
    AlienTilesSolver, Diagnostics, SearchStrategy, Solution, SolveReport, Unsolvable,
};

/// State of one solve: the best solution so far and how many mod-2 candidates were tried.
pub struct LiftSearch<'a, R: Rng> {
    solver: &'a AlienTilesSolver,
    rng: &'a mut R,
    best: Option<Solution>,
    tried: usize,
}

impl<'a, R: Rng> LiftSearch<'a, R> {
    pub fn new(solver: &'a AlienTilesSolver, rng: &'a mut R) -> Self {
        Self {
            solver,
            rng,
            best: None,
            tried: 0,
        }
    }

    pub fn run(mut self) -> Result<SolveReport, AlienTilesError> {
        let started = Instant::now();

        let Some(mod2) = self.solver.mod2_solutions()? else {
            log::debug!("mod-2 system is inconsistent");
            return Ok(SolveReport {
                outcome: Err(Unsolvable::NoSolutionMod2),
                diagnostics: Diagnostics {
                    elapsed: started.elapsed(),
                    candidates_tried: 0,
                    best_sum: None,
                    mod2_free_dim: None,
                    strategy: None,
                },
            });
        };

        let strategy = SearchStrategy::select(mod2.free_dim(), self.solver.config());
        log::debug!(
            "mod-2 free dimension {}, strategy {:?}",
            mod2.free_dim(),
            strategy
        );

        match strategy {
            SearchStrategy::Exact => {
                let candidates = mod2.span();
                log::debug!("enumerating {:?} mod-2 candidates", candidates.total());
                for y2 in candidates {
                    self.process(&y2)?;
                }
            }
            SearchStrategy::Heuristic { sample_cap, .. } => {
                self.process(&mod2.particular)?;
                for _ in 0..sample_draws(sample_cap, mod2.free_dim()) {
                    let y2 = mod2.sample(self.rng);
                    self.process(&y2)?;
                }
            }
        }

        let best_sum = self.best.as_ref().map(|solution| solution.total);
        log::debug!(
            "tried {} mod-2 candidates, best sum {:?}",
            self.tried,
            best_sum
        );

        Ok(SolveReport {
            outcome: self.best.ok_or(Unsolvable::NoLiftedSolution),
            diagnostics: Diagnostics {
                elapsed: started.elapsed(),
                candidates_tried: self.tried,
                best_sum,
                mod2_free_dim: Some(mod2.free_dim()),
                strategy: Some(strategy),
            },
        })
    }

    /// Lifts one mod-2 candidate and searches its carry space.
    fn process(&mut self, y2: &BitRow) -> Result<(), AlienTilesError> {
        self.tried += 1;
        let Some(carry) = self.solver.carry_for(y2)? else {
            return Ok(());
        };

        match SearchStrategy::select(carry.free_dim(), self.solver.config()) {
            SearchStrategy::Exact => {
                for t in carry.span() {
                    self.offer(y2, &t);
                }
            }
            SearchStrategy::Heuristic {
                iteration_cap,
                patience,
                ..
            } => {
                let t = self.descend(y2, &carry, iteration_cap, patience);
                self.offer(y2, &t);
            }
        }
        Ok(())
    }

    /// Local search over the carry space starting from its particular solution.
    ///
    /// Each iteration tries every single basis flip and keeps the ones that strictly lower the
    /// total. After `patience` iterations in a row without improvement, one random flip is
    /// tried; the search stops if that does not improve either. Only improving moves are
    /// taken, so the final point is the best one on the trajectory.
    fn descend(
        &mut self,
        y2: &BitRow,
        carry: &Gf2Solution,
        iteration_cap: usize,
        patience: usize,
    ) -> BitRow {
        let mut t = carry.particular.clone();
        let mut current = self.sum_for(y2, &t);
        let mut stalled = 0;

        for _ in 0..iteration_cap {
            let mut improved = false;
            for v in &carry.basis {
                let candidate = t.xor(v);
                let sum = self.sum_for(y2, &candidate);
                if sum < current {
                    t = candidate;
                    current = sum;
                    improved = true;
                }
            }

            if improved {
                stalled = 0;
                continue;
            }

            stalled += 1;
            if stalled < patience {
                continue;
            }
            stalled = 0;

            if carry.basis.is_empty() {
                break;
            }
            let k = self.rng.random_range(0..carry.basis.len());
            let candidate = t.xor(&carry.basis[k]);
            let sum = self.sum_for(y2, &candidate);
            if sum >= current {
                break;
            }
            t = candidate;
            current = sum;
        }

        t
    }

    fn sum_for(&self, y2: &BitRow, t: &BitRow) -> u64 {
        self.solver.system.toggle_sum(&self.solver.lift(y2, t))
    }

    /// Keeps `y2 + 2t` if it beats the best total so far.
    fn offer(&mut self, y2: &BitRow, t: &BitRow) {
        let y = self.solver.lift(y2, t);
        let total = self.solver.system.toggle_sum(&y);
        if self.best.as_ref().is_some_and(|best| total >= best.total) {
            return;
        }

        log::trace!("new best sum {}", total);
        self.best = Some(Solution {
            toggles: self.solver.system.reconstruct(&y),
            total,
        });
    }
}
