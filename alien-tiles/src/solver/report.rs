use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::AlienTilesError;
use crate::ring::Matrix;
use crate::solver::SearchStrategy;

/// Why a solve produced no toggle matrix.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unsolvable {
    /// The mod-2 reduction is inconsistent. This proves the grid has no solution.
    #[error("no_solution_mod2")]
    NoSolutionMod2,
    /// Mod-2 feasible, but no evaluated candidate lifted to the full modulus. Only a proof of
    /// infeasibility when both stages were enumerated exactly.
    #[error("no_lifted_solution")]
    NoLiftedSolution,
}

impl Unsolvable {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Unsolvable::NoSolutionMod2 => "no_solution_mod2",
            Unsolvable::NoLiftedSolution => "no_lifted_solution",
        }
    }
}

/// A toggle matrix and its total toggle count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub toggles: Matrix,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub elapsed: Duration,
    /// Mod-2 candidates evaluated, whether or not they lifted.
    pub candidates_tried: usize,
    pub best_sum: Option<u64>,
    /// Free dimension of the mod-2 solution space; absent when it is empty.
    pub mod2_free_dim: Option<usize>,
    /// Strategy used over the mod-2 solution space.
    pub strategy: Option<SearchStrategy>,
}

/// Outcome of one solve plus what it took to get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: Result<Solution, Unsolvable>,
    pub diagnostics: Diagnostics,
}

impl SolveReport {
    pub fn toggles(&self) -> Option<&Matrix> {
        self.outcome.as_ref().ok().map(|solution| &solution.toggles)
    }

    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Whether an absent solution is a proof of infeasibility rather than a search miss.
    pub fn is_proven_unsolvable(&self) -> bool {
        match self.outcome {
            Err(Unsolvable::NoSolutionMod2) => true,
            Err(Unsolvable::NoLiftedSolution) => {
                self.diagnostics.strategy.is_some_and(|s| s.is_exact())
            }
            Ok(_) => false,
        }
    }

    pub fn to_json(&self) -> Result<String, AlienTilesError> {
        Ok(serde_json::to_string(self)?)
    }
}
