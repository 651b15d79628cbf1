use serde::{Deserialize, Serialize};

use crate::solver::SolverConfig;

/// How a solution space of a given free dimension is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Visit every combination of the basis vectors.
    Exact,
    /// Bounded sampling (mod-2 stage) or bounded local search (carry stage).
    Heuristic {
        sample_cap: usize,
        iteration_cap: usize,
        patience: usize,
    },
}

impl SearchStrategy {
    /// Picks the strategy for a space with `free_dim` free variables.
    ///
    /// A space with no free variables has a single member and is always handled exactly.
    pub fn select(free_dim: usize, config: &SolverConfig) -> Self {
        if free_dim == 0 || (config.exact_minimize && free_dim <= config.max_enum_bits as usize)
        {
            return SearchStrategy::Exact;
        }

        SearchStrategy::Heuristic {
            sample_cap: config.sample_cap,
            iteration_cap: config.iteration_cap,
            patience: config.patience,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, SearchStrategy::Exact)
    }
}

/// Random mod-2 draws for a space of `free_dim` free variables: `min(sample_cap, 2^free_dim)`.
pub fn sample_draws(sample_cap: usize, free_dim: usize) -> usize {
    u32::try_from(free_dim)
        .ok()
        .and_then(|d| 1usize.checked_shl(d))
        .map_or(sample_cap, |space| space.min(sample_cap))
}
