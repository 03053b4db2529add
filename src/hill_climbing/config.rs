//! Hill Climbing configuration.

use serde::{Deserialize, Serialize};

use crate::select::TieBreak;

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill_climbing::HillClimbingConfig;
/// use u_localsearch::TieBreak;
///
/// let config = HillClimbingConfig::default()
///     .with_tie_break(TieBreak::First)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 0);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HillClimbingConfig {
    /// How to choose among equally good actions.
    pub tie_break: TieBreak,
    /// Maximum accepted moves. 0 = climb until a local optimum.
    pub max_iterations: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl HillClimbingConfig {
    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Caps the number of accepted moves.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn move_limit(&self) -> Option<usize> {
        (self.max_iterations > 0).then_some(self.max_iterations)
    }
}
