//! Tabu Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::select::TieBreak;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_capacity(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.capacity, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TabuConfig {
    /// How many recent actions stay forbidden.
    pub capacity: usize,
    /// Number of iterations before the search stops, counted from the
    /// start whether or not they improve the best solution.
    pub max_iterations: usize,
    /// How to choose among equally good admissible actions.
    pub tie_break: TieBreak,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            max_iterations: 500,
            tie_break: TieBreak::First,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the iteration cutoff.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "tabu max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
