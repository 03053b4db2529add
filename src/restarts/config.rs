//! Random-restart configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::select::TieBreak;

/// Configuration parameters for Hill Climbing with Random Restarts.
///
/// # Examples
///
/// ```
/// use u_localsearch::restarts::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_restarts(25)
///     .with_seed(3);
/// assert_eq!(config.restarts, 25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RestartConfig {
    /// Number of ascents to run. The first starts from the problem's current
    /// initial state, every further one from a reseeded state.
    pub restarts: usize,
    /// How to choose among equally good actions.
    pub tie_break: TieBreak,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            tie_break: TieBreak::Random,
            seed: None,
        }
    }
}

impl RestartConfig {
    /// Sets the number of ascents.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
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
        if self.restarts == 0 {
            return Err(ConfigError::Invalid("restarts must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RestartConfig::default();
        assert_eq!(config.restarts, 10);
        assert_eq!(config.tie_break, TieBreak::Random);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_restarts() {
        let config = RestartConfig::default().with_restarts(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
