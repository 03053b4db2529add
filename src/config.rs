//! File-level search configuration.
//!
//! Selects a strategy and its parameters from TOML so drivers can switch
//! between hill climbing, random restarts and tabu search without code
//! changes.
//!
//! # Examples
//!
//! ```
//! use u_localsearch::{SearchConfig, Strategy};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     strategy = "tabu"
//!     seed = 7
//!
//!     [tabu]
//!     capacity = 20
//!     max_iterations = 500
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::Tabu);
//! assert_eq!(config.tabu_config().seed, Some(7));
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use u_localsearch::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{HillClimbing, HillClimbingRestarts, LocalSearch, TabuSearch};
use crate::error::ConfigError;
use crate::hill_climbing::HillClimbingConfig;
use crate::problem::OptProblem;
use crate::restarts::RestartConfig;
use crate::tabu::TabuConfig;

/// Local search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    HillClimbing,
    HillClimbingRestarts,
    Tabu,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::HillClimbing => "hill_climbing",
            Strategy::HillClimbingRestarts => "hill_climbing_restarts",
            Strategy::Tabu => "tabu",
        };
        f.write_str(name)
    }
}

/// Main search configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Strategy built by [`engine`](Self::engine).
    pub strategy: Strategy,

    /// Random seed for reproducible results. Overrides the per-strategy seeds.
    pub seed: Option<u64>,

    pub hill_climbing: HillClimbingConfig,

    pub restarts: RestartConfig,

    pub tabu: TabuConfig,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// holds out-of-range parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every strategy section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.restarts.validate()?;
        self.tabu.validate()?;
        Ok(())
    }

    /// Hill climbing parameters with the top-level seed applied.
    pub fn hill_climbing_config(&self) -> HillClimbingConfig {
        HillClimbingConfig {
            seed: self.seed.or(self.hill_climbing.seed),
            ..self.hill_climbing.clone()
        }
    }

    /// Random-restart parameters with the top-level seed applied.
    pub fn restart_config(&self) -> RestartConfig {
        RestartConfig {
            seed: self.seed.or(self.restarts.seed),
            ..self.restarts.clone()
        }
    }

    /// Tabu parameters with the top-level seed applied.
    pub fn tabu_config(&self) -> TabuConfig {
        TabuConfig {
            seed: self.seed.or(self.tabu.seed),
            ..self.tabu.clone()
        }
    }

    /// Builds an engine for the configured strategy.
    pub fn engine<P>(&self) -> Box<dyn LocalSearch<P>>
    where
        P: OptProblem,
        P::State: 'static,
    {
        match self.strategy {
            Strategy::HillClimbing => Box::new(HillClimbing::<P::State>::with_config(
                self.hill_climbing_config(),
            )),
            Strategy::HillClimbingRestarts => Box::new(
                HillClimbingRestarts::<P::State>::with_config(self.restart_config()),
            ),
            Strategy::Tabu => Box::new(TabuSearch::<P::State>::with_config(self.tabu_config())),
        }
    }
}
