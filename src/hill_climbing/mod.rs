//! Hill Climbing (HC).
//!
//! Steepest-ascent local search: at every step the best applicable action is
//! taken, with ties between equally good actions broken at random. The search
//! stops at the first local optimum.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., Section 4.1.1.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbingRunner;

pub(crate) use runner::climb;
