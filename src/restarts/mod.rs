//! Hill Climbing with Random Restarts.
//!
//! Repeats independent hill-climbing ascents, each from a freshly randomized
//! initial state, and keeps the best local optimum seen across all of them.
//! The published result never gets worse from one restart to the next.

mod config;
mod runner;

pub use config::RestartConfig;
pub use runner::RestartRunner;
