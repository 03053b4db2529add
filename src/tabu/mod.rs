//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that always moves to the best
//! admissible neighbor, even when it is worse than the current one, while
//! forbidding the most recently taken actions (the tabu list) to keep the
//! search from cycling straight back.
//!
//! Tabu status is keyed on actions, not on the states they lead to.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod history;
mod runner;

pub use config::TabuConfig;
pub use history::TabuList;
pub use runner::TabuRunner;
