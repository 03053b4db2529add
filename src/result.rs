//! Search results.

use std::fmt;
use std::time::Duration;

use crate::node::Node;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No applicable action improves the current state.
    LocalOptimum,
    /// The problem reported no applicable action at all.
    DeadEnd,
    /// Every configured ascent of a restart search has completed.
    RestartsExhausted,
    /// Every applicable action is in the tabu list.
    TabuExhausted,
    /// The iteration cutoff was reached.
    IterationLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::LocalOptimum => "local_optimum",
            Termination::DeadEnd => "dead_end",
            Termination::RestartsExhausted => "restarts_exhausted",
            Termination::TabuExhausted => "tabu_exhausted",
            Termination::IterationLimit => "iteration_limit",
        };
        f.write_str(name)
    }
}

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// Best state found.
    pub tour: S,
    /// Objective value of `tour`.
    pub value: f64,
    /// Accepted transition moves. Restarts are not counted.
    pub niters: usize,
    /// Wall-clock time of the whole run.
    pub elapsed_time: Duration,
    /// Stopping condition that ended the run.
    pub termination: Termination,
    /// Number of reseeds performed (restart search only).
    pub restarts: usize,
    /// Published best value, starting with the initial value and recorded
    /// after every accepted move, restart cycle or tabu iteration.
    pub value_history: Vec<f64>,
}

impl<S> SearchResult<S> {
    pub(crate) fn from_best(
        best: Node<S>,
        niters: usize,
        elapsed_time: Duration,
        termination: Termination,
        restarts: usize,
        value_history: Vec<f64>,
    ) -> Self {
        let value = best.value();
        Self {
            tour: best.into_state(),
            value,
            niters,
            elapsed_time,
            termination,
            restarts,
            value_history,
        }
    }
}
