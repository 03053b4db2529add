//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial state; it is also the first best-known node
//! 2. At each iteration:
//!    a. Score every applicable action
//!    b. Drop the actions in the tabu list
//!    c. Take the best admissible action, even if it worsens the objective
//!    d. Push it onto the tabu list, evicting the oldest entry on overflow
//!    e. Update the best-known node if strictly improved
//! 3. Terminate when no admissible action remains or the iteration cutoff
//!    is reached

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::TabuConfig;
use super::history::TabuList;
use crate::error::Result;
use crate::node::Node;
use crate::problem::OptProblem;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};
use crate::select::SelectionPolicy;

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_localsearch::tabu::{TabuConfig, TabuRunner};
    /// use u_localsearch::{OptProblem, Reseed};
    /// use rand::Rng;
    ///
    /// struct MyProblem;
    /// impl OptProblem for MyProblem {
    ///     type State = Vec<usize>;
    ///     type Action = (usize, usize);
    ///     fn initial_state(&self) -> Vec<usize> { vec![0, 1, 2] }
    ///     fn objective_value(&self, _s: &Vec<usize>) -> f64 { 0.0 }
    ///     fn action_value_diffs(&self, _s: &Vec<usize>) -> Vec<((usize, usize), f64)> { vec![] }
    ///     fn apply(&self, s: &Vec<usize>, _a: &(usize, usize)) -> Vec<usize> { s.clone() }
    ///     fn randomize<R: Rng>(&mut self, _rng: &mut R) -> Reseed<Vec<usize>> { Reseed::new(vec![0, 1, 2], 0) }
    /// }
    ///
    /// let result = TabuRunner::run(&MyProblem, &TabuConfig::default()).unwrap();
    /// ```
    pub fn run<P: OptProblem>(problem: &P, config: &TabuConfig) -> Result<SearchResult<P::State>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    pub(crate) fn run_with_rng<P: OptProblem, R: Rng>(
        problem: &P,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State>> {
        config.validate()?;

        let start = Instant::now();
        info!(
            event = "solve_start",
            strategy = "tabu",
            capacity = config.capacity,
            max_iterations = config.max_iterations,
        );

        let mut current = Node::evaluate(problem, problem.initial_state());
        let mut best = current.clone();
        let mut tabu = TabuList::new(config.capacity);
        let mut value_history = vec![best.value()];
        let mut niters = 0usize;

        let termination = loop {
            if niters >= config.max_iterations {
                break Termination::IterationLimit;
            }

            let diffs = problem.action_value_diffs(current.state());
            if diffs.is_empty() {
                break Termination::DeadEnd;
            }

            let admissible: Vec<(P::Action, f64)> = diffs
                .into_iter()
                .filter(|(action, _)| !tabu.contains(action))
                .collect();

            let Some((action, delta)) = config.tie_break.select(&admissible, rng) else {
                break Termination::TabuExhausted;
            };

            current = current.successor(problem, &action, delta);
            trace!(event = "step", action = ?action, delta, value = current.value());
            tabu.push(action);

            if current.improves_on(&best) {
                best = current.clone();
                debug!(event = "new_best", value = best.value(), iteration = niters);
            }

            niters += 1;
            value_history.push(best.value());
        };

        debug!(event = "tabu_end", termination = %termination, tabu_len = tabu.len());

        let result = SearchResult::from_best(
            best,
            niters,
            start.elapsed(),
            termination,
            0,
            value_history,
        );

        info!(
            event = "solve_end",
            strategy = "tabu",
            value = result.value,
            niters = result.niters,
            duration_ms = result.elapsed_time.as_millis() as u64,
            termination = %result.termination,
        );

        Ok(result)
    }
}
