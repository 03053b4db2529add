//! Hill Climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial state
//! 2. At each step:
//!    a. Score every applicable action by its objective-value delta
//!    b. Select the best action (ties broken by the configured policy)
//!    c. Stop if the best delta is not positive (local optimum)
//!    d. Otherwise apply it and continue from the successor

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::HillClimbingConfig;
use crate::error::Result;
use crate::node::Node;
use crate::problem::OptProblem;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};
use crate::select::SelectionPolicy;

/// Outcome of a single ascent.
pub(crate) struct Ascent<S> {
    pub node: Node<S>,
    pub moves: usize,
    pub termination: Termination,
}

/// Climbs from `start` until no action improves the current node.
///
/// `on_move` is called after every accepted move with the new node, the
/// action taken and its delta. An empty action set ends the ascent with
/// [`Termination::DeadEnd`].
pub(crate) fn climb<P, T, R, F>(
    problem: &P,
    start: Node<P::State>,
    policy: &T,
    move_limit: Option<usize>,
    rng: &mut R,
    mut on_move: F,
) -> Ascent<P::State>
where
    P: OptProblem,
    T: SelectionPolicy,
    R: Rng,
    F: FnMut(&Node<P::State>, &P::Action, f64),
{
    let mut current = start;
    let mut moves = 0usize;

    let termination = loop {
        if move_limit.is_some_and(|limit| moves >= limit) {
            break Termination::IterationLimit;
        }

        let diffs = problem.action_value_diffs(current.state());
        let Some((action, delta)) = policy.select(&diffs, rng) else {
            break Termination::DeadEnd;
        };

        if !improves(delta) {
            break Termination::LocalOptimum;
        }

        current = current.successor(problem, &action, delta);
        moves += 1;
        on_move(&current, &action, delta);
    };

    Ascent {
        node: current,
        moves,
        termination,
    }
}

/// A NaN delta never counts as an improvement.
fn improves(delta: f64) -> bool {
    delta > 0.0
}

/// Executes Hill Climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Climbs from the problem's initial state to a local optimum.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_localsearch::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
    /// use u_localsearch::{OptProblem, Reseed};
    /// use rand::Rng;
    ///
    /// struct Peak;
    /// impl OptProblem for Peak {
    ///     type State = i32;
    ///     type Action = i32;
    ///     fn initial_state(&self) -> i32 { 0 }
    ///     fn objective_value(&self, &x: &i32) -> f64 { -f64::from((x - 3) * (x - 3)) }
    ///     fn action_value_diffs(&self, &x: &i32) -> Vec<(i32, f64)> {
    ///         [-1, 1].iter().map(|&d| (d, self.objective_value(&(x + d)) - self.objective_value(&x))).collect()
    ///     }
    ///     fn apply(&self, &x: &i32, &d: &i32) -> i32 { x + d }
    ///     fn randomize<R: Rng>(&mut self, _rng: &mut R) -> Reseed<i32> { Reseed::new(0, 0) }
    /// }
    ///
    /// let result = HillClimbingRunner::run(&Peak, &HillClimbingConfig::default()).unwrap();
    /// assert_eq!(result.tour, 3);
    /// ```
    pub fn run<P: OptProblem>(
        problem: &P,
        config: &HillClimbingConfig,
    ) -> Result<SearchResult<P::State>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    pub(crate) fn run_with_rng<P: OptProblem, R: Rng>(
        problem: &P,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State>> {
        let start = Instant::now();
        info!(event = "solve_start", strategy = "hill_climbing");

        let initial = Node::evaluate(problem, problem.initial_state());
        let mut value_history = vec![initial.value()];

        let ascent = climb(
            problem,
            initial,
            &config.tie_break,
            config.move_limit(),
            rng,
            |node, action, delta| {
                value_history.push(node.value());
                trace!(event = "step", action = ?action, delta, value = node.value());
            },
        );

        debug!(event = "ascent_end", termination = %ascent.termination, moves = ascent.moves);

        let result = SearchResult::from_best(
            ascent.node,
            ascent.moves,
            start.elapsed(),
            ascent.termination,
            0,
            value_history,
        );

        info!(
            event = "solve_end",
            strategy = "hill_climbing",
            value = result.value,
            niters = result.niters,
            duration_ms = result.elapsed_time.as_millis() as u64,
            termination = %result.termination,
        );

        Ok(result)
    }
}
