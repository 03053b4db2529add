//! Random-restart execution loop.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::RestartConfig;
use crate::error::Result;
use crate::hill_climbing::climb;
use crate::node::Node;
use crate::problem::OptProblem;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};

/// Executes Hill Climbing with Random Restarts.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs `config.restarts` ascents and returns the best local optimum.
    ///
    /// The problem is reseeded through [`OptProblem::randomize`] between
    /// ascents, so its initial state afterwards is the last reseeded one.
    pub fn run<P: OptProblem>(
        problem: &mut P,
        config: &RestartConfig,
    ) -> Result<SearchResult<P::State>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    pub(crate) fn run_with_rng<P: OptProblem, R: Rng>(
        problem: &mut P,
        config: &RestartConfig,
        rng: &mut R,
    ) -> Result<SearchResult<P::State>> {
        config.validate()?;

        let start = Instant::now();
        info!(
            event = "solve_start",
            strategy = "hill_climbing_restarts",
            restarts = config.restarts,
        );

        let mut current = Node::evaluate(&*problem, problem.initial_state());
        let mut best = current.clone();
        let mut value_history = vec![best.value()];
        let mut niters = 0usize;
        let mut reseeds = 0usize;
        let mut remaining = config.restarts;

        loop {
            let ascent = climb(
                &*problem,
                current,
                &config.tie_break,
                None,
                rng,
                |node, action, delta| {
                    trace!(event = "step", action = ?action, delta, value = node.value());
                },
            );
            niters += ascent.moves;

            if ascent.node.improves_on(&best) {
                debug!(event = "new_best", value = ascent.node.value(), niters);
                best = ascent.node;
            }
            value_history.push(best.value());

            remaining -= 1;
            if remaining == 0 {
                break;
            }

            let reseed = problem.randomize(rng);
            reseeds += 1;
            debug!(
                event = "restart",
                generation = reseed.generation,
                remaining,
                best = best.value(),
            );
            current = Node::evaluate(&*problem, reseed.state);
        }

        let result = SearchResult::from_best(
            best,
            niters,
            start.elapsed(),
            Termination::RestartsExhausted,
            reseeds,
            value_history,
        );

        info!(
            event = "solve_end",
            strategy = "hill_climbing_restarts",
            value = result.value,
            niters = result.niters,
            restarts = result.restarts,
            duration_ms = result.elapsed_time.as_millis() as u64,
            termination = %result.termination,
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, SearchError};
    use crate::problem::Reseed;
    use proptest::prelude::*;

    // ---- Landscape with random reseeding ----

    struct Landscape {
        values: Vec<f64>,
        start: usize,
        generation: u64,
    }

    impl Landscape {
        fn new(values: Vec<f64>, start: usize) -> Self {
            Self {
                values,
                start,
                generation: 0,
            }
        }
    }

    impl OptProblem for Landscape {
        type State = usize;
        type Action = isize;

        fn initial_state(&self) -> usize {
            self.start
        }

        fn objective_value(&self, &i: &usize) -> f64 {
            self.values[i]
        }

        fn action_value_diffs(&self, &i: &usize) -> Vec<(isize, f64)> {
            let mut diffs = Vec::new();
            if i > 0 {
                diffs.push((-1, self.values[i - 1] - self.values[i]));
            }
            if i + 1 < self.values.len() {
                diffs.push((1, self.values[i + 1] - self.values[i]));
            }
            diffs
        }

        fn apply(&self, &i: &usize, &step: &isize) -> usize {
            i.checked_add_signed(step).expect("step stays inside the landscape")
        }

        fn randomize<R: Rng>(&mut self, rng: &mut R) -> Reseed<usize> {
            self.start = rng.random_range(0..self.values.len());
            self.generation += 1;
            Reseed::new(self.start, self.generation)
        }
    }

    fn two_peaks() -> Vec<f64> {
        vec![0.0, 1.0, 2.0, 3.0, 10.0, 3.0, 2.0, 1.0, 0.0, 5.0, 0.0]
    }

    #[test]
    fn test_restarts_escape_local_optimum() {
        // start on the small peak at index 9
        let mut problem = Landscape::new(two_peaks(), 9);
        let config = RestartConfig::default().with_restarts(20).with_seed(42);

        let result = RestartRunner::run(&mut problem, &config).unwrap();

        assert_eq!(result.tour, 4);
        assert!((result.value - 10.0).abs() < 1e-12);
        assert_eq!(result.termination, Termination::RestartsExhausted);
    }

    #[test]
    fn test_single_ascent_never_reseeds() {
        let mut problem = Landscape::new(two_peaks(), 8);
        let config = RestartConfig::default().with_restarts(1).with_seed(1);

        let result = RestartRunner::run(&mut problem, &config).unwrap();

        assert_eq!(result.tour, 9);
        assert_eq!(result.niters, 1);
        assert_eq!(result.restarts, 0);
        assert_eq!(problem.generation, 0);
    }

    #[test]
    fn test_reseed_count_and_generation() {
        let mut problem = Landscape::new(two_peaks(), 0);
        let config = RestartConfig::default().with_restarts(7).with_seed(5);

        let result = RestartRunner::run(&mut problem, &config).unwrap();

        assert_eq!(result.restarts, 6);
        assert_eq!(problem.generation, 6);
        // initial value plus one entry per ascent
        assert_eq!(result.value_history.len(), 8);
    }

    #[test]
    fn test_restarts_do_not_count_as_iterations() {
        // every state is flat, so no ascent ever moves
        let mut problem = Landscape::new(vec![1.0; 6], 2);
        let config = RestartConfig::default().with_restarts(5).with_seed(9);

        let result = RestartRunner::run(&mut problem, &config).unwrap();

        assert_eq!(result.niters, 0);
        assert_eq!(result.restarts, 4);
        assert_eq!(result.tour, 2);
    }

    #[test]
    fn test_equal_optimum_does_not_replace_best() {
        // every ascent ends at value 7; the first one must be kept
        let mut problem = Landscape::new(vec![7.0, 0.0, 7.0, 0.0, 7.0], 0);
        let config = RestartConfig::default().with_restarts(10).with_seed(11);

        let result = RestartRunner::run(&mut problem, &config).unwrap();
        assert_eq!(result.tour, 0);
    }

    #[test]
    fn test_zero_restarts_rejected() {
        let mut problem = Landscape::new(two_peaks(), 0);
        let config = RestartConfig::default().with_restarts(0);

        let err = RestartRunner::run(&mut problem, &config).unwrap_err();
        assert!(matches!(err, SearchError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = RestartConfig::default().with_restarts(15).with_seed(123);

        let mut p1 = Landscape::new(two_peaks(), 9);
        let mut p2 = Landscape::new(two_peaks(), 9);
        let a = RestartRunner::run(&mut p1, &config).unwrap();
        let b = RestartRunner::run(&mut p2, &config).unwrap();

        assert_eq!(a.tour, b.tour);
        assert_eq!(a.niters, b.niters);
        assert_eq!(a.value_history, b.value_history);
    }

    proptest! {
        #[test]
        fn prop_published_value_never_regresses(
            raw in prop::collection::vec(-50i32..50, 2..30),
            restarts in 1usize..20,
            seed in any::<u64>(),
        ) {
            let values: Vec<f64> = raw.into_iter().map(f64::from).collect();
            let mut problem = Landscape::new(values, 0);
            let config = RestartConfig::default().with_restarts(restarts).with_seed(seed);

            let result = RestartRunner::run(&mut problem, &config).unwrap();

            for window in result.value_history.windows(2) {
                prop_assert!(window[1] >= window[0]);
            }
            prop_assert_eq!(result.value_history.len(), restarts + 1);
            prop_assert!((result.value - problem.values[result.tour]).abs() < 1e-9);
        }
    }
}
