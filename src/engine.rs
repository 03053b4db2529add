//! Stateful search engines.
//!
//! An engine wraps one strategy's configuration and keeps the result of its
//! last [`solve`](LocalSearch::solve) call until the next one replaces it.
//! All three engines are interchangeable behind [`LocalSearch`].

use crate::error::Result;
use crate::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
use crate::problem::OptProblem;
use crate::restarts::{RestartConfig, RestartRunner};
use crate::result::SearchResult;
use crate::tabu::{TabuConfig, TabuRunner};

/// A local search strategy that can be run against a problem.
pub trait LocalSearch<P: OptProblem> {
    /// Short identifier of the strategy.
    fn name(&self) -> &'static str;

    /// Runs the search to completion and publishes its result.
    ///
    /// On error the previously published result is left untouched.
    fn solve(&mut self, problem: &mut P) -> Result<&SearchResult<P::State>>;

    /// The result of the last successful [`solve`](Self::solve).
    fn result(&self) -> Option<&SearchResult<P::State>>;
}

/// Hill Climbing engine.
///
/// # Examples
///
/// ```ignore
/// let mut engine = HillClimbing::new();
/// engine.solve(&mut problem)?;
/// let best = engine.result().unwrap();
/// println!("{} after {} moves", best.value, best.niters);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbing<S> {
    config: HillClimbingConfig,
    result: Option<SearchResult<S>>,
}

impl<S> HillClimbing<S> {
    pub fn new() -> Self {
        Self::with_config(HillClimbingConfig::default())
    }

    pub fn with_config(config: HillClimbingConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }
}

impl<S> Default for HillClimbing<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OptProblem> LocalSearch<P> for HillClimbing<P::State> {
    fn name(&self) -> &'static str {
        "hill_climbing"
    }

    fn solve(&mut self, problem: &mut P) -> Result<&SearchResult<P::State>> {
        let result = HillClimbingRunner::run(&*problem, &self.config)?;
        Ok(self.result.insert(result))
    }

    fn result(&self) -> Option<&SearchResult<P::State>> {
        self.result.as_ref()
    }
}

/// Hill Climbing with Random Restarts engine.
#[derive(Debug, Clone)]
pub struct HillClimbingRestarts<S> {
    config: RestartConfig,
    result: Option<SearchResult<S>>,
}

impl<S> HillClimbingRestarts<S> {
    pub fn new() -> Self {
        Self::with_config(RestartConfig::default())
    }

    pub fn with_config(config: RestartConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    pub fn config(&self) -> &RestartConfig {
        &self.config
    }
}

impl<S> Default for HillClimbingRestarts<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OptProblem> LocalSearch<P> for HillClimbingRestarts<P::State> {
    fn name(&self) -> &'static str {
        "hill_climbing_restarts"
    }

    fn solve(&mut self, problem: &mut P) -> Result<&SearchResult<P::State>> {
        let result = RestartRunner::run(problem, &self.config)?;
        Ok(self.result.insert(result))
    }

    fn result(&self) -> Option<&SearchResult<P::State>> {
        self.result.as_ref()
    }
}

/// Tabu Search engine.
#[derive(Debug, Clone)]
pub struct TabuSearch<S> {
    config: TabuConfig,
    result: Option<SearchResult<S>>,
}

impl<S> TabuSearch<S> {
    pub fn new() -> Self {
        Self::with_config(TabuConfig::default())
    }

    pub fn with_config(config: TabuConfig) -> Self {
        Self {
            config,
            result: None,
        }
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

impl<S> Default for TabuSearch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OptProblem> LocalSearch<P> for TabuSearch<P::State> {
    fn name(&self) -> &'static str {
        "tabu"
    }

    fn solve(&mut self, problem: &mut P) -> Result<&SearchResult<P::State>> {
        let result = TabuRunner::run(&*problem, &self.config)?;
        Ok(self.result.insert(result))
    }

    fn result(&self) -> Option<&SearchResult<P::State>> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Reseed;
    use crate::result::Termination;
    use rand::Rng;

    // ---- Ring of cells; the objective peaks at `peak` ----

    struct Ring {
        len: i64,
        peak: i64,
        start: i64,
        generation: u64,
    }

    impl Ring {
        fn new(len: i64, peak: i64, start: i64) -> Self {
            Self {
                len,
                peak,
                start,
                generation: 0,
            }
        }
    }

    impl OptProblem for Ring {
        type State = i64;
        type Action = i64;

        fn initial_state(&self) -> i64 {
            self.start
        }

        fn objective_value(&self, &x: &i64) -> f64 {
            let d = (x - self.peak).rem_euclid(self.len);
            -(d.min(self.len - d) as f64)
        }

        // actions are named by the cell they move to
        fn action_value_diffs(&self, &x: &i64) -> Vec<(i64, f64)> {
            let here = self.objective_value(&x);
            [x - 1, x + 1]
                .into_iter()
                .map(|cell| {
                    let dest = cell.rem_euclid(self.len);
                    (dest, self.objective_value(&dest) - here)
                })
                .collect()
        }

        fn apply(&self, _x: &i64, &dest: &i64) -> i64 {
            dest
        }

        fn randomize<R: Rng>(&mut self, rng: &mut R) -> Reseed<i64> {
            self.start = rng.random_range(0..self.len);
            self.generation += 1;
            Reseed::new(self.start, self.generation)
        }
    }

    #[test]
    fn test_no_result_before_solve() {
        let engine: HillClimbing<i64> = HillClimbing::new();
        assert!(LocalSearch::<Ring>::result(&engine).is_none());
    }

    #[test]
    fn test_engines_reach_peak() {
        let mut engines: Vec<Box<dyn LocalSearch<Ring>>> = vec![
            Box::new(HillClimbing::<i64>::with_config(
                HillClimbingConfig::default().with_seed(1),
            )),
            Box::new(HillClimbingRestarts::<i64>::with_config(
                RestartConfig::default().with_restarts(3).with_seed(1),
            )),
            Box::new(TabuSearch::<i64>::with_config(
                TabuConfig::default().with_max_iterations(30).with_seed(1),
            )),
        ];

        for engine in &mut engines {
            let name = engine.name();
            let mut problem = Ring::new(12, 5, 0);
            let result = engine.solve(&mut problem).unwrap();
            assert_eq!(result.tour, 5, "{name} missed the peak");
            assert!(result.value.abs() < 1e-12);
        }
    }

    #[test]
    fn test_solve_overwrites_previous_result() {
        let mut engine: HillClimbing<i64> = HillClimbing::new();

        let mut near = Ring::new(20, 10, 9);
        let first_niters = engine.solve(&mut near).unwrap().niters;
        assert_eq!(first_niters, 1);

        let mut far = Ring::new(20, 10, 4);
        engine.solve(&mut far).unwrap();
        let published = LocalSearch::<Ring>::result(&engine).unwrap();
        assert_eq!(published.niters, 6);
        assert_eq!(published.termination, Termination::LocalOptimum);
    }

    #[test]
    fn test_failed_solve_keeps_result() {
        let mut engine: TabuSearch<i64> = TabuSearch::new();
        let mut problem = Ring::new(8, 2, 0);
        engine.solve(&mut problem).unwrap();

        engine.config.max_iterations = 0;
        assert!(engine.solve(&mut problem).is_err());
        assert!(LocalSearch::<Ring>::result(&engine).is_some());
    }

    #[test]
    fn test_restart_engine_reseeds_problem() {
        let mut engine: HillClimbingRestarts<i64> =
            HillClimbingRestarts::with_config(RestartConfig::default().with_restarts(4));
        let mut problem = Ring::new(10, 3, 0);

        let result = engine.solve(&mut problem).unwrap();

        assert_eq!(result.restarts, 3);
        assert_eq!(problem.generation, 3);
        assert_eq!(problem.initial_state(), problem.start);
    }
}
