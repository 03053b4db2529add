//! Core trait for local search problems.

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

/// A freshly randomized initial state handed back by [`OptProblem::randomize`].
///
/// The `generation` counter identifies which reseed produced the state, so a
/// caller reusing one problem across several searches can tell restarts apart
/// without inspecting the state itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Reseed<S> {
    /// The new initial state.
    pub state: S,
    /// Monotonic reseed counter maintained by the problem.
    pub generation: u64,
}

impl<S> Reseed<S> {
    pub fn new(state: S, generation: u64) -> Self {
        Self { state, generation }
    }
}

/// Defines a combinatorial optimization problem for local search.
///
/// Users implement this trait to specify:
/// - The state the search starts from
/// - How to evaluate a state's objective value
/// - Which actions apply to a state and how much each would change the
///   objective value
/// - How to produce the successor of a state under an action
/// - How to reseed the initial state for random restarts
///
/// # Maximization
///
/// The engine maximizes the objective value. For cost-like problems such as
/// TSP tour length, return the negated cost.
///
/// # Examples
///
/// ```ignore
/// struct Tsp { distances: Vec<Vec<f64>>, init: Vec<usize>, generation: u64 }
///
/// impl OptProblem for Tsp {
///     type State = Vec<usize>;
///     type Action = (usize, usize);
///
///     fn initial_state(&self) -> Vec<usize> { self.init.clone() }
///
///     fn objective_value(&self, tour: &Vec<usize>) -> f64 {
///         -tour_length(&self.distances, tour)
///     }
///
///     fn action_value_diffs(&self, tour: &Vec<usize>) -> Vec<((usize, usize), f64)> {
///         swap_pairs(tour.len())
///             .map(|(i, j)| ((i, j), -swap_delta(&self.distances, tour, i, j)))
///             .collect()
///     }
///
///     fn apply(&self, tour: &Vec<usize>, &(i, j): &(usize, usize)) -> Vec<usize> {
///         let mut next = tour.clone();
///         next.swap(i, j);
///         next
///     }
///
///     fn randomize<R: Rng>(&mut self, rng: &mut R) -> Reseed<Vec<usize>> {
///         self.init.shuffle(rng);
///         self.generation += 1;
///         Reseed::new(self.init.clone(), self.generation)
///     }
/// }
/// ```
pub trait OptProblem {
    /// The state representation. Opaque to the engine.
    type State: Clone;

    /// Identifier of a state transition. Compared and hashed by the tabu list.
    type Action: Clone + Eq + Hash + Debug;

    /// Returns the state a search starts from.
    fn initial_state(&self) -> Self::State;

    /// Evaluates a state. Higher is better.
    fn objective_value(&self, state: &Self::State) -> f64;

    /// Returns every applicable action from `state` paired with the change in
    /// objective value applying it would cause.
    ///
    /// An empty vector marks `state` as a dead end. The order of entries is
    /// the order in which deterministic selection breaks ties.
    fn action_value_diffs(&self, state: &Self::State) -> Vec<(Self::Action, f64)>;

    /// Produces the successor of `state` under `action`.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Replaces the initial state with a randomized one and returns it.
    ///
    /// Subsequent calls to [`initial_state`](Self::initial_state) must return
    /// the same state as the returned [`Reseed`].
    fn randomize<R: Rng>(&mut self, rng: &mut R) -> Reseed<Self::State>;
}
