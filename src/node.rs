//! Search nodes.

use crate::problem::OptProblem;

/// A state paired with its objective value.
///
/// Nodes are never updated in place: a move yields a new node, so the value
/// always matches the state it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    state: S,
    value: f64,
}

impl<S> Node<S> {
    /// Creates a node from a state and its already known objective value.
    pub fn new(state: S, value: f64) -> Self {
        Self { state, value }
    }

    /// Creates a node by evaluating `state` against `problem`.
    pub fn evaluate<P>(problem: &P, state: S) -> Self
    where
        P: OptProblem<State = S>,
    {
        let value = problem.objective_value(&state);
        Self { state, value }
    }

    /// Creates the successor node reached by `action`, whose objective-value
    /// change is `delta`.
    pub fn successor<P>(&self, problem: &P, action: &P::Action, delta: f64) -> Self
    where
        P: OptProblem<State = S>,
    {
        Self {
            state: problem.apply(&self.state, action),
            value: self.value + delta,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if this node is strictly better than `other`.
    pub fn improves_on(&self, other: &Node<S>) -> bool {
        self.value > other.value
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
