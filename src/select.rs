//! Move selection policies.
//!
//! Every strategy scores the applicable actions of the current state and then
//! asks a [`SelectionPolicy`] to pick one. Hill climbing breaks ties between
//! equally good actions at random; tabu search takes the first maximal action.
//!
//! Deltas are compared as plain numbers, so `-0.0` and `0.0` tie. NaN deltas
//! carry no ordering and are never selected; a candidate set holding only NaN
//! deltas selects nothing.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Picks one action out of a scored candidate set.
pub trait SelectionPolicy {
    /// Returns the selected `(action, delta)` pair, or `None` when
    /// `candidates` holds no comparable delta.
    fn select<A: Clone, R: Rng>(&self, candidates: &[(A, f64)], rng: &mut R) -> Option<(A, f64)>;
}

/// Uniformly random choice among all candidates sharing the maximum delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTieBreak;

impl SelectionPolicy for RandomTieBreak {
    fn select<A: Clone, R: Rng>(&self, candidates: &[(A, f64)], rng: &mut R) -> Option<(A, f64)> {
        let best = max_delta(candidates)?;
        let ties: Vec<&(A, f64)> = scored(candidates)
            .filter(|(_, delta)| *delta == best)
            .collect();
        ties.choose(rng).map(|&(action, delta)| (action.clone(), *delta))
    }
}

/// Deterministic argmax: the first candidate holding the maximum delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstBest;

impl SelectionPolicy for FirstBest {
    fn select<A: Clone, R: Rng>(&self, candidates: &[(A, f64)], _rng: &mut R) -> Option<(A, f64)> {
        let mut best: Option<&(A, f64)> = None;
        for candidate in scored(candidates) {
            match best {
                Some((_, delta)) if candidate.1 <= *delta => {}
                _ => best = Some(candidate),
            }
        }
        best.map(|(action, delta)| (action.clone(), *delta))
    }
}

/// Tie-breaking rule selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// See [`RandomTieBreak`].
    #[default]
    Random,
    /// See [`FirstBest`].
    First,
}

impl SelectionPolicy for TieBreak {
    fn select<A: Clone, R: Rng>(&self, candidates: &[(A, f64)], rng: &mut R) -> Option<(A, f64)> {
        match self {
            TieBreak::Random => RandomTieBreak.select(candidates, rng),
            TieBreak::First => FirstBest.select(candidates, rng),
        }
    }
}

fn scored<A>(candidates: &[(A, f64)]) -> impl Iterator<Item = &(A, f64)> {
    candidates.iter().filter(|(_, delta)| !delta.is_nan())
}

fn max_delta<A>(candidates: &[(A, f64)]) -> Option<f64> {
    scored(candidates).map(|&(_, delta)| delta).reduce(f64::max)
}
