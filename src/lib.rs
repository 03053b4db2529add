//! Domain-agnostic local search for combinatorial optimization.
//!
//! Provides generic implementations of three local search strategies over a
//! single problem abstraction, [`OptProblem`]:
//!
//! - **Hill Climbing**: Steepest ascent to the first local optimum, breaking
//!   ties between equally good moves at random.
//! - **Hill Climbing with Random Restarts**: Repeated ascents from reseeded
//!   initial states, keeping the best local optimum found.
//! - **Tabu Search**: Best admissible move at every step, worsening moves
//!   included, with a bounded list of recently taken actions forbidden.
//!
//! # Sign convention
//!
//! All strategies maximize. A move improves when its objective-value delta is
//! strictly positive; cost-minimizing problems such as TSP return negated
//! costs.
//!
//! # Architecture
//!
//! Each strategy has a stateless runner (`*Runner::run`) and a stateful
//! engine implementing [`LocalSearch`] that publishes the result of its last
//! `solve`. [`SearchConfig`] selects and parameterizes a strategy from TOML.
//! Progress is reported through `tracing` events; no subscriber is installed
//! by this crate.

pub mod config;
pub mod engine;
pub mod error;
pub mod hill_climbing;
pub mod node;
pub mod problem;
pub mod random;
pub mod restarts;
pub mod result;
pub mod select;
pub mod tabu;

pub use config::{SearchConfig, Strategy};
pub use engine::{HillClimbing, HillClimbingRestarts, LocalSearch, TabuSearch};
pub use error::{ConfigError, SearchError};
pub use node::Node;
pub use problem::{OptProblem, Reseed};
pub use result::{SearchResult, Termination};
pub use select::{FirstBest, RandomTieBreak, SelectionPolicy, TieBreak};
