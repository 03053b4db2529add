//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator a search draws tie-breaks and reseeds from.
///
/// A fixed seed reproduces a run exactly as long as the problem itself is
/// deterministic; `None` seeds from the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
