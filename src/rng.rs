//! Random source construction
//!
//! [`Testlet::randomize`](crate::Testlet::randomize) needs no setup: it uses the
//! calling thread's generator. Hosts that want replayable orderings build a
//! [`StdRng`] here and pass it to
//! [`Testlet::randomize_with`](crate::Testlet::randomize_with).
//!
//! A `StdRng` is owned by one caller at a time (`&mut`), so it is never
//! shared across threads without the caller's own synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! use testlet_randomizer::rng;
//!
//! let mut rng = rng::seeded(12345);
//! let order = testlet.randomize_with(&mut rng);
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RandomizerConfig;

/// Deterministic generator: the same seed yields the same orderings.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a generator from config.
///
/// Seeded when `config.seed` is set, otherwise seeded from OS entropy.
pub fn from_config(config: &RandomizerConfig) -> StdRng {
    match config.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded random source");
            seeded(seed)
        }
        None => StdRng::from_entropy(),
    }
}
