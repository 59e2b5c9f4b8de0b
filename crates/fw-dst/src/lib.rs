//! # fw-dst
//!
//! Deterministic randomness for fake web generation.
//!
//! Every random decision the generator makes goes through a
//! [`DeterministicRng`] passed in by the caller, so a run is reproducible
//! from its seed alone. There is no process-wide random state.
//!
//! ## Usage
//!
//! ```rust
//! use fw_dst::DeterministicRng;
//!
//! let mut rng = DeterministicRng::new(12345);
//! let picks = rng.sample_indices(100, 5).unwrap();
//! assert_eq!(picks.len(), 5);
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a run:
//! ```bash
//! FAKEWEB_SEED=12345 fakeweb out/
//! ```

pub mod random;

pub use random::DeterministicRng;

use fw_core::{FakeWebError, Result};

/// Environment variable consulted for a seed.
pub const SEED_ENV: &str = "FAKEWEB_SEED";

/// Get the seed from `FAKEWEB_SEED` or generate a random one.
///
/// Logs the seed for reproduction.
///
/// # Errors
///
/// Returns [`FakeWebError::InvalidArgument`] if the variable is set but is
/// not a valid `u64`.
pub fn get_or_generate_seed() -> Result<u64> {
    match std::env::var(SEED_ENV) {
        Ok(s) => {
            let seed = parse_seed(&s)?;
            tracing::info!(seed, "{SEED_ENV}={seed} (from environment)");
            Ok(seed)
        }
        Err(_) => {
            let seed = rand::random::<u64>();
            tracing::info!(seed, "{SEED_ENV}={seed} (randomly generated)");
            Ok(seed)
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| {
        FakeWebError::invalid_argument(format!("{SEED_ENV} must be a valid u64, got {raw:?}"))
    })
}
