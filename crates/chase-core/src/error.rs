//! Engine-boundary error type.
//!
//! Expected absences (no neighbor at a graph edge, no usable direction) are
//! `Option`s, not errors.  `ChaseError` covers genuinely malformed input
//! crossing the engine boundary; violated preconditions (an enemy identity
//! outside `0..ENEMY_COUNT`) are programming errors and panic instead.

use thiserror::Error;

/// The top-level error type for the `chase-*` crates.
#[derive(Debug, Error)]
pub enum ChaseError {
    #[error("unknown direction value {0} (expected -1..=3)")]
    UnknownDirection(i32),

    #[error("unknown enemy identity {0} (expected 0..4)")]
    UnknownEnemy(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `chase-*` crates.
pub type ChaseResult<T> = Result<T, ChaseError>;
