//! `chase-core` — foundational types for the maze-chase enemy decision engine.
//!
//! This crate is a dependency of every other `chase-*` crate.  It
//! intentionally has no `chase-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`ids`]       | `NodeId`, `EnemyId`, `ENEMY_COUNT`             |
//! | [`direction`] | `Direction` enum and its engine wire encoding  |
//! | [`error`]     | `ChaseError`, `ChaseResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod direction;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, NEUTRAL};
pub use error::{ChaseError, ChaseResult};
pub use ids::{EnemyId, NodeId, ENEMY_COUNT};
