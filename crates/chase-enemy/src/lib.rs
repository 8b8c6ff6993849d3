//! `chase-enemy` — the per-agent decision engine for maze-chase enemies.
//!
//! Each simulation tick, the external engine hands the controller a
//! [`Snapshot`](chase_state::Snapshot) and the controller produces one
//! movement direction per enemy by running a four-mode state machine
//! (Confined, Dispersal, Pursuit, Flee) with personality-driven targeting.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`controller`]  | `EnemyController` trait — the engine-facing lifecycle    |
//! | [`mode`]        | `Mode` tag, `EnemyRecord` bookkeeping, transition rules  |
//! | [`personality`] | `Personality` tags and the identity lookup table         |
//! | [`target`]      | Per-mode, per-personality target resolution              |
//! | [`four_mode`]   | `FourModeController` — the full state-machine controller |
//! | [`idle`]        | `IdleController` — placeholder that never moves          |
//!
//! # Tick contract
//!
//! The engine calls [`EnemyController::update`] once per tick, then reads
//! the buffered result via [`EnemyController::actions`].  Read-after-write
//! within a single tick; no cross-thread handoff.  Between episodes the
//! engine calls [`EnemyController::reset_episode`] so no tallies or timers
//! bleed into the next run.

pub mod controller;
pub mod four_mode;
pub mod idle;
pub mod mode;
pub mod personality;
pub mod target;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::EnemyController;
pub use four_mode::FourModeController;
pub use idle::IdleController;
pub use mode::{EnemyRecord, Mode};
pub use personality::{Personality, Profile, PursuitStyle};
