//! The engine-facing controller lifecycle.

use chase_core::ENEMY_COUNT;
use chase_state::Snapshot;

/// The lifecycle surface the external engine drives once per tick.
///
/// The contract is read-after-write within a single tick: `update` must
/// complete before `actions` is read for that tick.  All methods are
/// synchronous and single-threaded; the engine owns the tick cadence and
/// any per-tick time budget.
///
/// `init`, `shutdown`, and `reset_episode` have no-op defaults so stateless
/// controllers only implement the two methods they care about.
pub trait EnemyController {
    /// Prepare internal state.  Idempotent; safe to call more than once.
    fn init(&mut self) {}

    /// Advance every enemy's state machine for one tick and buffer the
    /// resulting directions.
    ///
    /// `time_due_ms` is the engine's tick timestamp/deadline.  The built-in
    /// controllers accept it for interface fidelity but keep their own
    /// fixed-quantum timers (see `mode`).
    fn update(&mut self, snapshot: &Snapshot<'_>, time_due_ms: i64);

    /// The directions buffered by the last `update`, in enemy-identity
    /// order, in the engine wire encoding: up=0, right=1, down=2, left=3,
    /// neutral=-1.
    fn actions(&self) -> [i32; ENEMY_COUNT];

    /// Release resources.  No-op for controllers that hold none.
    fn shutdown(&mut self) {}

    /// Episode-boundary reset: discard all timers, tallies, and mode
    /// memory so nothing bleeds into the next run.  Idempotent; must only
    /// be called between episodes, never concurrently with `update`.
    fn reset_episode(&mut self) {}
}
