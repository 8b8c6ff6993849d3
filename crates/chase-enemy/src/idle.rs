//! A placeholder controller — enemies never move.

use chase_core::{ENEMY_COUNT, NEUTRAL};
use chase_state::Snapshot;

use crate::controller::EnemyController;

/// An [`EnemyController`] that buffers neutral for every enemy on every
/// tick.
///
/// Useful as a placeholder when wiring up a harness, or for passive enemy
/// populations that simply occupy the maze without acting.
pub struct IdleController;

impl EnemyController for IdleController {
    fn update(&mut self, _snapshot: &Snapshot<'_>, _time_due_ms: i64) {}

    fn actions(&self) -> [i32; ENEMY_COUNT] {
        [NEUTRAL; ENEMY_COUNT]
    }
}
