//! The four-mode state-machine controller.

use chase_core::{Direction, EnemyId, ENEMY_COUNT};
use chase_state::{PathSense, Snapshot};

use crate::controller::EnemyController;
use crate::mode::{EnemyRecord, Mode};
use crate::personality::Personality;
use crate::target;

/// The full four-mode enemy controller.
///
/// Per tick and per enemy, in ascending identity order: advance the active
/// mode's timer, evaluate its transition rule, apply any resulting swap
/// (remembering the outgoing mode and skipping the incoming reset on
/// flee-exits), resolve the personality's target, and ask the maze for a
/// concrete direction.  Results are buffered until the next `update`.
///
/// All mutable state lives in the per-enemy [`EnemyRecord`]s; the snapshot
/// is never retained.
pub struct FourModeController {
    /// Per-enemy bookkeeping, indexed by `EnemyId`.
    pub(crate) records: [EnemyRecord; ENEMY_COUNT],
    /// Directions buffered by the last `update`; `None` is neutral.
    pub(crate) actions: [Option<Direction>; ENEMY_COUNT],
}

impl FourModeController {
    /// A fresh controller: every enemy confined, all tallies zero.
    pub fn new() -> Self {
        Self {
            records: [EnemyRecord::new(); ENEMY_COUNT],
            actions: [None; ENEMY_COUNT],
        }
    }

    /// Read access to one enemy's bookkeeping, for harness-side observers.
    ///
    /// # Panics
    /// Panics if `id` is outside `0..ENEMY_COUNT`.
    pub fn record(&self, id: EnemyId) -> &EnemyRecord {
        &self.records[id.index()]
    }

    /// The mode currently active for one enemy.
    pub fn current_mode(&self, id: EnemyId) -> Mode {
        self.records[id.index()].mode
    }

    /// Run one enemy's state machine for this tick and return its direction.
    fn step_enemy(&mut self, id: EnemyId, snap: &Snapshot<'_>) -> Option<Direction> {
        let personality = Personality::of(id);
        let view = *snap.enemy(id);
        let rec = &mut self.records[id.index()];

        rec.advance_timer();
        if let Some(next) = rec.next_mode(&view) {
            rec.apply_transition(next);
        }

        match rec.mode {
            // No movement while confined.
            Mode::Confined => None,

            Mode::Dispersal => {
                let goal = target::dispersal_target(personality, rec.to_pursuit_switches, snap);
                snap.maze.next_direction(view.location, goal, PathSense::Approach)
            }

            Mode::Pursuit => {
                let goal = target::pursuit_target(personality, view.location, snap);
                snap.maze.next_direction(view.location, goal, PathSense::Approach)
            }

            Mode::Flee => {
                let goal = target::flee_target(personality, snap);
                snap.maze.next_direction(view.location, goal, PathSense::Retreat)
            }
        }
    }
}

impl EnemyController for FourModeController {
    fn update(&mut self, snapshot: &Snapshot<'_>, _time_due_ms: i64) {
        for i in 0..ENEMY_COUNT {
            let id = EnemyId(i as u32);
            self.actions[i] = self.step_enemy(id, snapshot);
        }
    }

    fn actions(&self) -> [i32; ENEMY_COUNT] {
        self.actions.map(Direction::encode)
    }

    fn reset_episode(&mut self) {
        // Reconstruct rather than patch: repeated or interrupted calls land
        // in the same fully-zeroed state.
        self.records = [EnemyRecord::new(); ENEMY_COUNT];
        self.actions = [None; ENEMY_COUNT];
    }
}

impl Default for FourModeController {
    fn default() -> Self {
        Self::new()
    }
}
