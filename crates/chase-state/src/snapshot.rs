//! Read-only per-tick world state passed to every controller update.

use chase_core::{Direction, EnemyId, NodeId, ENEMY_COUNT};

use crate::MazeQuery;

// ── Corner ────────────────────────────────────────────────────────────────────

/// One of the four designated corner nodes used for dispersal and flee
/// targeting.
///
/// The discriminants match the fixed order of the engine-supplied corner
/// list: top-right, top-left, bottom-right, bottom-left.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    TopRight    = 0,
    TopLeft     = 1,
    BottomRight = 2,
    BottomLeft  = 3,
}

impl Corner {
    /// Index into the snapshot's corner list.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

// ── Per-entity views ──────────────────────────────────────────────────────────

/// The pursuer (hero) as seen this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroView {
    /// Current maze node.
    pub location: NodeId,
    /// Facing direction — the basis for lookahead interception.
    pub facing: Direction,
}

/// One enemy agent as seen this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyView {
    /// Current maze node.
    pub location: NodeId,
    /// Remaining confinement time in ms.  Zero or below means the agent is
    /// out of (or free to leave) confinement; above zero while fleeing means
    /// it has been captured.
    pub lair_remaining_ms: i32,
    /// Whether the agent is currently capturable by the hero.
    pub edible: bool,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// A read-only snapshot of the game state for one simulation tick.
///
/// Built by the external engine before each controller `update` call and
/// shared (immutably) with every enemy's state machine during that tick.
/// All maze queries go through the [`MazeQuery`] handle threaded in here.
///
/// # Lifetimes
///
/// All borrows live for the duration of one `update` call.  Controllers must
/// not retain any part of the snapshot across ticks.
pub struct Snapshot<'a> {
    /// The pursuer's view.
    pub hero: HeroView,

    /// Per-enemy views, indexed by `EnemyId`.
    pub enemies: [EnemyView; ENEMY_COUNT],

    /// The four designated corner nodes, indexed by [`Corner`]
    /// (top-right, top-left, bottom-right, bottom-left).
    pub corners: [NodeId; 4],

    /// Pathfinding capability for this tick's maze.
    pub maze: &'a dyn MazeQuery,
}

impl<'a> Snapshot<'a> {
    /// Build a new snapshot for a single tick.
    #[inline]
    pub fn new(
        hero:    HeroView,
        enemies: [EnemyView; ENEMY_COUNT],
        corners: [NodeId; 4],
        maze:    &'a dyn MazeQuery,
    ) -> Self {
        Self { hero, enemies, corners, maze }
    }

    /// View of one enemy.
    ///
    /// # Panics
    /// Panics if `id` is outside `0..ENEMY_COUNT` — a violated precondition,
    /// not a runtime condition.
    #[inline]
    pub fn enemy(&self, id: EnemyId) -> &EnemyView {
        &self.enemies[id.index()]
    }

    /// Node of the given designated corner.
    #[inline]
    pub fn corner(&self, corner: Corner) -> NodeId {
        self.corners[corner.index()]
    }
}
