//! The external pathfinding capability.
//!
//! # Pluggability
//!
//! Controllers call the maze via the [`MazeQuery`] trait, so the engine can
//! supply any graph representation and path algorithm without touching the
//! controller crates.  Tests supply scripted stubs.
//!
//! # Contract
//!
//! All three queries are synchronous, deterministic, and bounded-cost for a
//! given maze.  A missing neighbor or an unusable direction is an expected
//! absence (`None`), never an error: lookahead targeting relies on `None` at
//! graph edges to trigger its documented fallback.

use chase_core::{Direction, NodeId};

// ── PathSense ─────────────────────────────────────────────────────────────────

/// Flavor of path selection requested from the maze.
///
/// `Retreat` asks for flee-style path selection relative to the target.  Its
/// exact semantics (which paths count as "fleeing") are owned by the maze
/// implementation, not by the controllers that request it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSense {
    /// Move along a shortest path toward the target.
    Approach,
    /// Move along a flee-style path relative to the target.
    Retreat,
}

// ── MazeQuery ─────────────────────────────────────────────────────────────────

/// Pluggable maze/pathfinding engine, owned by the external game engine.
///
/// The decision engine is single-threaded (one `update` call per tick from
/// one driver), so no `Send + Sync` bound is imposed here.
pub trait MazeQuery {
    /// The node adjacent to `node` in direction `dir`, or `None` at a graph
    /// edge where no such neighbor exists.
    fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId>;

    /// Path distance between two nodes, in maze distance units.  Symmetric.
    fn path_distance(&self, from: NodeId, to: NodeId) -> u32;

    /// The single direction to take from `from` on a path to `to` selected
    /// per `sense`.  `None` means the maze offers no usable step; callers
    /// treat that as "no action" rather than an error.
    fn next_direction(&self, from: NodeId, to: NodeId, sense: PathSense) -> Option<Direction>;
}
