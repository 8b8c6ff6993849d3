//! Per-mode, per-personality target resolution.
//!
//! Every function here is a pure computation over the current snapshot: it
//! picks a node to move relative to, and the controller then asks the maze
//! for the concrete step via `next_direction`.

use chase_core::{Direction, NodeId};
use chase_state::Snapshot;

use crate::mode::PURSUIT_BIAS_SWITCHES;
use crate::personality::{Personality, PursuitStyle};

/// Path distance beyond which the distance-gated personality hunts the hero
/// directly instead of holding its corner.
pub const SKIRMISH_RANGE: u32 = 40;

/// Dispersal target: the personality's assigned corner.
///
/// One override: once the stalker has completed [`PURSUIT_BIAS_SWITCHES`]
/// dispersal spells it targets the hero's current node even while nominally
/// dispersing, making it permanently pursuit-biased.
pub(crate) fn dispersal_target(
    personality:         Personality,
    to_pursuit_switches: u32,
    snap:                &Snapshot<'_>,
) -> NodeId {
    if personality == Personality::Stalker && to_pursuit_switches >= PURSUIT_BIAS_SWITCHES {
        return snap.hero.location;
    }
    snap.corner(personality.profile().corner)
}

/// Pursuit target, dispatched on the personality's pursuit style.
pub(crate) fn pursuit_target(
    personality: Personality,
    me:          NodeId,
    snap:        &Snapshot<'_>,
) -> NodeId {
    let profile = personality.profile();
    match profile.style {
        PursuitStyle::Direct => snap.hero.location,

        PursuitStyle::Intercept => intercept_target(profile.lookahead, snap),

        PursuitStyle::DistanceGated => {
            if snap.maze.path_distance(me, snap.hero.location) > SKIRMISH_RANGE {
                snap.hero.location
            } else {
                snap.corner(profile.corner)
            }
        }
    }
}

/// Flee target: always the personality's assigned corner.
pub(crate) fn flee_target(personality: Personality, snap: &Snapshot<'_>) -> NodeId {
    snap.corner(personality.profile().corner)
}

/// Project `depth` nodes ahead of the hero along its facing direction.
///
/// A step with no neighbor leaves the projection undefined from then on.
/// Quirk preserved for behavioral fidelity: an upward-facing hero gets
/// `depth` additional leftward steps applied to the projected node.  An
/// undefined projection falls back to the hero's current node.
fn intercept_target(depth: u32, snap: &Snapshot<'_>) -> NodeId {
    let facing = snap.hero.facing;

    let mut projected = Some(snap.hero.location);
    for _ in 0..depth {
        projected = projected.and_then(|node| snap.maze.neighbor(node, facing));
    }

    if facing == Direction::Up {
        for _ in 0..depth {
            projected = projected.and_then(|node| snap.maze.neighbor(node, Direction::Left));
        }
    }

    projected.unwrap_or(snap.hero.location)
}
