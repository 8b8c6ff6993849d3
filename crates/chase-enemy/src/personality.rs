//! Targeting personalities and the identity lookup table.
//!
//! Enemy identities map 1:1 to personalities, but the mapping is *not*
//! sequential — identities 2 and 3 are swapped relative to personality
//! order.  The table below preserves that mapping exactly; changing it
//! changes observable behavior.

use std::fmt;

use chase_core::{EnemyId, ENEMY_COUNT};
use chase_state::Corner;

// ── Personality ───────────────────────────────────────────────────────────────

/// A targeting personality.  Fixed per enemy identity for the lifetime of
/// the controller.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Personality {
    /// Hunts the hero's current node directly; becomes permanently
    /// pursuit-biased after its second dispersal spell.
    Stalker,
    /// Intercepts four nodes ahead of the hero's facing.
    Ambusher,
    /// Intercepts two nodes ahead of the hero's facing.
    Flanker,
    /// Hunts directly at long range, retreats to its corner up close.
    Skirmisher,
}

/// Identity → personality, in enemy-identity order.
const PERSONALITIES: [Personality; ENEMY_COUNT] = [
    Personality::Stalker,    // id 0
    Personality::Ambusher,   // id 1
    Personality::Skirmisher, // id 2
    Personality::Flanker,    // id 3
];

impl Personality {
    /// Personality of the given enemy identity.
    ///
    /// # Panics
    /// Panics if `id` is outside `0..ENEMY_COUNT`.  The engine contract is
    /// exactly four enemies; anything else is a programming error, not a
    /// recoverable runtime condition.
    pub fn of(id: EnemyId) -> Personality {
        match PERSONALITIES.get(id.index()) {
            Some(&p) => p,
            None => panic!("enemy identity {id} out of range (expected 0..{ENEMY_COUNT})"),
        }
    }

    /// Static targeting profile for this personality.
    pub const fn profile(self) -> Profile {
        match self {
            Personality::Stalker => Profile {
                corner:    Corner::TopRight,
                lookahead: 0,
                style:     PursuitStyle::Direct,
            },
            Personality::Ambusher => Profile {
                corner:    Corner::TopLeft,
                lookahead: 4,
                style:     PursuitStyle::Intercept,
            },
            Personality::Flanker => Profile {
                corner:    Corner::BottomRight,
                lookahead: 2,
                style:     PursuitStyle::Intercept,
            },
            Personality::Skirmisher => Profile {
                corner:    Corner::BottomLeft,
                lookahead: 0,
                style:     PursuitStyle::DistanceGated,
            },
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Personality::Stalker    => "stalker",
            Personality::Ambusher   => "ambusher",
            Personality::Flanker    => "flanker",
            Personality::Skirmisher => "skirmisher",
        };
        f.write_str(s)
    }
}

// ── Profile ───────────────────────────────────────────────────────────────────

/// How a personality selects its pursuit target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuitStyle {
    /// Shortest path straight to the hero.
    Direct,
    /// Project ahead of the hero's facing by the profile's lookahead depth.
    Intercept,
    /// Hero beyond the skirmish range, own corner inside it.
    DistanceGated,
}

/// Static targeting data for one personality: its assigned corner (used for
/// dispersal and flee), its lookahead depth (intercept styles only), and
/// its pursuit style.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Assigned corner for dispersal and flee targeting.
    pub corner: Corner,
    /// Nodes to project ahead of the hero; 0 for non-intercept styles.
    pub lookahead: u32,
    /// Pursuit target selection strategy.
    pub style: PursuitStyle,
}
