//! Mode tags, per-enemy bookkeeping, and the transition rules.
//!
//! # Timer model
//!
//! Mode timers advance by a fixed [`MODE_TICK_MS`] quantum per `update`
//! call, regardless of the caller-supplied timestamp.  Timer accuracy
//! therefore depends on the driver calling `update` at a steady real-time
//! cadence.  Kept literally rather than switched to true elapsed time;
//! see DESIGN.md.
//!
//! A single `mode_timer_ms` field serves both timed modes.  That is
//! behaviorally equivalent to per-mode timers because every non-flee
//! transition into a timed mode zeroes it, Flee neither advances nor resets
//! it, and a flee-exit restoration skips the reset so the restored mode
//! resumes where it left off.

use std::fmt;

use chase_state::EnemyView;

// ── Behavioral constants ──────────────────────────────────────────────────────

/// Fixed quantum added to the active mode's timer on every `update` call.
pub const MODE_TICK_MS: u32 = 40;

/// Dispersal duration before the switch to Pursuit, while fewer than
/// [`PURSUIT_BIAS_SWITCHES`] switches have occurred.
pub const DISPERSAL_LONG_MS: u32 = 4_000;

/// Shortened dispersal duration once [`PURSUIT_BIAS_SWITCHES`] is reached.
pub const DISPERSAL_SHORT_MS: u32 = 2_000;

/// Pursuit duration before each switch back to Dispersal.
pub const PURSUIT_SPELL_MS: u32 = 20_000;

/// Dispersal→Pursuit tally at which dispersal spells shorten and the
/// stalker personality starts targeting the hero even while dispersing.
pub const PURSUIT_BIAS_SWITCHES: u32 = 2;

/// Maximum Pursuit→Dispersal switches per episode; after the last one,
/// pursuit is permanent.
pub const MAX_DISPERSAL_RETURNS: u32 = 3;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// The four behavior modes.  Exactly one is active per enemy at any instant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Inactive inside the lair, pending the confinement countdown.
    Confined,
    /// Heading for the personality's corner (with one override).
    Dispersal,
    /// Actively hunting the hero.
    Pursuit,
    /// Temporarily capturable; restores the prior mode on expiry.
    Flee,
}

impl Mode {
    /// Whether this mode accumulates timer quanta.
    #[inline]
    pub fn has_timer(self) -> bool {
        matches!(self, Mode::Dispersal | Mode::Pursuit)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Confined  => "confined",
            Mode::Dispersal => "dispersal",
            Mode::Pursuit   => "pursuit",
            Mode::Flee      => "flee",
        };
        f.write_str(s)
    }
}

// ── EnemyRecord ───────────────────────────────────────────────────────────────

/// Mutable per-enemy bookkeeping, owned exclusively by the controller and
/// touched once per tick.
///
/// Tallies are monotonically non-decreasing within an episode and are
/// cleared only by the episode reset — a mode transition never resets them,
/// it only zeroes the incoming timed mode's timer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyRecord {
    /// The active mode.
    pub mode: Mode,
    /// The mode active immediately before the last transition.  Retained to
    /// restore the interrupted mode when a flee interlude ends.
    pub last_mode: Mode,
    /// Elapsed-time accumulator for the active timed mode, in ms.
    pub mode_timer_ms: u32,
    /// Dispersal→Pursuit switch tally.
    pub to_pursuit_switches: u32,
    /// Pursuit→Dispersal switch tally, bounded by [`MAX_DISPERSAL_RETURNS`].
    pub to_dispersal_switches: u32,
}

impl EnemyRecord {
    /// A fresh record: confined, zero timer, zero tallies.
    pub fn new() -> Self {
        Self {
            mode:                  Mode::Confined,
            last_mode:             Mode::Confined,
            mode_timer_ms:         0,
            to_pursuit_switches:   0,
            to_dispersal_switches: 0,
        }
    }

    /// Advance the active mode's timer by one fixed quantum.
    ///
    /// Confined and Flee have no timer of their own; their quanta are
    /// discarded so a frozen dispersal/pursuit timer survives the interlude.
    #[inline]
    pub(crate) fn advance_timer(&mut self) {
        if self.mode.has_timer() {
            self.mode_timer_ms += MODE_TICK_MS;
        }
    }

    /// Evaluate the active mode's transition rule against this tick's view.
    ///
    /// Returns the mode to enter, or `None` for no change.  Tally increments
    /// happen here, at the moment the threshold rule fires; the caller
    /// applies the swap via [`apply_transition`](Self::apply_transition).
    pub(crate) fn next_mode(&mut self, view: &EnemyView) -> Option<Mode> {
        match self.mode {
            // Released from the lair once the confinement countdown expires.
            Mode::Confined => (view.lair_remaining_ms <= 0).then_some(Mode::Dispersal),

            Mode::Dispersal => {
                if view.edible {
                    // Timer and tallies untouched; the spell resumes later.
                    Some(Mode::Flee)
                } else if self.to_pursuit_switches < PURSUIT_BIAS_SWITCHES
                    && self.mode_timer_ms >= DISPERSAL_LONG_MS
                {
                    self.to_pursuit_switches += 1;
                    Some(Mode::Pursuit)
                } else if self.to_pursuit_switches >= PURSUIT_BIAS_SWITCHES
                    && self.mode_timer_ms >= DISPERSAL_SHORT_MS
                {
                    self.to_pursuit_switches += 1;
                    Some(Mode::Pursuit)
                } else {
                    None
                }
            }

            Mode::Pursuit => {
                if view.edible {
                    Some(Mode::Flee)
                } else if self.to_dispersal_switches < MAX_DISPERSAL_RETURNS
                    && self.mode_timer_ms >= PURSUIT_SPELL_MS
                {
                    self.to_dispersal_switches += 1;
                    Some(Mode::Dispersal)
                } else {
                    // After the final return, pursuit is permanent.
                    None
                }
            }

            Mode::Flee => {
                if view.lair_remaining_ms > 0 {
                    // Captured while fleeing, edible or not.
                    Some(Mode::Confined)
                } else if !view.edible {
                    // Restore the interrupted mode, not a fixed default.
                    Some(self.last_mode)
                } else {
                    None
                }
            }
        }
    }

    /// Swap to `next`, remembering the outgoing mode and running the
    /// incoming mode's reset hook.
    ///
    /// The reset is skipped when the outgoing mode was Flee: a flee-exit
    /// resumes the restored mode rather than starting it afresh.
    pub(crate) fn apply_transition(&mut self, next: Mode) {
        let outgoing = self.mode;
        self.last_mode = outgoing;
        self.mode = next;
        if outgoing != Mode::Flee && next.has_timer() {
            self.mode_timer_ms = 0;
        }
    }
}

impl Default for EnemyRecord {
    fn default() -> Self {
        Self::new()
    }
}
