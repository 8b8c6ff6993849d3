//! Movement directions and their engine wire encoding.
//!
//! The external engine exchanges directions as raw integers:
//! up = 0, right = 1, down = 2, left = 3, and -1 for "no action" (neutral).
//! Inside the crates directions are the typed [`Direction`] enum, with
//! neutral represented as `None` in an `Option<Direction>`; the raw integer
//! form only appears at the engine boundary via [`Direction::encode`] and
//! [`Direction::decode`].

use std::fmt;

use crate::{ChaseError, ChaseResult};

/// Wire value for "no action".
pub const NEUTRAL: i32 = -1;

/// One of the four cardinal movement directions.
///
/// The discriminants match the engine wire encoding, so `as i32` is the
/// encoded value of a non-neutral direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up    = 0,
    Right = 1,
    Down  = 2,
    Left  = 3,
}

impl Direction {
    /// All directions in wire-encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Encode an optional direction to the engine wire value
    /// (`None` → [`NEUTRAL`]).
    #[inline]
    pub fn encode(dir: Option<Direction>) -> i32 {
        match dir {
            None    => NEUTRAL,
            Some(d) => d as i32,
        }
    }

    /// Decode an engine wire value.
    ///
    /// `-1` decodes to `Ok(None)` (neutral); anything outside `{-1,0,1,2,3}`
    /// is rejected with [`ChaseError::UnknownDirection`].
    pub fn decode(raw: i32) -> ChaseResult<Option<Direction>> {
        match raw {
            NEUTRAL => Ok(None),
            0 => Ok(Some(Direction::Up)),
            1 => Ok(Some(Direction::Right)),
            2 => Ok(Some(Direction::Down)),
            3 => Ok(Some(Direction::Left)),
            other => Err(ChaseError::UnknownDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        };
        f.write_str(s)
    }
}

impl TryFrom<i32> for Direction {
    type Error = ChaseError;

    /// Strict conversion: neutral (-1) is *not* a `Direction` and fails here.
    /// Use [`Direction::decode`] when neutral is an acceptable input.
    fn try_from(raw: i32) -> ChaseResult<Direction> {
        match Direction::decode(raw)? {
            Some(d) => Ok(d),
            None    => Err(ChaseError::UnknownDirection(raw)),
        }
    }
}
