//! Code for working with [`Move`]s, which name one of a player's cups.

use crate::CUPS;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// A move on the Kalah board: the index of the cup to sow, counted from the mover's left.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Move(u8);

/// The legal moves out of a position, in ascending cup order.
pub type MoveList = ArrayVec<[Move; CUPS]>;

impl Move {
    /// Marks "no move available": the game is over, or nothing was searched.
    pub const INVALID: Self = Self(u8::MAX);

    /// Convert from a 0-based cup index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < u8::MAX as usize);
        Self(index as u8)
    }

    /// Convert into a 0-based cup index.
    /// Undefined for [`Move::INVALID`].
    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

/// Moves print as the 1-based cup number a player would type ("3"), or "none".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            f.write_str("none")
        } else {
            write!(f, "{}", self.0 + 1)
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid cup number")]
pub struct ParseMoveError;

/// Build a [`Move`] from a 1-based cup number ("1" through "6").
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cup: usize = s.trim().parse().or(Err(ParseMoveError))?;
        if cup == 0 || cup > CUPS {
            return Err(ParseMoveError);
        }

        Ok(Self::from_index(cup - 1))
    }
}
