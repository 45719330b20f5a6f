//! Board squares.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board square packed into one byte: `rank * 8 + file`, so a1 = 0,
/// b1 = 1, ..., h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Pack rank and file indices (0-7 each) into a square. Out-of-range
    /// input is not checked; go through `TryFrom` for untrusted values.
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square(((rank << 3) | file) as u8)
    }

    /// The square with the given 0-63 index
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// This square's 0-63 index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank index, 0 = rank 1
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// File index, 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// The square `ranks` toward rank 8 and `files` toward file h from
    /// here, or `None` when that walks off the board.
    #[inline]
    #[must_use]
    pub fn shifted(self, ranks: isize, files: isize) -> Option<Self> {
        let rank = self.rank() as isize + ranks;
        let file = self.file() as isize + files;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::new(rank as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    /// Algebraic notation, e.g. "e4"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file() as u8);
        write!(f, "{file}{}", self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        match (rank, file) {
            (0..=7, 0..=7) => Ok(Square::new(rank, file)),
            (8.., _) => Err(SquareError::RankOutOfBounds { rank }),
            _ => Err(SquareError::FileOutOfBounds { file }),
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::new(
                (rank - b'1') as usize,
                (file - b'a') as usize,
            )),
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
