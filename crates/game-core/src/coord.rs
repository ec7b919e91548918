//! Board coordinate representation.
//!
//! Coordinates are `(x, y)` pairs with both components in `0..=7`, mapped
//! left-to-right and top-to-bottom from White's perspective: `(0, 0)` is a8
//! and `(7, 7)` is h1.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate out of range: ({0}, {1})")]
    OutOfRange(u8, u8),

    #[error("invalid square name: {0}")]
    InvalidSquare(String),
}

/// A square on the board as an `(x, y)` coordinate pair.
///
/// Both components are guaranteed to be in `0..=7`: construction goes
/// through [`Coord::new`], and deserialization re-validates through the
/// same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: u8,
    y: u8,
}

/// Unvalidated wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    x: u8,
    y: u8,
}

impl TryFrom<RawCoord> for Coord {
    type Error = CoordError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.x, raw.y)
    }
}

impl Coord {
    /// Creates a coordinate, validating that both components are in `0..=7`.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Result<Self, CoordError> {
        if x < 8 && y < 8 {
            Ok(Coord { x, y })
        } else {
            Err(CoordError::OutOfRange(x, y))
        }
    }

    /// Parses a coordinate from an algebraic square name (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, CoordError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(CoordError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(CoordError::InvalidSquare(s.to_string()));
        }
        // Rank 8 is the top row (y = 0) from White's perspective.
        Ok(Coord {
            x: file - b'a',
            y: b'8' - rank,
        })
    }

    /// Returns the file component (0-7, left to right).
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row component (0-7, top to bottom).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the algebraic square name for this coordinate.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.x) as char, (b'8' - self.y) as char)
    }

    /// Returns true if this square is one of the four center squares
    /// (d4, d5, e4, e5).
    #[inline]
    pub const fn is_center(self) -> bool {
        (self.x == 3 || self.x == 4) && (self.y == 3 || self.y == 4)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_new() {
        let c = Coord::new(4, 4).unwrap();
        assert_eq!(c.x(), 4);
        assert_eq!(c.y(), 4);
        assert_eq!(Coord::new(8, 0), Err(CoordError::OutOfRange(8, 0)));
        assert_eq!(Coord::new(0, 9), Err(CoordError::OutOfRange(0, 9)));
    }

    #[test]
    fn coord_from_algebraic() {
        assert_eq!(Coord::from_algebraic("a8").unwrap(), Coord::new(0, 0).unwrap());
        assert_eq!(Coord::from_algebraic("a1").unwrap(), Coord::new(0, 7).unwrap());
        assert_eq!(Coord::from_algebraic("h1").unwrap(), Coord::new(7, 7).unwrap());
        assert_eq!(Coord::from_algebraic("e4").unwrap(), Coord::new(4, 4).unwrap());
        assert!(Coord::from_algebraic("i1").is_err());
        assert!(Coord::from_algebraic("a9").is_err());
        assert!(Coord::from_algebraic("").is_err());
        assert!(Coord::from_algebraic("e44").is_err());
    }

    #[test]
    fn coord_to_algebraic() {
        assert_eq!(Coord::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Coord::new(7, 7).unwrap().to_algebraic(), "h1");
        assert_eq!(Coord::new(4, 4).unwrap().to_algebraic(), "e4");
    }

    #[test]
    fn deserialize_revalidates_range() {
        let c: Coord = serde_json::from_str(r#"{"x":4,"y":4}"#).unwrap();
        assert_eq!(c, Coord::new(4, 4).unwrap());
        assert!(serde_json::from_str::<Coord>(r#"{"x":9,"y":9}"#).is_err());
        assert!(serde_json::from_str::<Coord>(r#"{"x":0,"y":8}"#).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let c = Coord::from_algebraic("h1").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), c);
    }

    #[test]
    fn algebraic_round_trip() {
        for x in 0..8u8 {
            for y in 0..8u8 {
                let c = Coord::new(x, y).unwrap();
                assert_eq!(Coord::from_algebraic(&c.to_algebraic()).unwrap(), c);
            }
        }
    }

    #[test]
    fn center_squares() {
        for name in ["d4", "d5", "e4", "e5"] {
            assert!(Coord::from_algebraic(name).unwrap().is_center(), "{name}");
        }
        for name in ["c4", "d3", "f5", "a1", "h8"] {
            assert!(!Coord::from_algebraic(name).unwrap().is_center(), "{name}");
        }
    }
}
