//! Ship entities: length, orientation and per-segment damage.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::DEFAULT_SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step `(dx, dy)` from one segment to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A ship with hits tracked per segment, counted 1-based from its head.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "ShipRepr"))]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    hit_state: Vec<bool>,
    hits: usize,
}

impl Ship {
    /// Create an undamaged, horizontal ship with `length` segments.
    pub fn new(length: usize) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship {
            length,
            orientation: Orientation::Horizontal,
            hit_state: vec![false; length],
            hits: 0,
        })
    }

    /// Number of segments.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of distinct segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Copy of the per-segment hit flags, head first.
    pub fn hit_state(&self) -> Vec<bool> {
        self.hit_state.clone()
    }

    /// Register a hit on the 1-based segment `position`.
    /// Returns `Ok(true)` if the segment was freshly hit, `Ok(false)` if it
    /// had already been hit.
    pub fn hit(&mut self, position: usize) -> Result<bool, BoardError> {
        let segment = position
            .checked_sub(1)
            .and_then(|i| self.hit_state.get_mut(i))
            .ok_or(BoardError::InvalidPosition {
                position,
                length: self.length,
            })?;
        if *segment {
            return Ok(false);
        }
        *segment = true;
        self.hits += 1;
        Ok(true)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    /// Toggle orientation, leaving damage untouched. Returns the new orientation.
    pub fn rotate(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    /// Set orientation directly; used by random placement.
    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

/// Wire form of a [`Ship`]; `hits` is recomputed from `hit_state`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct ShipRepr {
    length: usize,
    orientation: Orientation,
    hit_state: Vec<bool>,
}

#[cfg(feature = "std")]
impl TryFrom<ShipRepr> for Ship {
    type Error = BoardError;

    fn try_from(repr: ShipRepr) -> Result<Self, Self::Error> {
        if repr.length == 0 || repr.hit_state.len() != repr.length {
            return Err(BoardError::InvalidShipLength);
        }
        let hits = repr.hit_state.iter().filter(|h| **h).count();
        Ok(Ship {
            length: repr.length,
            orientation: repr.orientation,
            hit_state: repr.hit_state,
            hits,
        })
    }
}

impl Default for Ship {
    fn default() -> Self {
        Ship {
            length: DEFAULT_SHIP_LENGTH,
            orientation: Orientation::Horizontal,
            hit_state: vec![false; DEFAULT_SHIP_LENGTH],
            hits: 0,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, orientation: {:?}, hits: {}, sunk: {} }}",
            self.length,
            self.orientation,
            self.hits,
            self.is_sunk(),
        )
    }
}
