//! Common types for the rules engine: board errors and attack results.

use crate::fleet::ShipId;

/// Outcome of an attack on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on an occupied cell and was registered on its ship.
    Hit,
    /// Attack landed on an empty cell.
    Miss,
    /// Cell was already resolved as a hit or a miss; nothing changed.
    AlreadyAttacked,
}

/// Errors returned by Ship and Gameboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ships must have at least one segment.
    InvalidShipLength,
    /// Boards must have at least one row and column.
    InvalidDimensions,
    /// Segment position outside `1..=length`.
    InvalidPosition { position: usize, length: usize },
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Ship placement overlaps a non-empty cell.
    ShipOverlaps,
    /// Ship is already on this board.
    ShipAlreadyPlaced,
    /// Attack coordinates lie outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Handle does not refer to a ship in the fleet.
    UnknownShip(ShipId),
    /// Random placement found no free run of cells.
    UnableToPlaceShip,
    /// Text could not be parsed as a board coordinate.
    InvalidCoordinate,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::InvalidDimensions => write!(f, "Board dimensions must be at least 1"),
            BoardError::InvalidPosition { position, length } => write!(
                f,
                "Segment position {} is outside 1..={}",
                position, length
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Attack at x={}, y={} is outside the board", x, y)
            }
            BoardError::UnknownShip(id) => write!(f, "No ship with id {} in the fleet", id.index()),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::InvalidCoordinate => write!(f, "Invalid coordinate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
