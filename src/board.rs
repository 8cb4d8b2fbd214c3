//! Board state: a square grid of cells referring to ships by handle.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{DEFAULT_DIMENSIONS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::fleet::{Fleet, ShipId};
use crate::render::render_grid;
use crate::ship::Orientation;

/// Tag describing the state of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl CellType {
    /// Symbol used when rendering the board.
    pub fn glyph(&self) -> char {
        match self {
            CellType::Empty => '•',
            CellType::Occupied => 'O',
            CellType::Hit => 'X',
            CellType::Miss => '?',
        }
    }

    /// `true` once the cell has been resolved by an attack.
    pub fn is_attacked(&self) -> bool {
        matches!(self, CellType::Hit | CellType::Miss)
    }
}

/// Where a ship sits: its handle, head and the orientation it was placed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub ship: ShipId,
    pub head: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    /// 1-based segment position of `at` counted from the head.
    fn segment(&self, at: Coordinate) -> usize {
        match self.orientation {
            Orientation::Vertical => at.y - self.head.y + 1,
            Orientation::Horizontal => at.x - self.head.x + 1,
        }
    }
}

/// One board cell. Only occupied and hit cells carry a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Placement),
    Hit(Placement),
    Miss,
}

impl Cell {
    pub fn cell_type(&self) -> CellType {
        match self {
            Cell::Empty => CellType::Empty,
            Cell::Occupied(_) => CellType::Occupied,
            Cell::Hit(_) => CellType::Hit,
            Cell::Miss => CellType::Miss,
        }
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            Cell::Occupied(p) | Cell::Hit(p) => Some(*p),
            Cell::Empty | Cell::Miss => None,
        }
    }

    /// Ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.placement().map(|p| p.ship)
    }

    /// Head coordinate of the occupying ship, if any.
    pub fn head(&self) -> Option<Coordinate> {
        self.placement().map(|p| p.head)
    }
}

/// A `dimensions × dimensions` board. Rows are indexed by `y`, columns by `x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Gameboard {
    dimensions: usize,
    grid: Vec<Vec<Cell>>,
}

impl Gameboard {
    /// Create a board with every cell empty.
    pub fn new(dimensions: usize) -> Result<Self, BoardError> {
        if dimensions == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Gameboard {
            dimensions,
            grid: vec![vec![Cell::Empty; dimensions]; dimensions],
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Deep copy of the grid; changes to it never reach the board.
    pub fn gameboard(&self) -> Vec<Vec<Cell>> {
        self.grid.clone()
    }

    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.x < self.dimensions && at.y < self.dimensions
    }

    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        self.grid.get(at.y).and_then(|row| row.get(at.x)).copied()
    }

    /// Number of cells resolved as a hit or a miss.
    pub fn attacked_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| c.cell_type().is_attacked())
            .count()
    }

    /// Cells covered by a ship of `length` at `head`, or `ShipOutOfBounds`.
    fn footprint(
        &self,
        head: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        (0..length)
            .map(|i| {
                head.offset(orientation.step(), i)
                    .filter(|&c| self.in_bounds(c))
                    .ok_or(BoardError::ShipOutOfBounds)
            })
            .collect()
    }

    fn is_placed(&self, id: ShipId) -> bool {
        self.grid.iter().flatten().any(|c| c.ship() == Some(id))
    }

    /// Place ship `id` with its head at `head`, extending along its current
    /// orientation. Either every target cell is written or none is.
    pub fn place_ship(&mut self, fleet: &Fleet, id: ShipId, head: Coordinate) -> Result<(), BoardError> {
        let ship = fleet.get(id).ok_or(BoardError::UnknownShip(id))?;
        let orientation = ship.orientation();
        let cells = self.footprint(head, ship.length(), orientation)?;
        if cells.iter().any(|&c| self.grid[c.y][c.x] != Cell::Empty) {
            log::trace!("rejected ship {} at {}: overlap", id.index(), head);
            return Err(BoardError::ShipOverlaps);
        }
        if self.is_placed(id) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let placement = Placement {
            ship: id,
            head,
            orientation,
        };
        for c in cells {
            self.grid[c.y][c.x] = Cell::Occupied(placement);
        }
        log::debug!(
            "placed ship {} (length {}) at {} {:?}",
            id.index(),
            ship.length(),
            head,
            orientation
        );
        Ok(())
    }

    /// Pick a random orientation and free head for ship `id`, rotate the ship
    /// to match and place it. Returns the chosen head.
    pub fn place_randomly<R: Rng>(
        &mut self,
        fleet: &mut Fleet,
        id: ShipId,
        rng: &mut R,
    ) -> Result<Coordinate, BoardError> {
        let length = fleet.get(id).ok_or(BoardError::UnknownShip(id))?.length();
        if length > self.dimensions {
            return Err(BoardError::UnableToPlaceShip);
        }
        if self.is_placed(id) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.dimensions - length, self.dimensions - 1),
                Orientation::Vertical => (self.dimensions - 1, self.dimensions - length),
            };
            let head = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let free = self
                .footprint(head, length, orientation)?
                .iter()
                .all(|&c| self.grid[c.y][c.x] == Cell::Empty);
            if free {
                if let Some(ship) = fleet.get_mut(id) {
                    ship.set_orientation(orientation);
                }
                self.place_ship(fleet, id, head)?;
                return Ok(head);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an attack at `at`, forwarding hits to the occupying ship.
    pub fn receive_attack(&mut self, fleet: &mut Fleet, at: Coordinate) -> Result<AttackResult, BoardError> {
        if !self.in_bounds(at) {
            return Err(BoardError::OutOfBounds { x: at.x, y: at.y });
        }
        let cell = &mut self.grid[at.y][at.x];
        match *cell {
            Cell::Hit(_) | Cell::Miss => Ok(AttackResult::AlreadyAttacked),
            Cell::Empty => {
                *cell = Cell::Miss;
                log::debug!("attack at {}: miss", at);
                Ok(AttackResult::Miss)
            }
            Cell::Occupied(placement) => {
                let ship = fleet
                    .get_mut(placement.ship)
                    .ok_or(BoardError::UnknownShip(placement.ship))?;
                ship.hit(placement.segment(at))?;
                *cell = Cell::Hit(placement);
                log::debug!(
                    "attack at {}: hit ship {} ({}/{})",
                    at,
                    placement.ship.index(),
                    ship.hits(),
                    ship.length()
                );
                Ok(AttackResult::Hit)
            }
        }
    }

    /// Returns `true` when at least one ship is placed and every placed ship is sunk.
    pub fn all_sunk(&self, fleet: &Fleet) -> bool {
        let mut placed = self.grid.iter().flatten().filter_map(Cell::ship).peekable();
        placed.peek().is_some() && placed.all(|id| fleet.get(id).is_some_and(|s| s.is_sunk()))
    }

    /// Text dump of the board, one line per row.
    pub fn print_gameboard(&self) -> String {
        render_grid(&self.grid)
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Gameboard {
            dimensions: DEFAULT_DIMENSIONS,
            grid: vec![vec![Cell::Empty; DEFAULT_DIMENSIONS]; DEFAULT_DIMENSIONS],
        }
    }
}

impl fmt::Display for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_gameboard())
    }
}

impl fmt::Debug for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gameboard {{ dimensions: {}, attacked: {} }}\n{}",
            self.dimensions,
            self.attacked_count(),
            self.print_gameboard()
        )
    }
}
