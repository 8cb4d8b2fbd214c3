/// Board width and height used by `Gameboard::default`.
pub const DEFAULT_DIMENSIONS: usize = 10;
/// Ship length used by `Ship::default`.
pub const DEFAULT_SHIP_LENGTH: usize = 2;
/// Attempts `Gameboard::place_randomly` makes before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

