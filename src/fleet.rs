//! Caller-owned registry of ships. Boards refer to ships by [`ShipId`].

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::config::STANDARD_FLEET;
use crate::ship::{Orientation, Ship};

/// Non-owning handle to a ship in a [`Fleet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(usize);

impl ShipId {
    /// Position of the ship in its fleet.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One ship for each class of the standard fleet, in order.
    pub fn standard() -> Self {
        let ships = STANDARD_FLEET
            .iter()
            .filter_map(|class| Ship::new(class.length()).ok())
            .collect();
        Fleet { ships }
    }

    /// Add a ship, returning its handle.
    pub fn add(&mut self, ship: Ship) -> ShipId {
        self.ships.push(ship);
        ShipId(self.ships.len() - 1)
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    /// Rotate the ship behind `id`.
    pub fn rotate(&mut self, id: ShipId) -> Result<Orientation, BoardError> {
        self.get_mut(id)
            .map(Ship::rotate)
            .ok_or(BoardError::UnknownShip(id))
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ShipId> {
        (0..self.ships.len()).map(ShipId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships.iter().enumerate().map(|(i, s)| (ShipId(i), s))
    }

    /// Returns `true` when the fleet is non-empty and every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }
}
