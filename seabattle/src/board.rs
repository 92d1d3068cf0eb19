// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types that make up the game board.

use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
};

use tracing::{debug, trace};

use crate::ships::{Placement, Ship, ShipClass};

pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, FleetError},
    grid::{iter_coordinates, Neighbors, GRID_SIZE},
};

mod coordinate;
mod errors;
mod grid;

/// Total number of ships in a valid fleet.
pub const FLEET_SIZE: usize = 10;

/// Result of firing at a coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FireOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// Every deck of the ship that was hit is now hit.
    Sunk,
}

impl FireOutcome {
    /// The status string reported to the player.
    pub fn as_str(self) -> &'static str {
        match self {
            FireOutcome::Miss => "Miss!",
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
        }
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a renderer should show for a single coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// No ship occupies this cell.
    Water,
    /// A ship deck that has not been hit.
    Intact,
    /// A hit deck of a ship that is still afloat.
    Hit,
    /// A deck of a sunk ship.
    Sunk,
}

/// A single player's board: the validated fleet and an index from each occupied
/// coordinate to the ship that owns it.
#[derive(Debug, Clone)]
pub struct Board {
    /// All ships, in the order they were placed.
    ships: Vec<Ship>,

    /// Position in `ships` of the ship occupying each coordinate.
    index: HashMap<Coordinate, usize>,
}

impl Board {
    /// Build a board from ship placements and validate the whole fleet.
    ///
    /// Checks run in this order, stopping at the first failure:
    ///
    /// 1. every placement must be a single row or column inside the grid,
    /// 2. the fleet must have exactly [`FLEET_SIZE`] ships,
    /// 3. each [`ShipClass`] must appear exactly [`ShipClass::count`] times,
    /// 4. no two ships may share or touch a cell, diagonals included.
    pub fn new<P, I>(placements: I) -> Result<Self, FleetError>
    where
        P: Into<Placement>,
        I: IntoIterator<Item = P>,
    {
        let result = Self::build(placements.into_iter().map(Into::into));
        match &result {
            Ok(board) => debug!(
                ships = board.ships.len(),
                cells = board.index.len(),
                "fleet accepted"
            ),
            Err(err) => debug!(error = %err, "fleet rejected"),
        }
        result
    }

    fn build(placements: impl Iterator<Item = Placement>) -> Result<Self, FleetError> {
        let mut ships = Vec::with_capacity(FLEET_SIZE);
        for placement in placements {
            placement
                .check()
                .map_err(|reason| FleetError::InvalidPlacement { placement, reason })?;
            ships.push(Ship::from_placement(&placement));
        }

        // The index must be complete before validation. A cell claimed twice keeps its
        // first owner and is reported as a spacing violation once the fleet checks get
        // that far.
        let mut index = HashMap::with_capacity(2 * FLEET_SIZE);
        let mut shared = None;
        for (id, ship) in ships.iter().enumerate() {
            for coord in ship.coords() {
                match index.entry(coord) {
                    Entry::Vacant(entry) => {
                        entry.insert(id);
                    }
                    Entry::Occupied(_) => {
                        shared.get_or_insert(coord);
                    }
                }
            }
        }

        let board = Self { ships, index };
        board.validate(shared)?;
        Ok(board)
    }

    fn validate(&self, shared: Option<Coordinate>) -> Result<(), FleetError> {
        if self.ships.len() != FLEET_SIZE {
            return Err(FleetError::NotEnoughShips {
                expected: FLEET_SIZE,
                found: self.ships.len(),
            });
        }

        for &class in ShipClass::ALL {
            let found = self
                .ships
                .iter()
                .filter(|ship| ship.class() == Some(class))
                .count();
            if found != class.count() {
                return Err(FleetError::InvalidShipCount {
                    class,
                    expected: class.count(),
                    found,
                });
            }
        }

        if let Some(coord) = shared {
            return Err(FleetError::InvalidShipPosition {
                first: coord,
                second: coord,
            });
        }
        for (id, ship) in self.ships.iter().enumerate() {
            for coord in ship.coords() {
                let touching = coord
                    .neighbors()
                    .find(|n| self.index.get(n).map_or(false, |&other| other != id));
                if let Some(other) = touching {
                    return Err(FleetError::InvalidShipPosition {
                        first: coord,
                        second: other,
                    });
                }
            }
        }
        Ok(())
    }

    /// Fire at the given coordinate. Coordinates no ship occupies, including ones off
    /// the grid, are a miss and change nothing.
    pub fn fire(&mut self, coord: impl Into<Coordinate>) -> FireOutcome {
        let coord = coord.into();
        let outcome = match self.index.get(&coord) {
            Some(&id) => self.fire_ship(id, coord),
            None => FireOutcome::Miss,
        };
        trace!(%coord, %outcome, "fire");
        outcome
    }

    fn fire_ship(&mut self, id: usize, coord: Coordinate) -> FireOutcome {
        self.ships[id]
            .fire(coord)
            .expect("indexed coordinate belongs to its ship")
    }

    /// Get the ship occupying the given coordinate, if any.
    pub fn get_ship(&self, coord: impl Into<Coordinate>) -> Option<&Ship> {
        self.index.get(&coord.into()).map(|&id| &self.ships[id])
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Number of coordinates occupied by ships.
    pub fn occupied(&self) -> usize {
        self.index.len()
    }

    /// Number of ships still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Returns true if every ship has been sunk.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Read-only view of a coordinate for rendering.
    pub fn cell_state(&self, coord: impl Into<Coordinate>) -> CellState {
        let coord = coord.into();
        match self.get_ship(coord) {
            None => CellState::Water,
            Some(ship) if ship.is_sunk() => CellState::Sunk,
            Some(ship) => match ship.get_cell(coord) {
                Some(cell) if cell.hit() => CellState::Hit,
                _ => CellState::Intact,
            },
        }
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, CellState)>> {
        iter_coordinates().map(move |row| row.map(move |coord| (coord, self.cell_state(coord))))
    }
}

impl fmt::Display for Board {
    /// Draws the fully revealed board.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}
