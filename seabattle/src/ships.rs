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

//! Types used for defining ships and the cells (decks) they are made of.
use std::fmt;

use crate::board::{Coordinate, FireOutcome};

pub use self::placement::{Orientation, Placement};

mod placement;

/// A single deck of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cell {
    coord: Coordinate,
    hit: bool,
}

impl Cell {
    fn new(coord: Coordinate) -> Self {
        Self { coord, hit: false }
    }

    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been hit.
    pub fn hit(&self) -> bool {
        self.hit
    }
}

/// Classes of ship in the standard fleet, keyed by deck count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// One deck; four per fleet.
    SingleDeck,
    /// Two decks; three per fleet.
    DoubleDeck,
    /// Three decks; two per fleet.
    ThreeDeck,
    /// Four decks; one per fleet.
    FourDeck,
}

impl ShipClass {
    /// All classes, smallest first.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::SingleDeck,
        ShipClass::DoubleDeck,
        ShipClass::ThreeDeck,
        ShipClass::FourDeck,
    ];

    /// Get the class with the given number of decks, if there is one.
    pub fn from_decks(decks: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.decks() == decks)
    }

    /// Number of decks of this ship class.
    pub fn decks(self) -> usize {
        match self {
            ShipClass::SingleDeck => 1,
            ShipClass::DoubleDeck => 2,
            ShipClass::ThreeDeck => 3,
            ShipClass::FourDeck => 4,
        }
    }

    /// Number of ships of this class a valid fleet contains.
    pub fn count(self) -> usize {
        5 - self.decks()
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipClass::SingleDeck => "single-deck",
            ShipClass::DoubleDeck => "double-deck",
            ShipClass::ThreeDeck => "three-deck",
            ShipClass::FourDeck => "four-deck",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ship: a run of cells it exclusively owns, plus its derived sunk status.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    cells: Vec<Cell>,
    sunk: bool,
}

impl Ship {
    /// Build a ship with one cell for every coordinate in the rectangle spanned by
    /// `start` and `end`, inclusive. Shape is not checked here; see
    /// [`Placement::check`].
    pub fn new(start: impl Into<Coordinate>, end: impl Into<Coordinate>) -> Self {
        Self::from_placement(&Placement::new(start, end))
    }

    pub(crate) fn from_placement(placement: &Placement) -> Self {
        Self {
            cells: placement.coords().map(Cell::new).collect(),
            sunk: false,
        }
    }

    /// The cells of this ship, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.cells.iter().map(Cell::coord)
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of decks that have been hit.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|cell| cell.hit).count()
    }

    /// Class of this ship, or `None` if its length matches no class.
    pub fn class(&self) -> Option<ShipClass> {
        ShipClass::from_decks(self.len())
    }

    /// Check if this ship has been sunk.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Get the cell of this ship at the given coordinate, if any.
    pub fn get_cell(&self, coord: impl Into<Coordinate>) -> Option<&Cell> {
        let coord = coord.into();
        self.cells.iter().find(|cell| cell.coord == coord)
    }

    /// Fire at the given coordinate. Returns `None` if this ship has no cell there,
    /// otherwise marks the cell hit and reports whether the ship is now sunk. Firing
    /// at an already-hit cell repeats the same outcome.
    pub fn fire(&mut self, coord: impl Into<Coordinate>) -> Option<FireOutcome> {
        let coord = coord.into();
        let cell = self.cells.iter_mut().find(|cell| cell.coord == coord)?;
        cell.hit = true;
        self.sunk = self.cells.iter().all(|cell| cell.hit);
        Some(if self.sunk {
            FireOutcome::Sunk
        } else {
            FireOutcome::Hit
        })
    }
}
