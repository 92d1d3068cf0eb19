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

//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{
    board::Coordinate,
    ships::{Placement, ShipClass},
};

/// Reason why a single placement could not become a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One of the endpoints lies outside the 10x10 grid.
    #[error("the placement extends outside the grid")]
    OutOfBounds,
    /// The endpoints differ on both axes, so the cells do not form a line.
    #[error("the placement is neither a single row nor a single column")]
    NotLinear,
}

/// Error returned when a fleet cannot be turned into a [`Board`][crate::board::Board].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// A placement did not describe a ship on the grid.
    #[error("invalid placement {placement}: {reason}")]
    InvalidPlacement {
        /// The rejected placement.
        placement: Placement,
        /// Why it was rejected.
        #[source]
        reason: CannotPlaceReason,
    },

    /// The fleet did not have the required total number of ships.
    #[error("total number of ships should be {expected}, got {found}")]
    NotEnoughShips { expected: usize, found: usize },

    /// The number of ships of one class was wrong.
    #[error("there should be {expected} {class} ship(s), got {found}")]
    InvalidShipCount {
        class: ShipClass,
        expected: usize,
        found: usize,
    },

    /// Two different ships occupy the same or neighboring cells.
    #[error("ships shouldn't be located in neighboring cells: {first} and {second}")]
    InvalidShipPosition { first: Coordinate, second: Coordinate },
}
