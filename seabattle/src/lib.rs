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

//! Single-player Battleship on the classic 10x10 grid.
//!
//! A [`Board`] is built once from ten ship placements: four single-deck ships, three
//! double-deck, two three-deck and one four-deck, none of them touching another, not
//! even diagonally. After that, [`Board::fire`] resolves shots as [`FireOutcome::Hit`],
//! [`FireOutcome::Sunk`] or [`FireOutcome::Miss`].
//!
//! ```
//! use seabattle::{Board, FireOutcome};
//!
//! let mut board = Board::new(seabattle::fleet::standard_fleet()).unwrap();
//! assert_eq!(board.fire((4, 0)), FireOutcome::Hit);
//! assert_eq!(board.fire((5, 5)).to_string(), "Miss!");
//! ```

pub mod board;
pub mod fleet;
pub mod render;
pub mod ships;

pub use crate::{
    board::{Board, CellState, Coordinate, FireOutcome, FleetError},
    ships::{Cell, Placement, Ship, ShipClass},
};
