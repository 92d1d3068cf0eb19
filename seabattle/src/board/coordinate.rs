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
use std::fmt;

use crate::board::grid::{Neighbors, GRID_SIZE};

/// The coordinates of a single cell in the board. Ordering is row-major.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub column: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `column`.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether this coordinate lies inside the 10x10 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.column < GRID_SIZE
    }

    /// Iterate the (up to 8) in-bounds cells surrounding this one, diagonals included.
    pub fn neighbors(self) -> Neighbors {
        Neighbors::start(self)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, column)` pair.
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
