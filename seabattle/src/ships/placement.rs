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

use crate::board::{CannotPlaceReason, Coordinate};

/// Placement orientation of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// All cells share a row.
    Horizontal,
    /// All cells share a column.
    Vertical,
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Inclusive `(start, end)` pair of coordinates describing where a ship lies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// First endpoint.
    pub start: Coordinate,
    /// Last endpoint.
    pub end: Coordinate,
}

impl Placement {
    /// Construct a placement from two endpoints. The endpoints may be given in either
    /// order.
    pub fn new(start: impl Into<Coordinate>, end: impl Into<Coordinate>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Construct a placement of `len` cells starting at `start` and extending right
    /// (horizontal) or down (vertical). Returns `None` if `len` is 0 or the far end
    /// would not fit in a `usize`.
    pub(crate) fn from_start(
        start: Coordinate,
        len: usize,
        orientation: Orientation,
    ) -> Option<Self> {
        let span = len.checked_sub(1)?;
        let end = match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, start.column.checked_add(span)?),
            Orientation::Vertical => Coordinate::new(start.row.checked_add(span)?, start.column),
        };
        Some(Self { start, end })
    }

    /// Top-left corner of the spanned rectangle.
    fn min(&self) -> Coordinate {
        Coordinate::new(
            self.start.row.min(self.end.row),
            self.start.column.min(self.end.column),
        )
    }

    /// Bottom-right corner of the spanned rectangle.
    fn max(&self) -> Coordinate {
        Coordinate::new(
            self.start.row.max(self.end.row),
            self.start.column.max(self.end.column),
        )
    }

    /// Iterate every coordinate in the rectangle spanned by the endpoints, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let (min, max) = (self.min(), self.max());
        (min.row..=max.row).flat_map(move |row| {
            (min.column..=max.column).map(move |column| Coordinate { row, column })
        })
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        let (min, max) = (self.min(), self.max());
        (max.row - min.row + 1) * (max.column - min.column + 1)
    }

    /// Orientation of the placement, or `None` when it is not a line. Single cells are
    /// reported as horizontal.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.start.row == self.end.row {
            Some(Orientation::Horizontal)
        } else if self.start.column == self.end.column {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }

    /// Check that this placement describes a ship on the grid.
    pub fn check(&self) -> Result<(), CannotPlaceReason> {
        if !self.start.in_bounds() || !self.end.in_bounds() {
            Err(CannotPlaceReason::OutOfBounds)
        } else if self.orientation().is_none() {
            Err(CannotPlaceReason::NotLinear)
        } else {
            Ok(())
        }
    }
}

impl From<((usize, usize), (usize, usize))> for Placement {
    /// Allows writing placements as `((row, column), (row, column))`.
    fn from((start, end): ((usize, usize), (usize, usize))) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
