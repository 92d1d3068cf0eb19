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

//! Geometry of the fixed 10x10 grid: row iteration and neighbor lookup.

use crate::board::Coordinate;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 10;

/// Get an iterator over rows of the grid. Each row is an iterator over the coordinates of
/// that row.
pub fn iter_coordinates() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
    (0..GRID_SIZE).map(|row| (0..GRID_SIZE).map(move |column| Coordinate { row, column }))
}

/// Iterator over the cells surrounding a coordinate, including diagonals. Cells that
/// would fall off the grid are skipped.
#[derive(Debug, Clone)]
pub struct Neighbors {
    coord: Coordinate,
    step: NeighborStep,
}

#[derive(Debug, Copy, Clone)]
enum NeighborStep {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    End,
}

impl NeighborStep {
    /// The step after this one and the row/column offset of this one.
    fn advance(self) -> Option<(NeighborStep, isize, isize)> {
        use self::NeighborStep::*;
        match self {
            North => Some((NorthEast, -1, 0)),
            NorthEast => Some((East, -1, 1)),
            East => Some((SouthEast, 0, 1)),
            SouthEast => Some((South, 1, 1)),
            South => Some((SouthWest, 1, 0)),
            SouthWest => Some((West, 1, -1)),
            West => Some((NorthWest, 0, -1)),
            NorthWest => Some((End, -1, -1)),
            End => None,
        }
    }
}

impl Neighbors {
    pub(crate) fn start(coord: Coordinate) -> Self {
        Self {
            coord,
            // Out of bounds coordinates have no neighbors on the grid; skip directly to
            // the End state.
            step: if coord.in_bounds() {
                NeighborStep::North
            } else {
                NeighborStep::End
            },
        }
    }
}

/// Offset `base` by `delta`, staying within `[0, GRID_SIZE)`.
fn offset(base: usize, delta: isize) -> Option<usize> {
    let moved = if delta < 0 {
        base.checked_sub(delta.unsigned_abs())?
    } else {
        base + delta as usize
    };
    if moved < GRID_SIZE {
        Some(moved)
    } else {
        None
    }
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            let (next, drow, dcol) = self.step.advance()?;
            self.step = next;
            if let (Some(row), Some(column)) =
                (offset(self.coord.row, drow), offset(self.coord.column, dcol))
            {
                return Some(Coordinate { row, column });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let center = Coordinate::new(4, 4);
        let neighbors: HashSet<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for n in &neighbors {
            assert!(n.row >= 3 && n.row <= 5 && n.column >= 3 && n.column <= 5);
        }
        // Down and right directions must be present, not only up and left.
        assert!(neighbors.contains(&Coordinate::new(5, 5)));
        assert!(neighbors.contains(&Coordinate::new(5, 4)));
        assert!(neighbors.contains(&Coordinate::new(4, 5)));
        assert!(neighbors.contains(&Coordinate::new(3, 5)));
        assert!(neighbors.contains(&Coordinate::new(5, 3)));
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(Coordinate::new(0, 0).neighbors().count(), 3);
        assert_eq!(Coordinate::new(9, 9).neighbors().count(), 3);
        assert_eq!(Coordinate::new(0, 5).neighbors().count(), 5);
        assert_eq!(Coordinate::new(5, 9).neighbors().count(), 5);
    }

    #[test]
    fn out_of_bounds_has_no_neighbors() {
        assert_eq!(Coordinate::new(10, 3).neighbors().count(), 0);
    }

    #[test]
    fn iterates_all_rows() {
        let rows: Vec<Vec<Coordinate>> = iter_coordinates().map(|row| row.collect()).collect();
        assert_eq!(rows.len(), GRID_SIZE);
        assert!(rows.iter().all(|row| row.len() == GRID_SIZE));
        assert_eq!(rows[3][7], Coordinate::new(3, 7));
    }
}
