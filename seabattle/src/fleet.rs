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

//! Ready-made fleet layouts.

use crate::ships::Placement;

#[cfg(feature = "rng_gen")]
pub use self::random::random_fleet;

/// A fixed layout that satisfies every fleet rule.
pub fn standard_fleet() -> Vec<Placement> {
    vec![
        Placement::new((0, 0), (0, 0)),
        Placement::new((2, 0), (2, 0)),
        Placement::new((4, 0), (4, 3)),
        Placement::new((6, 0), (7, 0)),
        Placement::new((9, 0), (9, 0)),
        Placement::new((0, 2), (0, 2)),
        Placement::new((9, 4), (9, 5)),
        Placement::new((0, 4), (1, 4)),
        Placement::new((0, 6), (0, 8)),
        Placement::new((2, 6), (2, 8)),
    ]
}

#[cfg(feature = "rng_gen")]
mod random {
    use std::collections::HashSet;

    use rand::Rng;
    use tracing::trace;

    use crate::{
        board::{Coordinate, GRID_SIZE},
        ships::{Orientation, Placement, ShipClass},
    };

    /// Attempts per ship before the whole layout is thrown away.
    const MAX_ATTEMPTS: usize = 200;

    /// Generate a random layout that passes [`Board::new`][crate::board::Board::new].
    pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<Placement> {
        let mut restarts = 0usize;
        loop {
            if let Some(fleet) = try_random_fleet(rng) {
                trace!(restarts, "generated random fleet");
                return fleet;
            }
            restarts += 1;
        }
    }

    /// Place ships largest first. Returns `None` if some ship found no free spot.
    fn try_random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<Placement>> {
        let mut taken = HashSet::new();
        let mut fleet = Vec::new();
        for &class in ShipClass::ALL.iter().rev() {
            for _ in 0..class.count() {
                let placement = (0..MAX_ATTEMPTS)
                    .filter_map(|_| random_placement(rng, class.decks()))
                    .find(|placement| is_clear(&taken, placement))?;
                taken.extend(placement.coords());
                fleet.push(placement);
            }
        }
        Some(fleet)
    }

    /// Pick an orientation and a start that keeps the whole ship on the grid.
    fn random_placement<R: Rng + ?Sized>(rng: &mut R, decks: usize) -> Option<Placement> {
        let orientation: Orientation = rng.gen();
        let (rows, columns) = match orientation {
            Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - decks + 1),
            Orientation::Vertical => (GRID_SIZE - decks + 1, GRID_SIZE),
        };
        let start = Coordinate::new(rng.gen_range(0, rows), rng.gen_range(0, columns));
        Placement::from_start(start, decks, orientation)
    }

    /// True if no cell of the placement, nor any of its neighbors, is taken.
    fn is_clear(taken: &HashSet<Coordinate>, placement: &Placement) -> bool {
        placement
            .coords()
            .all(|coord| !taken.contains(&coord) && coord.neighbors().all(|n| !taken.contains(&n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn standard_fleet_is_valid() {
        let board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.occupied(), 20);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_fleets_are_valid() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let fleet = random_fleet(&mut rng);
            assert_eq!(fleet.len(), 10);
            let board = Board::new(fleet).unwrap();
            assert_eq!(board.occupied(), 20);
        }
    }
}
