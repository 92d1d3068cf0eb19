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
#![cfg(feature = "rng_gen")]

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{fleet::random_fleet, Board, Coordinate, FireOutcome, FleetError, Placement};

fn random_board(seed: u64) -> (Vec<Placement>, Board) {
    let mut rng = StdRng::seed_from_u64(seed);
    let fleet = random_fleet(&mut rng);
    let board = Board::new(fleet.clone()).expect("random fleet should be valid");
    (fleet, board)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_fleets_occupy_twenty_cells(seed in any::<u64>()) {
        let (_, board) = random_board(seed);
        prop_assert_eq!(board.occupied(), 20);
        prop_assert_eq!(board.iter_ships().count(), 10);
    }

    #[test]
    fn ships_sink_on_last_deck_in_any_order(seed in any::<u64>(), ship in 0..10usize) {
        let (_, mut board) = random_board(seed);
        let mut coords: Vec<Coordinate> = board.iter_ships().nth(ship).unwrap().coords().collect();
        // Fire in a seed-dependent order.
        let rotate = (seed as usize) % coords.len();
        coords.rotate_left(rotate);
        if seed % 2 == 0 {
            coords.reverse();
        }
        let (last, rest) = coords.split_last().unwrap();
        for &coord in rest {
            prop_assert_eq!(board.fire(coord), FireOutcome::Hit);
        }
        prop_assert_eq!(board.fire(*last), FireOutcome::Sunk);
        prop_assert!(board.get_ship(*last).unwrap().is_sunk());
        prop_assert_eq!(board.fire(*last), FireOutcome::Sunk);
        prop_assert_eq!(board.remaining(), 9);
    }

    #[test]
    fn empty_water_always_misses(seed in any::<u64>(), row in 0..10usize, column in 0..10usize) {
        let (_, mut board) = random_board(seed);
        let coord = Coordinate::new(row, column);
        prop_assume!(board.get_ship(coord).is_none());
        let before = board.to_string();
        prop_assert_eq!(board.fire(coord), FireOutcome::Miss);
        prop_assert_eq!(board.fire(coord), FireOutcome::Miss);
        prop_assert_eq!(board.to_string(), before);
    }

    #[test]
    fn dropping_a_ship_is_not_enough(seed in any::<u64>(), ship in 0..10usize) {
        let (mut fleet, _) = random_board(seed);
        fleet.remove(ship);
        prop_assert_eq!(
            Board::new(fleet).unwrap_err(),
            FleetError::NotEnoughShips { expected: 10, found: 9 }
        );
    }

    #[test]
    fn touching_single_deck_is_rejected(seed in any::<u64>(), ship in 0..10usize, pick in any::<usize>()) {
        let (mut fleet, board) = random_board(seed);
        // Swap a single-deck ship for one placed next to some other ship.
        let single = fleet.iter().position(|p| p.len() == 1).unwrap();
        let target = if ship == single { (ship + 1) % 10 } else { ship };
        let cells: Vec<Coordinate> = fleet[target].coords().collect();
        let neighbors: Vec<Coordinate> = cells
            .iter()
            .flat_map(|c| c.neighbors())
            .filter(|n| board.get_ship(*n).is_none())
            .collect();
        prop_assume!(!neighbors.is_empty());
        let spot = neighbors[pick % neighbors.len()];
        fleet[single] = Placement::new(spot, spot);
        let rejected = matches!(
            Board::new(fleet),
            Err(FleetError::InvalidShipPosition { .. })
        );
        prop_assert!(rejected);
    }
}
