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

//! Text rendering of a board as a box-drawn grid.

use crate::board::{iter_coordinates, Board, CellState, Coordinate, GRID_SIZE};

/// Glyph for open water.
pub const WATER: char = '~';
/// Glyph for a deck that has not been hit.
pub const INTACT: char = '\u{25A1}';
/// Glyph for a hit deck of a ship still afloat.
pub const HIT: char = '*';
/// Glyph for any deck of a sunk ship.
pub const SUNK: char = 'x';

impl CellState {
    /// Glyph used for this state on the fully revealed board.
    pub fn glyph(self) -> char {
        match self {
            CellState::Water => WATER,
            CellState::Intact => INTACT,
            CellState::Hit => HIT,
            CellState::Sunk => SUNK,
        }
    }
}

/// Render the fully revealed board.
pub fn render(board: &Board) -> String {
    frame(
        board
            .iter_rows()
            .map(|row| row.map(|(_, state)| state.glyph())),
    )
}

/// Render the grid frame, asking `glyph` what to draw at each coordinate.
pub fn render_with(mut glyph: impl FnMut(Coordinate) -> char) -> String {
    frame(iter_coordinates().map(|row| row.map(&mut glyph).collect::<Vec<_>>()))
}

/// Draw rows of glyphs inside the box frame.
fn frame<R>(rows: impl Iterator<Item = R>) -> String
where
    R: IntoIterator<Item = char>,
{
    let mut out = String::new();
    border(&mut out, '┌', '┬', '┐');
    out.push('\n');
    for (i, row) in rows.enumerate() {
        out.push('│');
        for glyph in row {
            out.push(' ');
            out.push(glyph);
            out.push(' ');
            out.push('│');
        }
        out.push('\n');
        if i + 1 < GRID_SIZE {
            border(&mut out, '├', '┼', '┤');
            out.push('\n');
        }
    }
    border(&mut out, '└', '┴', '┘');
    out
}

/// Push a horizontal rule with the given corner and junction characters.
fn border(out: &mut String, left: char, junction: char, right: char) {
    out.push(left);
    for i in 0..GRID_SIZE {
        out.push_str("───");
        out.push(if i + 1 < GRID_SIZE { junction } else { right });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Board {
        Board::new(vec![
            ((0, 0), (0, 0)),
            ((2, 0), (2, 0)),
            ((4, 0), (4, 3)),
            ((6, 0), (7, 0)),
            ((9, 0), (9, 0)),
            ((0, 2), (0, 2)),
            ((9, 4), (9, 5)),
            ((0, 4), (1, 4)),
            ((0, 6), (0, 8)),
            ((2, 6), (2, 8)),
        ])
        .unwrap()
    }

    fn count(s: &str, c: char) -> usize {
        s.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn frame_shape() {
        let out = render_with(|_| WATER);
        let lines: Vec<&str> = out.lines().collect();
        // Top border, 10 rows, 9 separators, bottom border.
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], format!("┌{}───┐", "───┬".repeat(9)));
        assert_eq!(lines[1], format!("│{}", " ~ │".repeat(10)));
        assert_eq!(lines[2], format!("├{}───┤", "───┼".repeat(9)));
        assert_eq!(lines[20], format!("└{}───┘", "───┴".repeat(9)));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn fresh_board() {
        let out = render(&reference());
        assert_eq!(count(&out, INTACT), 20);
        assert_eq!(count(&out, WATER), 80);
        assert_eq!(count(&out, HIT), 0);
        assert_eq!(count(&out, SUNK), 0);
    }

    #[test]
    fn hits_and_sunk_ships() {
        let mut board = reference();
        board.fire((4, 0));
        board.fire((6, 0));
        board.fire((7, 0));
        let out = board.to_string();
        assert_eq!(count(&out, HIT), 1);
        assert_eq!(count(&out, SUNK), 2);
        assert_eq!(count(&out, INTACT), 17);
        let row_six = out.lines().nth(1 + 2 * 6).unwrap();
        assert!(row_six.starts_with("│ x │ ~ │"));
    }

    #[test]
    fn board_rows_match_per_coordinate_glyphs() {
        let mut board = reference();
        board.fire((0, 4));
        board.fire((9, 0));
        let by_coord = render_with(|coord| board.cell_state(coord).glyph());
        assert_eq!(render(&board), by_coord);
    }

    #[test]
    fn render_does_not_mutate() {
        let board = reference();
        let before = render(&board);
        let _ = render(&board);
        assert_eq!(render(&board), before);
        assert_eq!(board.remaining(), 10);
    }
}
