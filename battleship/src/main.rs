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
use std::{
    collections::HashSet,
    fs,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use seabattle::{
    board::FLEET_SIZE,
    fleet::random_fleet,
    render::{self, HIT, SUNK, WATER},
    Board, CellState, Coordinate, FireOutcome, Placement,
};

/// Glyph for a shot that landed in open water, only shown in the hidden view.
const MISS: char = 'o';

/// Matches a placement: `r,c r,c`, optionally with `to` or `-` between the ends.
static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place\s+)?
        (?P<r1>[0-9]+)\s*,\s*(?P<c1>[0-9]+)\s*
        (?:(?:to|->|-)\s*)?
        (?P<r2>[0-9]+)\s*,\s*(?P<c2>[0-9]+)$",
    )
    .expect("placement pattern is valid")
});

/// Matches a shot: `fire r,c`, or just `r,c`.
static FIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:(?:fire|shoot|f)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$",
    )
    .expect("fire pattern is valid")
});

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single player command line battleship: lay out a fleet, then sink it.")
        .arg(
            Arg::with_name("layout")
                .short("l")
                .long("layout")
                .value_name("FILE")
                .help("read the fleet from a file, one \"r,c r,c\" placement per line")
                .takes_value(true)
                .conflicts_with("random"),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("generate a random fleet"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random fleet, for reproducible games")
                .takes_value(true)
                .requires("random"),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show intact ships while playing"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("increase log verbosity"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let mut board = match choose_board(&matches, &mut input)? {
        Some(board) => board,
        None => std::process::exit(1),
    };
    play(&mut board, matches.is_present("reveal"), &mut input)
}

/// Install the tracing subscriber. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the board from a layout file, a random fleet, or interactive input. Returns
/// `None` if the layout file was unusable.
fn choose_board<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Option<Board>> {
    if let Some(path) = matches.value_of("layout") {
        let text = fs::read_to_string(path)?;
        let placements = match parse_layout(&text) {
            Ok(placements) => placements,
            Err(line) => {
                eprintln!("{}: invalid placement on line {}", path, line);
                return Ok(None);
            }
        };
        info!(path, ships = placements.len(), "loaded layout");
        return Ok(match Board::new(placements) {
            Ok(board) => Some(board),
            Err(err) => {
                eprintln!("{}: {}", path, err);
                None
            }
        });
    }
    if matches.is_present("random") {
        let mut rng = match matches.value_of("seed") {
            Some(seed) => match seed.parse() {
                Ok(seed) => {
                    println!("Using fixed seed: {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                Err(_) => {
                    eprintln!("invalid seed: {}, must be an unsigned integer", seed);
                    return Ok(None);
                }
            },
            None => StdRng::from_entropy(),
        };
        return Ok(Some(random_board(&mut rng)));
    }
    choose_placements(input).map(Some)
}

/// Generate a random board, retrying if a generated fleet is ever rejected.
fn random_board(rng: &mut StdRng) -> Board {
    loop {
        match Board::new(random_fleet(rng)) {
            Ok(board) => return board,
            Err(err) => debug!(error = %err, "discarding generated fleet"),
        }
    }
}

/// Choose placements for all ships using input from the player. Re-prompts until the
/// fleet is valid.
fn choose_placements<B: BufRead>(input: &mut InputReader<B>) -> io::Result<Board> {
    enum Command {
        Place(Placement),
        Undo,
        Clear,
        Random,
        Help,
    }
    println!();
    println!("Lay out your fleet. Type help or ? for commands.");
    let mut placements: Vec<Placement> = Vec::with_capacity(FLEET_SIZE);
    loop {
        if placements.len() == FLEET_SIZE {
            match Board::new(placements.iter().copied()) {
                Ok(board) => return Ok(board),
                Err(err) => {
                    println!("Invalid fleet: {}.", err);
                    println!("Starting over.");
                    placements.clear();
                }
            }
        }
        println!();
        println!(
            "Ships placed: {}/{}. Need 4 single-deck, 3 double-deck, 2 three-deck and 1 four-deck.",
            placements.len(),
            FLEET_SIZE
        );

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::Random),
            "undo" => Some(Command::Undo),
            "clear" => Some(Command::Clear),
            other => match parse_placement(other) {
                Some(placement) => Some(Command::Place(placement)),
                None => {
                    println!(
                        "Invalid placement \"{}\": use \"row,column row,column\" with values in [0,9]. Use '?' for help",
                        other
                    );
                    None
                }
            },
        })?;

        match cmd {
            Command::Place(placement) => match placement.check() {
                Ok(()) => placements.push(placement),
                Err(reason) => println!("Invalid placement {}: {}.", placement, reason),
            },
            Command::Undo => {
                placements.pop();
            }
            Command::Clear => placements.clear(),
            Command::Random => return Ok(random_board(&mut StdRng::from_entropy())),
            Command::Help => {
                println!(
                    "Available Commands:
    <r>,<c> <r>,<c>     place a ship from the first cell to the second, inclusive.
        Ships are a single row or column; a single-deck ship repeats its cell.
    undo                remove the last placement.
    clear               remove all placements.
    random              lay out a random fleet instead.

Ships may not touch each other, not even diagonally."
                );
            }
        }
    }
}

/// Fire at the board until every ship is sunk.
fn play<B: BufRead>(
    board: &mut Board,
    reveal: bool,
    input: &mut InputReader<B>,
) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Show,
        Help,
        Quit,
    }
    let mut shots: HashSet<Coordinate> = HashSet::new();
    let mut fired = 0usize;
    println!();
    println!("Fleet ready. Type help or ? for commands.");
    while !board.defeated() {
        println!();
        show_board(board, &shots, reveal);
        println!("Ships remaining: {}", board.remaining());

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "show" | "reveal" => Some(Command::Show),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => match parse_coordinate(other) {
                Some(coord) => Some(Command::Fire(coord)),
                None => {
                    println!(
                        "Invalid shot \"{}\": use \"fire row,column\" with values in [0,9]. Use '?' for help",
                        other
                    );
                    None
                }
            },
        })?;

        match cmd {
            Command::Fire(coord) => {
                fired += 1;
                shots.insert(coord);
                let outcome = board.fire(coord);
                println!("{}", outcome);
                if let Some(report) = shot_report(board, coord, outcome) {
                    println!("{}", report);
                }
            }
            Command::Show => {
                println!("{}", board);
            }
            Command::Quit => return Ok(()),
            Command::Help => {
                println!(
                    "Available Commands:
    fire <r>,<c>    fire at the given cell; \"fire\" may be left out.
    show            print the fully revealed board.
    quit            leave the game."
                );
            }
        }
    }
    println!();
    println!("{}", board);
    println!("All ships sunk in {} shots.", fired);
    Ok(())
}

/// Describe the ship a shot landed on: how many decks are hit, or which class sank.
fn shot_report(board: &Board, coord: Coordinate, outcome: FireOutcome) -> Option<String> {
    let ship = board.get_ship(coord)?;
    match outcome {
        FireOutcome::Miss => None,
        FireOutcome::Hit => {
            debug!(%coord, hits = ship.hits(), decks = ship.len(), "ship hit");
            Some(format!("{} of {} decks hit.", ship.hits(), ship.len()))
        }
        FireOutcome::Sunk => {
            info!(%coord, remaining = board.remaining(), "ship sunk");
            let class = ship.class()?;
            Some(format!("You sank a {} ship.", class))
        }
    }
}

/// Print the board as the player sees it. Unless `reveal` is set, intact decks are
/// hidden and shots into open water are marked.
fn show_board(board: &Board, shots: &HashSet<Coordinate>, reveal: bool) {
    let grid = render::render_with(|coord| match board.cell_state(coord) {
        CellState::Water if shots.contains(&coord) => MISS,
        CellState::Water => WATER,
        CellState::Intact if reveal => CellState::Intact.glyph(),
        CellState::Intact => WATER,
        CellState::Hit => HIT,
        CellState::Sunk => SUNK,
    });
    println!("{}", grid);
}

/// Parse a single `row,column` pair, rejecting values outside the grid.
fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let captures = FIRE.captures(input)?;
    let coord = Coordinate::new(
        captures["row"].parse().ok()?,
        captures["column"].parse().ok()?,
    );
    if coord.in_bounds() {
        Some(coord)
    } else {
        None
    }
}

/// Parse a `row,column row,column` placement, rejecting values outside the grid.
fn parse_placement(input: &str) -> Option<Placement> {
    let captures = PLACEMENT.captures(input)?;
    let start = Coordinate::new(captures["r1"].parse().ok()?, captures["c1"].parse().ok()?);
    let end = Coordinate::new(captures["r2"].parse().ok()?, captures["c2"].parse().ok()?);
    if start.in_bounds() && end.in_bounds() {
        Some(Placement::new(start, end))
    } else {
        None
    }
}

/// Parse a layout file. Blank lines and `#` comments are skipped. On failure returns the
/// 1-based number of the offending line.
fn parse_layout(text: &str) -> Result<Vec<Placement>, usize> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| parse_placement(&line.to_ascii_lowercase()).ok_or(n))
        .collect()
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shots() {
        assert_eq!(parse_coordinate("fire 4,0"), Some(Coordinate::new(4, 0)));
        assert_eq!(parse_coordinate("4, 3"), Some(Coordinate::new(4, 3)));
        assert_eq!(parse_coordinate("f 9 9"), Some(Coordinate::new(9, 9)));
        assert_eq!(parse_coordinate("fire 10,0"), None);
        assert_eq!(parse_coordinate("fire a,b"), None);
    }

    #[test]
    fn parses_placements() {
        assert_eq!(
            parse_placement("4,0 4,3"),
            Some(Placement::new((4, 0), (4, 3)))
        );
        assert_eq!(
            parse_placement("place 0,6 to 0,8"),
            Some(Placement::new((0, 6), (0, 8)))
        );
        assert_eq!(
            parse_placement("6,0-7,0"),
            Some(Placement::new((6, 0), (7, 0)))
        );
        assert_eq!(parse_placement("0,0 0,10"), None);
        assert_eq!(parse_placement("0,0"), None);
    }

    #[test]
    fn parses_layout_files() {
        let text = "# reference fleet\n\
                    0,0 0,0\n\
                    2,0 2,0\n\
                    4,0 4,3   # four-deck\n\
                    \n\
                    6,0 7,0\n\
                    9,0 9,0\n\
                    0,2 0,2\n\
                    9,4 9,5\n\
                    0,4 1,4\n\
                    0,6 0,8\n\
                    2,6 2,8\n";
        let placements = parse_layout(text).unwrap();
        assert_eq!(placements, seabattle::fleet::standard_fleet());
        assert!(Board::new(placements).is_ok());
    }

    #[test]
    fn reports_shot_details() {
        let mut board = Board::new(seabattle::fleet::standard_fleet()).unwrap();
        let coord = Coordinate::new(6, 0);
        let outcome = board.fire(coord);
        assert_eq!(
            shot_report(&board, coord, outcome),
            Some("1 of 2 decks hit.".to_string())
        );
        let coord = Coordinate::new(7, 0);
        let outcome = board.fire(coord);
        assert_eq!(outcome, FireOutcome::Sunk);
        assert_eq!(
            shot_report(&board, coord, outcome),
            Some("You sank a double-deck ship.".to_string())
        );
        let coord = Coordinate::new(5, 5);
        let outcome = board.fire(coord);
        assert_eq!(shot_report(&board, coord, outcome), None);
    }

    #[test]
    fn reports_bad_layout_line() {
        assert_eq!(parse_layout("0,0 0,0\nnonsense\n"), Err(2));
    }
}
