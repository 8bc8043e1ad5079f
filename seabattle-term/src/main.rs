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
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use anyhow::anyhow;
use clap::{value_t, App, Arg, ArgMatches};
use log::debug;
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use regex::Regex;

use seabattle::{
    config::{DEFAULT_BOARD_COUNT, DEFAULT_BOARD_SIZE},
    model::GameError,
    CellLocation, Document, GameConfig, GameEvent, ShotResult,
};

mod logging;

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let default_count = DEFAULT_BOARD_COUNT.to_string();
    let default_size = DEFAULT_BOARD_SIZE.to_string();
    let matches = App::new("Sea Battle")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Click-style battleship in the terminal.")
        .arg(
            Arg::with_name("boards")
                .short("b")
                .long("boards")
                .value_name("COUNT")
                .help("number of boards to play on")
                .takes_value(true)
                .possible_values(&["1", "2"])
                .default_value(&default_count),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of each board")
                .takes_value(true)
                .default_value(&default_size),
        )
        .get_matches();

    let config = read_config(&matches);

    let document = Rc::new(RefCell::new(Document::new()));
    let container = document.borrow().root();
    let game = seabattle::launch(document, container, &config)?;
    game.add_observer(Rc::new(announce));

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    println!("{}", game.render()?);
    println!("Type help or ? for commands.");
    while !game.model().is_over() {
        let cmd = match read_command(&mut input, config.board_count)? {
            Some(cmd) => cmd,
            None => break,
        };
        let location = match cmd {
            Command::Quit => break,
            Command::Show => {
                println!("{}", game.render()?);
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Fire(location) => location,
            Command::Random(board) => match random_target(&game, board, &mut rng) {
                Ok(location) => location,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            },
        };
        // Go through the cell's element so the shot takes the same path as a click.
        let outcome = game
            .cell_element(location.board_number, location.row, location.column)
            .and_then(|node| game.click(node));
        match outcome {
            Ok(Some(ShotResult::Hit)) => println!("{}: hit!", location),
            Ok(Some(ShotResult::Miss)) => println!("{}: miss.", location),
            Ok(None) => println!("{} was already shot.", location),
            // The shot stays applied when an observer fails.
            Err(seabattle::Error::Game(GameError::Observer(err))) => {
                println!("{}: shot applied, but {}", location, err)
            }
            Err(err) => {
                println!("error: {}", err);
                continue;
            }
        }
        println!("{}", game.render()?);
    }
    if game.model().is_over() {
        println!("All ships sunk. Game over!");
    }
    Ok(())
}

/// Build the game configuration from the command line.
fn read_config(matches: &ArgMatches) -> GameConfig {
    let board_count = value_t!(matches, "boards", usize).unwrap_or_else(|e| e.exit());
    let board_size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    GameConfig {
        board_count,
        board_size,
        ..GameConfig::default()
    }
}

/// Print sinkings and cleared boards as they happen.
fn announce(event: &GameEvent) -> anyhow::Result<()> {
    match event {
        GameEvent::ShipSunk { board_number, ship } => {
            println!("Board {}: {} sunk!", board_number, ship);
        }
        GameEvent::BoardDefeated { board_number } => {
            println!("Board {}: every ship is sunk.", board_number);
        }
        _ => {}
    }
    Ok(())
}

/// Pick a random cell that has not been shot. Without an explicit board, uses the first
/// board that still has ships afloat.
fn random_target(
    game: &seabattle::App,
    board: Option<usize>,
    rng: &mut impl Rng,
) -> anyhow::Result<CellLocation> {
    let model = game.model();
    let board_number = match board {
        Some(n) => n,
        None => model
            .boards()
            .position(|board| !board.is_defeated())
            .unwrap_or(0),
    };
    let board = model
        .board(board_number)
        .ok_or_else(|| anyhow!("there is no board {}", board_number))?;
    let unused: Vec<_> = board.unused_cells().collect();
    let coord = unused
        .choose(rng)
        .ok_or_else(|| anyhow!("every cell of board {} has been shot", board_number))?;
    debug!("random shot picked {} on board {}", coord, board_number);
    Ok(CellLocation::new(board_number, coord.row, coord.column))
}

/// Commands accepted at the prompt.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    Fire(CellLocation),
    Random(Option<usize>),
    Show,
    Help,
    Quit,
}

/// Read one command. Returns `None` at end of input.
fn read_command<B: BufRead>(
    input: &mut InputReader<B>,
    board_count: usize,
) -> io::Result<Option<Command>> {
    input.read_input_lower("> ", |input| match parse_command(input, board_count) {
        Ok(cmd) => Some(cmd),
        Err(msg) => {
            println!("{}", msg);
            None
        }
    })
}

/// Parse a trimmed, lowercase command line. On failure, returns the message to show the
/// player.
fn parse_command(input: &str, board_count: usize) -> Result<Command, String> {
    /// Matcher for shots: `[fire] [board] row column`.
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:fire|shoot|f)\s+)?
        (?:(?P<board>[0-9]+)\s+)?
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$",
        )
        .unwrap()
    });
    static RANDOM: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?x)(?:random|rand|r)(?:\s+(?P<board>[0-9]+))?$").unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "show" | "board" | "s" => Ok(Command::Show),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => {
            if let Some(captures) = RANDOM.captures(other) {
                let board = captures
                    .name("board")
                    .map(|m| parse_board(m.as_str(), board_count))
                    .transpose()?;
                Ok(Command::Random(board))
            } else if let Some(captures) = FIRE.captures(other) {
                let board = match captures.name("board") {
                    None if board_count > 1 => {
                        return Err(format!(
                            "Specify a board number in range [0,{}].",
                            board_count - 1
                        ))
                    }
                    None => 0,
                    Some(m) => parse_board(m.as_str(), board_count)?,
                };
                let number = |name: &str| {
                    captures
                        .name(name)
                        .and_then(|m| m.as_str().parse::<usize>().ok())
                };
                match (number("row"), number("column")) {
                    (Some(row), Some(column)) => {
                        Ok(Command::Fire(CellLocation::new(board, row, column)))
                    }
                    _ => Err("Row and column are out of range.".to_string()),
                }
            } else {
                Err(format!("Invalid command \"{}\". Use '?' for help", other))
            }
        }
    }
}

/// Parse a board number, which must name one of the game's boards.
fn parse_board(text: &str, board_count: usize) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(board) if board < board_count => Ok(board),
        _ => Err(format!(
            "Board number {} is out of range [0,{}].",
            text,
            board_count.saturating_sub(1)
        )),
    }
}

fn print_help() {
    println!(
        "Available Commands:
    [fire] [board] <row> <col>  shoot at a cell. The board may be omitted with one board.
    random [board]              shoot at a random cell that has not been shot yet.
    show                        print the boards.
    help                        show this message.
    quit                        leave the game.

Cells show X for a hit and . for a miss."
    );
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
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_on_a_single_board() {
        let expected = Ok(Command::Fire(CellLocation::single(3, 4)));
        assert_eq!(parse_command("3 4", 1), expected);
        assert_eq!(parse_command("3,4", 1), expected);
        assert_eq!(parse_command("3 , 4", 1), expected);
        assert_eq!(parse_command("fire 3 4", 1), expected);
        assert_eq!(parse_command("f 3,4", 1), expected);
        assert_eq!(parse_command("shoot 0 3 4", 1), expected);
    }

    #[test]
    fn two_boards_require_a_board_number() {
        assert_eq!(
            parse_command("1 3 4", 2),
            Ok(Command::Fire(CellLocation::new(1, 3, 4)))
        );
        assert_eq!(
            parse_command("fire 0 3,4", 2),
            Ok(Command::Fire(CellLocation::new(0, 3, 4)))
        );
        assert_eq!(
            parse_command("3 4", 2),
            Err("Specify a board number in range [0,1].".to_string())
        );
    }

    #[test]
    fn bad_board_numbers_are_reported() {
        assert!(parse_command("2 3 4", 2).is_err());
        assert!(parse_command("99999999999999999999999 0 0", 2)
            .unwrap_err()
            .starts_with("Board number 99999999999999999999999"));
        assert!(parse_command("random 5", 2).is_err());
    }

    #[test]
    fn oversized_cells_are_reported() {
        assert_eq!(
            parse_command("0 99999999999999999999999 0", 2),
            Err("Row and column are out of range.".to_string())
        );
    }

    #[test]
    fn random_with_and_without_board() {
        assert_eq!(parse_command("random", 2), Ok(Command::Random(None)));
        assert_eq!(parse_command("r", 1), Ok(Command::Random(None)));
        assert_eq!(parse_command("rand 1", 2), Ok(Command::Random(Some(1))));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_command("?", 1), Ok(Command::Help));
        assert_eq!(parse_command("help", 1), Ok(Command::Help));
        assert_eq!(parse_command("show", 1), Ok(Command::Show));
        assert_eq!(parse_command("s", 1), Ok(Command::Show));
        assert_eq!(parse_command("quit", 1), Ok(Command::Quit));
        assert_eq!(parse_command("exit", 1), Ok(Command::Quit));
    }

    #[test]
    fn invalid_input() {
        for input in &["", "fire", "fire 1", "1 2 3 4", "launch 1 2", "random a"] {
            assert!(parse_command(input, 1).is_err(), "accepted {:?}", input);
        }
    }
}
