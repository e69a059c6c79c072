use thiserror::Error;

pub mod game;
pub mod layout;
pub mod puzzle;
pub mod render;
pub mod selection;

pub use game::{Game, GameState};
pub use puzzle::{Cell, Placement, Puzzle, PuzzleGrid};
pub use selection::cells_in_line;

// The words hidden in every new puzzle (theme: space exploration)
pub const WORDS_TO_FIND: [&str; 13] = [
    "PLANET", "STAR", "GALAXY", "NEBULA", "COSMOS", "ROCKET", "ORBIT",
    "ASTEROID", "COMET", "ALIEN", "SATURN", "JUPITER", "VENUS",
];

pub const DEFAULT_SIZE: usize = 15;
pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 60;
pub const DEFAULT_MAXTRIES: usize = 100;

// Config - configuration based on command line arguments
//
//   --size N   width and height of the square grid
//   --seed N   seed the letter generator for a reproducible puzzle
//   --tries N  random placement attempts per word before it is dropped
//
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub maxtries: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config { size: DEFAULT_SIZE, maxtries: DEFAULT_MAXTRIES, seed: None }
    }
}

impl Config {
    pub fn new<I>(mut args: I) -> Result<Config, PuzzleError>
    where
        I: Iterator<Item = String>,
    {
        // move past program invocation
        args.next();

        let mut config = Config::default();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--size" => config.size = parse_value(&flag, args.next())?,
                "--seed" => config.seed = Some(parse_value(&flag, args.next())?),
                "--tries" => config.maxtries = parse_value(&flag, args.next())?,
                _ => return Err(PuzzleError::UnknownFlag(flag.clone())),
            }
        }

        if config.size < MIN_SIZE {
            return Err(PuzzleError::GridTooSmall { size: config.size, min: MIN_SIZE });
        }
        if config.size > MAX_SIZE {
            return Err(PuzzleError::GridTooLarge { size: config.size, max: MAX_SIZE });
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, PuzzleError> {
    let value = value.ok_or_else(|| PuzzleError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| PuzzleError::InvalidNumber { flag: flag.to_string(), value })
}

// PuzzleError - everything that can go wrong before the window opens
//
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("{0} needs a value")]
    MissingValue(String),
    #[error("{value} is not a valid number for {flag}")]
    InvalidNumber { flag: String, value: String },
    #[error("a {size} x {size} grid is too small, the minimum is {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("a {size} x {size} grid is too large, the maximum is {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("unknown option {0}")]
    UnknownFlag(String),
}

// Direction - The 8 possible directions in which a word can run through the puzzle
//
// Clone and Copy are derived so that move isn't the default action when using assignment
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    // The row and column increment values associated with each direction
    pub fn incrementors(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::UpRight => (-1, 1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (0, -1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }

    // The direction of a row/column delta, if it lies on one of the 8 lines
    pub fn from_delta(drow: isize, dcol: isize) -> Option<Direction> {
        if (drow == 0 && dcol == 0) || !(drow == 0 || dcol == 0 || drow.abs() == dcol.abs()) {
            return None;
        }
        let step = (drow.signum(), dcol.signum());
        Direction::ALL.iter().copied().find(|d| d.incrementors() == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("wordsearch".to_string())
            .chain(list.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn dir_incrementors_work() {
        let mut dir = Direction::Right;
        assert_eq!(dir.incrementors(), (0, 1));
        dir = Direction::UpRight;
        assert_eq!(dir.incrementors(), (-1, 1));
    }

    #[test]
    fn from_delta_finds_compass_directions() {
        assert_eq!(Direction::from_delta(0, 7), Some(Direction::Right));
        assert_eq!(Direction::from_delta(-3, -3), Some(Direction::UpLeft));
        assert_eq!(Direction::from_delta(4, 0), Some(Direction::Down));
        assert_eq!(Direction::from_delta(2, -2), Some(Direction::DownLeft));
        assert_eq!(Direction::from_delta(1, 2), None);
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn config_defaults() {
        let config = Config::new(args(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.size, 15);
        assert_eq!(config.maxtries, 100);
    }

    #[test]
    fn config_reads_flags() {
        let config = Config::new(args(&["--size", "10", "--seed", "42", "--tries", "500"])).unwrap();
        assert_eq!(config, Config { size: 10, maxtries: 500, seed: Some(42) });
    }

    #[test]
    fn config_rejects_bad_input() {
        assert_eq!(
            Config::new(args(&["--size"])),
            Err(PuzzleError::MissingValue("--size".to_string()))
        );
        assert_eq!(
            Config::new(args(&["--seed", "abc"])),
            Err(PuzzleError::InvalidNumber { flag: "--seed".to_string(), value: "abc".to_string() })
        );
        assert_eq!(
            Config::new(args(&["--size", "3"])),
            Err(PuzzleError::GridTooSmall { size: 3, min: 4 })
        );
        assert_eq!(
            Config::new(args(&["--size", "100000"])),
            Err(PuzzleError::GridTooLarge { size: 100000, max: 60 })
        );
        assert_eq!(Config::new(args(&["--size", "60"])).map(|c| c.size), Ok(60));
        assert_eq!(
            Config::new(args(&["--hard"])),
            Err(PuzzleError::UnknownFlag("--hard".to_string()))
        );
    }
}
