use std::fmt;

use log::{debug, log_enabled, Level};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::selection::cells_in_line;
use crate::Direction;

const BLANK: char = ' ';
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A (row, column) coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
}

/// Where one target word sits in the grid and whether the player found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub end: Cell,
    pub found: bool,
}

impl Placement {
    /// Every cell the word covers, from its first letter to its last.
    pub fn cells(&self) -> Vec<Cell> {
        cells_in_line(self.start, self.end)
    }
}

// PuzzleGrid - holds the partially built grid while words are being placed
//
pub struct PuzzleGrid {
    grid: Vec<char>,
    size: usize,
    maxtries: usize,
    placements: Vec<Placement>,
}

impl PuzzleGrid {
    pub fn new(size: usize, maxtries: usize) -> PuzzleGrid {
        PuzzleGrid { grid: vec![BLANK; size * size], size, maxtries, placements: Vec::new() }
    }

    // place - attempts to randomly place the given word into the puzzle
    //
    // Returns false when every try collided or ran off the grid; the word is then left out.
    pub fn place<R: Rng>(&mut self, word: &str, rng: &mut R) -> bool {
        let mut sanitized_word = String::from(word);
        sanitized_word.make_ascii_uppercase();
        let letters: Vec<char> = sanitized_word.chars().collect();
        if self.size == 0 || letters.is_empty() || self.placements.iter().any(|p| p.word == sanitized_word) {
            return false;
        }
        // only A-Z can go in the grid
        if !letters.iter().all(|c| c.is_ascii_uppercase()) {
            debug!("{} has characters other than A-Z, leaving it out", sanitized_word);
            return false;
        }

        for _ in 0..self.maxtries {
            let start = Cell::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size));
            let dir = *Direction::ALL.choose(rng).unwrap_or(&Direction::Right);

            if let Some(path) = self.placement_valid(&letters, start, dir) {
                for (cell, letter) in path.iter().zip(&letters) {
                    let idx = self.index(*cell);
                    self.grid[idx] = *letter;
                }
                self.placements.push(Placement {
                    word: sanitized_word,
                    start,
                    end: path[path.len() - 1],
                    found: false,
                });
                return true;
            }
        }

        debug!("{} could not be placed in the puzzle", sanitized_word);
        false
    }

    // get_indeces - returns the cells the word would cover, or None if it runs off the grid
    pub fn get_indeces(&self, len: usize, start: Cell, dir: Direction) -> Option<Vec<Cell>> {
        let (row_inc, col_inc) = dir.incrementors();
        let mut cells = Vec::with_capacity(len);
        let mut row = start.row as isize;
        let mut col = start.col as isize;
        let size = self.size as isize;
        for _ in 0..len {
            if row < 0 || row >= size || col < 0 || col >= size {
                return None;
            }
            cells.push(Cell::new(row as usize, col as usize));
            row += row_inc;
            col += col_inc;
        }
        Some(cells)
    }

    // placement_valid - returns the path if the word fits at the given start and direction with no collisions
    fn placement_valid(&self, letters: &[char], start: Cell, dir: Direction) -> Option<Vec<Cell>> {
        let path = self.get_indeces(letters.len(), start, dir)?;

        // as long as the grid holds a blank or the matching letter there is no collision
        let clear = path.iter().zip(letters).all(|(cell, letter)| {
            let existing = self.grid[self.index(*cell)];
            existing == BLANK || existing == *letter
        });
        if clear { Some(path) } else { None }
    }

    // fill_in - locate all blank grid entries and fill with a random letter
    pub fn fill_in<R: Rng>(&mut self, rng: &mut R) {
        for letter in self.grid.iter_mut().filter(|l| **l == BLANK) {
            *letter = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
        }
    }

    pub fn into_puzzle(self) -> Puzzle {
        Puzzle { size: self.size, grid: self.grid, placements: self.placements }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }
}

/// A finished puzzle: an N×N letter grid plus the words hidden in it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    size: usize,
    grid: Vec<char>,
    placements: Vec<Placement>,
}

impl Puzzle {
    /// Places `words` longest-first and fills the rest of the grid with random letters.
    ///
    /// Words that cannot be placed within `maxtries` attempts are dropped, so
    /// `placements()` may be shorter than `words`.
    pub fn generate<S, R>(words: &[S], size: usize, maxtries: usize, rng: &mut R) -> Puzzle
    where
        S: AsRef<str>,
        R: Rng,
    {
        let mut sorted: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let mut puzzle = PuzzleGrid::new(size, maxtries);
        let dropped = sorted.iter().filter(|word| !puzzle.place(word, rng)).count();
        if log_enabled!(Level::Debug) {
            let key = Puzzle { size, grid: puzzle.grid.clone(), placements: Vec::new() };
            debug!("answer key:\n{}", key);
        }
        puzzle.fill_in(rng);

        let puzzle = puzzle.into_puzzle();
        debug!("placed {} words, dropped {}", puzzle.placements.len(), dropped);
        puzzle
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn letter(&self, cell: Cell) -> Option<char> {
        if cell.row < self.size && cell.col < self.size {
            Some(self.grid[cell.row * self.size + cell.col])
        } else {
            None
        }
    }

    /// The letters under `cells`, in order.
    pub fn word_at(&self, cells: &[Cell]) -> String {
        cells.iter().filter_map(|cell| self.letter(*cell)).collect()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placements_mut(&mut self) -> &mut [Placement] {
        &mut self.placements
    }
}

// rows of space separated letters, blanks printed as '.'
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.grid.chunks(self.size) {
            let line: Vec<String> = row
                .iter()
                .map(|c| if *c == BLANK { ".".to_string() } else { c.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
