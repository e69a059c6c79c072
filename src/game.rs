use log::info;

use crate::puzzle::{Cell, Placement, Puzzle};
use crate::selection::cells_in_line;

/// Where the player is in the press / drag / release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Selecting { start: Cell, end: Cell },
    /// Every placed word has been found. Only quitting is left.
    Won,
}

/// The puzzle together with the player's progress through it.
pub struct Game {
    puzzle: Puzzle,
    state: GameState,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Game {
        Game { puzzle, state: GameState::Idle }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn placements(&self) -> &[Placement] {
        self.puzzle.placements()
    }

    // press - the mouse button went down; `cell` is None outside the grid
    //
    // A press while still selecting means the release was missed, so the drag starts over.
    pub fn press(&mut self, cell: Option<Cell>) {
        if let (GameState::Idle | GameState::Selecting { .. }, Some(cell)) = (self.state, cell) {
            self.state = GameState::Selecting { start: cell, end: cell };
        }
    }

    // drag - the mouse moved while the button is held; leaving the grid keeps the last end cell
    pub fn drag(&mut self, cell: Option<Cell>) {
        if let (GameState::Selecting { start, .. }, Some(end)) = (self.state, cell) {
            self.state = GameState::Selecting { start, end };
        }
    }

    /// The mouse button was released. Checks the selection against the word
    /// list and returns the word that was found, if any.
    pub fn release(&mut self) -> Option<String> {
        let (start, end) = match self.state {
            GameState::Selecting { start, end } => (start, end),
            _ => return None,
        };
        self.state = GameState::Idle;

        let selected = self.puzzle.word_at(&cells_in_line(start, end));
        let found = self.check_match(&selected)?;
        info!("found {}", found);
        Some(found)
    }

    /// The cells currently highlighted by the drag, empty when not selecting.
    pub fn selection(&self) -> Vec<Cell> {
        match self.state {
            GameState::Selecting { start, end } => cells_in_line(start, end),
            _ => Vec::new(),
        }
    }

    // check_match - marks the first unfound word equal to `selected`, or to it reversed
    pub fn check_match(&mut self, selected: &str) -> Option<String> {
        if selected.is_empty() {
            return None;
        }
        let reversed: String = selected.chars().rev().collect();
        let placements = self.puzzle.placements_mut();

        let idx = placements
            .iter()
            .position(|p| !p.found && p.word == selected)
            .or_else(|| placements.iter().position(|p| !p.found && p.word == reversed))?;
        placements[idx].found = true;
        Some(placements[idx].word.clone())
    }

    /// Called once per tick. Moves to `Won` when every placement has been
    /// found and reports whether that just happened.
    pub fn update(&mut self) -> bool {
        if self.is_won() || !self.placements().iter().all(|p| p.found) {
            return false;
        }
        self.state = GameState::Won;
        info!("all {} words found", self.placements().len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(words: &[&str]) -> Game {
        let mut rng = StdRng::seed_from_u64(5);
        Game::new(Puzzle::generate(words, 10, 100, &mut rng))
    }

    fn placement(game: &Game, word: &str) -> Placement {
        game.placements().iter().find(|p| p.word == word).cloned().unwrap()
    }

    #[test]
    fn dragging_over_a_word_finds_it() {
        let mut game = game(&["COMET", "ORBIT"]);
        let comet = placement(&game, "COMET");

        game.press(Some(comet.start));
        game.drag(Some(comet.end));
        assert_eq!(game.selection(), comet.cells());
        assert_eq!(game.release(), Some("COMET".to_string()));
        assert_eq!(game.state(), GameState::Idle);
        assert!(placement(&game, "COMET").found);
        assert!(!placement(&game, "ORBIT").found);
    }

    #[test]
    fn words_can_be_selected_backwards() {
        let mut game = game(&["VENUS"]);
        let venus = placement(&game, "VENUS");

        game.press(Some(venus.end));
        game.drag(Some(venus.start));
        assert_eq!(game.release(), Some("VENUS".to_string()));
    }

    #[test]
    fn found_words_do_not_match_twice() {
        let mut game = game(&["STAR"]);
        assert_eq!(game.check_match("STAR"), Some("STAR".to_string()));
        assert_eq!(game.check_match("STAR"), None);
        assert_eq!(game.check_match("RATS"), None);
    }

    #[test]
    fn partial_selections_do_not_count() {
        let mut game = game(&["PLANET"]);
        assert_eq!(game.check_match("PLANE"), None);
        assert_eq!(game.check_match("PLANETS"), None);
        assert_eq!(game.check_match(""), None);
        assert!(!placement(&game, "PLANET").found);
    }

    #[test]
    fn press_outside_the_grid_is_ignored() {
        let mut game = game(&["ALIEN"]);
        game.press(None);
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.release(), None);
        assert!(game.selection().is_empty());
    }

    #[test]
    fn dragging_off_the_grid_keeps_the_last_cell() {
        let mut game = game(&["ALIEN"]);
        game.press(Some(Cell::new(0, 0)));
        game.drag(Some(Cell::new(0, 3)));
        game.drag(None);
        assert_eq!(
            game.state(),
            GameState::Selecting { start: Cell::new(0, 0), end: Cell::new(0, 3) }
        );
        assert_eq!(game.selection().len(), 4);
    }

    #[test]
    fn press_without_release_starts_a_new_drag() {
        let mut game = game(&["ALIEN"]);
        game.press(Some(Cell::new(0, 0)));
        game.drag(Some(Cell::new(0, 4)));
        game.press(Some(Cell::new(3, 3)));
        assert_eq!(
            game.state(),
            GameState::Selecting { start: Cell::new(3, 3), end: Cell::new(3, 3) }
        );
        assert_eq!(game.selection(), vec![Cell::new(3, 3)]);

        // a press off the grid leaves the drag alone
        game.press(None);
        assert_eq!(
            game.state(),
            GameState::Selecting { start: Cell::new(3, 3), end: Cell::new(3, 3) }
        );
    }

    #[test]
    fn crooked_drag_selects_nothing() {
        let mut game = game(&["ALIEN"]);
        game.press(Some(Cell::new(0, 0)));
        game.drag(Some(Cell::new(1, 3)));
        assert!(game.selection().is_empty());
        assert_eq!(game.release(), None);
    }

    #[test]
    fn win_when_every_word_is_found() {
        let mut game = game(&["SATURN", "ROCKET"]);
        assert!(!game.update());
        game.check_match("SATURN");
        assert!(!game.update());
        assert!(!game.is_won());
        game.check_match("TEKCOR");
        assert!(game.update());
        assert!(game.is_won());
        assert!(!game.update());

        // input is ignored once won
        game.press(Some(Cell::new(0, 0)));
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn no_words_placed_is_an_instant_win() {
        let mut game = game(&["THISWORDISTOOLONG"]);
        assert!(game.placements().is_empty());
        assert!(game.update());
    }
}
