use macroquad::prelude::*;

use crate::game::Game;
use crate::layout::{BoardLayout, SCREEN_HEIGHT, SCREEN_WIDTH, UI_WIDTH};
use crate::puzzle::Cell;

/// Immediate-mode drawing of one frame. Holds no state of its own.
pub struct Renderer;

impl Renderer {
    // Colors - the "Cosmic Neon" theme, 0-255 rgb(a) noted alongside
    //
    const BACKGROUND: Color = Color::new(0.020, 0.039, 0.078, 1.0);     // 5,10,20
    const GRID_LINES: Color = Color::new(0.157, 0.235, 0.314, 1.0);     // 40,60,80
    const LETTER: Color = Color::new(0.784, 0.863, 1.0, 1.0);           // 200,220,255
    const WORD_LIST: Color = Color::new(0.863, 0.863, 0.863, 1.0);      // 220,220,220
    const HIGHLIGHT: Color = Color::new(0.0, 0.588, 1.0, 0.392);        // 0,150,255,100
    const FOUND: Color = Color::new(0.0, 1.0, 0.588, 0.588);            // 0,255,150,150
    const TITLE: Color = Color::new(0.0, 1.0, 0.588, 1.0);              // 0,255,150
    const STRIKETHROUGH: Color = Color::new(1.0, 0.196, 0.196, 1.0);    // 255,50,50
    const PANEL_BG: Color = Color::new(0.039, 0.078, 0.157, 1.0);       // 10,20,40
    const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.706);        // 0,0,0,180

    const LETTER_SIZE: f32 = 28.0;
    const UI_SIZE: f32 = 24.0;
    const TITLE_SIZE: f32 = 34.0;
    const WIN_SIZE: f32 = 80.0;

    pub fn draw_frame(game: &Game, layout: &BoardLayout) {
        clear_background(Self::BACKGROUND);

        Self::draw_grid(game, layout);
        Self::draw_found_words(game, layout);
        Self::draw_selection(&game.selection(), layout);
        Self::draw_word_list(game);

        if game.is_won() {
            Self::draw_win_screen();
        }
    }

    fn draw_grid(game: &Game, layout: &BoardLayout) {
        let puzzle = game.puzzle();
        let letter_size = Self::LETTER_SIZE.min(layout.cell_size * 0.7);
        for row in 0..puzzle.size() {
            for col in 0..puzzle.size() {
                let cell = Cell::new(row, col);
                let (x, y, w, h) = layout.cell_rect(cell);
                draw_rectangle_lines(x, y, w, h, 1.0, Self::GRID_LINES);
                if let Some(letter) = puzzle.letter(cell) {
                    let (cx, cy) = layout.cell_center(cell);
                    Self::draw_centered(&letter.to_string(), cx, cy, letter_size, Self::LETTER);
                }
            }
        }
    }

    // a thick translucent bar from the first letter to the last
    fn draw_found_words(game: &Game, layout: &BoardLayout) {
        let thickness = (layout.cell_size * 0.375).max(4.0);
        for placement in game.placements().iter().filter(|p| p.found) {
            let (x1, y1) = layout.cell_center(placement.start);
            let (x2, y2) = layout.cell_center(placement.end);
            draw_line(x1, y1, x2, y2, thickness, Self::FOUND);
        }
    }

    fn draw_selection(cells: &[Cell], layout: &BoardLayout) {
        for cell in cells {
            let (x, y, w, h) = layout.cell_rect(*cell);
            draw_rectangle(x, y, w, h, Self::HIGHLIGHT);
        }
    }

    fn draw_word_list(game: &Game) {
        let panel_x = SCREEN_WIDTH - UI_WIDTH;
        draw_rectangle(panel_x, 0.0, UI_WIDTH, SCREEN_HEIGHT, Self::PANEL_BG);
        draw_line(panel_x, 0.0, panel_x, SCREEN_HEIGHT, 3.0, Self::TITLE);

        draw_text("WORDS TO FIND", panel_x + 20.0, 55.0, Self::TITLE_SIZE, Self::TITLE);

        let mut y = 80.0;
        for placement in game.placements() {
            let color = if placement.found { Self::STRIKETHROUGH } else { Self::WORD_LIST };
            let dims = draw_text(&placement.word, panel_x + 30.0, y + 20.0, Self::UI_SIZE, color);
            if placement.found {
                let mid = y + 20.0 - dims.offset_y / 2.0;
                draw_line(panel_x + 25.0, mid, panel_x + 35.0 + dims.width, mid, 3.0, color);
            }
            y += 30.0;
        }
    }

    fn draw_win_screen() {
        draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, Self::OVERLAY_DIM);
        let cx = SCREEN_WIDTH / 2.0;
        let cy = SCREEN_HEIGHT / 2.0;
        Self::draw_centered("YOU WIN!", cx, cy - 50.0, Self::WIN_SIZE, Self::TITLE);
        Self::draw_centered("Congratulations, Space Explorer!", cx, cy + 30.0, Self::UI_SIZE, Self::WORD_LIST);
    }

    fn draw_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        let x = cx - dims.width / 2.0;
        let y = cy - dims.height / 2.0 + dims.offset_y;
        draw_text(text, x, y, font_size, color);
    }
}
