use std::env;
use std::process;

use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use log::info;
use macroquad::prelude::*;

use wordsearch::layout::{BoardLayout, SCREEN_HEIGHT, SCREEN_WIDTH};
use wordsearch::render::Renderer;
use wordsearch::{Config, Game, Puzzle, WORDS_TO_FIND};

const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cosmic Word Search".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

// The main entry point to the program
// Reads the command line into a config struct, generates the puzzle,
// then runs the input / update / draw loop until the window is closed or Escape is pressed
//
#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::new(env::args()).unwrap_or_else(|err| {
        eprintln!("There is a problem with your command line: {}", err);
        process::exit(1);
    });
    info!("starting with {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = Puzzle::generate(&WORDS_TO_FIND, config.size, config.maxtries, &mut rng);
    info!("{} of {} words hidden", puzzle.placements().len(), WORDS_TO_FIND.len());

    let layout = BoardLayout::new(config.size);
    let mut game = Game::new(puzzle);

    loop {
        let frame_start = get_time();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if !game.is_won() {
            handle_mouse(&mut game, &layout);
        }
        game.update();

        Renderer::draw_frame(&game, &layout);

        #[cfg(not(target_arch = "wasm32"))]
        while get_time() - frame_start < TARGET_FRAME_TIME {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        next_frame().await;
    }

    info!("bye");
}

fn handle_mouse(game: &mut Game, layout: &BoardLayout) {
    let (x, y) = mouse_position();
    let cell = layout.cell_at(x, y);

    if is_mouse_button_pressed(MouseButton::Left) {
        game.press(cell);
    }
    game.drag(cell);
    if is_mouse_button_released(MouseButton::Left) {
        game.release();
    }
}
