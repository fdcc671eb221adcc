//! Castle Runner: a two-scene side-scrolling runner
//!
//! Pick one of seven characters, then run along the castle wall:
//! - jump the gaps in the ground (or climb back out of the void)
//! - throw stones at the enemies walking towards you
//! - grab hearts for extra lives
//! - the further you get, the faster everything goes
//!
//! Runs natively and in the browser (wasm32) through macroquad.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod audio;
mod characters;
mod config;
mod game;
mod input;
mod scenes;
mod ui;

use macroquad::logging::info;
use macroquad::prelude::*;

use app::AppState;
use config::{CanvasConfig, GameConfig};
use ui::theme;

fn window_conf() -> Conf {
    let canvas = CanvasConfig::default();
    Conf {
        window_title: format!("{} v{}", canvas.title, VERSION),
        window_width: canvas.width as i32,
        window_height: canvas.height as i32,
        window_resizable: true,
        high_dpi: true,
        // Start windowed on all platforms (WASM: browser handles sizing)
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

/// Fresh seed for each run
fn seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Let the app stop its music before the window goes away
    prevent_quit();

    let config = GameConfig::load_or_default().await;
    let mut app = AppState::new(config);
    app.preload_current().await;

    info!("=== Castle Runner v{} ===", VERSION);

    loop {
        if is_quit_requested() {
            app.shutdown();
            break;
        }

        app.fit.update();
        let input = app.input.poll(&app.fit);

        if let Some(command) = app.update(&input, get_frame_time()) {
            app.apply(command, seed()).await;
        }

        // Bars outside the canvas stay black
        clear_background(theme::LETTERBOX);
        app.draw();

        next_frame().await;
    }
}
