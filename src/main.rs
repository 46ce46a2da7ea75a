//! Perlin Panic entry point
//!
//! Loads the config, generates the terrain, then runs the frame loop:
//! poll input -> fixed-tick update -> draw -> present.

use std::path::Path;

use macroquad::prelude::{get_frame_time, next_frame};

use perlin_panic::app::{App, LoopControl};
use perlin_panic::settings::Config;
use perlin_panic::sim::GameState;
use perlin_panic::{platform, renderer, terrain};

/// Default config file, looked up in the working directory
const CONFIG_PATH: &str = "perlin-panic.json";

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_PATH.to_string());
    let config = match Config::load_or_default(Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            // Startup resources are fatal; the per-tick logic has no
            // failing paths once we get going
            log::error!("cannot start: {e}");
            std::process::exit(1);
        }
    };

    let conf = platform::window_conf(&config);
    macroquad::Window::from_config(conf, run(config));
}

async fn run(config: Config) {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting {}x{} at {} ticks/s, seed {seed}",
        config.screen_width,
        config.screen_height,
        config.tick_rate
    );

    // One-time terrain generation at screen resolution
    let grid = terrain::generate(
        config.screen_width as usize,
        config.screen_height as usize,
        config.terrain_scale,
        seed as u32,
    );
    let terrain_texture = renderer::bake_terrain_texture(&grid);

    let arena = glam::Vec2::new(config.screen_width as f32, config.screen_height as f32);
    let state = GameState::new(arena, config.enemy_count, seed);
    let mut app = App::new(state, config.sim_dt());

    loop {
        let input = platform::poll_input();
        if app.frame(&input, get_frame_time()) == LoopControl::Exit {
            log::info!("quit requested, shutting down");
            break;
        }
        renderer::draw_frame(&app.state, &terrain_texture);
        next_frame().await;
    }
}
