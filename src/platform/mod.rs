//! Window configuration and input polling
//!
//! The only places that talk to macroquad are this module, the renderer and
//! `main`; the simulation never sees a key code or a window handle.

use macroquad::prelude::*;

use crate::app::FrameInput;
use crate::settings::Config;
use crate::sim::TickInput;

/// Window configuration from the runtime config
pub fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Poll the key state once per rendered frame.
///
/// WASD and the arrow keys both steer; P pauses; Escape quits.
pub fn poll_input() -> FrameInput {
    FrameInput {
        tick: TickInput {
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            pause: is_key_pressed(KeyCode::P),
        },
        quit: is_key_pressed(KeyCode::Escape),
    }
}
