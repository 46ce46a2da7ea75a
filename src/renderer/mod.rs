//! 2D drawing
//!
//! The terrain grid is baked into a texture once at startup; per frame we
//! draw that texture, one rectangle per entity, and a text HUD. Render only
//! reads state.

use macroquad::prelude::*;

use crate::sim::{GamePhase, GameState};
use crate::terrain::TerrainGrid;

const HUD_FONT_SIZE: f32 = 24.0;
const OVERLAY_FONT_SIZE: f32 = 64.0;

/// Bake the height field into a texture, one pixel per cell
pub fn bake_terrain_texture(grid: &TerrainGrid) -> Texture2D {
    let mut image = Image::gen_image_color(grid.width() as u16, grid.height() as u16, BLACK);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            image.set_pixel(x as u32, y as u32, terrain_color(grid.get(x, y)));
        }
    }
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Map a height in [-1, 1] to a palette band (water up to snow)
fn terrain_color(value: f32) -> Color {
    if value < -0.3 {
        Color::from_rgba(24, 52, 115, 255) // deep water
    } else if value < -0.05 {
        Color::from_rgba(45, 94, 168, 255) // shallow water
    } else if value < 0.05 {
        Color::from_rgba(210, 190, 120, 255) // sand
    } else if value < 0.4 {
        Color::from_rgba(72, 128, 58, 255) // grass
    } else if value < 0.7 {
        Color::from_rgba(112, 104, 96, 255) // rock
    } else {
        Color::from_rgba(235, 238, 240, 255) // snow
    }
}

/// Draw one complete frame: terrain, enemies, player, HUD
pub fn draw_frame(state: &GameState, terrain: &Texture2D) {
    clear_background(BLACK);
    draw_texture(terrain, 0.0, 0.0, WHITE);

    for enemy in &state.enemies {
        let body = &enemy.body;
        draw_rectangle(body.pos.x, body.pos.y, body.size.x, body.size.y, RED);
    }

    let player = &state.player.body;
    draw_rectangle(player.pos.x, player.pos.y, player.size.x, player.size.y, SKYBLUE);

    draw_hud(state);

    match state.phase {
        GamePhase::Paused => draw_overlay("PAUSED"),
        GamePhase::GameOver => draw_overlay("GAME OVER"),
        _ => {}
    }
}

fn draw_hud(state: &GameState) {
    let lines = [
        format!(
            "Health: {:.0} / {:.0}",
            state.player.health.current, state.player.health.max
        ),
        format!("Coins: {}", state.player.coins),
        format!("Level: {}", state.player.level),
        format!("Enemies: {}", state.enemies.len()),
        format!("FPS: {}", get_fps()),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = 28.0 + i as f32 * (HUD_FONT_SIZE + 4.0);
        // Shadow pass keeps the text readable on bright terrain
        draw_text(line, 13.0, y + 1.0, HUD_FONT_SIZE, BLACK);
        draw_text(line, 12.0, y, HUD_FONT_SIZE, WHITE);
    }
}

fn draw_overlay(label: &str) {
    let dims = measure_text(label, None, OVERLAY_FONT_SIZE as u16, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    let y = screen_height() / 2.0;
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.5),
    );
    draw_text(label, x + 2.0, y + 2.0, OVERLAY_FONT_SIZE, BLACK);
    draw_text(label, x, y, OVERLAY_FONT_SIZE, WHITE);
}
