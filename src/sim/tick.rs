//! Fixed timestep simulation tick
//!
//! One call advances the whole game by a single tick: player movement from
//! the input flags, enemy chase movement, contact resolution, phase
//! transitions. Nothing here can fail; it is arithmetic over `GameState`.

use glam::Vec2;

use super::collision::overlaps;
use super::state::{GamePhase, GameState};

/// Input flags for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional key state, polled once per tick
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    move_player(state, input);
    resolve_enemies(state);

    // Contact damage never clamps health; dropping to or below zero ends
    // the run but the value itself may stay negative.
    if state.player.health.current <= 0.0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at tick {} with {} coins",
            state.time_ticks,
            state.player.coins
        );
    }

    state.time_ticks += 1;
}

/// Apply directional input. Each axis flag contributes a full `speed`
/// step, so moving diagonally is sqrt(2) faster than a single axis. That
/// quirk is deliberate and covered by tests.
fn move_player(state: &mut GameState, input: &TickInput) {
    let body = &mut state.player.body;
    if input.up {
        body.pos.y -= body.speed;
    }
    if input.down {
        body.pos.y += body.speed;
    }
    if input.left {
        body.pos.x -= body.speed;
    }
    if input.right {
        body.pos.x += body.speed;
    }
}

/// Move every enemy toward the player and resolve contacts.
///
/// Each enemy is visited exactly once per tick: the loop runs over the
/// pre-tick length, removals go to a flag array, and the live vec is
/// compacted once at the end.
fn resolve_enemies(state: &mut GameState) {
    let count = state.enemies.len();
    let mut removed = vec![false; count];

    let player_box = state.player.body.aabb();
    let player_pos = state.player.body.pos;

    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        chase_step(&mut enemy.body.pos, player_pos, enemy.body.speed);

        if overlaps(&enemy.body.aabb(), &player_box) {
            state.player.health.current -= enemy.damage;
            state.player.coins += enemy.reward;
            removed[i] = true;
            log::debug!(
                "enemy {} hit player for {} (reward {})",
                enemy.id,
                enemy.damage,
                enemy.reward
            );
        }
    }

    let mut index = 0;
    state.enemies.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}

/// Step `pos` toward `target` by `speed` along the unit direction vector.
/// At zero distance there is no defined direction, so no movement.
fn chase_step(pos: &mut Vec2, target: Vec2, speed: f32) {
    let delta = target - *pos;
    let dist = delta.length();
    if dist > 0.0 {
        *pos += delta * (speed / dist);
    }
}
