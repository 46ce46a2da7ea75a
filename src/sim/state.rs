//! Game state and core simulation types
//!
//! Entities are plain records built from shared `Kinematics` and `Health`
//! value structs (composition, no hierarchy). All of it is owned by
//! `GameState` and mutated only inside `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title/menu screen. Declared but never entered; the session starts
    /// straight in `Playing`.
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player health dropped to zero or below
    GameOver,
}

/// Position, extent and per-tick movement budget of an entity.
///
/// Top-left corner convention; `speed` is in pixels per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Kinematics {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Collision box for this entity
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Center of the entity rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Hit points. `current <= max` is expected but not enforced; contact
/// damage may push `current` negative and nothing clamps it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// The player character. Exactly one exists per session.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Kinematics,
    pub health: Health,
    /// Item identifiers in pickup order. Carried but unused by the
    /// current update logic.
    pub inventory: Vec<String>,
    pub experience: u32,
    pub level: u32,
    /// Currency awarded on enemy contact
    pub coins: u64,
}

impl Player {
    /// Spawn the player centered in an arena of the given size
    pub fn spawn_centered(arena: Vec2) -> Self {
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            body: Kinematics::new((arena - size) / 2.0, size, PLAYER_SPEED),
            health: Health::full(PLAYER_MAX_HEALTH),
            inventory: Vec::new(),
            experience: 0,
            level: 1,
            coins: 0,
        }
    }

    /// Advance one level: +1 level, +20 max health, full heal.
    ///
    /// The full heal applies regardless of current health, even when it is
    /// zero or negative.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.health.max += LEVEL_UP_HEALTH_BONUS;
        self.health.current = self.health.max;
    }
}

/// A chase enemy. Lives in `GameState::enemies` until it touches the
/// player, which removes it the same tick.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub body: Kinematics,
    pub health: Health,
    /// Subtracted from player health on contact
    pub damage: f32,
    /// Coins granted to the player on contact
    pub reward: u64,
}

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed (terrain and spawn placement share it)
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Arena bounds in pixels (matches the terrain grid)
    pub arena: Vec2,
    pub player: Player,
    /// Live enemies in spawn order; membership only shrinks
    pub enemies: Vec<Enemy>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session: player centered, `enemy_count` enemies scattered
    /// away from the player.
    pub fn new(arena: Vec2, enemy_count: usize, seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            arena,
            player: Player::spawn_centered(arena),
            enemies: Vec::with_capacity(enemy_count),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        for _ in 0..enemy_count {
            state.spawn_enemy();
        }
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place one enemy at a random position with some clearance from the
    /// player, so the session does not open with an instant hit.
    pub fn spawn_enemy(&mut self) {
        let size = Vec2::splat(ENEMY_SIZE);
        let max = (self.arena - size).max(Vec2::ONE);
        let player_center = self.player.body.center();

        let mut pos = Vec2::ZERO;
        // Rejection sampling with a cap; tiny arenas fall back to the last roll
        for _ in 0..32 {
            pos = Vec2::new(
                self.rng.random_range(0.0..max.x),
                self.rng.random_range(0.0..max.y),
            );
            if (pos + size / 2.0).distance(player_center) >= ENEMY_SPAWN_CLEARANCE {
                break;
            }
        }

        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            body: Kinematics::new(pos, size, ENEMY_SPEED),
            health: Health::full(ENEMY_MAX_HEALTH),
            damage: ENEMY_DAMAGE,
            reward: ENEMY_REWARD,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_level_up_increments_and_heals() {
        let mut player = Player::spawn_centered(ARENA);
        player.health.current = 37.5;

        player.level_up();

        assert_eq!(player.level, 2);
        assert_eq!(player.health.max, PLAYER_MAX_HEALTH + 20.0);
        assert_eq!(player.health.current, player.health.max);
    }

    #[test]
    fn test_level_up_heals_from_negative_health() {
        let mut player = Player::spawn_centered(ARENA);
        player.health.current = -12.0;

        player.level_up();

        assert_eq!(player.health.current, PLAYER_MAX_HEALTH + 20.0);
    }

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(ARENA, 5, 7);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), 5);
        assert_eq!(state.player.level, 1);
        assert_eq!(state.player.coins, 0);
        // Player is centered
        assert_eq!(state.player.body.center(), ARENA / 2.0);
    }

    #[test]
    fn test_spawns_respect_clearance() {
        let state = GameState::new(ARENA, 10, 123);
        let player_center = state.player.body.center();
        for enemy in &state.enemies {
            assert!(enemy.body.center().distance(player_center) >= ENEMY_SPAWN_CLEARANCE);
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = GameState::new(ARENA, 8, 42);
        let b = GameState::new(ARENA, 8, 42);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.body.pos, eb.body.pos);
        }
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let state = GameState::new(ARENA, 8, 1);
        let mut ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
