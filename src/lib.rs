//! Perlin Panic - a tiny arcade chase demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `terrain`: Fractal Perlin height field generated once at startup
//! - `app`: Fixed-timestep frame driver
//! - `renderer`: macroquad drawing (terrain texture, entities, HUD)
//! - `platform`: Window configuration and input polling
//! - `settings`: Runtime configuration

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod terrain;

pub use settings::Config;

/// Game tuning constants
pub mod consts {
    /// Default window width in pixels
    pub const SCREEN_WIDTH: u32 = 1280;
    /// Default window height in pixels
    pub const SCREEN_HEIGHT: u32 = 720;
    /// Default simulation rate (ticks per second)
    pub const TICK_RATE: f32 = 60.0;
    /// Maximum simulation substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player defaults - spawned once, centered in the arena
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Max-health gain per level
    pub const LEVEL_UP_HEALTH_BONUS: f32 = 20.0;

    /// Enemy defaults - placed at session start, never respawned
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_HEALTH: f32 = 30.0;
    pub const ENEMY_DAMAGE: f32 = 15.0;
    pub const ENEMY_REWARD: u64 = 50;
    pub const ENEMY_COUNT: usize = 8;
    /// Minimum spawn distance from the player center
    pub const ENEMY_SPAWN_CLEARANCE: f32 = 200.0;

    /// Terrain noise defaults
    pub const TERRAIN_SCALE: f64 = 100.0;
    pub const TERRAIN_OCTAVES: usize = 4;
    pub const TERRAIN_PERSISTENCE: f64 = 0.5;
}
