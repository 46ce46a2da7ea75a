//! Runtime configuration
//!
//! Everything the source hard-coded (screen size, tick rate, window title)
//! lives in one struct with those defaults, optionally overridden by a JSON
//! file. A missing file means defaults; a malformed file is a fatal
//! startup error.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::consts::*;

/// Startup configuration with the source's compile-time defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and terrain width in pixels
    pub screen_width: u32,
    /// Window and terrain height in pixels
    pub screen_height: u32,
    /// Simulation ticks per second
    pub tick_rate: f32,
    /// Window title string
    pub window_title: String,
    /// Noise coordinate divisor; larger means smoother terrain
    pub terrain_scale: f64,
    /// Enemies placed at session start
    pub enemy_count: usize,
    /// Terrain/spawn seed. `None` draws one from entropy at startup, so
    /// runs differ unless a seed is pinned.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            window_title: "Perlin Panic".to_string(),
            terrain_scale: TERRAIN_SCALE,
            enemy_count: ENEMY_COUNT,
            seed: None,
        }
    }
}

/// Why a config file could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl Config {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Config = serde_json::from_str(&json).map_err(ConfigError::Parse)?;
        Ok(config.sanitized())
    }

    /// Load from a JSON file if one exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::load(path)?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::info!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Clamp values the rest of the game assumes are sane. A non-positive
    /// noise scale is undefined behavior upstream, so it is floored here.
    fn sanitized(mut self) -> Self {
        if self.terrain_scale < 1.0 {
            log::warn!(
                "terrain_scale {} is out of range, clamping to 1.0",
                self.terrain_scale
            );
            self.terrain_scale = 1.0;
        }
        if self.tick_rate <= 0.0 {
            log::warn!("tick_rate {} is out of range, using default", self.tick_rate);
            self.tick_rate = TICK_RATE;
        }
        self.screen_width = self.screen_width.max(1);
        self.screen_height = self.screen_height.max(1);
        self
    }

    /// Seconds per simulation tick
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}
