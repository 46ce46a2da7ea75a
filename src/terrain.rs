//! Fractal Perlin terrain
//!
//! A height value per screen pixel, generated once at startup and read-only
//! afterwards. The renderer bakes it into a texture; the simulation never
//! touches it.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::consts::{TERRAIN_OCTAVES, TERRAIN_PERSISTENCE};

/// Immutable 2D height field with values in [-1, 1]
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    /// Row-major, `width * height` entries
    values: Vec<f32>,
}

impl TerrainGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Height value at cell (x, y). Panics on out-of-range indices.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height);
        self.values[y * self.width + x]
    }
}

/// Generate a `width` x `height` height field.
///
/// Each cell (x, y) samples fractal Perlin noise at (x/scale, y/scale) with
/// 4 octaves and persistence 0.5. Output is clamped to [-1, 1] (FBM sums
/// can spill slightly past the nominal range). Deterministic for a given
/// seed; callers that want run-to-run variety pass a random seed.
pub fn generate(width: usize, height: usize, scale: f64, seed: u32) -> TerrainGrid {
    let fbm = Fbm::<Perlin>::new(seed)
        .set_octaves(TERRAIN_OCTAVES)
        .set_persistence(TERRAIN_PERSISTENCE);

    let mut values = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sample = fbm.get([x as f64 / scale, y as f64 / scale]);
            values.push((sample as f32).clamp(-1.0, 1.0));
        }
    }

    TerrainGrid {
        width,
        height,
        values,
    }
}
