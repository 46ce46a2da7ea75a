//! Simulation core
//!
//! Gameplay lives here and stays deterministic: fixed ticks, a seeded RNG,
//! enemies iterated in spawn order, and no rendering or platform types.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use state::{Enemy, GamePhase, GameState, Health, Kinematics, Player};
pub use tick::{TickInput, tick};
