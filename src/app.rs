//! Fixed-timestep frame driver
//!
//! Separates loop bookkeeping (time accumulation, substep cap, quit) from
//! both the simulation and the window backend, so the loop behavior is
//! unit-testable without a display.

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{GameState, TickInput, tick};

/// Everything polled from the platform for one rendered frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub tick: TickInput,
    /// Quit signal (Escape or window close), checked once per frame
    pub quit: bool,
}

/// Whether the loop keeps running after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Owns the game state and converts wall-clock frame time into fixed ticks
#[derive(Debug)]
pub struct App {
    pub state: GameState,
    sim_dt: f32,
    accumulator: f32,
}

impl App {
    pub fn new(state: GameState, sim_dt: f32) -> Self {
        Self {
            state,
            sim_dt,
            accumulator: 0.0,
        }
    }

    /// Run the simulation ticks owed for one rendered frame.
    ///
    /// `frame_dt` is the real elapsed time since the previous frame; it is
    /// clamped so a long stall cannot owe unbounded ticks, and substeps are
    /// capped at [`MAX_SUBSTEPS`]. A quit signal exits before any tick runs.
    pub fn frame(&mut self, input: &FrameInput, frame_dt: f32) -> LoopControl {
        if input.quit {
            return LoopControl::Exit;
        }

        self.accumulator += frame_dt.min(0.1);

        let mut tick_input = input.tick.clone();
        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &tick_input);
            self.accumulator -= self.sim_dt;
            substeps += 1;

            // One-shot inputs apply to the first substep only
            tick_input.pause = false;
        }

        LoopControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn app() -> App {
        App::new(GameState::new(Vec2::new(1280.0, 720.0), 0, 1), DT)
    }

    #[test]
    fn test_quit_exits_same_frame() {
        let mut app = app();
        let input = FrameInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(app.frame(&input, DT), LoopControl::Exit);
        // Nothing ran
        assert_eq!(app.state.time_ticks, 0);
    }

    #[test]
    fn test_one_frame_one_tick() {
        let mut app = app();
        assert_eq!(app.frame(&FrameInput::default(), DT), LoopControl::Continue);
        assert_eq!(app.state.time_ticks, 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut app = app();
        // Half a tick of time: no tick yet
        let _ = app.frame(&FrameInput::default(), DT / 2.0);
        assert_eq!(app.state.time_ticks, 0);
        // The other half pays off the owed tick
        let _ = app.frame(&FrameInput::default(), DT / 2.0);
        assert_eq!(app.state.time_ticks, 1);
    }

    #[test]
    fn test_substep_cap_bounds_catchup() {
        let mut app = app();
        // A very long stall owes far more than MAX_SUBSTEPS ticks
        let _ = app.frame(&FrameInput::default(), 10.0);
        assert_eq!(app.state.time_ticks, u64::from(crate::consts::MAX_SUBSTEPS));
    }

    #[test]
    fn test_pause_is_one_shot_across_substeps() {
        let mut app = app();
        let input = FrameInput {
            tick: TickInput {
                pause: true,
                ..Default::default()
            },
            ..Default::default()
        };
        // Two ticks owed; the pause must toggle once, not twice
        let _ = app.frame(&input, DT * 2.0);
        assert_eq!(app.state.phase, GamePhase::Paused);
    }
}
