//! Frame driver invoked by the host.
//!
//! `Ticker` owns the simulation state and its RNG and exposes one call per
//! display frame; the host renders between calls. Frame pacing sits behind
//! `FrameClock`.

use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

use crate::compute::{init_state, press_start, tick, TickInput};
use crate::entities::{Arena, GameStatus, SimulationState};

/// Blocks until the next frame is due.
pub trait FrameClock {
    fn wait_for_next_frame(&mut self);
}

/// Sleeps out the remainder of a fixed frame budget.
pub struct FixedRateClock {
    frame: Duration,
    frame_start: Instant,
}

impl FixedRateClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            frame_start: Instant::now(),
        }
    }

    /// Roughly `fps` frames per second.
    pub fn per_second(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_next_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

/// What a single `Ticker::frame` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not running; nothing was stepped.
    Paused,
    Stepped,
    /// This frame's step ended the game.
    GameOver,
}

pub struct Ticker<R: Rng> {
    state: SimulationState,
    rng: R,
}

impl<R: Rng> Ticker<R> {
    pub fn new(arena: Arena, rng: R) -> Self {
        Self {
            state: init_state(arena),
            rng,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Forward a start / restart intent. A restart rebuilds the state for
    /// `arena`, which lets the shell pick up a resized playfield.
    pub fn press_start(&mut self, arena: Arena) {
        if self.state.status == GameStatus::GameOver {
            self.state.arena = arena;
        }
        self.state = press_start(&self.state);
    }

    /// Run exactly one simulation step if the game is running.
    pub fn frame(&mut self, input: &TickInput) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::Paused;
        }
        self.state = tick(&self.state, input, &mut self.rng);
        if self.state.status == GameStatus::GameOver {
            debug!("ticker stopped after frame {}", self.state.frame);
            FrameOutcome::GameOver
        } else {
            FrameOutcome::Stepped
        }
    }
}
