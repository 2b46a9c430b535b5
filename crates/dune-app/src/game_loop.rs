//! Fixed-timestep frame loop using the accumulator pattern.
//!
//! Simulation runs at a fixed 60 Hz regardless of the display rate; the
//! leftover accumulator fraction is returned as an interpolation alpha for
//! a renderer that wants to blend between simulation states.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame time clamp. A stall longer than this slows the simulation down
/// instead of triggering a catch-up burst of updates.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state for the fixed-timestep loop.
pub struct GameLoop {
    previous: Instant,
    accumulator: f64,
    elapsed: f64,
    frames: u64,
    updates: u64,
}

impl GameLoop {
    /// A loop starting from the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            accumulator: 0.0,
            elapsed: 0.0,
            frames: 0,
            updates: 0,
        }
    }

    /// Run one wall-clock frame. `update(dt, elapsed)` is called zero or
    /// more times at the fixed rate; returns the interpolation alpha in
    /// `[0.0, 1.0)`.
    pub fn tick(&mut self, update: impl FnMut(f64, f64)) -> f64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        self.advance(frame_time, update)
    }

    /// Run one frame with an explicit frame time. Separated from [`tick`]
    /// so tests can drive the loop without a clock.
    ///
    /// [`tick`]: Self::tick
    pub fn advance(&mut self, frame_time: f64, mut update: impl FnMut(f64, f64)) -> f64 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                frame_ms = frame_time * 1000.0,
                "frame time over limit, clamping"
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            self.elapsed += FIXED_DT;
            update(FIXED_DT, self.elapsed);
            self.updates += 1;
            self.accumulator -= FIXED_DT;
        }

        self.frames += 1;
        self.accumulator / FIXED_DT
    }

    /// Total simulated time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames processed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Fixed updates executed so far.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.updates
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
