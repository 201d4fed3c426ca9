//=========================================================================
// Fixed Rate Scheduler
//=========================================================================
//
// Default `FrameScheduler`: paces ticks at a fixed frame rate by sleeping
// out the remainder of each frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use log::trace;

//=== Internal Dependencies ===============================================

use super::interface::{FrameScheduler, TickControl};

//=== FixedRateScheduler ==================================================

/// Sleeps until the next frame boundary; optionally stops after a number
/// of frames.
#[derive(Debug)]
pub struct FixedRateScheduler {
    frame_duration: Duration,
    frame_start: Instant,
    frames_left: Option<u64>,
}

impl FixedRateScheduler {
    /// Creates a scheduler running at `fps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn new(fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            frame_start: Instant::now(),
            frames_left: None,
        }
    }

    /// Stops playback after `frames` scheduled frames.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frames_left = Some(frames);
        self
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn schedule_next_frame(&mut self) -> TickControl {
        if let Some(left) = self.frames_left.as_mut() {
            if *left == 0 {
                trace!(target: "stage", "Frame limit reached");
                return TickControl::Exit;
            }
            *left -= 1;
        }

        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        }
        self.frame_start = Instant::now();

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
