//=========================================================================
// Phase Timer
//=========================================================================
//
// Polled stopwatch measuring progress against a fixed threshold.
//
// Timers are never awaited: actions poll `elapsed()` / `progress()` once
// per tick. There is no reset, a new timer is created for each phase.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== PhaseTimer ==========================================================

/// Measures wall-clock progress of a single phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    start: Instant,
    threshold: Duration,
}

impl PhaseTimer {
    //--- Construction -----------------------------------------------------

    /// Starts a timer now.
    pub fn new(threshold: Duration) -> Self {
        Self::started_at(Instant::now(), threshold)
    }

    /// Starts a timer at an explicit instant.
    pub fn started_at(start: Instant, threshold: Duration) -> Self {
        Self { start, threshold }
    }

    //--- Queries ----------------------------------------------------------

    /// Ratio of elapsed time to the threshold.
    ///
    /// Not clamped: values above 1.0 mean the phase overran.
    pub fn progress(&self) -> f64 {
        let elapsed = self.start.elapsed().as_secs_f64();
        let threshold = self.threshold.as_secs_f64();

        if threshold == 0.0 {
            return if elapsed > 0.0 { 1.0 } else { 0.0 };
        }
        elapsed / threshold
    }

    /// Returns `true` once strictly more than the threshold has passed.
    pub fn elapsed(&self) -> bool {
        self.start.elapsed() > self.threshold
    }

    /// The configured threshold.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
