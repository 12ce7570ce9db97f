//! Fixed frame-rate pacing for the render loop.

use std::time::{Duration, Instant};
use tracing::{instrument, trace};

/// Sleeps between frames so the loop runs at a target rate.
///
/// A frame that overruns is not made up for; the next deadline starts
/// from the moment the late frame finished.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next_deadline: Instant,
}

impl FramePacer {
    /// Creates a pacer for `frames_per_second`, treating 0 as 1.
    #[instrument]
    pub fn new(frames_per_second: u32) -> Self {
        let frame = Duration::from_secs(1) / frames_per_second.max(1);
        Self {
            frame,
            next_deadline: Instant::now() + frame,
        }
    }

    /// Length of one frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Blocks until the current frame's deadline has passed.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_deadline.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next_deadline += self.frame;
        } else {
            trace!(late_by = ?now - self.next_deadline, "Frame overran");
            self.next_deadline = now + self.frame;
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}
