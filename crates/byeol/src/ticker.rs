//! Frame pacing for the animation loop.

use std::time::{Duration, Instant};

/// Keeps the loop stepping at a fixed frame rate.
///
/// The loop asks [`poll_timeout`](Self::poll_timeout) how long it may block on
/// input, then [`try_tick`](Self::try_tick) whether the next frame is due.
#[derive(Debug)]
pub struct FrameTicker {
    /// Wall-clock length of one frame.
    frame_duration: Duration,
    /// Deadline of the next frame.
    next_tick: Instant,
}

impl FrameTicker {
    /// Creates a ticker stepping at `fps` frames per second.
    ///
    /// A rate of 0 is treated as 1 so the loop always makes progress.
    pub fn new(fps: u32) -> Self {
        let frame_duration = Duration::from_secs(1) / fps.max(1);
        Self {
            frame_duration,
            next_tick: Instant::now() + frame_duration,
        }
    }

    /// Time left until the next frame is due, zero once it is overdue.
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout_at(Instant::now())
    }

    /// Reports whether a frame is due, advancing the deadline when it is.
    pub fn try_tick(&mut self) -> bool {
        self.tick_due(Instant::now())
    }

    fn poll_timeout_at(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    fn tick_due(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        // Reschedule from now, not the missed deadline, so a long stall
        // yields one frame instead of a burst of catch-up frames.
        self.next_tick = now + self.frame_duration;
        true
    }
}
