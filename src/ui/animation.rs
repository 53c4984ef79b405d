//! Stepped slide-in animation for the headline labels
//!
//! Positions are relative (0.0 top .. 1.0 bottom of the parent frame).
//! The animation advances in discrete steps rather than easing, so the
//! labels "tick" into place.

use std::time::{Duration, Instant};

pub const SLIDE_STEPS: u32 = 20;
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct SlideIn {
    start: f32,
    end: f32,
    steps: u32,
    duration: Duration,
    delay: Duration,
    started: Instant,
}

impl SlideIn {
    /// Slide from `start` to `end` after `delay`, with the default timing
    pub fn new(start: f32, end: f32, delay: Duration) -> Self {
        Self::with_timing(start, end, SLIDE_STEPS, SLIDE_DURATION, delay, Instant::now())
    }

    pub fn with_timing(
        start: f32,
        end: f32,
        steps: u32,
        duration: Duration,
        delay: Duration,
        started: Instant,
    ) -> Self {
        Self {
            start,
            end,
            steps: steps.max(1),
            duration,
            delay,
            started,
        }
    }

    fn step_interval(&self) -> Duration {
        // Whole milliseconds per step, like a timer callback would see
        Duration::from_millis((self.duration.as_millis() / self.steps as u128) as u64)
    }

    /// Position after `elapsed` time since the animation was created
    pub fn position_after(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return self.start;
        }
        let since = elapsed - self.delay;
        let interval = self.step_interval().as_millis().max(1);
        // First step fires as soon as the delay is over
        let step = (since.as_millis() / interval) as u64 + 1;
        if step >= self.steps as u64 {
            self.end
        } else {
            let delta = (self.end - self.start) / self.steps as f32;
            self.start + delta * step as f32
        }
    }

    pub fn position(&self) -> f32 {
        self.position_after(self.started.elapsed())
    }

    pub fn is_finished_after(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.step_interval() * (self.steps - 1)
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished_after(self.started.elapsed())
    }
}
