use std::thread;
use std::time::{Duration, Instant};

pub const TARGET_FPS: u32 = 60;

/// Holds the loop to a fixed frame rate by sleeping out the rest of each frame.
pub struct FrameLimiter {
    frame: Duration,
    deadline: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            frame,
            deadline: Instant::now() + frame,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Sleeps until the current frame's deadline. A frame that overran starts
    /// the next one from now instead of trying to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            self.deadline = now + self.frame;
        }
    }
}
