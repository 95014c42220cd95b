//! Blocking sleep behind a seam.
//!
//! The post-launch settle delay is a fixed wall-clock wait; hiding it
//! behind [`Sleeper`] lets tests assert the duration without waiting.

use std::time::Duration;

/// Capability for blocking the calling thread.
pub trait Sleeper: Send + Sync {
    /// Block the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn system_sleeper_blocks_for_roughly_the_duration() {
        let start = Instant::now();
        SystemSleeper.sleep(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
