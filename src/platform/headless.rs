//! Headless platform: fixed frame budget and sleep-based pacing

use std::time::Duration;

use super::Platform;

/// Runs for an optional number of frames, sleeping a fixed delay between them.
/// Without a limit the run ends only when the process is stopped.
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    frame_limit: Option<u64>,
    frame_delay: Duration,
    frames: u64,
}

impl HeadlessPlatform {
    pub fn new(frame_limit: Option<u64>, frame_delay: Duration) -> Self {
        Self {
            frame_limit,
            frame_delay,
            frames: 0,
        }
    }

    /// Frames started so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Platform for HeadlessPlatform {
    fn poll_quit(&mut self) -> bool {
        if let Some(limit) = self.frame_limit {
            if self.frames >= limit {
                return true;
            }
        }
        self.frames += 1;
        false
    }

    fn wait_for_next_frame(&mut self) {
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_limit() {
        let mut platform = HeadlessPlatform::new(Some(2), Duration::ZERO);
        assert!(!platform.poll_quit());
        assert!(!platform.poll_quit());
        assert!(platform.poll_quit());
        assert!(platform.poll_quit());
        assert_eq!(platform.frames(), 2);
    }

    #[test]
    fn test_unlimited_keeps_running() {
        let mut platform = HeadlessPlatform::new(None, Duration::ZERO);
        for _ in 0..1000 {
            assert!(!platform.poll_quit());
        }
        assert_eq!(platform.frames(), 1000);
    }

    #[test]
    fn test_wait_sleeps_for_delay() {
        let mut platform = HeadlessPlatform::new(None, Duration::from_millis(5));
        let start = std::time::Instant::now();
        platform.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
