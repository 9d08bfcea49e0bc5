//! Elapsed-time sources for the frame loop.

use std::cell::Cell;
use std::time::Instant;

/// Source of elapsed seconds since the scene started
pub trait FrameClock {
    fn elapsed_secs(&self) -> f32;
}

/// Wall clock, started by its first reading
///
/// Window and GPU setup happen between construction and the first frame, so
/// that frame still sees `t = 0`.
#[derive(Debug, Default)]
pub struct SystemClock {
    start: Cell<Option<Instant>>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SystemClock {
    fn elapsed_secs(&self) -> f32 {
        let start = match self.start.get() {
            Some(start) => start,
            None => {
                let now = Instant::now();
                self.start.set(Some(now));
                now
            }
        };
        start.elapsed().as_secs_f32()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    pub fn new(start_secs: f32) -> Self {
        Self {
            now: Cell::new(start_secs),
        }
    }

    pub fn set(&self, secs: f32) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f32) {
        self.now.set(self.now.get() + secs);
    }
}

impl FrameClock for ManualClock {
    fn elapsed_secs(&self) -> f32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn test_system_clock_starts_at_first_reading() {
        let clock = SystemClock::new();
        std::thread::sleep(std::time::Duration::from_millis(50));
        // Time spent before the first frame does not count
        assert!(clock.elapsed_secs() < 0.05);
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(clock.elapsed_secs() >= 0.02);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1.0);
        assert_eq!(clock.elapsed_secs(), 1.0);
        clock.advance(0.5);
        assert_eq!(clock.elapsed_secs(), 1.5);
        clock.set(0.25);
        assert_eq!(clock.elapsed_secs(), 0.25);
    }
}
