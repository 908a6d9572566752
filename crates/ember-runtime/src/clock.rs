//! Microsecond clocks with pause and frame-step support

use ember_core::TimeUs;
use std::cell::Cell;
use std::time::Instant;

/// One 60Hz frame in microseconds, the reference step size for scrubbing
pub const FRAME_STEP_US: i64 = 16_667;

/// Source of the current simulation time.
///
/// The simulation only ever reads the time; pausing and stepping are the
/// owner's business.
pub trait Clock {
    fn now_us(&self) -> TimeUs;
}

/// Wall clock measured from construction, with pause and step controls
pub struct SystemClock {
    /// Construction instant
    origin: Instant,
    /// Added to the raw reading so a resume continues from the frozen value
    offset_us: i64,
    /// Frozen time while paused
    paused_at: Option<TimeUs>,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            offset_us: 0,
            paused_at: None,
        }
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn raw_us(&self) -> i64 {
        self.origin.elapsed().as_micros() as i64
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Freeze the clock, or resume it from the frozen time
    pub fn toggle_pause(&mut self) {
        match self.paused_at.take() {
            Some(frozen) => {
                self.offset_us = frozen as i64 - self.raw_us();
            }
            None => {
                self.paused_at = Some(self.now_us());
            }
        }
    }

    /// Pause (if running) and move the frozen time by `delta_us`.
    /// Negative steps scrub backwards, saturating at zero.
    pub fn step(&mut self, delta_us: i64) {
        let frozen = self.paused_at.unwrap_or_else(|| self.now_us());
        self.paused_at = Some(offset(frozen, delta_us));
    }
}

impl Clock for SystemClock {
    fn now_us(&self) -> TimeUs {
        match self.paused_at {
            Some(frozen) => frozen,
            None => (self.raw_us() + self.offset_us).max(0) as TimeUs,
        }
    }
}

/// Clock that only moves when told to. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<TimeUs>,
}

impl ManualClock {
    pub fn new(start: TimeUs) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, time: TimeUs) {
        self.now.set(time);
    }

    pub fn advance(&self, delta_us: i64) {
        self.now.set(offset(self.now.get(), delta_us));
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> TimeUs {
        self.now.get()
    }
}

fn offset(time: TimeUs, delta_us: i64) -> TimeUs {
    if delta_us >= 0 {
        time.saturating_add(delta_us as u64)
    } else {
        time.saturating_sub(delta_us.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(1_000);
        clock.advance(500);
        assert_eq!(clock.now_us(), 1_500);
        clock.advance(-2_000);
        assert_eq!(clock.now_us(), 0);
        clock.set(42);
        assert_eq!(clock.now_us(), 42);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut clock = SystemClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        let frozen = clock.now_us();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now_us(), frozen);
    }

    #[test]
    fn test_step_moves_frozen_time() {
        let mut clock = SystemClock::new();
        clock.step(FRAME_STEP_US);
        assert!(clock.is_paused());
        let t = clock.now_us();
        clock.step(FRAME_STEP_US);
        assert_eq!(clock.now_us(), t + FRAME_STEP_US as u64);
        clock.step(-FRAME_STEP_US);
        assert_eq!(clock.now_us(), t);
    }

    #[test]
    fn test_step_backwards_saturates() {
        let mut clock = SystemClock::new();
        clock.step(-10 * FRAME_STEP_US);
        assert_eq!(clock.now_us(), 0);
    }

    #[test]
    fn test_resume_continues_from_frozen_value() {
        let mut clock = SystemClock::new();
        clock.step(1_000_000);
        let frozen = clock.now_us();
        clock.toggle_pause();
        assert!(!clock.is_paused());
        assert!(clock.now_us() >= frozen);
        assert!(clock.now_us() < frozen + 500_000);
    }
}
