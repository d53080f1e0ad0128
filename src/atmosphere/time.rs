//! Day clock with day counting.

/// Hours in one full cycle
pub const HOURS_PER_DAY: f32 = 24.0;

/// Tracks the current hour within a 24-hour cycle plus elapsed day count.
///
/// Rolling past midnight does not carry the overshoot: the clock restarts at
/// the size of the step that crossed it.
#[derive(Clone, Debug)]
pub struct DayClock {
    /// Current hour, in the range `[0.0, 24.0]`.
    hour: f32,
    /// Number of times the clock has wrapped.
    day_count: u32,
}

impl DayClock {
    /// Create a new clock starting at the given hour.
    pub fn new(start_hour: f32) -> Self {
        Self {
            hour: start_hour.clamp(0.0, HOURS_PER_DAY),
            day_count: 0,
        }
    }

    /// Advance by `dt_seconds` at `rate` hours per second.
    pub fn advance(&mut self, dt_seconds: f32, rate: f32) {
        let delta = dt_seconds * rate;
        self.hour += delta;
        if self.hour > HOURS_PER_DAY {
            self.hour = delta;
            self.day_count += 1;
        }
    }

    /// Set the hour directly, clamping to `[0.0, 24.0]`.
    pub fn set(&mut self, hour: f32) {
        self.hour = hour.clamp(0.0, HOURS_PER_DAY);
    }

    /// Current hour in the range `[0.0, 24.0]`.
    #[inline]
    pub fn hour(&self) -> f32 {
        self.hour
    }

    /// Number of full days that have passed.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(DayClock::new(30.0).hour(), 24.0);
        assert_eq!(DayClock::new(-5.0).hour(), 0.0);
    }

    #[test]
    fn test_advance_basic() {
        let mut t = DayClock::new(10.0);
        t.advance(0.5, 1.0);
        assert!((t.hour() - 10.5).abs() < 1e-6);
        t.advance(0.5, 5.0);
        assert!((t.hour() - 13.0).abs() < 1e-6);
        assert_eq!(t.day_count(), 0);
    }

    #[test]
    fn test_wrap_restarts_at_step() {
        let mut t = DayClock::new(24.0);
        t.advance(0.5, 1.0);
        assert!((t.hour() - 0.5).abs() < 1e-6);
        assert_eq!(t.day_count(), 1);
    }

    #[test]
    fn test_exactly_midnight_does_not_wrap() {
        let mut t = DayClock::new(23.0);
        t.advance(1.0, 1.0);
        assert_eq!(t.hour(), 24.0);
        assert_eq!(t.day_count(), 0);
    }

    #[test]
    fn test_zero_rate_holds() {
        let mut t = DayClock::new(10.0);
        t.advance(100.0, 0.0);
        assert_eq!(t.hour(), 10.0);
    }
}
