use crate::Date;
use crate::consts::SECONDS_PER_DAY;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current calendar date, with time of day truncated.
///
/// Every relative-to-now convenience in this crate takes a `Clock` and
/// samples `today` exactly once per call, so a computation never straddles
/// a midnight rollover. Tests pin the date with [`FixedClock`] instead of
/// reading the wall clock.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> Date;
}

/// Clock backed by the system wall clock, in UTC civil days.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let day_number = (secs / SECONDS_PER_DAY) as i64;
        // A wall clock outside 0001..=9999 saturates at the range bound.
        Date::from_day_number(day_number).unwrap_or(Date::MAX)
    }
}

/// Clock pinned to a fixed date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let pinned = Date::from_ymd(2015, 1, 20).unwrap();
        let clock = FixedClock(pinned);
        assert_eq!(clock.today(), pinned);
        assert_eq!(clock.today(), pinned);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        let today = SystemClock.today();
        // Sanity only: a real wall clock reads after this crate was written
        assert!(today > Date::from_ymd(2020, 1, 1).unwrap());
        assert!(today < Date::MAX);
    }
}
