use crate::Date;
use crate::clock::Clock;
use crate::consts::{JANUARY, MIN_DAY};
use crate::types::{Year, day_number_from_ymd};

/// Signed day count from `source` to `target`, positive when `target`
/// is after `source`. Operates on calendar dates only; there is no
/// time-of-day component to discard.
pub fn days_between(source: Date, target: Date) -> i64 {
    target.day_number() - source.day_number()
}

/// Signed day count from today to `target`.
pub fn days_to(clock: &impl Clock, target: Date) -> i64 {
    days_between(clock.today(), target)
}

/// Signed day count from `source` to today.
pub fn days_from(clock: &impl Clock, source: Date) -> i64 {
    days_between(source, clock.today())
}

/// Number of days in `year`: 366 for leap years, else 365.
///
/// Computed as the day-number difference between January 1st of `year`
/// and January 1st of the following year, so the leap-year rule lives in
/// one place. The raw conversion tolerates `year + 1` past the last
/// representable year.
pub fn days_in_year(year: Year) -> u16 {
    let y = i32::from(year.get());
    let this_year = day_number_from_ymd(y, JANUARY, MIN_DAY);
    let next_year = day_number_from_ymd(y + 1, JANUARY, MIN_DAY);
    (next_year - this_year) as u16
}

/// Number of days in the current year.
pub fn days_in_current_year(clock: &impl Clock) -> u16 {
    days_in_year(clock.today().year_typed())
}

/// Yesterday's date, or `None` if today is the first representable day.
pub fn yesterday(clock: &impl Clock) -> Option<Date> {
    clock.today().add_days(-1)
}

/// Tomorrow's date, or `None` if today is the last representable day.
pub fn tomorrow(clock: &impl Clock) -> Option<Date> {
    clock.today().add_days(1)
}
