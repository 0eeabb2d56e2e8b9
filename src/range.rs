use crate::Date;
use crate::clock::Clock;
use crate::weekday::{Weekday, WeekdaySet};

/// Every calendar day in the inclusive range `start..=end` whose weekday
/// is a member of `days`, in ascending order.
///
/// The pair is normalized first: a reversed pair (`start > end`) yields
/// the same dates as the forward order.
pub fn every_weekday_in_range(start: Date, end: Date, days: WeekdaySet) -> Vec<Date> {
    let (from, to) = if start > end { (end, start) } else { (start, end) };

    (from.day_number()..=to.day_number())
        .filter(|n| days.contains(Weekday::from_day_number(*n)))
        .filter_map(Date::from_day_number)
        .collect()
}

/// Every matching day from today through `end` inclusive.
pub fn every_weekday_until(clock: &impl Clock, end: Date, days: WeekdaySet) -> Vec<Date> {
    every_weekday_in_range(clock.today(), end, days)
}

/// Every matching day from today through `day_count` days from now,
/// inclusive. An end past the last representable date saturates there.
pub fn every_weekday_within_days(
    clock: &impl Clock,
    day_count: u32,
    days: WeekdaySet,
) -> Vec<Date> {
    let today = clock.today();
    let end = today.add_days(i64::from(day_count)).unwrap_or(Date::MAX);
    every_weekday_in_range(today, end, days)
}
