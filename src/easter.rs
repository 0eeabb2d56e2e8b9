use crate::Date;
use crate::clock::Clock;
use crate::consts::{DAYS_IN_MONTH, MARCH};
use crate::types::{Day, Month, Year};

/// Gregorian Easter Sunday for `year`, via the anonymous Gregorian
/// (Meeus/Jones/Butcher) computus.
///
/// The whole computation is truncating integer arithmetic over modular
/// residues of the year; every division must truncate toward zero, which
/// Rust's `/` on integers does. A raw day greater than 31 spills out of
/// March into April.
pub fn easter_sunday(year: Year) -> Date {
    let y = i32::from(year.get());

    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));

    let mut day = i - ((y + y / 4 + i + 2 - c + c / 4) % 7) + 28;
    let mut month = MARCH;

    if day > i32::from(DAYS_IN_MONTH[MARCH as usize]) {
        month += 1;
        day -= i32::from(DAYS_IN_MONTH[MARCH as usize]);
    }

    // The computus yields late March through late April, always valid
    Date {
        year,
        month: Month::new_unchecked(month),
        day: Day::new_unchecked(day as u8),
    }
}

/// Easter Sunday of the current year.
pub fn easter_sunday_of_current_year(clock: &impl Clock) -> Date {
    easter_sunday(clock.today().year_typed())
}

/// The next Easter Sunday on or after today.
///
/// Today being Easter counts as "not yet passed", so the current year's
/// date is returned. `None` only when the result would fall past the last
/// representable year.
pub fn next_easter_sunday(clock: &impl Clock) -> Option<Date> {
    let today = clock.today();
    let this_easter = easter_sunday(today.year_typed());

    if today > this_easter {
        Year::new(today.year() + 1).ok().map(easter_sunday)
    } else {
        Some(this_easter)
    }
}

/// The most recent Easter Sunday on or before today.
///
/// Today being Easter counts as "has passed", mirroring
/// [`next_easter_sunday`] so the boundary date belongs to both. `None`
/// only when the result would fall before the first representable year.
pub fn previous_easter_sunday(clock: &impl Clock) -> Option<Date> {
    let today = clock.today();
    let this_easter = easter_sunday(today.year_typed());

    if today < this_easter {
        Year::new(today.year() - 1).ok().map(easter_sunday)
    } else {
        Some(this_easter)
    }
}
