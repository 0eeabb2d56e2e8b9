use crate::clock::Clock;
use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MIN_DAY};
use crate::types::{Day, day_number_from_ymd, days_in_month, ymd_from_day_number};
use crate::{Date, Weekday};

/// Error raised when a month has no nth occurrence of a weekday
/// (e.g. a sixth Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("month {year}-{month:02} has no occurrence {index} of {weekday}")]
pub struct OutOfRange {
    pub year: u16,
    pub month: u8,
    pub weekday: Weekday,
    pub index: u8,
}

/// First day of the month `date` falls in.
pub fn first_day_of_month(date: Date) -> Date {
    Date {
        year: date.year,
        month: date.month,
        day: Day::new_unchecked(MIN_DAY),
    }
}

/// Last day of the month `date` falls in.
pub fn last_day_of_month(date: Date) -> Date {
    Date {
        year: date.year,
        month: date.month,
        day: Day::new_unchecked(days_in_month(date.year(), date.month())),
    }
}

/// Forward offset in days from `from` to the next `to` weekday, in `0..=6`.
const fn forward_offset(from: Weekday, to: Weekday) -> u8 {
    (to.ordinal() + DAYS_IN_WEEK - from.ordinal()) % DAYS_IN_WEEK
}

/// First occurrence of `weekday` within the month `date` falls in.
pub fn first_weekday_of_month(date: Date, weekday: Weekday) -> Date {
    let first = first_day_of_month(date);
    let offset = forward_offset(first.weekday(), weekday);
    // Lands on day 1..=7, valid in every month
    Date {
        year: date.year,
        month: date.month,
        day: Day::new_unchecked(MIN_DAY + offset),
    }
}

/// Last occurrence of `weekday` within the month `date` falls in.
///
/// The last occurrence in a month is always exactly seven days before the
/// first occurrence in the following month. The following month is handled
/// as a raw day number so that December of the final representable year
/// needs no `Date` for January of the year after it.
pub fn last_weekday_of_month(date: Date, weekday: Weekday) -> Date {
    let (next_year, next_month) = if date.month() == DECEMBER {
        (i32::from(date.year()) + 1, JANUARY)
    } else {
        (i32::from(date.year()), date.month() + 1)
    };

    let first_of_next = day_number_from_ymd(next_year, next_month, MIN_DAY);
    let offset = forward_offset(Weekday::from_day_number(first_of_next), weekday);
    let last = first_of_next + i64::from(offset) - i64::from(DAYS_IN_WEEK);

    // Seven days back from the following month lands inside `date`'s month
    let (_, _, day) = ymd_from_day_number(last);
    Date {
        year: date.year,
        month: date.month,
        day: Day::new_unchecked(day),
    }
}

/// Nth occurrence (zero-based: 0 = first) of `weekday` within the month
/// `date` falls in.
///
/// # Errors
/// Returns [`OutOfRange`] when the month has no such occurrence. The bound
/// is checked against the month's day count before any date is built, so a
/// missing occurrence can never silently roll into the next month.
pub fn nth_weekday_of_month(date: Date, weekday: Weekday, index: u8) -> Result<Date, OutOfRange> {
    let first = first_weekday_of_month(date, weekday);
    let day = u16::from(first.day()) + u16::from(DAYS_IN_WEEK) * u16::from(index);

    if day > u16::from(days_in_month(date.year(), date.month())) {
        return Err(OutOfRange {
            year: date.year(),
            month: date.month(),
            weekday,
            index,
        });
    }

    Ok(Date {
        year: date.year,
        month: date.month,
        day: Day::new_unchecked(day as u8),
    })
}

/// First day of the current month.
pub fn first_day_of_current_month(clock: &impl Clock) -> Date {
    first_day_of_month(clock.today())
}

/// Last day of the current month.
pub fn last_day_of_current_month(clock: &impl Clock) -> Date {
    last_day_of_month(clock.today())
}

/// First occurrence of `weekday` in the current month.
pub fn first_weekday_of_current_month(clock: &impl Clock, weekday: Weekday) -> Date {
    first_weekday_of_month(clock.today(), weekday)
}

/// Last occurrence of `weekday` in the current month.
pub fn last_weekday_of_current_month(clock: &impl Clock, weekday: Weekday) -> Date {
    last_weekday_of_month(clock.today(), weekday)
}

/// Nth occurrence (zero-based) of `weekday` in the current month.
///
/// # Errors
/// Returns [`OutOfRange`] when the current month has no such occurrence.
pub fn nth_weekday_of_current_month(
    clock: &impl Clock,
    weekday: Weekday,
    index: u8,
) -> Result<Date, OutOfRange> {
    nth_weekday_of_month(clock.today(), weekday, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month(date(2014, 12, 15)), date(2014, 12, 1));
        assert_eq!(first_day_of_month(date(2014, 12, 1)), date(2014, 12, 1));
        assert_eq!(first_day_of_month(date(2014, 12, 31)), date(2014, 12, 1));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(date(2014, 12, 15)), date(2014, 12, 31));
        assert_eq!(last_day_of_month(date(2015, 4, 1)), date(2015, 4, 30));
        assert_eq!(last_day_of_month(date(2015, 2, 10)), date(2015, 2, 28));
        assert_eq!(last_day_of_month(date(2016, 2, 10)), date(2016, 2, 29));
        assert_eq!(last_day_of_month(date(1900, 2, 1)), date(1900, 2, 28));
        assert_eq!(last_day_of_month(date(2000, 2, 1)), date(2000, 2, 29));
    }

    #[test]
    fn test_first_day_of_month_preserves_month_and_year() {
        for (y, m, d) in [(2014, 12, 15), (2016, 2, 29), (9999, 12, 31)] {
            let source = date(y, m, d);
            let first = first_day_of_month(source);
            assert_eq!(first.day(), 1);
            assert_eq!(first.month(), source.month());
            assert_eq!(first.year(), source.year());

            let last = last_day_of_month(source);
            assert_eq!(last.month(), source.month());
            assert_eq!(last.year(), source.year());
        }
    }

    #[test]
    fn test_first_weekday_of_month() {
        // December 2014 starts on a Monday
        assert_eq!(
            first_weekday_of_month(date(2014, 12, 15), Weekday::Thursday),
            date(2014, 12, 4)
        );
        assert_eq!(
            first_weekday_of_month(date(2014, 12, 15), Weekday::Sunday),
            date(2014, 12, 7)
        );
        assert_eq!(
            first_weekday_of_month(date(2014, 12, 15), Weekday::Monday),
            date(2014, 12, 1)
        );
    }

    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(
            last_weekday_of_month(date(2014, 12, 15), Weekday::Thursday),
            date(2014, 12, 25)
        );
        assert_eq!(
            last_weekday_of_month(date(2015, 1, 31), Weekday::Wednesday),
            date(2015, 1, 28)
        );
        // December: next month crosses a year boundary
        assert_eq!(
            last_weekday_of_month(date(2014, 12, 1), Weekday::Wednesday),
            date(2014, 12, 31)
        );
        // December of the last representable year
        assert_eq!(
            last_weekday_of_month(date(9999, 12, 1), Weekday::Friday),
            date(9999, 12, 31)
        );
    }

    #[test]
    fn test_last_equals_first_of_next_month_minus_seven() {
        for (y, m) in [(2014, 12), (2015, 1), (2015, 2), (2016, 2), (2015, 4)] {
            let in_month = date(y, m, 10);
            let next_month = last_day_of_month(in_month).add_days(1).unwrap();
            for weekday in Weekday::ALL {
                let last = last_weekday_of_month(in_month, weekday);
                let first_of_next = first_weekday_of_month(next_month, weekday);
                assert_eq!(
                    crate::days_between(first_of_next, last),
                    -7,
                    "{y}-{m:02} {weekday}"
                );
            }
        }
    }

    #[test]
    fn test_nth_weekday_index_zero_is_first() {
        for weekday in Weekday::ALL {
            assert_eq!(
                nth_weekday_of_month(date(2014, 12, 15), weekday, 0).unwrap(),
                first_weekday_of_month(date(2014, 12, 15), weekday)
            );
        }
    }

    #[test]
    fn test_nth_weekday_of_month() {
        assert_eq!(
            nth_weekday_of_month(date(2014, 12, 15), Weekday::Thursday, 0).unwrap(),
            date(2014, 12, 4)
        );
        assert_eq!(
            nth_weekday_of_month(date(2014, 12, 15), Weekday::Thursday, 1).unwrap(),
            date(2014, 12, 11)
        );
        assert_eq!(
            nth_weekday_of_month(date(2014, 12, 15), Weekday::Monday, 4).unwrap(),
            date(2014, 12, 29)
        );
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        let result = nth_weekday_of_month(date(2014, 12, 15), Weekday::Wednesday, 10);
        assert_eq!(
            result,
            Err(OutOfRange {
                year: 2014,
                month: 12,
                weekday: Weekday::Wednesday,
                index: 10,
            })
        );
        // December 2014 has five Mondays but only four Thursdays
        assert!(nth_weekday_of_month(date(2014, 12, 15), Weekday::Monday, 4).is_ok());
        assert!(nth_weekday_of_month(date(2014, 12, 15), Weekday::Thursday, 4).is_err());
    }

    #[test]
    fn test_nth_weekday_boundary_month_lengths() {
        // 28-day month: February 2015 has exactly four of every weekday
        for weekday in Weekday::ALL {
            assert!(nth_weekday_of_month(date(2015, 2, 1), weekday, 3).is_ok());
            assert!(nth_weekday_of_month(date(2015, 2, 1), weekday, 4).is_err());
        }

        // 29-day month: February 2016 has five Mondays (1, 8, 15, 22, 29)
        assert_eq!(
            nth_weekday_of_month(date(2016, 2, 1), Weekday::Monday, 4).unwrap(),
            date(2016, 2, 29)
        );
        assert!(nth_weekday_of_month(date(2016, 2, 1), Weekday::Tuesday, 4).is_err());

        // 30-day month: April 2015 has five Wednesdays (1, 8, 15, 22, 29)
        assert_eq!(
            nth_weekday_of_month(date(2015, 4, 1), Weekday::Wednesday, 4).unwrap(),
            date(2015, 4, 29)
        );
        assert!(nth_weekday_of_month(date(2015, 4, 1), Weekday::Friday, 4).is_err());

        // 31-day month: December 2014 has five Mondays, Tuesdays, Wednesdays
        assert!(nth_weekday_of_month(date(2014, 12, 1), Weekday::Wednesday, 4).is_ok());
        assert!(nth_weekday_of_month(date(2014, 12, 1), Weekday::Wednesday, 5).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = nth_weekday_of_month(date(2014, 12, 15), Weekday::Wednesday, 10)
            .expect_err("December 2014 has no 11th Wednesday");
        assert_eq!(
            err.to_string(),
            "month 2014-12 has no occurrence 10 of Wednesday"
        );
    }

    #[test]
    fn test_current_month_conveniences() {
        let clock = FixedClock(date(2014, 12, 15));

        assert_eq!(first_day_of_current_month(&clock), date(2014, 12, 1));
        assert_eq!(last_day_of_current_month(&clock), date(2014, 12, 31));
        assert_eq!(
            first_weekday_of_current_month(&clock, Weekday::Thursday),
            date(2014, 12, 4)
        );
        assert_eq!(
            last_weekday_of_current_month(&clock, Weekday::Thursday),
            date(2014, 12, 25)
        );
        assert_eq!(
            nth_weekday_of_current_month(&clock, Weekday::Thursday, 1),
            Ok(date(2014, 12, 11))
        );
        assert!(nth_weekday_of_current_month(&clock, Weekday::Wednesday, 10).is_err());
    }
}
