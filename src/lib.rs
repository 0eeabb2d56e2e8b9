mod arith;
mod clock;
mod consts;
mod easter;
mod month;
mod prelude;
mod range;
mod types;
mod weekday;

pub use arith::{
    days_between, days_from, days_in_current_year, days_in_year, days_to, tomorrow, yesterday,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use easter::{
    easter_sunday, easter_sunday_of_current_year, next_easter_sunday, previous_easter_sunday,
};
pub use month::{
    OutOfRange, first_day_of_current_month, first_day_of_month, first_weekday_of_current_month,
    first_weekday_of_month, last_day_of_current_month, last_day_of_month,
    last_weekday_of_current_month, last_weekday_of_month, nth_weekday_of_current_month,
    nth_weekday_of_month,
};
pub use range::{every_weekday_in_range, every_weekday_until, every_weekday_within_days};
pub use types::{Day, Month, Year};
pub use weekday::{Weekday, WeekdaySet};

use crate::prelude::*;
use std::convert::TryFrom;
use std::str::FromStr;
use types::{day_number_from_ymd, ymd_from_day_number};

/// An immutable calendar date (year, month, day) with no time component.
/// Equality and ordering are by calendar-day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    pub(crate) year: types::Year,
    pub(crate) month: types::Month,
    pub(crate) day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl Date {
    /// The earliest representable date, 0001-01-01
    pub const MIN: Self = Self {
        year: Year::new_unchecked(MIN_YEAR),
        month: Month::new_unchecked(JANUARY),
        day: Day::new_unchecked(MIN_DAY),
    };

    /// The latest representable date, 9999-12-31
    pub const MAX: Self = Self {
        year: Year::new_unchecked(MAX_YEAR),
        month: Month::new_unchecked(DECEMBER),
        day: Day::new_unchecked(DAYS_IN_MONTH[DECEMBER as usize]),
    };

    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns `DateError` if the year, month, or day is out of range
    /// for the proleptic Gregorian calendar.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component as u16
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component as u8
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component as u8
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Civil day number of this date: days since 1970-01-01 (negative before).
    pub const fn day_number(&self) -> i64 {
        day_number_from_ymd(self.year.get() as i32, self.month.get(), self.day.get())
    }

    /// Date for a civil day number, or `None` outside `Date::MIN..=Date::MAX`.
    pub fn from_day_number(day_number: i64) -> Option<Self> {
        let (year, month, day) = ymd_from_day_number(day_number);
        if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&year) {
            return None;
        }
        Some(Self {
            year: Year::new_unchecked(year as u16),
            month: Month::new_unchecked(month),
            day: Day::new_unchecked(day),
        })
    }

    /// Weekday this date falls on.
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// The date `days` days after this one (before, if negative).
    /// Returns `None` if the result leaves the representable year range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.day_number()
            .checked_add(days)
            .and_then(Self::from_day_number)
    }
}

// --- parse helpers ---

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{sep}MM{sep}DD, found {} {sep} separators",
                parts.len() - 1,
                sep = DATE_SEPARATOR,
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
