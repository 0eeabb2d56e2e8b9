use crate::consts::{DAYS_IN_WEEK, EPOCH_WEEKDAY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A day of the week with a fixed, locale-independent ordinal
/// (Monday = 0 .. Sunday = 6), used for offset arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    /// All seven weekdays in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the fixed ordinal of this weekday (Monday = 0 .. Sunday = 6)
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the weekday with the given ordinal, or `None` if `ordinal > 6`
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < DAYS_IN_WEEK {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Weekday for a civil day number (days since 1970-01-01, a Thursday).
    pub(crate) const fn from_day_number(day_number: i64) -> Self {
        let ordinal = (day_number + EPOCH_WEEKDAY).rem_euclid(DAYS_IN_WEEK as i64) as usize;
        Self::ALL[ordinal]
    }
}

/// A set of weekdays, stored as a seven-bit mask.
/// Duplicates collapse and insertion order is irrelevant; iteration is
/// always in ordinal order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set
    pub const EMPTY: Self = Self(0);
    /// Monday through Friday
    pub const WEEKDAYS: Self = Self(0b0001_1111);
    /// Saturday and Sunday
    pub const WEEKEND: Self = Self(0b0110_0000);
    /// Every day of the week
    pub const ALL: Self = Self(0b0111_1111);

    /// Creates an empty set
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns true if `weekday` is a member of this set
    #[inline]
    pub const fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.ordinal()) != 0
    }

    /// Returns a copy of this set with `weekday` added
    #[inline]
    pub const fn with(self, weekday: Weekday) -> Self {
        Self(self.0 | (1 << weekday.ordinal()))
    }

    /// Adds `weekday` to this set
    pub fn insert(&mut self, weekday: Weekday) {
        *self = self.with(weekday);
    }

    /// Removes `weekday` from this set
    pub fn remove(&mut self, weekday: Weekday) {
        self.0 &= !(1 << weekday.ordinal());
    }

    /// Number of weekdays in the set
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns true if the set contains no weekdays
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the members in ordinal order (Monday first)
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |wd| self.contains(*wd))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl<const N: usize> From<[Weekday; N]> for WeekdaySet {
    fn from(weekdays: [Weekday; N]) -> Self {
        weekdays.into_iter().collect()
    }
}
