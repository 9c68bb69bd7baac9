//! Day-by-day alignment of the Ethiopian calendar to a Western year.

use std::ops::Index;

use crate::anchor::EthiopianAnchor;
use crate::months::ETHIOPIAN_MONTHS;

/// Number of entries in an [`EthiopianDaySequence`].
pub const SEQUENCE_LEN: usize = 366;

/// Days in each of the twelve regular Ethiopian months.
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;

/// Month number of Pagume, the short 13th month.
pub const PAGUME: u8 = 13;

/// An Ethiopian `(month, day)` pair, month in 1..=13, day in 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Builds a date without range checks; callers inside the engine only
    /// pass values the rollover rules can produce.
    pub(crate) const fn new_unchecked(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Returns the month (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month name, e.g. `"Meskerem"` or `"Pagume"`.
    pub fn month_name(self) -> &'static str {
        ETHIOPIAN_MONTHS[usize::from(self.month) - 1]
    }

    /// Returns the next Ethiopian date.
    ///
    /// Pagume has 5 days, or 6 when `is_ethiopian_leap`; after it the
    /// calendar wraps to Meskerem 1. Other months have 30 days.
    pub fn next(self, is_ethiopian_leap: bool) -> Self {
        let pagume_end = if is_ethiopian_leap { 7 } else { 6 };
        let day = self.day + 1;
        if self.month == PAGUME && day == pagume_end {
            Self { month: 1, day: 1 }
        } else if day > ETHIOPIAN_MONTH_DAYS {
            Self {
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                month: self.month,
                day,
            }
        }
    }
}

/// Generates the Ethiopian dates for 366 consecutive Western days starting
/// at `anchor`.
pub fn ethiopian_date_sequence(
    anchor: EthiopianAnchor,
    is_ethiopian_leap: bool,
) -> Vec<EthiopianDate> {
    let mut dates = Vec::with_capacity(SEQUENCE_LEN);
    let mut current = anchor;
    for _ in 0..SEQUENCE_LEN {
        dates.push(current);
        current = current.next(is_ethiopian_leap);
    }
    dates
}

/// Ethiopian day-of-month numbers indexed by 0-based Western day of year.
///
/// Always 366 entries long; a consumer rendering a common year reads only
/// the first 365.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthiopianDaySequence([u8; SEQUENCE_LEN]);

impl EthiopianDaySequence {
    /// Returns the Ethiopian day for the 0-based `offset`, or `None` past
    /// the end of the sequence.
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.0.get(offset).copied()
    }

    /// Returns all 366 day numbers.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of entries (always 366).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for EthiopianDaySequence {
    type Output = u8;

    fn index(&self, offset: usize) -> &u8 {
        &self.0[offset]
    }
}

/// Generates the Ethiopian day-of-month sequence for a year.
pub fn generate_ethiopian_day_sequence(
    anchor: EthiopianAnchor,
    is_ethiopian_leap: bool,
) -> EthiopianDaySequence {
    let mut days = [0u8; SEQUENCE_LEN];
    let mut current = anchor;
    for slot in days.iter_mut() {
        *slot = current.day();
        current = current.next(is_ethiopian_leap);
    }
    EthiopianDaySequence(days)
}
