//! Leap-year status for the Western and Ethiopian calendars.

use crate::regime::CalendarRegime;
use crate::year::Year;

/// Leap-year flags for one Gregorian/Julian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapStatus {
    western: bool,
    ethiopian: bool,
}

impl LeapStatus {
    /// Creates a status from explicit flags.
    pub fn new(western: bool, ethiopian: bool) -> Self {
        Self { western, ethiopian }
    }

    /// Whether the Gregorian/Julian year has 29 February.
    pub fn is_leap(self) -> bool {
        self.western
    }

    /// Whether the Ethiopian year starting in this year's September ends
    /// with a 6-day Pagume.
    pub fn is_ethiopian_leap(self) -> bool {
        self.ethiopian
    }
}

fn gregorian_leap(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn julian_leap(year: u64) -> bool {
    year % 4 == 0
}

/// Resolves the leap status of `year` under `regime`.
///
/// The Ethiopian flag is tested against `year + 1` with the same rule
/// family: Pagume 6 falls shortly before the following Western year.
pub fn resolve_leap_status(year: Year, regime: CalendarRegime) -> LeapStatus {
    let y = u64::from(year.get());
    let rule = match regime {
        CalendarRegime::Julian => julian_leap,
        CalendarRegime::Gregorian => gregorian_leap,
    };
    LeapStatus::new(rule(y), rule(y + 1))
}
