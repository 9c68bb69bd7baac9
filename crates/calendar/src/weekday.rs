//! Weekday on which each Gregorian/Julian month starts.

use crate::leap::LeapStatus;
use crate::regime::CalendarRegime;
use crate::year::Year;

/// Weekday index (0 = Sunday .. 6 = Saturday) of day 1 of each month.
pub type MonthStartWeekdays = [u8; 12];

/// Per-month offsets of the day-of-week congruence, January first.
const MONTH_CODES: [i64; 12] = [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

fn century_code(century: i64, regime: CalendarRegime) -> i64 {
    match regime {
        CalendarRegime::Julian => (18 - century).rem_euclid(7),
        CalendarRegime::Gregorian => (3 - century.rem_euclid(4)) * 2,
    }
}

/// Computes the starting weekday of all twelve months of `year`.
///
/// Uses the century/year/month code congruence. January and February of a
/// leap year are pulled back one day because the code table assumes the
/// leap day already happened.
pub fn compute_month_start_weekdays(
    year: Year,
    regime: CalendarRegime,
    leap: LeapStatus,
) -> MonthStartWeekdays {
    let yy = i64::from(year.year_of_century());
    let year_code = (yy + yy / 4) % 7;
    let century_code = century_code(i64::from(year.century()), regime);

    let mut starts = [0u8; 12];
    for (i, (slot, month_code)) in starts.iter_mut().zip(MONTH_CODES).enumerate() {
        let leap_adj = if leap.is_leap() && i < 2 { -1 } else { 0 };
        let weekday = (year_code + month_code + century_code + 1 + leap_adj).rem_euclid(7);
        // rem_euclid(7) is always in 0..=6
        *slot = weekday as u8;
    }
    starts
}
