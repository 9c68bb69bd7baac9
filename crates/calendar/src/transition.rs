//! The 1752 Julian-to-Gregorian transition year.
//!
//! All special-casing of 1752 lives here so the engine functions that need
//! it (regime boundary, month lengths, month names, display day numbers)
//! share one definition.

use crate::year::Year;

/// Constants and checks for the transition year.
#[derive(Debug, Clone, Copy)]
pub struct TransitionYear;

impl TransitionYear {
    /// The last Julian year, during which September was truncated.
    pub const YEAR: u32 = 1752;

    /// 0-based index of the truncated month (September).
    pub const MONTH_INDEX: usize = 8;

    /// Number of days September is rendered with in the transition year.
    pub const TRUNCATED_LENGTH: u8 = 19;

    /// First September day number shifted on display.
    pub const SHIFT_FROM_DAY: u8 = 3;

    /// Shift added to shifted day numbers (3 September is shown as 14).
    pub const DISPLAY_SHIFT: u8 = 11;

    /// Whether `year` is the transition year.
    pub fn applies(year: Year) -> bool {
        year.get() == Self::YEAR
    }

    /// Returns the Gregorian day number shown for `day` of the 0-based
    /// `month_index` in `year`.
    ///
    /// Identity everywhere except September 1752, where days from the 3rd
    /// onward carry the dropped days.
    pub fn display_day(year: Year, month_index: usize, day: u8) -> u8 {
        if Self::applies(year) && month_index == Self::MONTH_INDEX && day >= Self::SHIFT_FROM_DAY
        {
            day.saturating_add(Self::DISPLAY_SHIFT)
        } else {
            day
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: u32) -> Year {
        Year::new(y).unwrap()
    }

    #[test]
    fn applies_only_to_1752() {
        assert!(TransitionYear::applies(year(1752)));
        assert!(!TransitionYear::applies(year(1751)));
        assert!(!TransitionYear::applies(year(1753)));
    }

    #[test]
    fn display_day_september_1752() {
        let y = year(1752);
        assert_eq!(TransitionYear::display_day(y, 8, 1), 1);
        assert_eq!(TransitionYear::display_day(y, 8, 2), 2);
        assert_eq!(TransitionYear::display_day(y, 8, 3), 14);
        assert_eq!(TransitionYear::display_day(y, 8, 19), 30);
    }

    #[test]
    fn display_day_other_months_untouched() {
        let y = year(1752);
        for month_index in (0..12).filter(|&m| m != 8) {
            assert_eq!(TransitionYear::display_day(y, month_index, 15), 15);
        }
    }

    #[test]
    fn display_day_other_years_untouched() {
        assert_eq!(TransitionYear::display_day(year(1753), 8, 3), 3);
        assert_eq!(TransitionYear::display_day(year(2024), 8, 20), 20);
    }
}
