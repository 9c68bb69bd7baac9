//! Month lengths and month-name tables.

use crate::leap::LeapStatus;
use crate::regime::CalendarRegime;
use crate::transition::TransitionYear;
use crate::year::Year;

/// Day count of each Gregorian/Julian month, January first.
pub type MonthLengths = [u8; 12];

/// Gregorian/Julian month names.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-based weekday abbreviations.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Ethiopian month names, Meskerem (1) through Pagume (13).
pub const ETHIOPIAN_MONTHS: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahisas", "Tir", "Yekatit", "Megabit", "Meyazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// Ethiopian months overlapping each Western month under Julian rules.
pub const ETHIOPIAN_MONTHS_JULIAN: [&str; 12] = [
    "Tir-Yekatit",
    "Yekatit-Megabit",
    "Megabit-Meyazia",
    "Meyazia-Ginbot",
    "Ginbot-Sene",
    "Sene-Hamle",
    "Hamle-Nehase",
    "Nehase-Pagume-Meskerem",
    "Meskerem-Tikimt",
    "Tikimt-Hidar",
    "Hidar-Tahisas",
    "Tahisas-Tir",
];

/// Ethiopian months overlapping each Western month under Gregorian rules.
pub const ETHIOPIAN_MONTHS_GREGORIAN: [&str; 12] = [
    "Tahisas-Tir",
    "Tir-Yekatit",
    "Yekatit-Megabit",
    "Megabit-Meyazia",
    "Meyazia-Ginbot",
    "Ginbot-Sene",
    "Sene-Hamle",
    "Hamle-Nehase",
    "Nehase-Pagume-Meskerem",
    "Meskerem-Tikimt",
    "Tikimt-Hidar",
    "Hidar-Tahisas",
];

/// Label used for the transition year, which only names its truncated month.
const TRANSITION_MONTHS: [&str; 1] = ["Meskerem"];

/// Returns the length of each month of `year`.
///
/// February follows `leap`; September 1752 is truncated to 19 days.
pub fn month_lengths(leap: LeapStatus, year: Year) -> MonthLengths {
    let february = if leap.is_leap() { 29 } else { 28 };
    let mut lengths = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if TransitionYear::applies(year) {
        lengths[TransitionYear::MONTH_INDEX] = TransitionYear::TRUNCATED_LENGTH;
    }
    lengths
}

/// Returns the Ethiopian month labels for the twelve Western months.
///
/// The transition year yields a single entry, `["Meskerem"]`, which labels
/// its truncated September only.
pub fn ethiopian_month_names(regime: CalendarRegime, year: Year) -> &'static [&'static str] {
    if TransitionYear::applies(year) {
        return &TRANSITION_MONTHS;
    }
    match regime {
        CalendarRegime::Julian => &ETHIOPIAN_MONTHS_JULIAN,
        CalendarRegime::Gregorian => &ETHIOPIAN_MONTHS_GREGORIAN,
    }
}

/// Resolves the Ethiopian label of the 0-based Western `month_index` from a
/// table returned by [`ethiopian_month_names`].
pub fn ethiopian_month_label(names: &[&'static str], month_index: usize) -> Option<&'static str> {
    match names.len() {
        12 => names.get(month_index).copied(),
        1 if month_index == TransitionYear::MONTH_INDEX => names.first().copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap::resolve_leap_status;
    use crate::regime::classify_regime;

    fn year(y: u32) -> Year {
        Year::new(y).unwrap()
    }

    fn lengths(y: u32) -> MonthLengths {
        let y = year(y);
        month_lengths(resolve_leap_status(y, classify_regime(y)), y)
    }

    #[test]
    fn common_year_totals_365() {
        let l = lengths(2023);
        assert_eq!(l[1], 28);
        assert_eq!(l.iter().map(|&d| u32::from(d)).sum::<u32>(), 365);
    }

    #[test]
    fn leap_year_totals_366() {
        let l = lengths(2024);
        assert_eq!(l[1], 29);
        assert_eq!(l.iter().map(|&d| u32::from(d)).sum::<u32>(), 366);
    }

    #[test]
    fn transition_year_truncates_september() {
        let l = lengths(1752);
        assert_eq!(l[8], 19);
        assert_eq!(l[1], 29);
        assert_eq!(l.iter().map(|&d| u32::from(d)).sum::<u32>(), 355);
    }

    #[test]
    fn names_by_regime() {
        assert_eq!(
            ethiopian_month_names(CalendarRegime::Julian, year(1700)),
            &ETHIOPIAN_MONTHS_JULIAN
        );
        assert_eq!(
            ethiopian_month_names(CalendarRegime::Gregorian, year(2024)),
            &ETHIOPIAN_MONTHS_GREGORIAN
        );
    }

    #[test]
    fn names_transition_year() {
        let names = ethiopian_month_names(CalendarRegime::Julian, year(1752));
        assert_eq!(names, ["Meskerem"]);
    }

    #[test]
    fn label_lookup() {
        let names = ethiopian_month_names(CalendarRegime::Gregorian, year(2024));
        assert_eq!(ethiopian_month_label(names, 0), Some("Tahisas-Tir"));
        assert_eq!(ethiopian_month_label(names, 11), Some("Hidar-Tahisas"));
        assert_eq!(ethiopian_month_label(names, 12), None);
    }

    #[test]
    fn label_lookup_transition_year() {
        let names = ethiopian_month_names(CalendarRegime::Julian, year(1752));
        assert_eq!(ethiopian_month_label(names, 8), Some("Meskerem"));
        assert_eq!(ethiopian_month_label(names, 0), None);
        assert_eq!(ethiopian_month_label(names, 9), None);
    }

    #[test]
    fn month_name_tables_shift_by_one() {
        assert_eq!(ETHIOPIAN_MONTHS_JULIAN[..11], ETHIOPIAN_MONTHS_GREGORIAN[1..]);
    }
}
