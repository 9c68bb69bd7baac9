//! All derived data for one Gregorian/Julian year.

use tracing::debug;

use crate::anchor::{EthiopianAnchor, locate_ethiopian_anchor};
use crate::leap::{LeapStatus, resolve_leap_status};
use crate::months::{MonthLengths, ethiopian_month_names, month_lengths};
use crate::regime::{CalendarRegime, EpochOffset, classify_regime, compute_epoch_offset};
use crate::sequence::{EthiopianDaySequence, generate_ethiopian_day_sequence};
use crate::weekday::{MonthStartWeekdays, compute_month_start_weekdays};
use crate::year::{Year, ethiopian_years};

/// The engine output for one year, ready for rendering.
///
/// Built once per requested year by [`CalendarYear::compute`]; nothing is
/// cached between years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarYear {
    year: Year,
    regime: CalendarRegime,
    leap: LeapStatus,
    epoch_offset: EpochOffset,
    anchor: EthiopianAnchor,
    start_weekdays: MonthStartWeekdays,
    month_lengths: MonthLengths,
    ethiopian_month_names: &'static [&'static str],
    ethiopian_days: EthiopianDaySequence,
}

impl CalendarYear {
    /// Runs every engine stage for `year`.
    pub fn compute(year: Year) -> Self {
        let regime = classify_regime(year);
        let leap = resolve_leap_status(year, regime);
        let epoch_offset = compute_epoch_offset(year);
        debug!(
            %year,
            %regime,
            is_leap = leap.is_leap(),
            is_ethiopian_leap = leap.is_ethiopian_leap(),
            epoch_offset = epoch_offset.get(),
            "resolved calendar regime"
        );

        let anchor = locate_ethiopian_anchor(leap, regime, epoch_offset);
        debug!(month = anchor.month(), day = anchor.day(), "located Ethiopian anchor");

        let start_weekdays = compute_month_start_weekdays(year, regime, leap);
        debug!(?start_weekdays, "computed month start weekdays");

        let ethiopian_days = generate_ethiopian_day_sequence(anchor, leap.is_ethiopian_leap());
        debug!(
            head = ?&ethiopian_days.as_slice()[..12],
            "generated Ethiopian day sequence"
        );

        Self {
            year,
            regime,
            leap,
            epoch_offset,
            anchor,
            start_weekdays,
            month_lengths: month_lengths(leap, year),
            ethiopian_month_names: ethiopian_month_names(regime, year),
            ethiopian_days,
        }
    }

    /// Returns the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Returns the calendar regime.
    pub fn regime(&self) -> CalendarRegime {
        self.regime
    }

    /// Returns the leap status.
    pub fn leap(&self) -> LeapStatus {
        self.leap
    }

    /// Returns the epoch offset applied to the anchor.
    pub fn epoch_offset(&self) -> EpochOffset {
        self.epoch_offset
    }

    /// Returns the Ethiopian date of 1 January.
    pub fn anchor(&self) -> EthiopianAnchor {
        self.anchor
    }

    /// Returns the weekday (0 = Sunday) of day 1 of each month.
    pub fn start_weekdays(&self) -> &MonthStartWeekdays {
        &self.start_weekdays
    }

    /// Returns the length of each month.
    pub fn month_lengths(&self) -> &MonthLengths {
        &self.month_lengths
    }

    /// Returns the Ethiopian month labels (12 entries, or 1 for 1752).
    pub fn ethiopian_month_names(&self) -> &'static [&'static str] {
        self.ethiopian_month_names
    }

    /// Returns the Ethiopian day-of-month sequence.
    pub fn ethiopian_days(&self) -> &EthiopianDaySequence {
        &self.ethiopian_days
    }

    /// Returns the Ethiopian years spanned by this year, if any.
    pub fn ethiopian_years(&self) -> Option<(u32, u32)> {
        ethiopian_years(self.year)
    }

    /// Total number of days across the twelve months.
    pub fn days_in_year(&self) -> u16 {
        self.month_lengths.iter().map(|&d| u16::from(d)).sum()
    }

    /// 0-based day offset of day 1 of the 0-based `month_index`.
    ///
    /// # Panics
    ///
    /// Panics if `month_index > 12`.
    pub fn month_offset(&self, month_index: usize) -> usize {
        self.month_lengths[..month_index]
            .iter()
            .map(|&d| usize::from(d))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(y: u32) -> CalendarYear {
        CalendarYear::compute(Year::new(y).unwrap())
    }

    #[test]
    fn year_2000() {
        let cy = compute(2000);
        assert_eq!(cy.regime(), CalendarRegime::Gregorian);
        assert!(cy.leap().is_leap());
        assert!(!cy.leap().is_ethiopian_leap());
        assert_eq!(cy.anchor().month(), 4);
        assert_eq!(cy.anchor().day(), 22);
        assert_eq!(cy.days_in_year(), 366);
    }

    #[test]
    fn year_1752() {
        let cy = compute(1752);
        assert_eq!(cy.regime(), CalendarRegime::Julian);
        assert_eq!(cy.month_lengths()[8], 19);
        assert_eq!(cy.ethiopian_month_names(), ["Meskerem"]);
        assert_eq!(cy.anchor().month(), 5);
        assert_eq!(cy.anchor().day(), 6);
        assert_eq!(cy.days_in_year(), 355);
    }

    #[test]
    fn year_1() {
        let cy = compute(1);
        assert_eq!(cy.regime(), CalendarRegime::Julian);
        assert!(!cy.leap().is_leap());
        assert_eq!(cy.ethiopian_years(), None);
    }

    #[test]
    fn month_offsets() {
        let cy = compute(2023);
        assert_eq!(cy.month_offset(0), 0);
        assert_eq!(cy.month_offset(1), 31);
        assert_eq!(cy.month_offset(8), 243);
        assert_eq!(cy.month_offset(12), 365);
    }

    #[test]
    fn ethiopian_days_are_consistent_with_anchor() {
        let cy = compute(2023);
        assert_eq!(cy.ethiopian_days()[0], cy.anchor().day());
        assert_eq!(cy.ethiopian_days().len(), 366);
    }
}
