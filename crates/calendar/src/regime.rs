//! Regime classification and epoch offset.

use std::fmt;

use crate::transition::TransitionYear;
use crate::year::Year;

/// Calendar convention governing leap years and weekdays for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarRegime {
    /// Julian rules, for years up to and including 1752.
    Julian,
    /// Gregorian rules, for years after 1752.
    Gregorian,
}

impl CalendarRegime {
    /// Returns `true` for [`CalendarRegime::Julian`].
    pub fn is_julian(self) -> bool {
        matches!(self, Self::Julian)
    }
}

impl fmt::Display for CalendarRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Julian => f.write_str("Julian"),
            Self::Gregorian => f.write_str("Gregorian"),
        }
    }
}

/// Classifies `year` as Julian (`<= 1752`) or Gregorian.
pub fn classify_regime(year: Year) -> CalendarRegime {
    if year.get() <= TransitionYear::YEAR {
        CalendarRegime::Julian
    } else {
        CalendarRegime::Gregorian
    }
}

/// Correction applied to the Ethiopian anchor day outside 1900..=2100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpochOffset(i8);

impl EpochOffset {
    /// First year without correction.
    pub const WINDOW_START: u32 = 1900;
    /// Last year without correction.
    pub const WINDOW_END: u32 = 2100;

    /// Returns the offset value (-1, 0 or 1).
    pub fn get(self) -> i8 {
        self.0
    }
}

/// Computes the epoch offset: +1 before 1900, -1 after 2100, else 0.
pub fn compute_epoch_offset(year: Year) -> EpochOffset {
    let y = year.get();
    if y < EpochOffset::WINDOW_START {
        EpochOffset(1)
    } else if y > EpochOffset::WINDOW_END {
        EpochOffset(-1)
    } else {
        EpochOffset(0)
    }
}
