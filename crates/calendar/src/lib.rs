//! # ethcal-calendar
//!
//! Pure conversion engine aligning the Ethiopian calendar with the
//! Gregorian/Julian calendar for a single year, including the 1752
//! Julian-to-Gregorian transition.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     Y["Year"] -->|"classify_regime()"| R["CalendarRegime"]
//!     Y -->|"compute_epoch_offset()"| O["EpochOffset"]
//!     R -->|"resolve_leap_status()"| L["LeapStatus"]
//!     L -->|"locate_ethiopian_anchor()"| A["EthiopianAnchor"]
//!     O --> A
//!     L -->|"compute_month_start_weekdays()"| W["[u8; 12] weekdays"]
//!     A -->|"generate_ethiopian_day_sequence()"| S["EthiopianDaySequence"]
//!     L -->|"month_lengths()"| M["[u8; 12] lengths"]
//!     R -->|"ethiopian_month_names()"| N["month labels"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ethcal_calendar::{CalendarRegime, CalendarYear, Year};
//!
//! let cy = CalendarYear::compute(Year::new(2024).unwrap());
//! assert_eq!(cy.regime(), CalendarRegime::Gregorian);
//! assert_eq!(cy.start_weekdays()[0], 1); // 1 January 2024 was a Monday
//! assert_eq!(cy.anchor().day(), 22);     // ... and Tahisas 22
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Year newtype and input parsing |
//! | `regime` | Julian/Gregorian classification and epoch offset |
//! | `leap` | Western and Ethiopian leap years |
//! | `anchor` | Ethiopian date of 1 January |
//! | `weekday` | Starting weekday of each month |
//! | `months` | Month lengths and name tables |
//! | `sequence` | Ethiopian day-by-day alignment |
//! | `transition` | 1752 special cases |
//! | `calendar_year` | Per-year bundle of all of the above |
//! | `error` | Error types |

mod anchor;
mod calendar_year;
mod error;
mod leap;
mod months;
mod regime;
mod sequence;
mod transition;
mod weekday;
mod year;

pub use anchor::{EthiopianAnchor, locate_ethiopian_anchor};
pub use calendar_year::CalendarYear;
pub use error::CalendarError;
pub use leap::{LeapStatus, resolve_leap_status};
pub use months::{
    ETHIOPIAN_MONTHS, ETHIOPIAN_MONTHS_GREGORIAN, ETHIOPIAN_MONTHS_JULIAN, GREGORIAN_MONTHS,
    MonthLengths, WEEKDAY_ABBREVIATIONS, ethiopian_month_label, ethiopian_month_names,
    month_lengths,
};
pub use regime::{CalendarRegime, EpochOffset, classify_regime, compute_epoch_offset};
pub use sequence::{
    EthiopianDate, EthiopianDaySequence, PAGUME, SEQUENCE_LEN, ethiopian_date_sequence,
    generate_ethiopian_day_sequence,
};
pub use transition::TransitionYear;
pub use weekday::{MonthStartWeekdays, compute_month_start_weekdays};
pub use year::{Year, ethiopian_years, parse_year_input};
