//! Year newtype and boundary parsing of user-supplied years.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::CalendarError;

/// A Gregorian/Julian calendar year (>= 1).
///
/// Every engine function takes a `Year`, which is what makes them total:
/// validation happens once, here, and never again downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u32);

impl Year {
    /// Creates a new `Year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NonPositiveYear`] if `year` is 0.
    pub fn new(year: u32) -> Result<Self, CalendarError> {
        if year == 0 {
            return Err(CalendarError::NonPositiveYear { year: 0 });
        }
        Ok(Self(year))
    }

    /// Returns the inner year value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Century part of the year (`year / 100`).
    pub(crate) fn century(self) -> u32 {
        self.0 / 100
    }

    /// Two-digit year within the century (`year % 100`).
    pub(crate) fn year_of_century(self) -> u32 {
        self.0 % 100
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = CalendarError;

    /// Parses a year, rejecting the 0 sentinel that [`parse_year_input`]
    /// accepts as "stop".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_year_input(s)?.ok_or(CalendarError::NonPositiveYear { year: 0 })
    }
}

/// Parses one line of user input into a year.
///
/// Returns `Ok(None)` for `0`, the stop sentinel of the interactive loop.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`CalendarError::InvalidYearFormat`] if the input is not an integer.
/// - [`CalendarError::NonPositiveYear`] if the integer is negative.
/// - [`CalendarError::YearOutOfRange`] if the integer does not fit a year.
///
/// # Examples
///
/// ```
/// use ethcal_calendar::parse_year_input;
///
/// assert_eq!(parse_year_input(" 2024 ").unwrap().unwrap().get(), 2024);
/// assert_eq!(parse_year_input("0").unwrap(), None);
/// assert!(parse_year_input("-3").is_err());
/// ```
pub fn parse_year_input(input: &str) -> Result<Option<Year>, CalendarError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                CalendarError::YearOutOfRange {
                    input: trimmed.to_string(),
                }
            }
            _ => CalendarError::InvalidYearFormat {
                input: trimmed.to_string(),
            },
        }
    })?;

    if value == 0 {
        return Ok(None);
    }
    if value < 0 {
        return Err(CalendarError::NonPositiveYear { year: value });
    }
    let year = u32::try_from(value).map_err(|_| CalendarError::YearOutOfRange {
        input: trimmed.to_string(),
    })?;
    Ok(Some(Year(year)))
}

/// Returns the two Ethiopian years overlapping a Gregorian/Julian year.
///
/// The Ethiopian new year falls in September, so January..August belong to
/// `year - 8` and September..December to `year - 7`. Years up to 8 have no
/// positive Ethiopian counterpart and yield `None`.
pub fn ethiopian_years(year: Year) -> Option<(u32, u32)> {
    let y = year.get();
    if y > 8 { Some((y - 8, y - 7)) } else { None }
}
