//! Error types for the ethcal-calendar crate.

/// Error type for the boundary validation in the ethcal-calendar crate.
///
/// The conversion engine itself is total over [`Year`](crate::Year) and never
/// fails; these variants are only produced while turning raw user input into
/// a `Year` or a month selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the input cannot be parsed as an integer.
    #[error("invalid year format: {input:?}")]
    InvalidYearFormat {
        /// The raw input, trimmed.
        input: String,
    },

    /// Returned when a year below 1 reaches a constructor.
    ///
    /// Zero is only meaningful as the stop sentinel of
    /// [`parse_year_input`](crate::parse_year_input).
    #[error("invalid year: {year} (must be >= 1)")]
    NonPositiveYear {
        /// The rejected year value.
        year: i64,
    },

    /// Returned when the input is an integer too large to be a year.
    #[error("year out of range: {input}")]
    YearOutOfRange {
        /// The raw input, trimmed.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },
}
