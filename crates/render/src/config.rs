//! Rendering options.

use ethcal_calendar::CalendarError;

use crate::error::RenderError;

/// Smallest cell width that still fits the weekday abbreviations.
pub const MIN_CELL_WIDTH: usize = 3;

/// Largest accepted cell width.
pub const MAX_CELL_WIDTH: usize = 32;

/// Options controlling how a year is laid out.
///
/// # Example
///
/// ```
/// use ethcal_render::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_cell_width(5)
///     .with_ethiopian_row(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of each day cell, excluding the `|` separator.
    cell_width: usize,
    /// Whether to print the Ethiopian day row under each week.
    ethiopian_row: bool,
    /// Single Gregorian month (1..=12) to render; `None` renders all twelve.
    month: Option<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_width: 7,
            ethiopian_row: true,
            month: None,
        }
    }
}

impl RenderConfig {
    /// Sets the cell width.
    pub fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }

    /// Enables or disables the Ethiopian day row.
    pub fn with_ethiopian_row(mut self, enabled: bool) -> Self {
        self.ethiopian_row = enabled;
        self
    }

    /// Restricts output to one Gregorian month (1..=12).
    pub fn with_month(mut self, month: Option<u8>) -> Self {
        self.month = month;
        self
    }

    /// Returns the cell width.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Returns whether the Ethiopian day row is printed.
    pub fn ethiopian_row(&self) -> bool {
        self.ethiopian_row
    }

    /// Returns the selected month, if any.
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    /// Returns the 0-based month indices to render, in order.
    pub(crate) fn month_indices(&self) -> std::ops::Range<usize> {
        match self.month {
            Some(m) => {
                let i = usize::from(m) - 1;
                i..i + 1
            }
            None => 0..12,
        }
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] if the cell width is outside
    /// `MIN_CELL_WIDTH..=MAX_CELL_WIDTH` or the month is outside 1..=12.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            return Err(RenderError::InvalidConfig {
                reason: format!(
                    "cell_width must be in {MIN_CELL_WIDTH}..={MAX_CELL_WIDTH}, got {}",
                    self.cell_width
                ),
            });
        }
        if let Some(month) = self.month.filter(|m| !(1..=12).contains(m)) {
            return Err(RenderError::InvalidConfig {
                reason: CalendarError::InvalidMonth { month }.to_string(),
            });
        }
        Ok(())
    }
}
