//! Week-by-week layout of a single month.

/// One week row: seven cells, Sunday first, `None` for padding.
pub type Week = [Option<u8>; 7];

/// The weeks of one month laid out on a Sunday-first grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lays out a month of `length` days whose first day falls on
    /// `start_weekday` (0 = Sunday).
    ///
    /// `start_weekday` is taken modulo 7.
    pub fn new(start_weekday: u8, length: u8) -> Self {
        let first = usize::from(start_weekday % 7);
        let length = usize::from(length);
        let n_weeks = (first + length).div_ceil(7);

        let mut weeks = vec![[None; 7]; n_weeks];
        for day in 1..=length {
            let slot = first + day - 1;
            // day <= 31 always fits u8
            weeks[slot / 7][slot % 7] = Some(day as u8);
        }
        Self { weeks }
    }

    /// Returns the week rows.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of week rows.
    pub fn n_weeks(&self) -> usize {
        self.weeks.len()
    }
}
