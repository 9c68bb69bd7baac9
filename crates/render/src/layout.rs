//! Text layout of a full year (or one month) as weekly grids.

use std::fmt::Write as _;
use std::io;

use ethcal_calendar::{
    CalendarYear, GREGORIAN_MONTHS, TransitionYear, WEEKDAY_ABBREVIATIONS, ethiopian_month_label,
};
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::grid::MonthGrid;

/// Renders `calendar` as text.
///
/// Each month block starts with a blank line, the year header, the
/// Ethiopian years (for years after 8), the Gregorian month name followed
/// by its Ethiopian label, and a Sunday-first grid. Under each Gregorian
/// week the aligned Ethiopian day numbers are printed, unless disabled in
/// `config` or the year has no Ethiopian counterpart.
///
/// # Errors
///
/// Returns [`RenderError::InvalidConfig`] if `config` fails validation.
pub fn render_year(calendar: &CalendarYear, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;
    let mut out = String::new();
    for month_index in config.month_indices() {
        render_month(&mut out, calendar, month_index, config)?;
    }
    debug!(
        year = %calendar.year(),
        n_bytes = out.len(),
        "rendered calendar"
    );
    Ok(out)
}

/// Renders `calendar` and writes it to `out`.
///
/// # Errors
///
/// Returns [`RenderError::InvalidConfig`] for an invalid `config`, or
/// [`RenderError::Io`] if writing fails.
pub fn write_year<W: io::Write>(
    calendar: &CalendarYear,
    config: &RenderConfig,
    out: &mut W,
) -> Result<(), RenderError> {
    let text = render_year(calendar, config)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render_month(
    out: &mut String,
    calendar: &CalendarYear,
    month_index: usize,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let w = config.cell_width();
    let year = calendar.year();
    let ethiopian_years = calendar.ethiopian_years();
    // seven cells of `w` plus six inner separators
    let rule = format!("|{}|", "-".repeat(7 * (w + 1) - 1));

    writeln!(out)?;
    writeln!(out, "Gregorian Year: {year}")?;
    if let Some((first, second)) = ethiopian_years {
        writeln!(out, "\tEthiopian Years: {first} - {second}")?;
    }
    let label = ethiopian_years
        .and_then(|_| ethiopian_month_label(calendar.ethiopian_month_names(), month_index))
        .unwrap_or("");
    writeln!(out, "{}\t\t{label}", GREGORIAN_MONTHS[month_index])?;
    writeln!(out, "{rule}")?;
    out.push('|');
    for abbr in WEEKDAY_ABBREVIATIONS {
        write!(out, "{abbr:<w$}|")?;
    }
    writeln!(out)?;
    writeln!(out, "{rule}")?;

    let grid = MonthGrid::new(
        calendar.start_weekdays()[month_index],
        calendar.month_lengths()[month_index],
    );
    let offset = calendar.month_offset(month_index);
    let ethiopian_row = config.ethiopian_row() && ethiopian_years.is_some();

    for week in grid.weeks() {
        out.push('|');
        for cell in week {
            match cell {
                Some(day) => {
                    let shown = TransitionYear::display_day(year, month_index, *day);
                    write!(out, "{shown:>w$}|")?;
                }
                None => write!(out, "{:w$}|", "")?,
            }
        }
        writeln!(out)?;

        if ethiopian_row {
            out.push('|');
            for cell in week {
                let ethiopian = cell.and_then(|day| {
                    calendar
                        .ethiopian_days()
                        .get(offset + usize::from(day) - 1)
                });
                match ethiopian {
                    Some(day) => write!(out, "{day:<w$}|")?,
                    None => write!(out, "{:w$}|", "")?,
                }
            }
            writeln!(out)?;
        }
        writeln!(out, "{rule}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethcal_calendar::Year;

    fn compute(y: u32) -> CalendarYear {
        CalendarYear::compute(Year::new(y).unwrap())
    }

    #[test]
    fn twelve_month_blocks() {
        let text = render_year(&compute(2024), &RenderConfig::default()).unwrap();
        assert_eq!(text.matches("Gregorian Year: 2024").count(), 12);
        assert_eq!(text.matches("\tEthiopian Years: 2016 - 2017").count(), 12);
    }

    #[test]
    fn rule_width_follows_cell_width() {
        let cfg = RenderConfig::default().with_cell_width(3).with_month(Some(1));
        let text = render_year(&compute(2024), &cfg).unwrap();
        assert!(text.contains(&format!("|{}|\n", "-".repeat(27))));
        assert!(text.contains("|Sun|Mon|Tue|Wed|Thu|Fri|Sat|\n"));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = RenderConfig::default().with_month(Some(13));
        assert!(matches!(
            render_year(&compute(2024), &cfg),
            Err(RenderError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn write_year_matches_render_year() {
        let cy = compute(1999);
        let cfg = RenderConfig::default().with_month(Some(2));
        let mut buf = Vec::new();
        write_year(&cy, &cfg, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_year(&cy, &cfg).unwrap());
    }
}
