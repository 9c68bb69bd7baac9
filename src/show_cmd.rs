//! Show command: print the calendars for one year.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ethcal_calendar::CalendarYear;
use ethcal_render::write_year;

use crate::cli::ShowArgs;
use crate::config::EthcalConfig;
use crate::convert;

/// Run the one-shot rendering for a single year.
pub fn run(args: ShowArgs, config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("show", year = %args.year).entered();
    let render_cfg = convert::build_render_config(&config.render, args.month, args.no_ethiopian)?;

    let calendar = CalendarYear::compute(args.year);
    info!(
        regime = %calendar.regime(),
        days = calendar.days_in_year(),
        "computed calendar year"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_year(&calendar, &render_cfg, &mut out).context("failed to write calendar")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
