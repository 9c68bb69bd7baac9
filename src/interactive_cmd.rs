//! Interactive command: prompt for years until the user enters 0.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use ethcal_calendar::{CalendarError, CalendarYear, parse_year_input};
use ethcal_render::{RenderConfig, write_year};

use crate::config::EthcalConfig;
use crate::convert;

const INVALID_FORMAT_MESSAGE: &str = "Invalid input! Please enter a valid year.";
const INVALID_YEAR_MESSAGE: &str = "You entered an invalid year!";

/// Run the prompt loop on stdin/stdout.
pub fn run(config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("interactive").entered();
    let render_cfg = convert::build_render_config(&config.render, None, false)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(
        stdin.lock(),
        stdout.lock(),
        &config.interactive.prompt,
        &render_cfg,
    )
}

/// Prompts on `out`, reads years from `input` and renders each one.
///
/// Stops on `0` or end of input. Malformed and negative years are reported
/// and the loop continues.
pub fn run_loop<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    prompt: &str,
    render_cfg: &RenderConfig,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_year_input(&line) {
            Ok(None) => break,
            Ok(Some(year)) => {
                info!(%year, "rendering year");
                let calendar = CalendarYear::compute(year);
                write_year(&calendar, render_cfg, &mut out)
                    .with_context(|| format!("failed to render year {year}"))?;
            }
            Err(e @ CalendarError::InvalidYearFormat { .. }) => {
                debug!(error = %e, "rejected input");
                writeln!(out, "{INVALID_FORMAT_MESSAGE}")?;
            }
            Err(e) => {
                debug!(error = %e, "rejected input");
                writeln!(out, "{INVALID_YEAR_MESSAGE}")?;
            }
        }
    }
    Ok(())
}
