use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ethcal_calendar::Year;

/// Ethiopian and Gregorian/Julian calendars, side by side.
#[derive(Parser)]
#[command(
    name = "ethcal",
    version,
    about = "Ethiopian and Gregorian/Julian calendars side by side"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the calendars for a single year.
    Show(ShowArgs),
    /// Prompt for years until 0 is entered.
    Interactive,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Gregorian/Julian year (>= 1).
    pub year: Year,

    /// Only print this Gregorian month (1..=12).
    #[arg(short, long)]
    pub month: Option<u8>,

    /// Omit the Ethiopian day row under each week.
    #[arg(long)]
    pub no_ethiopian: bool,
}
