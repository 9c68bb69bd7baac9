mod cli;
mod config;
mod convert;
mod interactive_cmd;
mod logging;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Show(args) => show_cmd::run(args, &config),
        Command::Interactive => interactive_cmd::run(&config),
    }
}
