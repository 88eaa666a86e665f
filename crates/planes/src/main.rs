//! `planes` - CLI for keeping a list of airplane flights
//!
//! This binary parses the command line, sets up configuration and logging,
//! and hands the command to the dispatcher.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use planes::cli::Cli;
use planes::{Config, Dispatcher, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Logging stays active until `logger` is dropped at the end of main
    let logger = Logger::init(&config.logging, cli.verbosity()).context("starting logging")?;

    let dispatcher = Dispatcher::for_current_user(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatcher
        .run(&cli.command, &mut out)
        .with_context(|| format!("running '{}'", cli.command.name()))?;
    out.flush()?;

    logger.flush()?;
    Ok(())
}
