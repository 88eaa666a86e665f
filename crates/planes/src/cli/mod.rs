//! Command-line interface for planes.
//!
//! This module provides the CLI structure for the `planes` binary.

mod commands;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, DisplayCommand, OutputFormat, SelectCommand};

/// planes - Keep a list of airplane flights
///
/// Flights are stored as a JSON array in a data file that is always looked
/// up relative to your home directory.
#[derive(Debug, Parser)]
#[command(name = "planes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new plane
    Add(AddCommand),

    /// Display all planes
    Display(DisplayCommand),

    /// Select the planes of one type
    Select(SelectCommand),
}

impl Command {
    /// The subcommand name, for log messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Display(_) => "display",
            Self::Select(_) => "select",
        }
    }

    /// The data file name as typed on the command line.
    #[must_use]
    pub fn filename(&self) -> &Path {
        match self {
            Self::Add(cmd) => &cmd.filename,
            Self::Display(cmd) => &cmd.filename,
            Self::Select(cmd) => &cmd.filename,
        }
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
