//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::display::Format;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The data file name (relative to your home directory)
    pub filename: PathBuf,

    /// The plane's destination
    #[arg(short, long)]
    pub destination: String,

    /// The plane's flight number
    #[arg(short, long, allow_negative_numbers = true)]
    pub num: i64,

    /// The plane's type
    #[arg(short, long)]
    pub typ: String,
}

/// Display command arguments.
#[derive(Debug, Args)]
pub struct DisplayCommand {
    /// The data file name (relative to your home directory)
    pub filename: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Select command arguments.
#[derive(Debug, Args)]
pub struct SelectCommand {
    /// The data file name (relative to your home directory)
    pub filename: PathBuf,

    /// The required aircraft type
    #[arg(short = 'T', long = "type", value_name = "TYPE")]
    pub typ: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for Format {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}
