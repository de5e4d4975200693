//! Command-line argument definitions for the METAR report tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the METAR report tool
///
/// Fetches NOAA decoded METAR reports and prints the parsed observation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-report",
    version,
    about = "Fetch and parse NOAA decoded METAR weather reports",
    long_about = "Downloads the decoded METAR report of a weather station from the NOAA \
                  observation server, or reads one saved on disk, and prints temperature, \
                  wind, pressure, sky conditions and station details as text or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch a station report from the server and print it
    Fetch(FetchArgs),
    /// Parse a report saved on disk and print it
    Parse(ParseArgs),
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// ICAO station code, e.g. EHAM or KJFK
    #[arg(value_name = "STATION")]
    pub station: String,

    /// Directory URL the reports are fetched from
    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Base URL of the decoded report directory"
    )]
    pub base_url: Option<String>,

    /// Proxy URL for the request
    #[arg(long = "proxy", value_name = "URL", help = "Proxy URL for the request")]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    /// TOML configuration file. If not specified, looks for
    /// ~/.config/metar-report/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to a decoded report file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Station code the report belongs to
    #[arg(
        short = 's',
        long = "station",
        value_name = "STATION",
        help = "Station code the report was requested for"
    )]
    pub station: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by all commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the parsed report"
    )]
    pub format: OutputFormat,

    /// Print the raw report text before the parsed fields
    #[arg(long = "show-raw", help = "Also print the raw report text")]
    pub show_raw: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable field listing
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Logging level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments
    pub fn validate(&self) -> Result<()> {
        if self.station.trim().is_empty() {
            return Err(Error::EmptyStationId);
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::configuration("Timeout must be greater than 0 seconds"));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

impl ParseArgs {
    /// Validate the parse command arguments
    pub fn validate(&self) -> Result<()> {
        if self.station.trim().is_empty() {
            return Err(Error::EmptyStationId);
        }

        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Report file does not exist: {}",
                self.file.display()
            )));
        }

        Ok(())
    }
}
