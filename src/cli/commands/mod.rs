//! Command implementations for the METAR report CLI
//!
//! Each command is implemented in its own module:
//! - `fetch`: download a station report and print it
//! - `parse`: read a report saved on disk and print it

pub mod fetch;
pub mod parse;
pub mod shared;

use crate::Result;
use crate::app::services::report_parser::ParseStats;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Sets up logging from the global flags and dispatches to the subcommand.
/// Running without a subcommand is handled by the binary before this point.
pub async fn run(args: Args) -> Result<ParseStats> {
    shared::setup_logging(&args)?;

    match args.command {
        Some(Commands::Fetch(fetch_args)) => fetch::run_fetch(fetch_args).await,
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args).await,
        None => Ok(ParseStats::default()),
    }
}
