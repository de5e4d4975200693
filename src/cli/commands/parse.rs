//! Parse command implementation
//!
//! Parses a decoded report saved on disk, e.g. one downloaded earlier with
//! `curl`, and prints it like the fetch command does.

use super::shared::print_report;
use crate::app::models::WeatherReport;
use crate::app::services::report_fetcher::normalize_station;
use crate::app::services::report_parser::{ParseStats, ReportParser};
use crate::cli::args::ParseArgs;
use crate::{Error, Result};
use tracing::{debug, info};

/// Parse command runner
pub async fn run_parse(args: ParseArgs) -> Result<ParseStats> {
    debug!("Parse arguments: {:?}", args);
    args.validate()?;

    let station = normalize_station(&args.station)?;
    let raw = tokio::fs::read(&args.file).await.map_err(|e| {
        Error::io(format!("Failed to read report file {}", args.file.display()), e)
    })?;
    info!("Read {} bytes from {}", raw.len(), args.file.display());

    let mut report = WeatherReport::from_raw(station, raw);
    let stats = ReportParser::new().parse_report_with_stats(&mut report)?;

    print_report(&report, &stats, &args.output)?;
    Ok(stats)
}
