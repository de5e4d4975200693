//! Fetch command implementation
//!
//! Downloads the decoded report of one station, parses it and prints it.

use super::shared::{load_configuration, print_report};
use crate::app::services::report_fetcher::ReportFetcher;
use crate::app::services::report_parser::{ParseStats, ReportParser};
use crate::cli::args::FetchArgs;
use crate::Result;
use tracing::{debug, info};

/// Fetch command runner
pub async fn run_fetch(args: FetchArgs) -> Result<ParseStats> {
    debug!("Fetch arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args)?;
    let fetcher = ReportFetcher::new(config)?;

    let mut report = fetcher.fetch_report(&args.station).await?;
    let stats = ReportParser::new().parse_report_with_stats(&mut report)?;
    info!(
        "Parsed report for {} ({} field gaps)",
        report.station_code, stats.field_gaps
    );

    print_report(&report, &stats, &args.output)?;
    Ok(stats)
}
