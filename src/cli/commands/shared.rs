//! Shared components for CLI commands
//!
//! This module contains logging setup, configuration loading and the report
//! rendering used by all commands.

use crate::app::models::{Classification, WeatherReport};
use crate::app::services::report_parser::ParseStats;
use crate::cli::args::{Args, FetchArgs, OutputArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info};

/// Set up structured logging for all commands
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_report={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &FetchArgs) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking the default location"),
    }

    let mut config = Config::load(args.config_file.as_deref())?;
    config = apply_cli_overrides(config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: Config, args: &FetchArgs) -> Config {
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(proxy) = &args.proxy {
        config = config.with_proxy(proxy.clone());
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }
    config
}

/// Print a parsed report in the requested format
pub fn print_report(report: &WeatherReport, stats: &ParseStats, output: &OutputArgs) -> Result<()> {
    match output.format {
        OutputFormat::Text => {
            if output.show_raw {
                println!("{}", "Raw report".bright_green().bold());
                println!("{}", report.full_report_text().unwrap_or_default());
            }
            print!("{}", render_text(report));
            if !stats.is_clean() {
                eprintln!(
                    "{} {} report line(s) could not be read",
                    "warning:".bright_yellow().bold(),
                    stats.field_gaps
                );
            }
        }
        OutputFormat::Json => println!("{}", render_json(report, output.show_raw)?),
    }
    Ok(())
}

fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn opt_float(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{:.*}", precision, v))
}

fn classification(value: Option<Classification>) -> String {
    match value {
        Some(c) => format!("{} ({})", opt(c.description), opt(c.pixmap)),
        None => "None".to_string(),
    }
}

/// Render every field of a report as an aligned text listing
///
/// Unset values are printed as `None`.
pub fn render_text(report: &WeatherReport) -> String {
    let (lat, lon, alt) = report.station_position();
    let (lat_f, lon_f, _) = report.station_position_decimal();

    let rows: Vec<(&str, String)> = vec![
        ("Station", report.station_code.clone()),
        ("Name", opt(report.station_name.as_deref())),
        ("City", opt(report.station_city.as_deref())),
        ("Country", opt(report.station_country.as_deref())),
        ("Latitude", format!("{} ({})", opt(lat), opt_float(lat_f, 4))),
        ("Longitude", format!("{} ({})", opt(lon), opt_float(lon_f, 4))),
        ("Altitude (m)", opt(alt)),
        ("Report URL", opt(report.report_url.as_deref())),
        ("Time", opt(report.time.as_deref())),
        ("ISO time", opt(report.iso_time())),
        ("Cycle", opt(report.cycle)),
        ("Temperature (C)", opt(report.temperature_c)),
        ("Temperature (F)", opt(report.temperature_f)),
        ("Dew point (C)", opt(report.dew_point_c)),
        ("Dew point (F)", opt(report.dew_point_f)),
        ("Humidity (%)", opt(report.humidity)),
        ("Wind speed (m/s)", opt_float(report.wind_speed_ms, 2)),
        ("Wind speed (mph)", opt(report.wind_speed_mph)),
        ("Wind speed (kt)", opt_float(report.wind_speed_knots(), 1)),
        ("Wind speed (Bft)", opt(report.wind_speed_beaufort())),
        ("Wind direction", opt(report.wind_direction)),
        ("Wind compass", opt(report.wind_compass.as_deref())),
        ("Wind chill (C)", opt_float(report.windchill(), 1)),
        ("Wind chill (F)", opt_float(report.windchill_fahrenheit(), 1)),
        ("Visibility (km)", opt_float(report.visibility_km, 1)),
        ("Visibility (mi)", opt_float(report.visibility_miles(), 1)),
        ("Pressure (hPa)", opt_float(report.pressure_hpa, 1)),
        ("Pressure (mmHg)", opt_float(report.pressure_mmhg, 1)),
        ("Weather", opt(report.weather.as_deref())),
        ("Sky", opt(report.sky.as_deref())),
        ("Cloud info", classification(report.cloud_info)),
        ("Conditions", classification(report.conditions)),
        ("Cloud type", opt(report.cloud_type)),
        ("Pixmap", opt(report.pixmap)),
        ("Encoded", opt(report.code.as_deref())),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        let label = format!("{:<width$}", label, width = width);
        out.push_str(&format!("{}  {}\n", label.bright_cyan(), value));
    }
    out
}

/// JSON view of a report with the derived values included
#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(flatten)]
    report: &'a WeatherReport,
    iso_time: Option<String>,
    wind_speed_knots: Option<f64>,
    wind_speed_beaufort: Option<u8>,
    visibility_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
}

/// Render a report and its derived values as pretty JSON
pub fn render_json(report: &WeatherReport, include_raw: bool) -> Result<String> {
    // Fill the wind chill memo so it shows up in the output
    report.windchill();
    report.windchill_fahrenheit();

    let view = ReportView {
        report,
        iso_time: report.iso_time(),
        wind_speed_knots: report.wind_speed_knots(),
        wind_speed_beaufort: report.wind_speed_beaufort(),
        visibility_miles: report.visibility_miles(),
        raw: if include_raw {
            report.full_report_text()
        } else {
            None
        },
    };

    Ok(serde_json::to_string_pretty(&view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::report_parser::ReportParser;
    use crate::cli::args::OutputArgs;

    const EHAM_REPORT: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/EHAM.TXT"));

    fn fetch_args() -> FetchArgs {
        FetchArgs {
            station: "EHAM".to_string(),
            base_url: None,
            proxy: None,
            timeout_secs: None,
            config_file: None,
            output: OutputArgs::default(),
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut args = fetch_args();
        args.base_url = Some("http://cli.example/".to_string());
        args.timeout_secs = Some(3);

        let config = apply_cli_overrides(Config::default().with_proxy("http://file:1"), &args);
        assert_eq!(config.base_url, "http://cli.example/");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.proxy.as_deref(), Some("http://file:1"));
    }

    #[test]
    fn test_render_text_lists_unset_fields() {
        let report = ReportParser::new().parse_raw("EHAM", EHAM_REPORT).unwrap();
        let text = render_text(&report);

        assert!(text.contains("Amsterdam Airport Schiphol"));
        assert!(text.contains("2002-04-01 10:25:00Z"));
        assert!(text.contains("light rain"));
        assert!(text.contains("Broken clouds (suncloud)"));
        // No cloud form in this report
        assert!(text.contains("None"));
        assert_eq!(text.lines().count(), 35);
    }

    #[test]
    fn test_render_json_includes_derived_values() {
        let report = ReportParser::new().parse_raw("EHAM", EHAM_REPORT).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report, false).unwrap()).unwrap();

        assert_eq!(json["station_code"], "EHAM");
        assert_eq!(json["humidity"], 87);
        assert_eq!(json["pixmap"], "rain");
        assert_eq!(json["iso_time"], "2002-04-01 10:25:00Z");
        assert_eq!(json["wind_speed_beaufort"], 3);
        assert!(json["windchill_c"].is_number());
        assert!(json["cloud_type"].is_null());
        assert!(json.get("raw").is_none());

        let with_raw: serde_json::Value =
            serde_json::from_str(&render_json(&report, true).unwrap()).unwrap();
        assert!(with_raw["raw"].as_str().unwrap().starts_with("Amsterdam"));
    }
}
