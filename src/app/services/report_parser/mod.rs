//! Parser for NOAA decoded METAR reports
//!
//! A decoded report is a handful of `Header: value` lines around the
//! encoded METAR code. This module turns that text into the typed fields of
//! a [`WeatherReport`](crate::app::models::WeatherReport), tolerating lines
//! it cannot read.
//!
//! ## Architecture
//!
//! - [`parser`] - Line scan, dispatch and composition
//! - [`fields`] - Extraction rules per report header
//! - [`station`] - Station identity line
//! - [`clouds`] - Sky cover and cloud form from the encoded code
//! - [`conditions`] - Present weather from the encoded code
//! - [`stats`] - Parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use metar_report::app::services::report_parser::ReportParser;
//!
//! # fn example(raw: Vec<u8>) -> metar_report::Result<()> {
//! let report = ReportParser::new().parse_raw("EHAM", raw)?;
//!
//! println!("Temperature: {:?} C", report.temperature_c);
//! println!("Wind chill: {:?} C", report.windchill());
//! # Ok(())
//! # }
//! ```

pub mod clouds;
pub mod conditions;
pub mod fields;
pub mod parser;
pub mod station;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use clouds::{CloudSummary, SkyCover, classify_clouds};
pub use conditions::{Phenomenon, classify_conditions};
pub use parser::{ReportLine, ReportParser};
pub use stats::ParseStats;
