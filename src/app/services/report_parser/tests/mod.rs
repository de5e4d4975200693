//! Test utilities for report parser testing
//!
//! Sample reports live in `tests/data` so the integration tests can share
//! them.

use crate::app::models::WeatherReport;

// Test modules
mod classification_tests;
mod fields_tests;

/// Schiphol, directed wind and light rain
pub const EHAM_REPORT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/EHAM.TXT"));

/// Kennedy, variable wind, explicit windchill and snow
pub const KJFK_REPORT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/KJFK.TXT"));

/// Moenchengladbach, calm fog with a garbled cycle line
pub const EDLN_REPORT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/EDLN.TXT"));

/// Helper to wrap report text into an unparsed record
pub fn create_test_report(station: &str, text: &str) -> WeatherReport {
    WeatherReport::from_raw(station, text.as_bytes().to_vec())
}

/// Assert that an optional float is set and close to the expected value
#[track_caller]
pub fn assert_approx(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
