//! Application constants for the METAR report library
//!
//! This module contains the report source defaults, the header vocabulary of
//! the decoded report format, unit conversion factors and the token patterns
//! used to classify the encoded METAR code.

// =============================================================================
// Report Source
// =============================================================================

/// Default location of NOAA decoded METAR reports
pub const DEFAULT_BASE_URL: &str = "https://tgftp.nws.noaa.gov/data/observations/metar/decoded/";

/// File suffix of a decoded report on the server
pub const REPORT_FILE_SUFFIX: &str = ".TXT";

/// Default HTTP timeout for report downloads
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with report downloads
pub const DEFAULT_USER_AGENT: &str = concat!("metar-report/", env!("CARGO_PKG_VERSION"));

/// Application directory name below the user configuration directory
pub const CONFIG_DIR_NAME: &str = "metar-report";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the report base URL
pub const ENV_BASE_URL: &str = "METAR_BASE_URL";

/// Environment variable setting a proxy URL
pub const ENV_PROXY: &str = "METAR_PROXY";

/// Environment variable overriding the download timeout
pub const ENV_TIMEOUT_SECS: &str = "METAR_TIMEOUT_SECS";

// =============================================================================
// Decoded Report Headers
// =============================================================================

/// Line headers of the decoded report format, matched case-sensitively
pub mod headers {
    pub const TEMPERATURE: &str = "Temperature";
    pub const DEW_POINT: &str = "Dew Point";
    pub const WINDCHILL: &str = "Windchill";
    pub const WIND: &str = "Wind";
    pub const VISIBILITY: &str = "Visibility";
    pub const RELATIVE_HUMIDITY: &str = "Relative Humidity";
    pub const PRESSURE: &str = "Pressure (altimeter)";
    pub const WEATHER: &str = "Weather";
    pub const SKY_CONDITIONS: &str = "Sky conditions";
    pub const ENCODED: &str = "ob";
    pub const CYCLE: &str = "cycle";

    /// Marker identifying the date/time line
    pub const UTC_MARKER: &str = " UTC";

    /// Wind data for a calm observation
    pub const WIND_CALM: &str = "Calm";

    /// Wind data for a variable direction observation
    pub const WIND_VARIABLE: &str = "Variable";
}

// =============================================================================
// Unit Conversions
// =============================================================================

pub mod conversions {
    /// Miles per hour to meters per second
    pub const MPH_TO_MS: f64 = 0.44704;

    /// Meters per second to knots
    pub const MS_TO_KNOTS: f64 = 1.94384449;

    /// Meters per second to kilometers per hour
    pub const MS_TO_KMH: f64 = 3.6;

    /// Statute miles to kilometers
    pub const MILES_TO_KM: f64 = 1.609344;

    /// Inches of mercury to hectopascal
    pub const INHG_TO_HPA: f64 = 33.863886;

    /// Inches of mercury to millimeters of mercury
    pub const INHG_TO_MMHG: f64 = 25.4;

    /// Beaufort scale divisor for m/s speeds
    pub const BEAUFORT_DIVISOR: f64 = 0.8359648;
}

// =============================================================================
// Wind Chill
// =============================================================================

pub mod windchill {
    /// Highest temperature (°C) for which wind chill is defined
    pub const MAX_TEMP_C: f64 = 10.0;

    /// Wind speed (km/h) that must be exceeded for wind chill
    pub const MIN_WIND_KMH: f64 = 4.8;

    /// Highest temperature (°F) for which wind chill is defined
    pub const MAX_TEMP_F: f64 = 50.0;

    /// Lowest wind speed (mph) for which wind chill is defined
    pub const MIN_WIND_MPH: f64 = 3.0;
}

// =============================================================================
// Encoded METAR Patterns
// =============================================================================

/// Sky cover group, optionally followed by height and cloud form
pub const CLOUD_PATTERN: &str = r"^(CAVOK|CLR|SKC|BKN|SCT|FEW|OVC|NSC)([0-9]{3})?(TCU|CU|CB|SC|CBMAM|ACC|SCSL|CCSL|ACSL)?$";

/// Present weather group: intensity, qualifier and phenomenon
pub const CONDITION_PATTERN: &str = r"^[-+]?(VC|MI|BC|PR|TS|BL|SH|DR|FZ)?(DZ|RA|SN|SG|IC|PE|GR|GS|UP|BR|FG|FU|VA|SA|HZ|PY|DU|SQ|SS|DS|PO|\+?FC)$";

/// Cycle slots per day
pub const CYCLES_PER_DAY: u8 = 24;

/// Build the report URL for a station below a base URL
pub fn report_url(base_url: &str, station: &str) -> String {
    format!("{}{}{}", base_url, station, REPORT_FILE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_url() {
        assert_eq!(
            report_url(DEFAULT_BASE_URL, "EHAM"),
            "https://tgftp.nws.noaa.gov/data/observations/metar/decoded/EHAM.TXT"
        );
        assert_eq!(report_url("http://localhost/", "KJFK"), "http://localhost/KJFK.TXT");
    }

    #[test]
    fn test_patterns_compile() {
        assert!(regex::Regex::new(CLOUD_PATTERN).is_ok());
        assert!(regex::Regex::new(CONDITION_PATTERN).is_ok());
    }

    #[test]
    fn test_pressure_factors() {
        assert!((30.0 * conversions::INHG_TO_HPA - 1015.92).abs() < 0.01);
        assert!((30.0 * conversions::INHG_TO_MMHG - 762.0).abs() < 1e-9);
    }
}
