//! METAR Report Library
//!
//! A Rust library for fetching NOAA "decoded" METAR weather reports and
//! extracting structured observations from their free-text layout.
//!
//! This library provides tools for:
//! - Fetching decoded reports for a station from the NOAA observation server
//! - Parsing labeled report lines into typed, optional fields
//! - Classifying sky and weather conditions from the encoded METAR code
//! - Deriving secondary values (wind chill, Beaufort force, ISO timestamps,
//!   decimal coordinates)
//! - Tolerant error handling where malformed fields degrade to "unset"

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_fetcher;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Classification, Pixmap, WeatherReport};
pub use app::services::report_fetcher::ReportFetcher;
pub use app::services::report_parser::{ParseStats, ReportParser};
pub use config::Config;

/// Result type alias for METAR report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fetching and parsing METAR reports
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A report was handed to the parser without any payload
    #[error("No report payload given for station '{station}'")]
    EmptyReport { station: String },

    /// The fetcher was asked for a report without a station identifier
    #[error("No station identifier given")]
    EmptyStationId,

    /// The payload is not valid UTF-8 text
    #[error("Report for station '{station}' is not valid text")]
    GarbledReport {
        station: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Fetching the report failed
    #[error("Network error fetching '{url}': {message}")]
    Network {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A recognized report line did not match its expected format
    #[error("Could not extract {field} from '{data}': {reason}")]
    FieldExtraction {
        field: &'static str,
        data: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A report could not be serialized for output
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an empty report error
    pub fn empty_report(station: impl Into<String>) -> Self {
        Self::EmptyReport {
            station: station.into(),
        }
    }

    /// Create a garbled report error
    pub fn garbled_report(station: impl Into<String>, source: std::str::Utf8Error) -> Self {
        Self::GarbledReport {
            station: station.into(),
            source,
        }
    }

    /// Create a network error with an optional transport cause
    pub fn network(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a field extraction error
    pub fn field_extraction(
        field: &'static str,
        data: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldExtraction {
            field,
            data: data.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether the error was raised before any I/O because input was missing
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::EmptyReport { .. } | Self::EmptyStationId)
    }

    /// Whether the error came from the network layer
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Network {
            url,
            message: error.to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}
