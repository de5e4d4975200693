//! Data models for METAR reports
//!
//! This module contains the weather report record filled in by the report
//! parser, the icon categories used to summarize it, and the derived values
//! computed from its parsed fields.

pub mod conversions;

use crate::constants::{conversions as units, windchill};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::Cell;
use std::fmt;

// =============================================================================
// Classification Types
// =============================================================================

/// Suggested icon category for a weather report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pixmap {
    Sun,
    SunCloud,
    Cloud,
    Fog,
    Rain,
    Snow,
    Storm,
}

impl Pixmap {
    /// Icon name without extension
    pub fn as_str(&self) -> &'static str {
        match self {
            Pixmap::Sun => "sun",
            Pixmap::SunCloud => "suncloud",
            Pixmap::Cloud => "cloud",
            Pixmap::Fog => "fog",
            Pixmap::Rain => "rain",
            Pixmap::Snow => "snow",
            Pixmap::Storm => "storm",
        }
    }
}

impl fmt::Display for Pixmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification result: description text and suggested icon
///
/// Either half may be missing when nothing in the encoded report matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub description: Option<&'static str>,
    pub pixmap: Option<Pixmap>,
}

impl Classification {
    pub fn new(description: &'static str, pixmap: Pixmap) -> Self {
        Self {
            description: Some(description),
            pixmap: Some(pixmap),
        }
    }

    /// Classification where nothing matched
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.pixmap.is_none()
    }
}

// =============================================================================
// Weather Report Record
// =============================================================================

/// One weather observation, raw and parsed
///
/// A report is created empty for a station, filled in once by
/// [`ReportParser`](crate::app::services::report_parser::ReportParser) and
/// read afterwards. Every parsed field is optional: `None` means the value
/// was missing from the report text, never zero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeatherReport {
    /// Station code the report was requested for
    pub station_code: String,

    /// URL the report was fetched from
    pub report_url: Option<String>,

    /// Report bytes as received
    #[serde(skip)]
    pub full_report: Option<Vec<u8>>,

    /// Set once a parse pass has completed
    pub valid: bool,

    pub temperature_c: Option<f64>,
    pub temperature_f: Option<f64>,
    pub dew_point_c: Option<f64>,
    pub dew_point_f: Option<f64>,

    /// Wind speed in meters per second
    pub wind_speed_ms: Option<f64>,
    pub wind_speed_mph: Option<f64>,

    /// Wind speed in knots as stated in the report text
    pub wind_speed_kt: Option<f64>,

    /// Wind direction in degrees, unset for calm or variable wind
    pub wind_direction: Option<u16>,

    /// Wind direction as compass label (e.g. "SW", "NNE")
    pub wind_compass: Option<String>,

    pub visibility_km: Option<f64>,

    /// Relative humidity in percent
    pub humidity: Option<i32>,

    pub pressure_hpa: Option<f64>,
    pub pressure_mmhg: Option<f64>,

    /// Encoded METAR code (the "ob" line)
    pub code: Option<String>,

    /// Short weather description ("light rain", "mist", ...)
    pub weather: Option<String>,

    /// Short sky condition description
    pub sky: Option<String>,

    pub station_name: Option<String>,
    pub station_city: Option<String>,
    pub station_country: Option<String>,

    /// Latitude as `dd-mm[-ss]D`
    pub latitude: Option<String>,

    /// Longitude as `ddd-mm[-ss]D`
    pub longitude: Option<String>,

    pub latitude_decimal: Option<f64>,
    pub longitude_decimal: Option<f64>,

    /// Station altitude above sea level in meters
    pub altitude: Option<i32>,

    /// Observation time as `YYYY.MM.DD HHMM UTC`
    pub time: Option<String>,

    /// Hourly observation slot. The cycle from 23:45 to 0:45 is cycle 0.
    pub cycle: Option<u8>,

    /// Sky cover classification from the encoded cloud groups
    pub cloud_info: Option<Classification>,

    /// Present weather classification from the encoded weather groups
    pub conditions: Option<Classification>,

    /// Suggested icon, preferring conditions over clouds
    pub pixmap: Option<Pixmap>,

    /// Cloud form (e.g. "cumulonimbus")
    pub cloud_type: Option<&'static str>,

    #[serde(rename = "windchill_c")]
    windchill_c: Cell<Option<f64>>,

    #[serde(rename = "windchill_f")]
    windchill_f: Cell<Option<f64>>,
}

impl WeatherReport {
    /// Create an empty, not yet parsed report for a station
    pub fn new(station_code: impl Into<String>) -> Self {
        Self {
            station_code: station_code.into(),
            ..Default::default()
        }
    }

    /// Create an unparsed report carrying raw report bytes
    pub fn from_raw(station_code: impl Into<String>, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            station_code: station_code.into(),
            full_report: Some(raw.into()),
            ..Default::default()
        }
    }

    /// Attach the URL the raw report came from
    pub fn with_report_url(mut self, url: impl Into<String>) -> Self {
        self.report_url = Some(url.into());
        self
    }

    /// Raw report as text, replacing invalid sequences
    pub fn full_report_text(&self) -> Option<String> {
        self.full_report
            .as_deref()
            .map(|raw| String::from_utf8_lossy(raw).into_owned())
    }

    /// Visibility in statute miles
    pub fn visibility_miles(&self) -> Option<f64> {
        self.visibility_km.map(|km| km / units::MILES_TO_KM)
    }

    /// Wind speed in knots, derived from the m/s value
    pub fn wind_speed_knots(&self) -> Option<f64> {
        self.wind_speed_ms.map(|ms| ms * units::MS_TO_KNOTS)
    }

    /// Wind speed on the Beaufort scale
    /// cf. <https://en.wikipedia.org/wiki/Beaufort_scale>
    pub fn wind_speed_beaufort(&self) -> Option<u8> {
        self.wind_speed_ms
            .map(|ms| (ms / units::BEAUFORT_DIVISOR).powf(2.0 / 3.0).round() as u8)
    }

    /// Wind chill in degrees Celsius (North American wind chill index)
    ///
    /// Computed on first access and kept afterwards. Unset unless the
    /// temperature is at most 10 °C and the wind exceeds 4.8 km/h.
    pub fn windchill(&self) -> Option<f64> {
        if self.windchill_c.get().is_none() {
            if let (Some(temp), Some(speed)) = (self.temperature_c, self.wind_speed_ms) {
                let kmh = speed * units::MS_TO_KMH;
                if temp <= windchill::MAX_TEMP_C && kmh > windchill::MIN_WIND_KMH {
                    let v = kmh.powf(0.16);
                    self.windchill_c
                        .set(Some(13.12 + 0.6215 * temp - 11.37 * v + 0.3965 * temp * v));
                }
            }
        }
        self.windchill_c.get()
    }

    /// Wind chill in degrees Fahrenheit (North American wind chill index)
    ///
    /// Computed on first access and kept afterwards. When the temperature is
    /// above 50 °F or the wind below 3 mph, the plain Fahrenheit temperature
    /// is kept as the wind chill instead.
    pub fn windchill_fahrenheit(&self) -> Option<f64> {
        if self.windchill_f.get().is_none() {
            let chill = match (self.temperature_f, self.wind_speed_mph) {
                (Some(temp), Some(mph))
                    if temp <= windchill::MAX_TEMP_F && mph >= windchill::MIN_WIND_MPH =>
                {
                    let v = mph.powf(0.16);
                    Some(35.74 + 0.6215 * temp - 35.75 * v + 0.4275 * temp * v)
                }
                _ => self.temperature_f,
            };
            self.windchill_f.set(chill);
        }
        self.windchill_f.get()
    }

    /// Seed both wind chill values from an explicit report line
    pub(crate) fn set_windchill(&mut self, celsius: f64, fahrenheit: f64) {
        self.windchill_c.set(Some(celsius));
        self.windchill_f.set(Some(fahrenheit));
    }

    /// Observation time in ISO 8601 form (e.g. `2002-07-25 15:12:00Z`)
    pub fn iso_time(&self) -> Option<String> {
        self.time.as_deref().and_then(conversions::metar_to_iso8601)
    }

    /// Observation time as a UTC timestamp
    pub fn observation_time(&self) -> Option<DateTime<Utc>> {
        self.time
            .as_deref()
            .and_then(conversions::parse_metar_time)
            .map(|naive| naive.and_utc())
    }

    /// Latitude, longitude and altitude in report notation
    ///
    /// Schiphol Airport, for example, reports `("52-18N", "004-46E", Some(-2))`.
    pub fn station_position(&self) -> (Option<&str>, Option<&str>, Option<i32>) {
        (
            self.latitude.as_deref(),
            self.longitude.as_deref(),
            self.altitude,
        )
    }

    /// Latitude and longitude as signed decimal degrees, plus altitude
    pub fn station_position_decimal(&self) -> (Option<f64>, Option<f64>, Option<i32>) {
        (self.latitude_decimal, self.longitude_decimal, self.altitude)
    }
}
