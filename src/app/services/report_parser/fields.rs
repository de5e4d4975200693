//! Field extraction rules for decoded report lines
//!
//! Each function takes the trimmed data part of one report line and returns
//! the typed value, or a field extraction error when the data does not have
//! the shape the decoded format uses for that header.

use crate::constants::{conversions, headers};
use crate::{Error, Result};

/// A temperature given in both scales, as in `50 F (10 C)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePair {
    pub fahrenheit: f64,
    pub celsius: f64,
}

/// Wind as described on the `Wind:` line
#[derive(Debug, Clone, PartialEq)]
pub enum WindReading {
    Calm,
    Variable {
        mph: f64,
        knots: f64,
    },
    Directed {
        compass: String,
        degrees: u16,
        mph: f64,
        knots: f64,
    },
}

impl WindReading {
    /// Wind speed in meters per second
    pub fn speed_ms(&self) -> f64 {
        match self {
            WindReading::Calm => 0.0,
            WindReading::Variable { mph, .. } | WindReading::Directed { mph, .. } => {
                mph * conversions::MPH_TO_MS
            }
        }
    }
}

/// Altimeter pressure in both supported units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pressure {
    pub hpa: f64,
    pub mmhg: f64,
}

/// Parse a numeric token, reporting the field it belongs to on failure
pub fn parse_number(field: &'static str, data: &str, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| Error::field_extraction(field, data, format!("'{}': {}", token, e)))
}

/// Parse `<F> F (<C> C)` into both temperatures
///
/// Used for the temperature, dew point and wind chill lines.
pub fn parse_temperature_pair(field: &'static str, data: &str) -> Result<TemperaturePair> {
    let mut tokens = data.split_whitespace();
    let fahrenheit = tokens
        .next()
        .ok_or_else(|| Error::field_extraction(field, data, "missing Fahrenheit value"))?;
    let celsius = tokens
        .nth(1)
        .ok_or_else(|| Error::field_extraction(field, data, "missing Celsius value"))?;

    // The Celsius token looks like "(10" or "(-1.7"
    let celsius = celsius
        .strip_prefix('(')
        .unwrap_or(celsius)
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == ')');

    Ok(TemperaturePair {
        fahrenheit: parse_number(field, data, fahrenheit)?,
        celsius: parse_number(field, data, celsius)?,
    })
}

/// Parse the wind line
///
/// Recognized shapes:
/// - `Calm:0`
/// - `Variable at 5 MPH (4 KT):0`
/// - `from the SW (220 degrees) at 10 MPH (9 KT):0`, optionally followed by gusts
pub fn parse_wind(data: &str) -> Result<WindReading> {
    const FIELD: &str = "wind";

    if data.contains(headers::WIND_CALM) {
        return Ok(WindReading::Calm);
    }

    if data.contains(headers::WIND_VARIABLE) {
        let mph = data
            .splitn(4, ' ')
            .nth(2)
            .ok_or_else(|| Error::field_extraction(FIELD, data, "missing speed"))?;
        let knots = data
            .splitn(6, ' ')
            .nth(4)
            .ok_or_else(|| Error::field_extraction(FIELD, data, "missing knots"))?;
        return Ok(WindReading::Variable {
            mph: parse_number(FIELD, data, mph)?,
            knots: parse_number(FIELD, data, strip_paren(knots))?,
        });
    }

    let fields: Vec<&str> = data.splitn(10, ' ').collect();
    if fields.len() < 9 {
        return Err(Error::field_extraction(
            FIELD,
            data,
            format!("expected at least 9 tokens, found {}", fields.len()),
        ));
    }

    let degrees = fields[3].trim_start_matches(|c: char| !c.is_ascii_digit());
    let degrees = degrees
        .parse::<u16>()
        .map_err(|e| Error::field_extraction(FIELD, data, format!("'{}': {}", fields[3], e)))?;

    Ok(WindReading::Directed {
        compass: fields[2].trim().to_string(),
        degrees,
        mph: parse_number(FIELD, data, fields[6])?,
        knots: parse_number(FIELD, data, strip_paren(fields[8]))?,
    })
}

/// Parse visibility in statute miles and convert to kilometers
///
/// The first token that reads as a number is taken, so `greater than 7
/// mile(s)` yields 7 miles.
pub fn parse_visibility(data: &str) -> Result<f64> {
    data.split_whitespace()
        .find_map(|token| token.parse::<f64>().ok())
        .map(|miles| miles * conversions::MILES_TO_KM)
        .ok_or_else(|| Error::field_extraction("visibility", data, "no numeric distance"))
}

/// Parse relative humidity, e.g. `87%`
pub fn parse_humidity(data: &str) -> Result<i32> {
    let value = data.split('%').next().unwrap_or(data).trim();
    value
        .parse::<i32>()
        .map_err(|e| Error::field_extraction("humidity", data, format!("'{}': {}", value, e)))
}

/// Parse the altimeter line, e.g. `30.00 in. Hg (1016 hPa)`
pub fn parse_pressure(data: &str) -> Result<Pressure> {
    let inches = data.split(' ').next().unwrap_or(data);
    let inches = parse_number("pressure", data, inches)?;
    Ok(Pressure {
        hpa: inches * conversions::INHG_TO_HPA,
        mmhg: inches * conversions::INHG_TO_MMHG,
    })
}

/// Extract the observation time from the date line
///
/// The line reads `Apr 01, 2002 - 05:20 AM EST / 2002.04.01 1020 UTC`; only
/// the part after the first colon reaches this function.
pub fn parse_observation_time(data: &str) -> Result<String> {
    data.split('/')
        .nth(1)
        .map(|time| time.trim().to_string())
        .ok_or_else(|| Error::field_extraction("time", data, "missing '/' separator"))
}

/// Parse the cycle slot, falling back to cycle 0 when missing or garbled
pub fn parse_cycle(data: &str) -> u8 {
    data.trim()
        .parse::<u8>()
        .ok()
        .filter(|cycle| *cycle < crate::constants::CYCLES_PER_DAY)
        .unwrap_or(0)
}

fn strip_paren(token: &str) -> &str {
    token.strip_prefix('(').unwrap_or(token)
}
