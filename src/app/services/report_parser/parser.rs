//! Core decoded report parser
//!
//! This module scans the report text line by line, dispatches each known
//! line to its field rule and composes the classifications once the scan
//! is complete.

use tracing::{debug, warn};

use super::clouds::classify_clouds;
use super::conditions::classify_conditions;
use super::fields::{self, WindReading};
use super::station::parse_station_line;
use super::stats::ParseStats;
use crate::app::models::WeatherReport;
use crate::app::models::conversions::parse_lat_long;
use crate::constants::headers;
use crate::{Error, Result};

/// Kind of a report line, decided from its header and data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine {
    /// Station identity; `offset` is where the parenthesized code starts
    Station { offset: usize },
    ObservationTime,
    Temperature,
    DewPoint,
    Windchill,
    Wind,
    Visibility,
    Humidity,
    Pressure,
    Weather,
    Sky,
    Encoded,
    Cycle,
}

impl ReportLine {
    /// Classify a line of a report requested for `station`
    ///
    /// The station line is found by its parenthesized code and the date line
    /// by its UTC marker. Everything else must match a header exactly.
    pub fn classify(header: &str, data: &str, station: &str) -> Option<Self> {
        if let Some(offset) = header.find(&format!("({})", station)) {
            return Some(ReportLine::Station { offset });
        }

        // The encoded line carries the station code and must not count as a date
        if data.contains(headers::UTC_MARKER) && !data.contains(station) {
            return Some(ReportLine::ObservationTime);
        }

        match header {
            headers::TEMPERATURE => Some(ReportLine::Temperature),
            headers::DEW_POINT => Some(ReportLine::DewPoint),
            headers::WINDCHILL => Some(ReportLine::Windchill),
            headers::WIND => Some(ReportLine::Wind),
            headers::VISIBILITY => Some(ReportLine::Visibility),
            headers::RELATIVE_HUMIDITY => Some(ReportLine::Humidity),
            headers::PRESSURE => Some(ReportLine::Pressure),
            headers::WEATHER => Some(ReportLine::Weather),
            headers::SKY_CONDITIONS => Some(ReportLine::Sky),
            headers::ENCODED => Some(ReportLine::Encoded),
            headers::CYCLE => Some(ReportLine::Cycle),
            _ => None,
        }
    }
}

/// Parser for NOAA decoded METAR reports
///
/// The parser holds no state of its own. Each call borrows one
/// [`WeatherReport`], fills in its fields and marks it valid:
/// - Fatal errors (no payload, invalid UTF-8) leave the report untouched
/// - A line that cannot be read only leaves its own fields unset
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the raw payload of a report in place and hand it back
    pub fn parse_report<'r>(&self, report: &'r mut WeatherReport) -> Result<&'r mut WeatherReport> {
        self.parse_report_with_stats(report)?;
        Ok(report)
    }

    /// Parse the raw payload of a report in place, returning statistics
    pub fn parse_report_with_stats(&self, report: &mut WeatherReport) -> Result<ParseStats> {
        let text = decode_payload(report)?;
        let station = report.station_code.clone();
        let mut stats = ParseStats::new();

        for line in text.split('\n') {
            stats.total_lines += 1;

            let (header, data) = match line.split_once(':') {
                Some((header, data)) => (header.trim(), data.trim()),
                None => (line.trim(), line.trim()),
            };

            let Some(kind) = ReportLine::classify(header, data, &station) else {
                continue;
            };
            stats.recognized_lines += 1;
            debug!("Recognized {:?} line: {}", kind, header);

            if let Err(e) = apply_line(report, kind, data) {
                warn!("Field gap in report for {}: {}", station, e);
                stats.record_gap(e);
            }
        }

        compose_classifications(report);
        report.valid = true;

        debug!(
            "Parsed report for {}: {} of {} lines recognized, {} field gaps",
            station, stats.recognized_lines, stats.total_lines, stats.field_gaps
        );

        Ok(stats)
    }

    /// Build a report from raw bytes and parse it
    pub fn parse_raw(&self, station: &str, raw: impl Into<Vec<u8>>) -> Result<WeatherReport> {
        let mut report = WeatherReport::from_raw(station, raw);
        self.parse_report(&mut report)?;
        Ok(report)
    }
}

fn decode_payload(report: &WeatherReport) -> Result<String> {
    let raw = report
        .full_report
        .as_deref()
        .ok_or_else(|| Error::empty_report(&report.station_code))?;

    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| Error::garbled_report(&report.station_code, e))
}

/// Apply one recognized line to the report
///
/// Every value of a line is extracted before any field is written, so a
/// failing line never leaves half its fields set.
fn apply_line(report: &mut WeatherReport, kind: ReportLine, data: &str) -> Result<()> {
    match kind {
        ReportLine::Station { offset } => {
            let info = parse_station_line(data, offset);
            report.latitude_decimal = info.latitude.as_deref().and_then(parse_lat_long);
            report.longitude_decimal = info.longitude.as_deref().and_then(parse_lat_long);
            report.station_name = Some(info.name);
            report.station_city = Some(info.city);
            report.station_country = Some(info.country);
            report.latitude = info.latitude;
            report.longitude = info.longitude;
            report.altitude = info.altitude;
        }
        ReportLine::ObservationTime => {
            report.time = Some(fields::parse_observation_time(data)?);
        }
        ReportLine::Temperature => {
            let pair = fields::parse_temperature_pair("temperature", data)?;
            report.temperature_f = Some(pair.fahrenheit);
            report.temperature_c = Some(pair.celsius);
        }
        ReportLine::DewPoint => {
            let pair = fields::parse_temperature_pair("dew point", data)?;
            report.dew_point_f = Some(pair.fahrenheit);
            report.dew_point_c = Some(pair.celsius);
        }
        ReportLine::Windchill => {
            let pair = fields::parse_temperature_pair("windchill", data)?;
            report.set_windchill(pair.celsius, pair.fahrenheit);
        }
        ReportLine::Wind => apply_wind(report, fields::parse_wind(data)?),
        ReportLine::Visibility => {
            report.visibility_km = Some(fields::parse_visibility(data)?);
        }
        ReportLine::Humidity => {
            report.humidity = Some(fields::parse_humidity(data)?);
        }
        ReportLine::Pressure => {
            let pressure = fields::parse_pressure(data)?;
            report.pressure_hpa = Some(pressure.hpa);
            report.pressure_mmhg = Some(pressure.mmhg);
        }
        ReportLine::Weather => report.weather = Some(data.to_string()),
        ReportLine::Sky => report.sky = Some(data.to_string()),
        ReportLine::Encoded => report.code = Some(data.to_string()),
        ReportLine::Cycle => report.cycle = Some(fields::parse_cycle(data)),
    }
    Ok(())
}

fn apply_wind(report: &mut WeatherReport, wind: WindReading) {
    report.wind_speed_ms = Some(wind.speed_ms());
    match wind {
        WindReading::Calm => {
            report.wind_speed_mph = Some(0.0);
            report.wind_speed_kt = Some(0.0);
            report.wind_direction = None;
            report.wind_compass = None;
        }
        WindReading::Variable { mph, knots } => {
            report.wind_speed_mph = Some(mph);
            report.wind_speed_kt = Some(knots);
            report.wind_direction = None;
            report.wind_compass = None;
        }
        WindReading::Directed {
            compass,
            degrees,
            mph,
            knots,
        } => {
            report.wind_speed_mph = Some(mph);
            report.wind_speed_kt = Some(knots);
            report.wind_direction = Some(degrees);
            report.wind_compass = Some(compass);
        }
    }
}

/// Derive weather, pixmap and cloud type from the encoded code
///
/// An explicit Weather line wins over the classifications; the condition
/// icon wins over the cloud icon.
fn compose_classifications(report: &mut WeatherReport) {
    let code = report.code.as_deref().unwrap_or_default();
    let clouds = classify_clouds(code);
    let conditions = classify_conditions(code);
    debug!(
        "Classified sky as {:?} and conditions as {:?}",
        clouds.sky, conditions
    );

    report.cloud_info = Some(clouds.sky);
    report.conditions = Some(conditions);

    let explicit = report.weather.take().filter(|weather| !weather.is_empty());
    report.weather = explicit.or_else(|| {
        conditions
            .description
            .or(clouds.sky.description)
            .map(str::to_string)
    });

    report.pixmap = conditions.pixmap.or(clouds.sky.pixmap);

    if report.cloud_type.is_none() {
        report.cloud_type = clouds.cloud_type;
    }
}
