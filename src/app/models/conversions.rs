//! Conversions of report notations into numeric and standard forms

use chrono::NaiveDateTime;

/// Parse latitude or longitude in report notation into decimal degrees
///
/// The notation is `dd-mm[-ss]D` where `D` is one of N, S, E, W. North and
/// east are positive, south and west negative. Returns `None` for anything
/// that does not follow the notation.
pub fn parse_lat_long(latlong: &str) -> Option<f64> {
    let normalized = latlong.trim().to_uppercase();
    let (numeric, compass) = match normalized.char_indices().next_back() {
        Some((idx, c @ ('N' | 'S' | 'E' | 'W'))) => (&normalized[..idx], c),
        _ => return None,
    };

    let elements = numeric
        .split('-')
        .map(|part| part.trim().parse::<i32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let mut coords = f64::from(elements[0]);
    if let Some(minutes) = elements.get(1) {
        coords += f64::from(*minutes) / 60.0;
    }
    if let Some(seconds) = elements.get(2) {
        coords += f64::from(*seconds) / 3600.0;
    }

    if matches!(compass, 'S' | 'W') {
        coords = -coords;
    }
    Some(coords)
}

/// Parse a report time (`YYYY.MM.DD HHMM UTC`) into a naive UTC timestamp
pub fn parse_metar_time(metar_date: &str) -> Option<NaiveDateTime> {
    let mut parts = metar_date.split_whitespace();
    let date = parts.next()?;
    let hour = parts.next()?;
    NaiveDateTime::parse_from_str(&format!("{} {}", date, hour), "%Y.%m.%d %H%M").ok()
}

/// Convert a report time into ISO 8601 (`YYYY-MM-DD HH:MM:00Z`)
///
/// The time zone of the report is always UTC.
pub fn metar_to_iso8601(metar_date: &str) -> Option<String> {
    parse_metar_time(metar_date).map(|time| time.format("%Y-%m-%d %H:%M:00Z").to_string())
}
