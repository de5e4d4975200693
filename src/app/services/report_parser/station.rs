//! Station identity line parsing
//!
//! The first line of a decoded report names the station, e.g.
//!
//! ```text
//! Amsterdam Airport Schiphol, Netherlands (EHAM) 52-18N 004-46E -2M
//! ```
//!
//! The station name may itself contain commas and parentheses, so the
//! country is taken from the last comma before the station code.

/// Station metadata from the identity line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationInfo {
    /// Everything before the station code
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub altitude: Option<i32>,
}

/// Parse the station line, where `offset` is the position of the
/// parenthesized station code
///
/// Without a comma in the name, city and country are empty and the
/// coordinates are searched in the whole line. This never fails: anything
/// that cannot be read stays unset.
pub fn parse_station_line(data: &str, offset: usize) -> StationInfo {
    let (location, coords) = split_at_lenient(data, offset);
    let location = location.trim();

    let (city, country, coords) = match location.rsplit_once(',') {
        Some((city, country)) => (city.trim(), country.trim(), coords),
        None => ("", "", data),
    };

    let tokens: Vec<&str> = coords.split_whitespace().collect();
    let (latitude, longitude, altitude) = if tokens.len() >= 3 {
        (
            Some(fix_letter_o(tokens[1])),
            Some(fix_letter_o(tokens[2])),
            tokens.get(3).and_then(|alt| parse_altitude(alt)),
        )
    } else {
        (None, None, None)
    };

    StationInfo {
        name: location.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        latitude,
        longitude,
        altitude,
    }
}

/// Parse an altitude token such as `-2M` into meters
pub fn parse_altitude(token: &str) -> Option<i32> {
    let mut chars = token.chars();
    chars.next_back()?;
    chars.as_str().parse::<i32>().ok()
}

// Some stations type the letter O where a zero belongs
fn fix_letter_o(coordinate: &str) -> String {
    coordinate.replace('O', "0")
}

fn split_at_lenient(data: &str, offset: usize) -> (&str, &str) {
    if offset >= data.len() {
        (data, "")
    } else if data.is_char_boundary(offset) {
        data.split_at(offset)
    } else {
        (data, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_altitude() {
        assert_eq!(parse_altitude("-2M"), Some(-2));
        assert_eq!(parse_altitude("7M"), Some(7));
        assert_eq!(parse_altitude("M"), None);
        assert_eq!(parse_altitude(""), None);
        assert_eq!(parse_altitude("highM"), None);
    }

    #[test]
    fn test_split_at_lenient() {
        assert_eq!(split_at_lenient("abc (X)", 4), ("abc ", "(X)"));
        assert_eq!(split_at_lenient("abc", 10), ("abc", ""));
        assert_eq!(split_at_lenient("é(X)", 1), ("é(X)", ""));
    }
}
