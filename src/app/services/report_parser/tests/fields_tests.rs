//! Tests for the per-header field extraction rules

use crate::Error;
use crate::app::services::report_parser::fields::*;

#[test]
fn test_temperature_pair() {
    let pair = parse_temperature_pair("temperature", "50 F (10 C)").unwrap();
    assert_eq!(pair.fahrenheit, 50.0);
    assert_eq!(pair.celsius, 10.0);

    let pair = parse_temperature_pair("dew point", "21.9 F (-5.6 C)").unwrap();
    assert_eq!(pair.fahrenheit, 21.9);
    assert_eq!(pair.celsius, -5.6);
}

#[test]
fn test_temperature_pair_with_trailing_flag() {
    let pair = parse_temperature_pair("windchill", "22 F (-6 C):1").unwrap();
    assert_eq!(pair.fahrenheit, 22.0);
    assert_eq!(pair.celsius, -6.0);
}

#[test]
fn test_temperature_pair_malformed() {
    let err = parse_temperature_pair("temperature", "50 F").unwrap_err();
    assert!(matches!(
        err,
        Error::FieldExtraction {
            field: "temperature",
            ..
        }
    ));

    assert!(parse_temperature_pair("temperature", "").is_err());
    assert!(parse_temperature_pair("temperature", "fifty F (ten C)").is_err());
}

#[test]
fn test_wind_calm() {
    let wind = parse_wind("Calm:0").unwrap();
    assert_eq!(wind, WindReading::Calm);
    assert_eq!(wind.speed_ms(), 0.0);
}

#[test]
fn test_wind_variable() {
    let wind = parse_wind("Variable at 5 MPH (4 KT):0").unwrap();
    assert_eq!(
        wind,
        WindReading::Variable {
            mph: 5.0,
            knots: 4.0
        }
    );
    assert!((wind.speed_ms() - 2.2352).abs() < 1e-9);
}

#[test]
fn test_wind_directed() {
    let wind = parse_wind("from the SW (220 degrees) at 10 MPH (9 KT):0").unwrap();
    assert_eq!(
        wind,
        WindReading::Directed {
            compass: "SW".to_string(),
            degrees: 220,
            mph: 10.0,
            knots: 9.0
        }
    );
}

#[test]
fn test_wind_directed_with_gusts() {
    let wind =
        parse_wind("from the WNW (290 degrees) at 23 MPH (20 KT) gusting to 35 MPH (30 KT):0")
            .unwrap();
    assert_eq!(
        wind,
        WindReading::Directed {
            compass: "WNW".to_string(),
            degrees: 290,
            mph: 23.0,
            knots: 20.0
        }
    );
}

#[test]
fn test_wind_malformed() {
    assert!(parse_wind("from the SW").is_err());
    assert!(parse_wind("Variable at").is_err());
    assert!(parse_wind("from the SW (220 degrees) at ten MPH (9 KT):0").is_err());
}

#[test]
fn test_visibility_first_numeric_token() {
    assert!((parse_visibility("greater than 7 mile(s):0").unwrap() - 11.265408).abs() < 1e-9);
    assert!((parse_visibility("10 mile(s):0").unwrap() - 16.09344).abs() < 1e-9);
    assert!((parse_visibility("1.5 mile(s)").unwrap() - 2.414016).abs() < 1e-9);
}

#[test]
fn test_visibility_without_number() {
    assert!(parse_visibility("less than one mile").is_err());
    assert!(parse_visibility("").is_err());
}

#[test]
fn test_humidity() {
    assert_eq!(parse_humidity("87%").unwrap(), 87);
    assert_eq!(parse_humidity("100%").unwrap(), 100);
    assert!(parse_humidity("N/A").is_err());
}

#[test]
fn test_pressure() {
    let pressure = parse_pressure("30.00 in. Hg (1016 hPa)").unwrap();
    assert!((pressure.hpa - 1015.91658).abs() < 1e-4);
    assert!((pressure.mmhg - 762.0).abs() < 1e-9);

    assert!(parse_pressure("in. Hg").is_err());
}

#[test]
fn test_observation_time() {
    assert_eq!(
        parse_observation_time("25 AM EST / 2002.04.01 1025 UTC").unwrap(),
        "2002.04.01 1025 UTC"
    );
    assert!(parse_observation_time("2002.04.01 1025 UTC").is_err());
}

#[test]
fn test_cycle_fallback() {
    assert_eq!(parse_cycle("10"), 10);
    assert_eq!(parse_cycle(" 23 "), 23);
    assert_eq!(parse_cycle(""), 0);
    assert_eq!(parse_cycle("xx"), 0);
    assert_eq!(parse_cycle("24"), 0);
    assert_eq!(parse_cycle("-1"), 0);
}
