//! Tests for cloud and present weather classification

use crate::app::models::{Classification, Pixmap};
use crate::app::services::report_parser::clouds::{cloud_type_description, classify_clouds};
use crate::app::services::report_parser::conditions::{classify_conditions, classify_token};

#[test]
fn test_sky_cover_categories() {
    let cases = [
        ("CAVOK", "Clear sky", Pixmap::Sun),
        ("SKC", "Clear sky", Pixmap::Sun),
        ("NSC", "Clear sky", Pixmap::Sun),
        ("FEW020", "Few clouds", Pixmap::SunCloud),
        ("SCT035", "Scattered clouds", Pixmap::SunCloud),
        ("BKN012", "Broken clouds", Pixmap::SunCloud),
        ("OVC008", "Overcast", Pixmap::Cloud),
    ];

    for (code, description, pixmap) in cases {
        assert_eq!(
            classify_clouds(code).sky,
            Classification::new(description, pixmap),
            "{code}"
        );
    }
}

#[test]
fn test_later_cloud_groups_override() {
    let summary = classify_clouds("FEW010CB SCT030TCU OVC080");
    assert_eq!(summary.sky, Classification::new("Overcast", Pixmap::Cloud));
    assert_eq!(summary.cloud_type, Some("towering cumulus"));
}

#[test]
fn test_cloud_type_suffix() {
    assert_eq!(classify_clouds("BKN030CBMAM").cloud_type, Some("cumulonimbus mammatus"));
    assert_eq!(classify_clouds("SCT040ACSL").cloud_type, Some("standing lenticular altocumulus"));
    assert_eq!(cloud_type_description("XX"), None);
}

#[test]
fn test_no_cloud_groups() {
    let summary = classify_clouds("EHAM 011025Z 22008KT 9999 -RA");
    assert!(summary.sky.is_empty());
    assert_eq!(summary.cloud_type, None);
    assert!(classify_clouds("").sky.is_empty());
}

#[test]
fn test_cloud_pattern_is_anchored() {
    assert!(classify_clouds("XFEW010").sky.is_empty());
    assert!(classify_clouds("FEW0100").sky.is_empty());
}

#[test]
fn test_intensity_and_qualifiers() {
    let cases = [
        ("RA", "Moderate rain", Pixmap::Rain),
        ("-RA", "Light rain", Pixmap::Rain),
        ("+RA", "Heavy rain", Pixmap::Rain),
        ("+SHRA", "Rain showers", Pixmap::Rain),
        ("FZDZ", "Freezing drizzle", Pixmap::Rain),
        ("VCFG", "Fog in the vicinity", Pixmap::Fog),
        ("BR", "Moderate mist", Pixmap::Fog),
        ("-FU", "Thin smoke", Pixmap::Fog),
        ("BLSN", "Blowing snowfall", Pixmap::Snow),
    ];

    for (token, description, pixmap) in cases {
        assert_eq!(
            classify_token(token),
            Some(Classification::new(description, pixmap)),
            "{token}"
        );
    }
}

#[test]
fn test_thunderstorm_overrides_icon() {
    assert_eq!(
        classify_token("TSRA"),
        Some(Classification::new("Thunderstorm", Pixmap::Storm))
    );
    assert_eq!(
        classify_token("TSSN"),
        Some(Classification::new("Snowstorm", Pixmap::Storm))
    );
    assert_eq!(
        classify_token("TSGR"),
        Some(Classification::new("Hailstorm", Pixmap::Storm))
    );
    // Squalls are storms already
    assert_eq!(
        classify_token("TSSQ"),
        Some(Classification::new("Thunderous squall", Pixmap::Storm))
    );
}

#[test]
fn test_funnel_cloud() {
    assert_eq!(
        classify_token("FC"),
        Some(Classification::new("Moderate funnel cloud", Pixmap::Fog))
    );
    assert_eq!(
        classify_token("+FC"),
        Some(Classification::new("Thick funnel cloud", Pixmap::Fog))
    );
}

#[test]
fn test_qualifier_missing_from_table() {
    assert_eq!(
        classify_token("SHFG"),
        Some(Classification::new("Fog", Pixmap::Fog))
    );
}

#[test]
fn test_first_condition_wins() {
    assert_eq!(
        classify_conditions("KXXX 011200Z TSRA +SN BR"),
        Classification::new("Thunderstorm", Pixmap::Storm)
    );
    assert_eq!(
        classify_conditions("KXXX 011200Z BR -RA"),
        Classification::new("Moderate mist", Pixmap::Fog)
    );
}

#[test]
fn test_no_condition_groups() {
    assert!(classify_conditions("KXXX 011200Z 27010KT 9999 FEW030").is_empty());
    assert!(classify_conditions("").is_empty());
    assert!(classify_conditions("RAIN").is_empty());
}
