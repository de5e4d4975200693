//! Sky cover classification from the encoded METAR cloud groups

use crate::app::models::{Classification, Pixmap};
use crate::constants::CLOUD_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static CLOUD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLOUD_PATTERN).expect("cloud pattern is a valid regex"));

/// Cloud form abbreviations and their names
pub const CLOUD_TYPES: &[(&str, &str)] = &[
    ("ACC", "altocumulus castellanus"),
    ("ACSL", "standing lenticular altocumulus"),
    ("CB", "cumulonimbus"),
    ("CBMAM", "cumulonimbus mammatus"),
    ("CCSL", "standing lenticular cirrocumulus"),
    ("CU", "cumulus"),
    ("SCSL", "standing lenticular stratocumulus"),
    ("SC", "stratocumulus"),
    ("TCU", "towering cumulus"),
];

/// Look up the name of a cloud form
pub fn cloud_type_description(code: &str) -> Option<&'static str> {
    CLOUD_TYPES
        .iter()
        .find(|(abbrev, _)| *abbrev == code)
        .map(|(_, name)| *name)
}

/// Sky cover category of a cloud group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyCover {
    Clear,
    Broken,
    Scattered,
    Few,
    Overcast,
}

impl SkyCover {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CAVOK" | "CLR" | "SKC" | "NSC" => Some(SkyCover::Clear),
            "BKN" => Some(SkyCover::Broken),
            "SCT" => Some(SkyCover::Scattered),
            "FEW" => Some(SkyCover::Few),
            "OVC" => Some(SkyCover::Overcast),
            _ => None,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            SkyCover::Clear => Classification::new("Clear sky", Pixmap::Sun),
            SkyCover::Broken => Classification::new("Broken clouds", Pixmap::SunCloud),
            SkyCover::Scattered => Classification::new("Scattered clouds", Pixmap::SunCloud),
            SkyCover::Few => Classification::new("Few clouds", Pixmap::SunCloud),
            SkyCover::Overcast => Classification::new("Overcast", Pixmap::Cloud),
        }
    }
}

/// Result of scanning all cloud groups of a report
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CloudSummary {
    pub sky: Classification,
    pub cloud_type: Option<&'static str>,
}

/// Classify the sky from the cloud groups of an encoded report
///
/// All groups are visited and later groups override earlier ones, both for
/// the sky cover and for the cloud form.
pub fn classify_clouds(code: &str) -> CloudSummary {
    let mut summary = CloudSummary::default();

    for token in code.split_whitespace() {
        let Some(caps) = CLOUD_RE.captures(token) else {
            continue;
        };

        if let Some(cover) = caps.get(1).and_then(|m| SkyCover::from_code(m.as_str())) {
            summary.sky = cover.classification();
        }
        if let Some(cloud_type) = caps.get(3).and_then(|m| cloud_type_description(m.as_str())) {
            summary.cloud_type = Some(cloud_type);
        }
    }

    summary
}
