//! Present weather classification from the encoded METAR weather groups
//!
//! A weather group is an optional intensity sign, an optional two letter
//! qualifier and a phenomenon code, e.g. `-RA`, `TSRA` or `+FC`. Each
//! phenomenon carries a base description and icon, and a table of
//! qualifier specific descriptions. Thunderstorm qualifiers usually
//! switch the icon to [`Pixmap::Storm`].

use crate::app::models::{Classification, Pixmap};
use crate::constants::CONDITION_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static CONDITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONDITION_PATTERN).expect("condition pattern is a valid regex"));

/// Description for a qualified phenomenon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifiedDescription {
    /// Keeps the phenomenon's icon
    Plain(&'static str),
    /// Replaces the phenomenon's icon
    Override(&'static str, Pixmap),
}

/// A weather phenomenon and its qualifier table
#[derive(Debug)]
pub struct Phenomenon {
    pub code: &'static str,
    pub description: &'static str,
    pub pixmap: Pixmap,
    pub qualifiers: &'static [(&'static str, QualifiedDescription)],
}

impl Phenomenon {
    /// Classification for this phenomenon under a qualifier
    ///
    /// Unknown qualifiers fall back to the base description and icon.
    pub fn describe(&self, qualifier: &str) -> Classification {
        match self
            .qualifiers
            .iter()
            .find(|(q, _)| *q == qualifier)
            .map(|(_, d)| *d)
        {
            Some(QualifiedDescription::Plain(text)) => Classification::new(text, self.pixmap),
            Some(QualifiedDescription::Override(text, pixmap)) => Classification::new(text, pixmap),
            None => Classification::new(self.description, self.pixmap),
        }
    }
}

use QualifiedDescription::{Override, Plain};

const fn storm(text: &'static str) -> QualifiedDescription {
    Override(text, Pixmap::Storm)
}

/// Weather phenomena keyed by METAR code
pub static WEATHER_CONDITIONS: &[Phenomenon] = &[
    Phenomenon {
        code: "DZ",
        description: "Drizzle",
        pixmap: Pixmap::Rain,
        qualifiers: &[
            ("", Plain("Moderate drizzle")),
            ("-", Plain("Light drizzle")),
            ("+", Plain("Heavy drizzle")),
            ("VC", Plain("Drizzle in the vicinity")),
            ("MI", Plain("Shallow drizzle")),
            ("BC", Plain("Patches of drizzle")),
            ("PR", Plain("Partial drizzle")),
            ("TS", storm("Thunderstorm")),
            ("BL", Plain("Windy drizzle")),
            ("SH", Plain("Showers")),
            ("DR", Plain("Drifting drizzle")),
            ("FZ", Plain("Freezing drizzle")),
        ],
    },
    Phenomenon {
        code: "RA",
        description: "Rain",
        pixmap: Pixmap::Rain,
        qualifiers: &[
            ("", Plain("Moderate rain")),
            ("-", Plain("Light rain")),
            ("+", Plain("Heavy rain")),
            ("VC", Plain("Rain in the vicinity")),
            ("MI", Plain("Shallow rain")),
            ("BC", Plain("Patches of rain")),
            ("PR", Plain("Partial rainfall")),
            ("TS", storm("Thunderstorm")),
            ("BL", Plain("Blowing rainfall")),
            ("SH", Plain("Rain showers")),
            ("DR", Plain("Drifting rain")),
            ("FZ", Plain("Freezing rain")),
        ],
    },
    Phenomenon {
        code: "SN",
        description: "Snow",
        pixmap: Pixmap::Snow,
        qualifiers: &[
            ("", Plain("Moderate snow")),
            ("-", Plain("Light snow")),
            ("+", Plain("Heavy snow")),
            ("VC", Plain("Snow in the vicinity")),
            ("MI", Plain("Shallow snow")),
            ("BC", Plain("Patches of snow")),
            ("PR", Plain("Partial snowfall")),
            ("TS", storm("Snowstorm")),
            ("BL", Plain("Blowing snowfall")),
            ("SH", Plain("Snowfall showers")),
            ("DR", Plain("Drifting snow")),
            ("FZ", Plain("Freezing snow")),
        ],
    },
    Phenomenon {
        code: "SG",
        description: "Snow grains",
        pixmap: Pixmap::Snow,
        qualifiers: &[
            ("", Plain("Moderate snow grains")),
            ("-", Plain("Light snow grains")),
            ("+", Plain("Heavy snow grains")),
            ("VC", Plain("Snow grains in the vicinity")),
            ("MI", Plain("Shallow snow grains")),
            ("BC", Plain("Patches of snow grains")),
            ("PR", Plain("Partial snow grains")),
            ("TS", storm("Snowstorm")),
            ("BL", Plain("Blowing snow grains")),
            ("SH", Plain("Snow grain showers")),
            ("DR", Plain("Drifting snow grains")),
            ("FZ", Plain("Freezing snow grains")),
        ],
    },
    Phenomenon {
        code: "IC",
        description: "Ice crystals",
        pixmap: Pixmap::Snow,
        qualifiers: &[
            ("", Plain("Moderate ice crystals")),
            ("-", Plain("Few ice crystals")),
            ("+", Plain("Heavy ice crystals")),
            ("VC", Plain("Ice crystals in the vicinity")),
            ("BC", Plain("Patches of ice crystals")),
            ("PR", Plain("Partial ice crystals")),
            ("TS", storm("Ice crystal storm")),
            ("BL", Plain("Blowing ice crystals")),
            ("SH", Plain("Showers of ice crystals")),
            ("DR", Plain("Drifting ice crystals")),
            ("FZ", Plain("Freezing ice crystals")),
        ],
    },
    Phenomenon {
        code: "PE",
        description: "Ice pellets",
        pixmap: Pixmap::Snow,
        qualifiers: &[
            ("", Plain("Moderate ice pellets")),
            ("-", Plain("Few ice pellets")),
            ("+", Plain("Heavy ice pellets")),
            ("VC", Plain("Ice pellets in the vicinity")),
            ("MI", Plain("Shallow ice pellets")),
            ("BC", Plain("Patches of ice pellets")),
            ("PR", Plain("Partial ice pellets")),
            ("TS", storm("Ice pellets storm")),
            ("BL", Plain("Blowing ice pellets")),
            ("SH", Plain("Showers of ice pellets")),
            ("DR", Plain("Drifting ice pellets")),
            ("FZ", Plain("Freezing ice pellets")),
        ],
    },
    Phenomenon {
        code: "GR",
        description: "Hail",
        pixmap: Pixmap::Rain,
        qualifiers: &[
            ("", Plain("Moderate hail")),
            ("-", Plain("Light hail")),
            ("+", Plain("Heavy hail")),
            ("VC", Plain("Hail in the vicinity")),
            ("MI", Plain("Shallow hail")),
            ("BC", Plain("Patches of hail")),
            ("PR", Plain("Partial hail")),
            ("TS", storm("Hailstorm")),
            ("BL", Plain("Blowing hail")),
            ("SH", Plain("Hail showers")),
            ("DR", Plain("Drifting hail")),
            ("FZ", Plain("Freezing hail")),
        ],
    },
    Phenomenon {
        code: "GS",
        description: "Small hail",
        pixmap: Pixmap::Rain,
        qualifiers: &[
            ("", Plain("Moderate small hail")),
            ("-", Plain("Light small hail")),
            ("+", Plain("Heavy small hail")),
            ("VC", Plain("Small hail in the vicinity")),
            ("MI", Plain("Shallow small hail")),
            ("BC", Plain("Patches of small hail")),
            ("PR", Plain("Partial small hail")),
            ("TS", storm("Small hailstorm")),
            ("BL", Plain("Blowing small hail")),
            ("SH", Plain("Showers of small hail")),
            ("DR", Plain("Drifting small hail")),
            ("FZ", Plain("Freezing small hail")),
        ],
    },
    Phenomenon {
        code: "UP",
        description: "Precipitation",
        pixmap: Pixmap::Rain,
        qualifiers: &[
            ("", Plain("Moderate precipitation")),
            ("-", Plain("Light precipitation")),
            ("+", Plain("Heavy precipitation")),
            ("VC", Plain("Precipitation in the vicinity")),
            ("MI", Plain("Shallow precipitation")),
            ("BC", Plain("Patches of precipitation")),
            ("PR", Plain("Partial precipitation")),
            ("TS", storm("Unknown thunderstorm")),
            ("BL", Plain("Blowing precipitation")),
            ("SH", Plain("Showers, type unknown")),
            ("DR", Plain("Drifting precipitation")),
            ("FZ", Plain("Freezing precipitation")),
        ],
    },
    Phenomenon {
        code: "BR",
        description: "Mist",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate mist")),
            ("-", Plain("Light mist")),
            ("+", Plain("Thick mist")),
            ("VC", Plain("Mist in the vicinity")),
            ("MI", Plain("Shallow mist")),
            ("BC", Plain("Patches of mist")),
            ("PR", Plain("Partial mist")),
            ("BL", Plain("Mist with wind")),
            ("DR", Plain("Drifting mist")),
            ("FZ", Plain("Freezing mist")),
        ],
    },
    Phenomenon {
        code: "FG",
        description: "Fog",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate fog")),
            ("-", Plain("Light fog")),
            ("+", Plain("Thick fog")),
            ("VC", Plain("Fog in the vicinity")),
            ("MI", Plain("Shallow fog")),
            ("BC", Plain("Patches of fog")),
            ("PR", Plain("Partial fog")),
            ("BL", Plain("Fog with wind")),
            ("DR", Plain("Drifting fog")),
            ("FZ", Plain("Freezing fog")),
        ],
    },
    Phenomenon {
        code: "FU",
        description: "Smoke",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate smoke")),
            ("-", Plain("Thin smoke")),
            ("+", Plain("Thick smoke")),
            ("VC", Plain("Smoke in the vicinity")),
            ("MI", Plain("Shallow smoke")),
            ("BC", Plain("Patches of smoke")),
            ("PR", Plain("Partial smoke")),
            ("TS", storm("Smoke w/ thunders")),
            ("BL", Plain("Smoke with wind")),
            ("DR", Plain("Drifting smoke")),
        ],
    },
    Phenomenon {
        code: "VA",
        description: "Volcanic ash",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate volcanic ash")),
            ("+", Plain("Thick volcanic ash")),
            ("VC", Plain("Volcanic ash in the vicinity")),
            ("MI", Plain("Shallow volcanic ash")),
            ("BC", Plain("Patches of volcanic ash")),
            ("PR", Plain("Partial volcanic ash")),
            ("TS", storm("Volcanic ash w/ thunders")),
            ("BL", Plain("Blowing volcanic ash")),
            ("SH", Plain("Showers of volcanic ash")),
            ("DR", Plain("Drifting volcanic ash")),
            ("FZ", Plain("Freezing volcanic ash")),
        ],
    },
    Phenomenon {
        code: "SA",
        description: "Sand",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate sand")),
            ("-", Plain("Light sand")),
            ("+", Plain("Heavy sand")),
            ("VC", Plain("Sand in the vicinity")),
            ("BC", Plain("Patches of sand")),
            ("PR", Plain("Partial sand")),
            ("BL", Plain("Blowing sand")),
            ("DR", Plain("Drifting sand")),
        ],
    },
    Phenomenon {
        code: "HZ",
        description: "Haze",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate haze")),
            ("-", Plain("Light haze")),
            ("+", Plain("Thick haze")),
            ("VC", Plain("Haze in the vicinity")),
            ("MI", Plain("Shallow haze")),
            ("BC", Plain("Patches of haze")),
            ("PR", Plain("Partial haze")),
            ("BL", Plain("Haze with wind")),
            ("DR", Plain("Drifting haze")),
            ("FZ", Plain("Freezing haze")),
        ],
    },
    Phenomenon {
        code: "PY",
        description: "Sprays",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate sprays")),
            ("-", Plain("Light sprays")),
            ("+", Plain("Heavy sprays")),
            ("VC", Plain("Sprays in the vicinity")),
            ("MI", Plain("Shallow sprays")),
            ("BC", Plain("Patches of sprays")),
            ("PR", Plain("Partial sprays")),
            ("BL", Plain("Blowing sprays")),
            ("DR", Plain("Drifting sprays")),
            ("FZ", Plain("Freezing sprays")),
        ],
    },
    Phenomenon {
        code: "DU",
        description: "Dust",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate dust")),
            ("-", Plain("Light dust")),
            ("+", Plain("Heavy dust")),
            ("VC", Plain("Dust in the vicinity")),
            ("BC", Plain("Patches of dust")),
            ("PR", Plain("Partial dust")),
            ("BL", Plain("Blowing dust")),
            ("DR", Plain("Drifting dust")),
        ],
    },
    Phenomenon {
        code: "SQ",
        description: "Squall",
        pixmap: Pixmap::Storm,
        qualifiers: &[
            ("", Plain("Moderate squall")),
            ("-", Plain("Light squall")),
            ("+", Plain("Heavy squall")),
            ("VC", Plain("Squall in the vicinity")),
            ("PR", Plain("Partial squall")),
            ("TS", Plain("Thunderous squall")),
            ("BL", Plain("Blowing squall")),
            ("DR", Plain("Drifting squall")),
            ("FZ", Plain("Freezing squall")),
        ],
    },
    Phenomenon {
        code: "SS",
        description: "Sandstorm",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate sandstorm")),
            ("-", Plain("Light sandstorm")),
            ("+", Plain("Heavy sandstorm")),
            ("VC", Plain("Sandstorm in the vicinity")),
            ("MI", Plain("Shallow sandstorm")),
            ("PR", Plain("Partial sandstorm")),
            ("TS", storm("Thunderous sandstorm")),
            ("BL", Plain("Blowing sandstorm")),
            ("DR", Plain("Drifting sandstorm")),
            ("FZ", Plain("Freezing sandstorm")),
        ],
    },
    Phenomenon {
        code: "DS",
        description: "Duststorm",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate duststorm")),
            ("-", Plain("Light duststorm")),
            ("+", Plain("Heavy duststorm")),
            ("VC", Plain("Duststorm in the vicinity")),
            ("MI", Plain("Shallow duststorm")),
            ("PR", Plain("Partial duststorm")),
            ("TS", storm("Thunderous duststorm")),
            ("BL", Plain("Blowing duststorm")),
            ("DR", Plain("Drifting duststorm")),
            ("FZ", Plain("Freezing duststorm")),
        ],
    },
    Phenomenon {
        code: "PO",
        description: "Dustwhirls",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate dustwhirls")),
            ("-", Plain("Light dustwhirls")),
            ("+", Plain("Heavy dustwhirls")),
            ("VC", Plain("Dustwhirls in the vicinity")),
            ("MI", Plain("Shallow dustwhirls")),
            ("BC", Plain("Patches of dustwhirls")),
            ("PR", Plain("Partial dustwhirls")),
            ("BL", Plain("Blowing dustwhirls")),
            ("DR", Plain("Drifting dustwhirls")),
        ],
    },
    Phenomenon {
        code: "+FC",
        description: "Tornado",
        pixmap: Pixmap::Storm,
        qualifiers: &[
            ("", Plain("Moderate tornado")),
            ("+", Plain("Raging tornado")),
            ("VC", Plain("Tornado in the vicinity")),
            ("PR", Plain("Partial tornado")),
            ("TS", Plain("Thunderous tornado")),
            ("BL", Plain("Tornado")),
            ("DR", Plain("Drifting tornado")),
            ("FZ", Plain("Freezing tornado")),
        ],
    },
    Phenomenon {
        code: "FC",
        description: "Funnel cloud",
        pixmap: Pixmap::Fog,
        qualifiers: &[
            ("", Plain("Moderate funnel cloud")),
            ("-", Plain("Light funnel cloud")),
            ("+", Plain("Thick funnel cloud")),
            ("VC", Plain("Funnel cloud in the vicinity")),
            ("MI", Plain("Shallow funnel cloud")),
            ("BC", Plain("Patches of funnel cloud")),
            ("PR", Plain("Partial funnel cloud")),
            ("BL", Plain("Funnel cloud w/ wind")),
            ("DR", Plain("Drifting funnel cloud")),
        ],
    },
];

/// Find a phenomenon by its code
pub fn lookup_phenomenon(code: &str) -> Option<&'static Phenomenon> {
    WEATHER_CONDITIONS.iter().find(|p| p.code == code)
}

/// Split a weather group into qualifier and phenomenon code
///
/// A leading sign is dropped when more than a bare signed phenomenon
/// follows it, so `+SHRA` splits as `("SH", "RA")` while `-RA` keeps its
/// sign as the qualifier.
pub fn split_qualifier(token: &str) -> (&str, &str) {
    if !token.is_ascii() {
        return ("", token);
    }

    let token = if token.len() > 3 && (token.starts_with('+') || token.starts_with('-')) {
        &token[1..]
    } else {
        token
    };

    let qualifier_len = if token.starts_with('+') || token.starts_with('-') {
        1
    } else if token.len() < 4 {
        0
    } else {
        2
    };

    let qualifier_len = qualifier_len.min(token.len());
    let (qualifier, rest) = token.split_at(qualifier_len);
    let end = rest.len().min(4);
    (qualifier, &rest[..end])
}

/// Classify a single weather group, if its phenomenon is known
pub fn classify_token(token: &str) -> Option<Classification> {
    let (qualifier, code) = split_qualifier(token);
    lookup_phenomenon(code).map(|phenomenon| phenomenon.describe(qualifier))
}

/// Classify the present weather of an encoded report
///
/// Only the first weather group that classifies is used; a report with
/// `TSRA +SN` is a thunderstorm, not snow.
pub fn classify_conditions(code: &str) -> Classification {
    code.split_whitespace()
        .filter(|token| CONDITION_RE.is_match(token))
        .find_map(classify_token)
        .unwrap_or_default()
}
