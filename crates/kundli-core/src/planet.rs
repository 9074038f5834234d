//! The fixed planet-code table.
//!
//! Generated charts name planets by two-letter codes (`Su`, `Mo`, ...);
//! verifiers name them either by the same codes or by full English names.
//! The table is a bijection over its 10 entries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A celestial body, node, or the Ascendant as it appears in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Planet {
    Ascendant,
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 10 table entries.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Ascendant,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

impl Planet {
    /// Two-letter code used in generated-chart text.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ascendant => "As",
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mars => "Ma",
            Self::Mercury => "Me",
            Self::Jupiter => "Ju",
            Self::Venus => "Ve",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// Full English name used by verifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Look up a planet by its exact two-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_PLANETS.into_iter().find(|p| p.code() == code)
    }

    /// Look up a planet by its exact full name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PLANETS.into_iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub const fn is_ascendant(self) -> bool {
        matches!(self, Self::Ascendant)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
