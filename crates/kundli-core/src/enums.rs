//! Chart kinds and comparison-policy enums for Kundli.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so they read the same in TOML config, env overrides, and JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// The chart variant a generated/reference pair describes.
///
/// Each kind has its own generator response shape, its own verifier
/// response shape, and its own default [`ComparePolicy`](crate::policy::ComparePolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Birth/transit chart.
    Transit,
    LalKitab,
    /// D1 (Rashi) divisional chart.
    D1,
    /// Krishnamurti Paddhati chart.
    Kp,
}

/// All chart kinds, in config-section order.
pub const ALL_CHART_KINDS: [ChartKind; 4] = [
    ChartKind::Transit,
    ChartKind::LalKitab,
    ChartKind::D1,
    ChartKind::Kp,
];

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::LalKitab => "lal_kitab",
            Self::D1 => "d1",
            Self::Kp => "kp",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CHART_KINDS
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown chart kind '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// MatchDiscipline
// ---------------------------------------------------------------------------

/// How a house's generated planets are matched against the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchDiscipline {
    /// Both sides reduced to full planet names, sorted, compared element-wise.
    FullNames,
    /// Generated count must equal the reference count, and every generated
    /// code must appear among the reference's short codes.
    ShortCodes,
}

impl MatchDiscipline {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullNames => "full_names",
            Self::ShortCodes => "short_codes",
        }
    }
}

impl fmt::Display for MatchDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AscendantPolicy
// ---------------------------------------------------------------------------

/// How the Ascendant marker is treated when matching planets.
///
/// Verifiers disagree on whether the Ascendant is listed as a planet, so
/// each chart kind names its choice explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AscendantPolicy {
    /// The Ascendant is an ordinary planet on both sides.
    Listed,
    /// The Ascendant is dropped from both sides before matching.
    Exempt,
    /// The reference never lists the Ascendant. House 1 tolerates exactly
    /// one extra generated planet, and the generated Ascendant skips
    /// membership checks there.
    ImplicitInFirstHouse,
}

impl AscendantPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listed => "listed",
            Self::Exempt => "exempt",
            Self::ImplicitInFirstHouse => "implicit_in_first_house",
        }
    }
}

impl fmt::Display for AscendantPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
