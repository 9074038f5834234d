//! Per-chart-kind comparison policies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AscendantPolicy, ChartKind, MatchDiscipline};

/// How one chart kind's houses are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComparePolicy {
    pub discipline: MatchDiscipline,
    pub ascendant: AscendantPolicy,
}

impl ComparePolicy {
    #[must_use]
    pub const fn new(discipline: MatchDiscipline, ascendant: AscendantPolicy) -> Self {
        Self {
            discipline,
            ascendant,
        }
    }

    /// Built-in policy for a chart kind.
    ///
    /// | kind      | discipline    | ascendant                 |
    /// |-----------|---------------|---------------------------|
    /// | transit   | `full_names`  | `listed`                  |
    /// | lal_kitab | `short_codes` | `implicit_in_first_house` |
    /// | d1        | `full_names`  | `exempt`                  |
    /// | kp        | `full_names`  | `listed`                  |
    #[must_use]
    pub const fn default_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Transit | ChartKind::Kp => {
                Self::new(MatchDiscipline::FullNames, AscendantPolicy::Listed)
            }
            ChartKind::LalKitab => Self::new(
                MatchDiscipline::ShortCodes,
                AscendantPolicy::ImplicitInFirstHouse,
            ),
            ChartKind::D1 => Self::new(MatchDiscipline::FullNames, AscendantPolicy::Exempt),
        }
    }
}

const fn default_transit() -> ComparePolicy {
    ComparePolicy::default_for(ChartKind::Transit)
}

const fn default_lal_kitab() -> ComparePolicy {
    ComparePolicy::default_for(ChartKind::LalKitab)
}

const fn default_d1() -> ComparePolicy {
    ComparePolicy::default_for(ChartKind::D1)
}

const fn default_kp() -> ComparePolicy {
    ComparePolicy::default_for(ChartKind::Kp)
}

/// One [`ComparePolicy`] per chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySet {
    #[serde(default = "default_transit")]
    pub transit: ComparePolicy,
    #[serde(default = "default_lal_kitab")]
    pub lal_kitab: ComparePolicy,
    #[serde(default = "default_d1")]
    pub d1: ComparePolicy,
    #[serde(default = "default_kp")]
    pub kp: ComparePolicy,
}

impl Default for PolicySet {
    fn default() -> Self {
        Self {
            transit: default_transit(),
            lal_kitab: default_lal_kitab(),
            d1: default_d1(),
            kp: default_kp(),
        }
    }
}

impl PolicySet {
    #[must_use]
    pub const fn get(&self, kind: ChartKind) -> ComparePolicy {
        match kind {
            ChartKind::Transit => self.transit,
            ChartKind::LalKitab => self.lal_kitab,
            ChartKind::D1 => self.d1,
            ChartKind::Kp => self.kp,
        }
    }

    pub const fn set(&mut self, kind: ChartKind, policy: ComparePolicy) {
        match kind {
            ChartKind::Transit => self.transit = policy,
            ChartKind::LalKitab => self.lal_kitab = policy,
            ChartKind::D1 => self.d1 = policy,
            ChartKind::Kp => self.kp = policy,
        }
    }
}
