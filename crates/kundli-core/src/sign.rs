//! The fixed sign-name table.
//!
//! Twelve signs starting from Aries, indexed `1..=12` the way generator
//! `rashi` arrays and verifier `sign` fields number them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// A zodiac sign (rashi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (position 0 = index 1 = Aries).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name, as verifiers spell it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 1-based sign index (Aries = 1, Pisces = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Sign for a 1-based index. `None` outside `1..=12`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| ALL_SIGNS.get(usize::from(i)))
            .copied()
    }

    /// Sign for an exact English name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SIGNS.into_iter().find(|s| s.name() == name)
    }
}

impl TryFrom<u8> for Sign {
    type Error = CoreError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
            .ok_or_else(|| CoreError::Validation(format!("sign index {index} outside 1..=12")))
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
