//! Generated charts: the chart generator's own placements.
//!
//! The generator answers every chart kind with the same status envelope but
//! a different `data` payload:
//!
//! | kind      | `data`                                                     |
//! |-----------|------------------------------------------------------------|
//! | transit   | `{"birth": {"planets": [..], "rashi": [..]}}`              |
//! | lal_kitab | `{"lalKitab": {"houses": [{"house", "rashi", "planets"}]}}` |
//! | d1        | `{"d1": {"planets": [..], "signs": [..]}}`                 |
//! | kp        | `{"kp": {"houses": [{"house", "sign", "planets"}]}}`       |
//!
//! All four decode into one [`GeneratedChart`].

use kundli_core::enums::ChartKind;
use kundli_core::{HOUSE_COUNT, is_valid_house};
use serde::Deserialize;

use crate::envelope::{decode_generated, null_as_default};
use crate::error::{CompareError, VerifyError};

/// One generated house: its sign index and its free-text planet string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedHouse {
    /// Sign index as the generator reported it; `None` if it gave none.
    pub sign: Option<u8>,
    /// Planet tokens, e.g. `"As ₀₅ Ma ₀₁"`. Empty for an empty house.
    pub planets: String,
}

/// The 12 houses of a generated chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedChart {
    houses: [GeneratedHouse; HOUSE_COUNT],
}

impl GeneratedChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parallel per-house arrays (index 0 = house 1).
    ///
    /// A sign array shorter than 12 leaves the remaining signs unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::TooManyHouses`] if either array has more
    /// than 12 entries.
    pub fn from_parallel(planets: Vec<String>, signs: &[u8]) -> Result<Self, CompareError> {
        for count in [planets.len(), signs.len()] {
            if count > HOUSE_COUNT {
                return Err(CompareError::TooManyHouses { count });
            }
        }

        let mut chart = Self::new();
        for (slot, text) in chart.houses.iter_mut().zip(planets) {
            slot.planets = text;
        }
        for (slot, sign) in chart.houses.iter_mut().zip(signs) {
            slot.sign = Some(*sign);
        }
        Ok(chart)
    }

    /// Build from explicitly numbered houses. Houses not listed stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidHouse`] for a house outside `1..=12`
    /// and [`CompareError::DuplicateHouse`] for a house listed twice.
    pub fn from_houses<I>(houses: I) -> Result<Self, CompareError>
    where
        I: IntoIterator<Item = (u8, GeneratedHouse)>,
    {
        let mut chart = Self::new();
        let mut seen = [false; HOUSE_COUNT];
        for (house, entry) in houses {
            let slot = house_slot(house)?;
            if seen[slot] {
                return Err(CompareError::DuplicateHouse { house });
            }
            seen[slot] = true;
            chart.houses[slot] = entry;
        }
        Ok(chart)
    }

    /// Set one house.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidHouse`] for a house outside `1..=12`.
    pub fn set_house(
        &mut self,
        house: u8,
        sign: Option<u8>,
        planets: impl Into<String>,
    ) -> Result<(), CompareError> {
        let slot = house_slot(house)?;
        self.houses[slot] = GeneratedHouse {
            sign,
            planets: planets.into(),
        };
        Ok(())
    }

    /// The house with 1-based number `house`.
    #[must_use]
    pub fn house(&self, house: u8) -> Option<&GeneratedHouse> {
        house_slot(house).ok().map(|slot| &self.houses[slot])
    }

    /// All 12 houses with their 1-based numbers.
    pub fn houses(&self) -> impl Iterator<Item = (u8, &GeneratedHouse)> {
        (1u8..).zip(self.houses.iter())
    }

    /// Decode a generator response body for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Status`] for a non-200 envelope,
    /// [`VerifyError::Decode`] if the body does not match the kind's shape,
    /// and [`VerifyError::Chart`] for out-of-range or repeated houses.
    pub fn decode(kind: ChartKind, body: &str) -> Result<Self, VerifyError> {
        let chart = match kind {
            ChartKind::Transit => {
                let data: TransitData = decode_generated(body)?;
                Self::from_parallel(data.birth.planets, &data.birth.rashi)?
            }
            ChartKind::LalKitab => {
                let data: LalKitabData = decode_generated(body)?;
                Self::from_houses(data.lal_kitab.houses.into_iter().map(|h| {
                    (
                        h.house,
                        GeneratedHouse {
                            sign: h.rashi,
                            planets: h.planets,
                        },
                    )
                }))?
            }
            ChartKind::D1 => {
                let data: D1Data = decode_generated(body)?;
                Self::from_parallel(data.d1.planets, &data.d1.signs)?
            }
            ChartKind::Kp => {
                let data: KpData = decode_generated(body)?;
                Self::from_houses(data.kp.houses.into_iter().map(|h| {
                    (
                        h.house,
                        GeneratedHouse {
                            sign: h.sign,
                            planets: h.planets,
                        },
                    )
                }))?
            }
        };
        Ok(chart)
    }
}

fn house_slot(house: u8) -> Result<usize, CompareError> {
    if is_valid_house(house) {
        Ok(usize::from(house) - 1)
    } else {
        Err(CompareError::InvalidHouse {
            house: house.to_string(),
        })
    }
}

// ── Generator payloads ─────────────────────────────────────────────

#[derive(Deserialize)]
struct TransitData {
    birth: TransitChart,
}

#[derive(Deserialize)]
struct TransitChart {
    #[serde(default, deserialize_with = "null_as_default")]
    planets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    rashi: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LalKitabData {
    lal_kitab: NumberedHouses<LalKitabHouse>,
}

#[derive(Deserialize)]
struct LalKitabHouse {
    house: u8,
    #[serde(default)]
    rashi: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    planets: String,
}

#[derive(Deserialize)]
struct D1Data {
    d1: D1Chart,
}

#[derive(Deserialize)]
struct D1Chart {
    #[serde(default, deserialize_with = "null_as_default")]
    planets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    signs: Vec<u8>,
}

#[derive(Deserialize)]
struct KpData {
    kp: NumberedHouses<KpHouse>,
}

#[derive(Deserialize)]
struct KpHouse {
    house: u8,
    #[serde(default)]
    sign: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    planets: String,
}

#[derive(Deserialize)]
struct NumberedHouses<H> {
    houses: Vec<H>,
}
