//! Reference charts: the independent verifier's placements.
//!
//! Each chart kind's verifier returns its own schema, modeled here as one
//! [`ReferenceChart`] variant per kind. Every variant builds the same
//! [`HouseIndex`] (house → optional sign + planet labels) with its own
//! strategy:
//!
//! - [`transit`]: flat `housePlanets` map of full names, no signs
//! - [`lal_kitab`]: positional `{sign, signName, planetsSmall}` entries
//! - [`d1`]: per-planet `{name, house, sign}` entries with sign names
//! - [`kp`]: positional `{signs, planets, planetsSmall, planetSigns}` entries

pub mod d1;
pub mod kp;
pub mod lal_kitab;
pub mod transit;

use kundli_core::enums::ChartKind;
use kundli_core::is_valid_house;
use kundli_core::sign::Sign;
use std::collections::BTreeMap;

use crate::envelope::decode_reference;
use crate::error::{CompareError, VerifyError};

/// A decoded verifier response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceChart {
    Transit(transit::TransitReference),
    LalKitab(lal_kitab::LalKitabReference),
    D1(d1::D1Reference),
    Kp(kp::KpReference),
}

impl ReferenceChart {
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Transit(_) => ChartKind::Transit,
            Self::LalKitab(_) => ChartKind::LalKitab,
            Self::D1(_) => ChartKind::D1,
            Self::Kp(_) => ChartKind::Kp,
        }
    }

    /// Decode a verifier response body for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Status`] if the body carries a non-200
    /// `status`, and [`VerifyError::Decode`] if it does not match the
    /// kind's schema.
    pub fn decode(kind: ChartKind, body: &str) -> Result<Self, VerifyError> {
        Ok(match kind {
            ChartKind::Transit => Self::Transit(decode_reference(body)?),
            ChartKind::LalKitab => Self::LalKitab(decode_reference(body)?),
            ChartKind::D1 => Self::D1(decode_reference(body)?),
            ChartKind::Kp => Self::Kp(decode_reference(body)?),
        })
    }

    /// Build the per-house index for this reference.
    ///
    /// # Errors
    ///
    /// Returns a [`CompareError`] for malformed reference data: houses
    /// outside `1..=12`, too many positional entries, unknown sign names or
    /// indices, or conflicting signs for one house.
    pub fn house_index(&self) -> Result<HouseIndex, CompareError> {
        match self {
            Self::Transit(r) => r.house_index(),
            Self::LalKitab(r) => r.house_index(),
            Self::D1(r) => r.house_index(),
            Self::Kp(r) => r.house_index(),
        }
    }
}

/// How a reference names its planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Full English names (`Sun`, `Ascendant`).
    FullName,
    /// Two-letter codes (`Su`, `As`), possibly padded with whitespace.
    ShortCode,
}

/// Reference data for one house.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceHouse {
    /// `None` when the reference does not report signs.
    pub sign: Option<Sign>,
    /// Planet labels as the verifier gave them.
    pub labels: Vec<String>,
}

/// House number → reference data, for the houses the reference mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseIndex {
    label_kind: LabelKind,
    houses: BTreeMap<u8, ReferenceHouse>,
}

impl HouseIndex {
    #[must_use]
    pub const fn new(label_kind: LabelKind) -> Self {
        Self {
            label_kind,
            houses: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn label_kind(&self) -> LabelKind {
        self.label_kind
    }

    /// Record `labels` for `house`, appending to labels already recorded.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidHouse`] for a house outside `1..=12`
    /// and [`CompareError::ConflictingSign`] if `sign` disagrees with a
    /// sign already recorded for the house.
    pub fn add(
        &mut self,
        house: u8,
        sign: Option<Sign>,
        labels: impl IntoIterator<Item = String>,
    ) -> Result<(), CompareError> {
        if !is_valid_house(house) {
            return Err(CompareError::InvalidHouse {
                house: house.to_string(),
            });
        }

        let entry = self.houses.entry(house).or_default();
        match (entry.sign, sign) {
            (Some(first), Some(second)) if first != second => {
                return Err(CompareError::ConflictingSign {
                    house,
                    first,
                    second,
                });
            }
            (None, Some(_)) => entry.sign = sign,
            _ => {}
        }
        entry.labels.extend(labels);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, house: u8) -> Option<&ReferenceHouse> {
        self.houses.get(&house)
    }

    #[must_use]
    pub fn contains(&self, house: u8) -> bool {
        self.houses.contains_key(&house)
    }

    /// Indexed houses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ReferenceHouse)> {
        self.houses.iter().map(|(house, data)| (*house, data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.houses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }
}

/// House numbers for `count` positional entries (index 0 = house 1).
///
/// # Errors
///
/// Returns [`CompareError::TooManyHouses`] when `count` exceeds 12.
fn positional_houses(count: usize) -> Result<impl Iterator<Item = u8>, CompareError> {
    if count > kundli_core::HOUSE_COUNT {
        return Err(CompareError::TooManyHouses { count });
    }
    Ok((1u8..).take(count))
}

/// Sign for a numeric index reported in `house`.
fn sign_from_index(house: u8, index: u8) -> Result<Sign, CompareError> {
    Sign::from_index(index).ok_or(CompareError::InvalidSign { house, index })
}

/// Sign for a sign name reported in `house`.
fn sign_from_name(house: u8, name: &str) -> Result<Sign, CompareError> {
    Sign::from_name(name.trim()).ok_or_else(|| CompareError::UnknownSign {
        house,
        name: name.to_string(),
    })
}
