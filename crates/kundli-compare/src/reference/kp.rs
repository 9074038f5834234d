//! KP (Krishnamurti Paddhati) verifier schema.
//!
//! One entry per house in house order, with the house sign index, the
//! planets by full name and by short code, and each planet's own sign.
//! The house index uses the full names.

use serde::{Deserialize, Serialize};

use super::{HouseIndex, LabelKind, positional_houses, sign_from_index};
use crate::envelope::null_as_default;
use crate::error::CompareError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpReference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<KpEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpEntry {
    /// Sign index of the house.
    pub signs: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planets_small: Vec<String>,
    /// Sign index of each planet, parallel to `planets`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub planet_signs: Vec<u8>,
}

impl KpReference {
    pub(crate) fn house_index(&self) -> Result<HouseIndex, CompareError> {
        let mut index = HouseIndex::new(LabelKind::FullName);
        for (house, entry) in positional_houses(self.data.len())?.zip(&self.data) {
            let sign = sign_from_index(house, entry.signs)?;
            index.add(house, Some(sign), entry.planets.iter().cloned())?;
        }
        Ok(index)
    }
}
