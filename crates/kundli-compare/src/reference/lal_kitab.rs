//! Lal Kitab verifier schema.
//!
//! One entry per house in house order. Each entry carries the numeric sign,
//! its name, and the short codes of the planets in the house. The Ascendant
//! is not listed.

use serde::{Deserialize, Serialize};

use super::{HouseIndex, LabelKind, positional_houses, sign_from_index, sign_from_name};
use crate::envelope::null_as_default;
use crate::error::CompareError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LalKitabReference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<LalKitabEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LalKitabEntry {
    #[serde(default)]
    pub sign: Option<u8>,
    #[serde(default)]
    pub sign_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub planets_small: Vec<String>,
}

impl LalKitabReference {
    /// The numeric `sign` wins; `signName` is only consulted without it.
    pub(crate) fn house_index(&self) -> Result<HouseIndex, CompareError> {
        let mut index = HouseIndex::new(LabelKind::ShortCode);
        for (house, entry) in positional_houses(self.data.len())?.zip(&self.data) {
            let sign = match (entry.sign, entry.sign_name.as_deref()) {
                (Some(n), _) => Some(sign_from_index(house, n)?),
                (None, Some(name)) => Some(sign_from_name(house, name)?),
                (None, None) => None,
            };
            index.add(house, sign, entry.planets_small.iter().cloned())?;
        }
        Ok(index)
    }
}
