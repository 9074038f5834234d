//! Birth/transit verifier schema.
//!
//! The verifier returns a flat map from house number (as a string key) to
//! the full names of the planets in that house. It reports no signs.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::{HouseIndex, LabelKind};
use crate::error::CompareError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitReference {
    #[serde(default, deserialize_with = "null_lists_as_empty")]
    pub house_planets: BTreeMap<String, Vec<String>>,
}

/// `null` for the map or for any house reads as empty.
fn null_lists_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, Option<Vec<String>>>>::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(house, planets)| (house, planets.unwrap_or_default()))
        .collect())
}

impl TransitReference {
    pub(crate) fn house_index(&self) -> Result<HouseIndex, CompareError> {
        let mut index = HouseIndex::new(LabelKind::FullName);
        for (key, planets) in &self.house_planets {
            let house = key
                .trim()
                .parse::<u8>()
                .map_err(|_| CompareError::InvalidHouse { house: key.clone() })?;
            // "1", "01" and "+1" are distinct keys naming one house.
            if index.contains(house) {
                return Err(CompareError::DuplicateHouse { house });
            }
            index.add(house, None, planets.iter().cloned())?;
        }
        Ok(index)
    }
}
