//! D1 (Rashi) verifier schema.
//!
//! One entry per planet, naming the house it occupies and that house's
//! sign by name. Houses without planets do not appear.

use serde::{Deserialize, Serialize};

use super::{HouseIndex, LabelKind, sign_from_name};
use crate::envelope::null_as_default;
use crate::error::CompareError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct D1Reference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<D1Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct D1Entry {
    /// Full planet name.
    pub name: String,
    pub house: u8,
    /// Sign name of `house`.
    pub sign: String,
}

impl D1Reference {
    pub(crate) fn house_index(&self) -> Result<HouseIndex, CompareError> {
        let mut index = HouseIndex::new(LabelKind::FullName);
        for entry in &self.data {
            let sign = sign_from_name(entry.house, &entry.sign)?;
            index.add(entry.house, Some(sign), [entry.name.clone()])?;
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_core::sign::Sign;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "data": [
            {"name": "Ascendant", "house": 1, "sign": "Cancer"},
            {"name": "Jupiter", "house": 1, "sign": "Cancer"},
            {"name": "Sun", "house": 9, "sign": "Pisces"},
            {"name": "Mercury", "house": 9, "sign": "Pisces"}
        ]
    }"#;

    #[test]
    fn groups_planets_by_house() {
        let reference: D1Reference = serde_json::from_str(FIXTURE).unwrap();
        let index = reference.house_index().unwrap();

        assert_eq!(index.len(), 2);
        let first = index.get(1).unwrap();
        assert_eq!(first.sign, Some(Sign::Cancer));
        assert_eq!(first.labels, vec!["Ascendant", "Jupiter"]);
        assert_eq!(index.get(9).unwrap().labels, vec!["Sun", "Mercury"]);
    }

    #[test]
    fn unknown_sign_name_rejected() {
        let reference: D1Reference = serde_json::from_str(
            r#"{"data": [{"name": "Moon", "house": 2, "sign": "Ophiuchus"}]}"#,
        )
        .unwrap();
        assert_eq!(
            reference.house_index().unwrap_err(),
            CompareError::UnknownSign {
                house: 2,
                name: "Ophiuchus".into()
            }
        );
    }

    #[test]
    fn entries_disagreeing_on_a_house_sign_rejected() {
        let reference: D1Reference = serde_json::from_str(
            r#"{"data": [
                {"name": "Moon", "house": 5, "sign": "Leo"},
                {"name": "Mars", "house": 5, "sign": "Virgo"}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            reference.house_index(),
            Err(CompareError::ConflictingSign { house: 5, .. })
        ));
    }
}
