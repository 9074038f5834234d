//! The chart comparator.
//!
//! For a generated chart and a reference chart of the same kind:
//! 1. Build the reference [`HouseIndex`].
//! 2. Resolve every generated planet code; one unknown code fails the chart.
//! 3. For each indexed house, check the sign (when the reference reports
//!    one), then the planets under the kind's [`ComparePolicy`].
//! 4. Fail if a generated house holds planets the reference never mentions.
//!
//! The result is a plain `bool`. The reason for a failure is only logged.

use kundli_config::KundliConfig;
use kundli_core::enums::{AscendantPolicy, MatchDiscipline};
use kundli_core::planet::Planet;
use kundli_core::policy::{ComparePolicy, PolicySet};
use kundli_core::sign::Sign;

use crate::error::CompareError;
use crate::generated::GeneratedChart;
use crate::reference::{HouseIndex, LabelKind, ReferenceChart};
use crate::resolve::resolve_house;

/// Compares generated charts against reference charts under per-kind policies.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    policies: PolicySet,
}

impl Comparator {
    #[must_use]
    pub const fn new(policies: PolicySet) -> Self {
        Self { policies }
    }

    #[must_use]
    pub const fn from_config(config: &KundliConfig) -> Self {
        Self::new(config.policy)
    }

    #[must_use]
    pub const fn policies(&self) -> &PolicySet {
        &self.policies
    }

    /// Whether `generated` and `reference` describe the same placements.
    ///
    /// The policy is chosen by the reference's chart kind. Never panics on
    /// malformed data: bad reference data and unknown codes are mismatches.
    pub fn compare(&self, generated: &GeneratedChart, reference: &ReferenceChart) -> bool {
        let kind = reference.kind();
        match self.check(generated, reference) {
            Ok(()) => {
                tracing::debug!(%kind, "charts match");
                true
            }
            Err(error) => {
                tracing::warn!(%kind, %error, "chart mismatch");
                false
            }
        }
    }

    pub(crate) fn check(
        &self,
        generated: &GeneratedChart,
        reference: &ReferenceChart,
    ) -> Result<(), CompareError> {
        let policy = self.policies.get(reference.kind());
        let index = reference.house_index()?;

        let resolved = generated
            .houses()
            .map(|(house, data)| resolve_house(&data.planets).map(|planets| (house, planets)))
            .collect::<Result<Vec<_>, _>>()?;

        for (house, expected) in index.iter() {
            let actual_sign = generated.house(house).and_then(|h| h.sign);
            check_sign(house, expected.sign, actual_sign)?;

            let actual = resolved
                .iter()
                .find(|(h, _)| *h == house)
                .map_or(&[] as &[Planet], |(_, planets)| planets.as_slice());
            tracing::debug!(house, expected = ?expected.labels, ?actual, "comparing house");

            let matcher = HouseMatch {
                house,
                policy,
                label_kind: index.label_kind(),
            };
            match policy.discipline {
                MatchDiscipline::FullNames => matcher.full_names(actual, &expected.labels)?,
                MatchDiscipline::ShortCodes => matcher.short_codes(actual, &expected.labels)?,
            }
        }

        check_unindexed(&index, &resolved, policy.ascendant)
    }
}

/// Compare with the built-in policy for every chart kind.
#[must_use]
pub fn compare(generated: &GeneratedChart, reference: &ReferenceChart) -> bool {
    Comparator::default().compare(generated, reference)
}

/// Whether the Ascendant is left out of matching in `house`.
const fn ascendant_ignored(policy: AscendantPolicy, house: u8) -> bool {
    match policy {
        AscendantPolicy::Listed => false,
        AscendantPolicy::Exempt => true,
        AscendantPolicy::ImplicitInFirstHouse => house == 1,
    }
}

fn check_sign(house: u8, expected: Option<Sign>, actual: Option<u8>) -> Result<(), CompareError> {
    match expected {
        Some(sign) if actual != Some(sign.index()) => Err(CompareError::SignMismatch {
            house,
            expected: sign,
            actual,
        }),
        _ => Ok(()),
    }
}

/// Generated houses with planets must appear in the reference index.
fn check_unindexed(
    index: &HouseIndex,
    resolved: &[(u8, Vec<Planet>)],
    ascendant: AscendantPolicy,
) -> Result<(), CompareError> {
    for (house, planets) in resolved {
        let has_planets = planets
            .iter()
            .any(|p| !(p.is_ascendant() && ascendant_ignored(ascendant, *house)));
        if has_planets && !index.contains(*house) {
            return Err(CompareError::MissingInReference { house: *house });
        }
    }
    Ok(())
}

/// Planet matching for one house.
struct HouseMatch {
    house: u8,
    policy: ComparePolicy,
    label_kind: LabelKind,
}

impl HouseMatch {
    const fn skips_ascendant(&self) -> bool {
        ascendant_ignored(self.policy.ascendant, self.house)
    }

    /// Set equality on sorted full names.
    fn full_names(&self, actual: &[Planet], labels: &[String]) -> Result<(), CompareError> {
        let skip = self.skips_ascendant();

        let mut expected = labels
            .iter()
            .map(|label| self.label_to_name(label))
            .collect::<Result<Vec<_>, _>>()?;
        expected.retain(|name| !(skip && name == Planet::Ascendant.name()));

        let mut actual: Vec<String> = actual
            .iter()
            .filter(|p| !(skip && p.is_ascendant()))
            .map(|p| p.name().to_string())
            .collect();

        if actual.is_empty() && !expected.is_empty() {
            return Err(CompareError::MissingInGenerated { house: self.house });
        }

        expected.sort();
        actual.sort();
        if expected != actual {
            return Err(CompareError::PlanetMismatch {
                house: self.house,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Count check, then every generated code must be among the reference
    /// codes.
    fn short_codes(&self, actual: &[Planet], labels: &[String]) -> Result<(), CompareError> {
        let exempt = self.policy.ascendant == AscendantPolicy::Exempt;
        let implicit = self.policy.ascendant == AscendantPolicy::ImplicitInFirstHouse
            && self.house == 1;
        let ascendant = Planet::Ascendant.code();

        let mut expected = labels
            .iter()
            .map(|label| self.label_to_code(label))
            .collect::<Result<Vec<_>, _>>()?;
        expected.retain(|code| !(exempt && code == ascendant));

        let actual: Vec<&str> = actual
            .iter()
            .filter(|p| !(exempt && p.is_ascendant()))
            .map(|p| p.code())
            .collect();

        if actual.is_empty() && !expected.is_empty() {
            return Err(CompareError::MissingInGenerated { house: self.house });
        }

        // The one extra generated planet allowed in house 1 is the Ascendant.
        let extra_ascendant = implicit
            && actual.len() == expected.len() + 1
            && actual.contains(&ascendant);
        if actual.len() != expected.len() && !extra_ascendant {
            return Err(CompareError::CountMismatch {
                house: self.house,
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let mut skip_ascendant = extra_ascendant;
        for code in actual {
            if skip_ascendant && code == ascendant {
                skip_ascendant = false;
                continue;
            }
            if !expected.iter().any(|e| e == code) {
                return Err(CompareError::MissingPlanet {
                    house: self.house,
                    code: code.to_string(),
                });
            }
        }
        Ok(())
    }

    fn label_to_name(&self, label: &str) -> Result<String, CompareError> {
        let label = label.trim();
        match self.label_kind {
            LabelKind::FullName => Ok(label.to_string()),
            LabelKind::ShortCode => Planet::from_code(label)
                .map(|p| p.name().to_string())
                .ok_or_else(|| self.unknown_label(label)),
        }
    }

    fn label_to_code(&self, label: &str) -> Result<String, CompareError> {
        let label = label.trim();
        match self.label_kind {
            LabelKind::ShortCode => Ok(label.to_string()),
            LabelKind::FullName => Planet::from_name(label)
                .map(|p| p.code().to_string())
                .ok_or_else(|| self.unknown_label(label)),
        }
    }

    fn unknown_label(&self, label: &str) -> CompareError {
        CompareError::UnknownLabel {
            house: self.house,
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::d1::{D1Entry, D1Reference};
    use crate::reference::kp::{KpEntry, KpReference};
    use crate::reference::lal_kitab::{LalKitabEntry, LalKitabReference};
    use crate::reference::transit::TransitReference;
    use kundli_core::enums::ChartKind;
    use pretty_assertions::assert_eq;

    fn chart(houses: &[(u8, Option<u8>, &str)]) -> GeneratedChart {
        let mut chart = GeneratedChart::new();
        for (house, sign, planets) in houses {
            chart.set_house(*house, *sign, *planets).unwrap();
        }
        chart
    }

    fn transit(houses: &[(&str, &[&str])]) -> ReferenceChart {
        ReferenceChart::Transit(TransitReference {
            house_planets: houses
                .iter()
                .map(|(h, planets)| {
                    (
                        (*h).to_string(),
                        planets.iter().map(ToString::to_string).collect(),
                    )
                })
                .collect(),
        })
    }

    fn lal_kitab(entries: &[(u8, &[&str])]) -> ReferenceChart {
        ReferenceChart::LalKitab(LalKitabReference {
            data: entries
                .iter()
                .map(|(sign, codes)| LalKitabEntry {
                    sign: Some(*sign),
                    sign_name: None,
                    planets_small: codes.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        })
    }

    fn d1(entries: &[(&str, u8, &str)]) -> ReferenceChart {
        ReferenceChart::D1(D1Reference {
            data: entries
                .iter()
                .map(|(name, house, sign)| D1Entry {
                    name: (*name).to_string(),
                    house: *house,
                    sign: (*sign).to_string(),
                })
                .collect(),
        })
    }

    fn with_policy(kind: ChartKind, policy: ComparePolicy) -> Comparator {
        let mut policies = PolicySet::default();
        policies.set(kind, policy);
        Comparator::new(policies)
    }

    // ── Transit: full names, Ascendant listed ──────────────────────

    #[test]
    fn transit_match_ignores_order_and_decoration() {
        let generated = chart(&[(1, Some(5), "Ma₀₁ As"), (3, Some(7), "Su(C) Me")]);
        let reference = transit(&[("1", &["Ascendant", "Mars"]), ("3", &["Mercury", "Sun"])]);
        assert_eq!(Comparator::default().check(&generated, &reference), Ok(()));
    }

    #[test]
    fn transit_missing_generated_planets() {
        let generated = chart(&[(1, None, "As")]);
        let reference = transit(&[("1", &["Ascendant"]), ("3", &["Sun", "Moon"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::MissingInGenerated { house: 3 })
        );
    }

    #[test]
    fn transit_empty_reference_house_matches_empty_generated_house() {
        let generated = chart(&[(2, None, "Ju")]);
        let reference = transit(&[("2", &["Jupiter"]), ("5", &[])]);
        assert!(compare(&generated, &reference));
    }

    #[test]
    fn transit_extra_generated_house() {
        let generated = chart(&[(2, None, "Ju"), (6, None, "Ke")]);
        let reference = transit(&[("2", &["Jupiter"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::MissingInReference { house: 6 })
        );
    }

    #[test]
    fn transit_duplicates_are_significant() {
        let generated = chart(&[(4, None, "Sa Sa")]);
        let reference = transit(&[("4", &["Saturn"])]);
        assert!(matches!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::PlanetMismatch { house: 4, .. })
        ));
    }

    #[test]
    fn unknown_code_anywhere_fails() {
        let generated = chart(&[(1, None, "As"), (11, None, "Xx₀₂")]);
        let reference = transit(&[("1", &["Ascendant"])]);
        assert!(matches!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::UnknownPlanet { .. })
        ));
    }

    // ── Lal Kitab: short codes, implicit Ascendant ─────────────────

    #[test]
    fn lal_kitab_tolerates_implicit_ascendant_in_first_house() {
        let generated = chart(&[(1, Some(4), "As ₀₅ Ma ₀₁")]);
        let reference = lal_kitab(&[(4, &["Ma"])]);
        assert_eq!(Comparator::default().check(&generated, &reference), Ok(()));
    }

    #[test]
    fn lal_kitab_extra_planet_outside_first_house_fails() {
        let generated = chart(&[(1, Some(4), ""), (2, Some(5), "Su Mo")]);
        let reference = lal_kitab(&[(4, &[]), (5, &["Su"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::CountMismatch {
                house: 2,
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn lal_kitab_first_house_extra_must_be_the_ascendant() {
        let generated = chart(&[(1, Some(4), "Ma Su")]);
        let reference = lal_kitab(&[(4, &["Ma"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::CountMismatch {
                house: 1,
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn lal_kitab_lone_ascendant_does_not_stand_in_for_a_planet() {
        let generated = chart(&[(1, Some(4), "As")]);
        let reference = lal_kitab(&[(4, &["Ma"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::MissingPlanet {
                house: 1,
                code: "As".into()
            })
        );
        assert!(!Comparator::default().compare(&generated, &reference));
    }

    #[test]
    fn lal_kitab_first_house_skips_only_one_ascendant() {
        let generated = chart(&[(1, Some(4), "As As")]);
        let reference = lal_kitab(&[(4, &["Ma"])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::MissingPlanet {
                house: 1,
                code: "As".into()
            })
        );
    }

    #[test]
    fn lal_kitab_ascendant_alone_in_empty_first_house() {
        let generated = chart(&[(1, Some(4), "As")]);
        let reference = lal_kitab(&[(4, &[])]);
        assert_eq!(Comparator::default().check(&generated, &reference), Ok(()));
    }

    #[test]
    fn lal_kitab_reference_codes_are_trimmed() {
        let generated = chart(&[(1, Some(1), "As"), (2, Some(2), "Ve₁₁ Ra")]);
        let reference = lal_kitab(&[(1, &[]), (2, &[" Ra", "Ve "])]);
        assert!(compare(&generated, &reference));
    }

    #[test]
    fn lal_kitab_sign_mismatch() {
        let generated = chart(&[(1, Some(5), "As")]);
        let reference = lal_kitab(&[(4, &[])]);
        assert_eq!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::SignMismatch {
                house: 1,
                expected: Sign::Cancer,
                actual: Some(5)
            })
        );
    }

    #[test]
    fn missing_generated_sign_is_a_mismatch() {
        let generated = chart(&[(1, None, "As")]);
        let reference = lal_kitab(&[(4, &[])]);
        assert!(matches!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::SignMismatch { actual: None, .. })
        ));
    }

    // ── D1: full names, Ascendant exempt ───────────────────────────

    #[test]
    fn d1_exempts_ascendant_on_both_sides() {
        let generated = chart(&[(1, Some(4), "Ju"), (9, Some(12), "Su Me As")]);
        let reference = d1(&[
            ("Ascendant", 1, "Cancer"),
            ("Jupiter", 1, "Cancer"),
            ("Sun", 9, "Pisces"),
            ("Mercury", 9, "Pisces"),
        ]);
        assert_eq!(Comparator::default().check(&generated, &reference), Ok(()));
    }

    #[test]
    fn d1_house_holding_only_ascendant_needs_no_reference_entry() {
        let generated = chart(&[(1, Some(4), "As"), (2, Some(5), "Mo")]);
        let reference = d1(&[("Moon", 2, "Leo")]);
        assert!(compare(&generated, &reference));
    }

    #[test]
    fn d1_unknown_reference_name_mismatches() {
        let generated = chart(&[(2, Some(5), "Mo")]);
        let reference = d1(&[("Luna", 2, "Leo")]);
        assert!(matches!(
            Comparator::default().check(&generated, &reference),
            Err(CompareError::PlanetMismatch { house: 2, .. })
        ));
    }

    // ── KP and policy overrides ────────────────────────────────────

    #[test]
    fn kp_full_names_with_listed_ascendant() {
        let generated = chart(&[(1, Some(10), "As Sa"), (2, Some(11), "")]);
        let reference = ReferenceChart::Kp(KpReference {
            data: vec![
                KpEntry {
                    signs: 10,
                    planets: vec!["Saturn".into(), "Ascendant".into()],
                    planets_small: vec!["Sa".into(), "As".into()],
                    planet_signs: vec![10, 10],
                },
                KpEntry {
                    signs: 11,
                    ..KpEntry::default()
                },
            ],
        });
        assert_eq!(Comparator::default().check(&generated, &reference), Ok(()));
    }

    #[test]
    fn short_code_discipline_maps_full_name_labels() {
        let comparator = with_policy(
            ChartKind::Transit,
            ComparePolicy::new(MatchDiscipline::ShortCodes, AscendantPolicy::Listed),
        );
        let generated = chart(&[(7, None, "Ra Mo")]);
        let reference = transit(&[("7", &["Moon", "Rahu"])]);
        assert_eq!(comparator.check(&generated, &reference), Ok(()));

        let reference = transit(&[("7", &["Moon", "Pluto"])]);
        assert_eq!(
            comparator.check(&generated, &reference),
            Err(CompareError::UnknownLabel {
                house: 7,
                label: "Pluto".into()
            })
        );
    }

    #[test]
    fn full_name_discipline_maps_short_code_labels() {
        let comparator = with_policy(
            ChartKind::LalKitab,
            ComparePolicy::new(MatchDiscipline::FullNames, AscendantPolicy::ImplicitInFirstHouse),
        );
        let generated = chart(&[(1, Some(3), "As Ke"), (2, Some(4), "Ma")]);
        let reference = lal_kitab(&[(3, &["Ke"]), (4, &["Ma"])]);
        assert_eq!(comparator.check(&generated, &reference), Ok(()));
    }

    #[test]
    fn listed_policy_requires_ascendant_in_reference() {
        let comparator = with_policy(
            ChartKind::D1,
            ComparePolicy::new(MatchDiscipline::FullNames, AscendantPolicy::Listed),
        );
        let generated = chart(&[(1, Some(4), "As Ju")]);
        let reference = d1(&[("Jupiter", 1, "Cancer")]);
        assert!(!comparator.compare(&generated, &reference));
    }
}
