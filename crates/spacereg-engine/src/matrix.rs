//! # Comparison Matrix
//!
//! A fixed list of named criteria, each a pure function from one
//! jurisdiction to a `{value, score}` cell. Criteria never read each
//! other's output, so the cell for a jurisdiction depends only on that
//! jurisdiction's record and the reference year, never on which other
//! jurisdictions were selected or in which order.
//!
//! Scores run from 1 (least favourable to the operator) to 5.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spacereg_core::{CrossReferenceRelationship, JurisdictionCode, LegislationStatus, LiabilityRegime};
use spacereg_pack::{JurisdictionLaw, RemoteSensingRegime};

use crate::display;

/// Grouping of a criterion for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionCategory {
    /// Authorisation procedure.
    Licensing,
    /// Fees, insurance and liability.
    Financial,
    /// Space debris obligations.
    Debris,
    /// Legal framework.
    Regulatory,
}

/// One matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    /// Display value.
    pub value: String,
    /// Comparability score, 1 to 5.
    pub score: u8,
    /// Extra detail shown next to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MatrixCell {
    fn new(value: impl Into<String>, score: u8) -> Self {
        Self {
            value: value.into(),
            score,
            notes: None,
        }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes = Some(note.into());
        self
    }
}

/// A criterion row with one cell per jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// Stable criterion id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display group.
    pub category: CriterionCategory,
    /// Cells keyed by jurisdiction code.
    pub jurisdictions: BTreeMap<JurisdictionCode, MatrixCell>,
}

/// The full matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMatrix {
    /// Criterion rows in definition order.
    pub criteria: Vec<Criterion>,
}

/// Inputs shared by every criterion.
#[derive(Debug, Clone, Copy)]
pub struct CriterionContext {
    /// Year legislation age is measured against.
    pub reference_year: i32,
}

/// A named criterion and its cell function.
#[derive(Debug, Clone, Copy)]
pub struct CriterionDef {
    /// Stable criterion id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display group.
    pub category: CriterionCategory,
    /// Cell for one jurisdiction.
    pub evaluate: fn(&JurisdictionLaw, &CriterionContext) -> MatrixCell,
}

/// The criteria in display order.
pub static CRITERIA: &[CriterionDef] = &[
    CriterionDef {
        id: "processing_time",
        name: "Processing Time",
        category: CriterionCategory::Licensing,
        evaluate: processing_time,
    },
    CriterionDef {
        id: "application_fee",
        name: "Application Fee",
        category: CriterionCategory::Financial,
        evaluate: application_fee,
    },
    CriterionDef {
        id: "minimum_insurance",
        name: "Minimum Insurance",
        category: CriterionCategory::Financial,
        evaluate: minimum_insurance,
    },
    CriterionDef {
        id: "government_indemnification",
        name: "Government Indemnification",
        category: CriterionCategory::Financial,
        evaluate: government_indemnification,
    },
    CriterionDef {
        id: "liability_regime",
        name: "Liability Regime",
        category: CriterionCategory::Financial,
        evaluate: liability_regime,
    },
    CriterionDef {
        id: "deorbit_timeline",
        name: "Deorbit Timeline",
        category: CriterionCategory::Debris,
        evaluate: deorbit_timeline,
    },
    CriterionDef {
        id: "debris_mitigation_plan",
        name: "Debris Mitigation Plan",
        category: CriterionCategory::Debris,
        evaluate: debris_mitigation_plan,
    },
    CriterionDef {
        id: "regulatory_maturity",
        name: "Regulatory Maturity",
        category: CriterionCategory::Regulatory,
        evaluate: regulatory_maturity,
    },
    CriterionDef {
        id: "remote_sensing",
        name: "Remote Sensing Licensing",
        category: CriterionCategory::Regulatory,
        evaluate: remote_sensing,
    },
    CriterionDef {
        id: "eu_space_act_impact",
        name: "EU Space Act Impact",
        category: CriterionCategory::Regulatory,
        evaluate: harmonization_impact,
    },
];

/// Build the matrix for `laws`. No laws, no rows.
pub fn build_matrix(laws: &[&JurisdictionLaw], ctx: &CriterionContext) -> ComparisonMatrix {
    if laws.is_empty() {
        return ComparisonMatrix::default();
    }
    let criteria = CRITERIA
        .iter()
        .map(|def| Criterion {
            id: def.id.to_string(),
            name: def.name.to_string(),
            category: def.category,
            jurisdictions: laws
                .iter()
                .map(|law| (law.code.clone(), (def.evaluate)(law, ctx)))
                .collect(),
        })
        .collect();
    ComparisonMatrix { criteria }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

fn processing_time(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    let Some(range) = law.timeline.processing_weeks else {
        return MatrixCell::new("Not specified", 3);
    };
    let avg = range.average();
    let score = if avg <= 8.0 {
        5
    } else if avg <= 12.0 {
        4
    } else if avg <= 16.0 {
        3
    } else if avg <= 26.0 {
        2
    } else {
        1
    };
    MatrixCell::new(display::week_range(range), score)
}

fn application_fee(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    match law.timeline.application_fee_eur {
        None => MatrixCell::new("Contact authority for fee schedule", 5),
        Some(0) => MatrixCell::new("None", 5),
        Some(fee) => {
            let score = match fee {
                1..=5_000 => 4,
                5_001..=25_000 => 3,
                25_001..=100_000 => 2,
                _ => 1,
            };
            MatrixCell::new(display::eur(fee), score)
        }
    }
}

fn minimum_insurance(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    let insurance = &law.insurance;
    if !insurance.mandatory {
        return MatrixCell::new("Not mandatory", 5);
    }
    match insurance.minimum_coverage_eur {
        None => MatrixCell::new("Mandatory, amount set per licence", 3),
        Some(amount) => {
            let score = match amount {
                0..=20_000_000 => 4,
                20_000_001..=60_000_000 => 3,
                60_000_001..=100_000_000 => 2,
                _ => 1,
            };
            MatrixCell::new(display::eur(amount), score)
        }
    }
}

fn government_indemnification(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    if law.insurance.government_indemnification {
        MatrixCell::new("Yes", 5)
    } else {
        MatrixCell::new("No", 2)
    }
}

fn liability_regime(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    match law.insurance.liability_regime {
        LiabilityRegime::Capped => {
            let cell = MatrixCell::new("Capped", 5);
            match law.insurance.liability_cap_eur {
                Some(cap) => cell.with_note(format!("cap {}", display::eur(cap))),
                None => cell,
            }
        }
        LiabilityRegime::Negotiable => MatrixCell::new("Negotiable", 4),
        LiabilityRegime::Unspecified => MatrixCell::new("Not specified", 3),
        LiabilityRegime::Unlimited => MatrixCell::new("Unlimited", 1),
    }
}

fn deorbit_timeline(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    if !law.debris.deorbit_required {
        return MatrixCell::new("No requirement", 5);
    }
    match law.debris.deorbit_timeline_years {
        None => MatrixCell::new("Required", 3),
        Some(years) => {
            let score = match years {
                25..=u32::MAX => 4,
                10..=24 => 3,
                5..=9 => 2,
                _ => 1,
            };
            MatrixCell::new(format!("{years} years"), score)
        }
    }
}

fn debris_mitigation_plan(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    if !law.debris.mitigation_plan_required {
        return MatrixCell::new("Not required", 5);
    }
    let cell = MatrixCell::new("Required", 3);
    if law.debris.passivation_required {
        cell.with_note("passivation required")
    } else {
        cell
    }
}

fn regulatory_maturity(law: &JurisdictionLaw, ctx: &CriterionContext) -> MatrixCell {
    match law.legislation.status {
        LegislationStatus::None => MatrixCell::new("No comprehensive law", 1),
        LegislationStatus::Draft => MatrixCell::new("Draft", 2),
        LegislationStatus::Pending => MatrixCell::new("Pending", 2),
        LegislationStatus::Enacted => match (
            law.legislation.enacted_year,
            law.legislation_age(ctx.reference_year),
        ) {
            (Some(year), Some(age)) => {
                let score = if age >= 16 {
                    5
                } else if age >= 8 {
                    4
                } else {
                    3
                };
                MatrixCell::new(format!("Enacted {year}"), score)
            }
            _ => MatrixCell::new("Enacted", 3),
        },
    }
}

fn remote_sensing(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    match law.remote_sensing {
        RemoteSensingRegime::Dedicated => MatrixCell::new("Dedicated regime", 4),
        RemoteSensingRegime::GeneralLicence => MatrixCell::new("Covered by general licence", 3),
        RemoteSensingRegime::NotRegulated => MatrixCell::new("Not regulated", 2),
    }
}

fn harmonization_impact(law: &JurisdictionLaw, _: &CriterionContext) -> MatrixCell {
    let (value, score) = match law.cross_reference.relationship {
        CrossReferenceRelationship::Parallel => ("Parallel framework", 5),
        CrossReferenceRelationship::Complementary => ("Complementary", 4),
        CrossReferenceRelationship::Superseded => ("Superseded", 2),
        CrossReferenceRelationship::Gap => ("Fills a regulatory gap", 1),
    };
    let cell = MatrixCell::new(value, score);
    match &law.cross_reference.transition_notes {
        Some(notes) => cell.with_note(notes.clone()),
        None => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_pack::{ReferenceData, WeekRange};

    const CTX: CriterionContext = CriterionContext {
        reference_year: 2026,
    };

    fn law(code: &str) -> JurisdictionLaw {
        ReferenceData::builtin()
            .unwrap()
            .jurisdiction(code)
            .cloned()
            .unwrap()
    }

    fn cell(matrix: &ComparisonMatrix, criterion: &str, code: &str) -> MatrixCell {
        matrix
            .criteria
            .iter()
            .find(|c| c.id == criterion)
            .and_then(|c| c.jurisdictions.get(code))
            .cloned()
            .unwrap()
    }

    #[test]
    fn empty_selection_has_no_rows() {
        assert!(build_matrix(&[], &CTX).criteria.is_empty());
    }

    #[test]
    fn every_criterion_has_a_cell_per_jurisdiction() {
        let fr = law("FR");
        let de = law("DE");
        let matrix = build_matrix(&[&fr, &de], &CTX);
        assert_eq!(matrix.criteria.len(), CRITERIA.len());
        for criterion in &matrix.criteria {
            assert_eq!(criterion.jurisdictions.len(), 2, "{}", criterion.id);
            for cell in criterion.jurisdictions.values() {
                assert!((1..=5).contains(&cell.score));
            }
        }
    }

    #[test]
    fn criterion_ids_are_unique() {
        let mut ids: Vec<_> = CRITERIA.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CRITERIA.len());
    }

    #[test]
    fn france_cells() {
        let fr = law("FR");
        let matrix = build_matrix(&[&fr], &CTX);
        assert_eq!(cell(&matrix, "processing_time", "FR"), MatrixCell::new("6-10 weeks", 5));
        assert_eq!(
            cell(&matrix, "application_fee", "FR").value,
            "Contact authority for fee schedule"
        );
        assert_eq!(cell(&matrix, "minimum_insurance", "FR"), MatrixCell::new("EUR 60M", 3));
        assert_eq!(cell(&matrix, "government_indemnification", "FR").score, 5);
        assert_eq!(
            cell(&matrix, "liability_regime", "FR").notes.as_deref(),
            Some("cap EUR 60M")
        );
        assert_eq!(cell(&matrix, "deorbit_timeline", "FR"), MatrixCell::new("25 years", 4));
        assert_eq!(cell(&matrix, "regulatory_maturity", "FR"), MatrixCell::new("Enacted 2008", 5));
        assert_eq!(cell(&matrix, "remote_sensing", "FR").score, 4);
    }

    #[test]
    fn germany_cells() {
        let de = law("DE");
        let matrix = build_matrix(&[&de], &CTX);
        assert_eq!(cell(&matrix, "regulatory_maturity", "DE").score, 1);
        assert_eq!(cell(&matrix, "minimum_insurance", "DE").score, 5);
        assert_eq!(cell(&matrix, "deorbit_timeline", "DE").score, 5);
        assert_eq!(cell(&matrix, "debris_mitigation_plan", "DE").score, 5);
        assert_eq!(cell(&matrix, "eu_space_act_impact", "DE").score, 1);
        assert_eq!(cell(&matrix, "processing_time", "DE"), MatrixCell::new("Not specified", 3));
    }

    #[test]
    fn processing_time_tiers() {
        let mut l = law("FR");
        for (min, max, score) in [(4, 8, 5), (8, 16, 4), (12, 20, 3), (20, 32, 2), (26, 40, 1)] {
            l.timeline.processing_weeks = Some(WeekRange { min, max });
            assert_eq!(processing_time(&l, &CTX).score, score, "{min}-{max}");
        }
    }

    #[test]
    fn fee_tiers() {
        let mut l = law("FR");
        for (fee, score) in [(0, 5), (5_000, 4), (7_500, 3), (25_000, 3), (100_000, 2), (250_000, 1)] {
            l.timeline.application_fee_eur = Some(fee);
            assert_eq!(application_fee(&l, &CTX).score, score, "{fee}");
        }
    }

    #[test]
    fn insurance_tiers() {
        let mut l = law("FR");
        for (amount, score) in [(10_000_000, 4), (60_000_000, 3), (70_000_000, 2), (150_000_000, 1)] {
            l.insurance.minimum_coverage_eur = Some(amount);
            assert_eq!(minimum_insurance(&l, &CTX).score, score, "{amount}");
        }
        l.insurance.minimum_coverage_eur = None;
        assert_eq!(minimum_insurance(&l, &CTX).score, 3);
    }

    #[test]
    fn deorbit_tiers() {
        let mut l = law("FR");
        for (years, score) in [(25, 4), (10, 3), (5, 2), (3, 1)] {
            l.debris.deorbit_timeline_years = Some(years);
            assert_eq!(deorbit_timeline(&l, &CTX).score, score, "{years}");
        }
        l.debris.deorbit_timeline_years = None;
        assert_eq!(deorbit_timeline(&l, &CTX).score, 3);
    }

    #[test]
    fn maturity_tiers() {
        let mut l = law("FR");
        for (year, score) in [(2010, 5), (2018, 4), (2019, 3)] {
            l.legislation.enacted_year = Some(year);
            assert_eq!(regulatory_maturity(&l, &CTX).score, score, "{year}");
        }
        assert_eq!(regulatory_maturity(&law("IT"), &CTX).score, 2);
    }

    #[test]
    fn maturity_survives_extreme_years() {
        let mut l = law("FR");
        l.legislation.enacted_year = Some(i32::MIN);
        assert_eq!(regulatory_maturity(&l, &CTX).score, 5);
        l.legislation.enacted_year = Some(i32::MAX);
        assert_eq!(regulatory_maturity(&l, &CTX).score, 3);
    }

    #[test]
    fn passivation_noted_on_plan() {
        assert_eq!(
            debris_mitigation_plan(&law("FR"), &CTX).notes.as_deref(),
            Some("passivation required")
        );
        assert_eq!(debris_mitigation_plan(&law("BE"), &CTX).notes, None);
    }
}
