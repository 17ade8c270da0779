//! # Legal Regimes
//!
//! Closed enums describing the state of a jurisdiction's legislation, the
//! liability regime it imposes on operators, and how its framework relates
//! to the incoming EU Space Act.

use serde::{Deserialize, Serialize};

/// Legislative status of a national space law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegislationStatus {
    /// In force.
    Enacted,
    /// Published as a draft bill.
    Draft,
    /// Adopted but awaiting entry into force or implementing decrees.
    Pending,
    /// No comprehensive space law exists.
    None,
}

impl_string_enum!(LegislationStatus {
    Enacted => "enacted",
    Draft => "draft",
    Pending => "pending",
    None => "none",
});

/// Operator liability regime towards the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityRegime {
    /// Recourse against the operator is capped by statute.
    Capped,
    /// The cap is agreed case by case in the licence.
    Negotiable,
    /// The operator is liable without limit.
    Unlimited,
    /// The law does not state a regime.
    #[default]
    Unspecified,
}

impl_string_enum!(LiabilityRegime {
    Capped => "capped",
    Negotiable => "negotiable",
    Unlimited => "unlimited",
    Unspecified => "unspecified",
});

/// Relationship between a current framework and the EU Space Act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossReferenceRelationship {
    /// The EU Space Act replaces the national provisions.
    Superseded,
    /// The national provisions continue alongside and complement it.
    Complementary,
    /// The frameworks run in parallel with little interaction.
    Parallel,
    /// The EU Space Act fills a gap where no national rule exists.
    Gap,
}

impl_string_enum!(CrossReferenceRelationship {
    Superseded => "superseded",
    Complementary => "complementary",
    Parallel => "parallel",
    Gap => "gap",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legislation_status_parses() {
        assert_eq!("none".parse::<LegislationStatus>().unwrap(), LegislationStatus::None);
        assert!("repealed".parse::<LegislationStatus>().is_err());
    }

    #[test]
    fn liability_regime_defaults_to_unspecified() {
        assert_eq!(LiabilityRegime::default(), LiabilityRegime::Unspecified);
    }

    #[test]
    fn relationship_serde_roundtrip() {
        for &rel in CrossReferenceRelationship::all() {
            let json = serde_json::to_string(&rel).unwrap();
            let back: CrossReferenceRelationship = serde_json::from_str(&json).unwrap();
            assert_eq!(rel, back);
        }
    }
}
