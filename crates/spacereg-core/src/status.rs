//! # Compliance Statuses, Priorities and Weights
//!
//! [`RecordedStatus`] is what a caller records against a checklist item.
//! It covers both checklist verdicts (`compliant`, `partial`, …) and the
//! procurement lifecycle of insurance policies and authorizations
//! (`quote_requested`, `bound`, `expiring_soon`, …). Every recorded status
//! maps to exactly one point value and one [`ComplianceClass`]; there is no
//! second table anywhere in the workspace.
//!
//! ## Canonical point table
//!
//! ```text
//! compliant | active | bound         100
//! expiring_soon                       80
//! under_review                        60
//! partial                             50
//! quote_received                      40
//! quote_requested                     20
//! not_started | expired               0
//! non_compliant | not_assessed        0
//! not_applicable                      excluded from numerator and denominator
//! ```

use serde::{Deserialize, Serialize};

/// A status recorded by the caller against one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordedStatus {
    /// Requirement fully met.
    Compliant,
    /// Requirement partly met.
    Partial,
    /// Requirement not met.
    NonCompliant,
    /// Nobody has looked at the requirement yet.
    #[default]
    NotAssessed,
    /// Requirement does not apply to this mission.
    NotApplicable,
    /// Authorization or policy is in force.
    Active,
    /// Insurance cover is bound.
    Bound,
    /// In force but due to lapse soon.
    ExpiringSoon,
    /// Submitted and under review by the authority or insurer.
    UnderReview,
    /// An insurance quote has been received.
    QuoteReceived,
    /// An insurance quote has been requested.
    QuoteRequested,
    /// Work has not started.
    NotStarted,
    /// Authorization or policy has lapsed.
    Expired,
}

impl_string_enum!(RecordedStatus {
    Compliant => "compliant",
    Partial => "partial",
    NonCompliant => "non_compliant",
    NotAssessed => "not_assessed",
    NotApplicable => "not_applicable",
    Active => "active",
    Bound => "bound",
    ExpiringSoon => "expiring_soon",
    UnderReview => "under_review",
    QuoteReceived => "quote_received",
    QuoteRequested => "quote_requested",
    NotStarted => "not_started",
    Expired => "expired",
});

impl RecordedStatus {
    /// Points out of 100, or `None` when the item is excluded from scoring.
    pub fn points(self) -> Option<u32> {
        match self {
            Self::Compliant | Self::Active | Self::Bound => Some(100),
            Self::ExpiringSoon => Some(80),
            Self::UnderReview => Some(60),
            Self::Partial => Some(50),
            Self::QuoteReceived => Some(40),
            Self::QuoteRequested => Some(20),
            Self::NotStarted | Self::Expired | Self::NonCompliant | Self::NotAssessed => Some(0),
            Self::NotApplicable => None,
        }
    }

    /// The checklist class this status reports as.
    pub fn class(self) -> ComplianceClass {
        match self {
            Self::Compliant | Self::Active | Self::Bound => ComplianceClass::Compliant,
            Self::Partial | Self::ExpiringSoon | Self::UnderReview | Self::QuoteReceived => {
                ComplianceClass::Partial
            }
            Self::NonCompliant | Self::QuoteRequested | Self::NotStarted | Self::Expired => {
                ComplianceClass::NonCompliant
            }
            Self::NotAssessed => ComplianceClass::NotAssessed,
            Self::NotApplicable => ComplianceClass::NotApplicable,
        }
    }
}

/// Checklist class reported in gap analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceClass {
    /// Requirement met.
    Compliant,
    /// Requirement partly met or in progress.
    Partial,
    /// Requirement not met.
    NonCompliant,
    /// No assessment recorded.
    NotAssessed,
    /// Requirement does not apply.
    NotApplicable,
}

impl_string_enum!(ComplianceClass {
    Compliant => "compliant",
    Partial => "partial",
    NonCompliant => "non_compliant",
    NotAssessed => "not_assessed",
    NotApplicable => "not_applicable",
});

impl ComplianceClass {
    /// Whether the class signals a deficiency that needs remediation.
    pub fn is_deficient(self) -> bool {
        matches!(self, Self::NonCompliant | Self::NotAssessed)
    }
}

/// Gap priority. Declaration order is sort order: `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Remediate before filing.
    High,
    /// Remediate during the application.
    Medium,
    /// Track.
    Low,
}

impl_string_enum!(Priority {
    High => "high",
    Medium => "medium",
    Low => "low",
});

/// Estimated remediation effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    /// Days.
    Low,
    /// Weeks.
    #[default]
    Medium,
    /// Months, usually involving design changes or third parties.
    High,
}

impl_string_enum!(Effort {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Declared severity of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Failure blocks authorization.
    High,
    /// Failure draws conditions or follow-up.
    Medium,
    /// Good practice.
    Low,
}

impl_string_enum!(Severity {
    High => "high",
    Medium => "medium",
    Low => "low",
});

/// Priority tier of a checklist item, which sets its scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementTier {
    /// Binding obligation.
    Mandatory,
    /// Recommended practice.
    Recommended,
    /// Optional good practice.
    Optional,
}

impl_string_enum!(RequirementTier {
    Mandatory => "mandatory",
    Recommended => "recommended",
    Optional => "optional",
});

impl RequirementTier {
    /// Scoring weight: mandatory 3, recommended 2, optional 1.
    pub fn weight(self) -> u32 {
        match self {
            Self::Mandatory => 3,
            Self::Recommended => 2,
            Self::Optional => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_applicable_is_excluded_from_points() {
        assert_eq!(RecordedStatus::NotApplicable.points(), None);
        assert_eq!(RecordedStatus::NotApplicable.class(), ComplianceClass::NotApplicable);
    }

    #[test]
    fn canonical_point_table() {
        assert_eq!(RecordedStatus::Compliant.points(), Some(100));
        assert_eq!(RecordedStatus::Bound.points(), Some(100));
        assert_eq!(RecordedStatus::ExpiringSoon.points(), Some(80));
        assert_eq!(RecordedStatus::UnderReview.points(), Some(60));
        assert_eq!(RecordedStatus::QuoteReceived.points(), Some(40));
        assert_eq!(RecordedStatus::QuoteRequested.points(), Some(20));
        assert_eq!(RecordedStatus::Expired.points(), Some(0));
        assert_eq!(RecordedStatus::NotAssessed.points(), Some(0));
    }

    #[test]
    fn every_scored_status_is_within_bounds() {
        for &status in RecordedStatus::all() {
            if let Some(points) = status.points() {
                assert!(points <= 100, "{status} scores {points}");
            }
        }
    }

    #[test]
    fn default_status_is_not_assessed() {
        assert_eq!(RecordedStatus::default(), RecordedStatus::NotAssessed);
        assert_eq!(Effort::default(), Effort::Medium);
    }

    #[test]
    fn deficiency_classes() {
        assert!(ComplianceClass::NonCompliant.is_deficient());
        assert!(ComplianceClass::NotAssessed.is_deficient());
        assert!(!ComplianceClass::Partial.is_deficient());
        assert!(!ComplianceClass::Compliant.is_deficient());
    }

    #[test]
    fn priority_sorts_high_first() {
        let mut p = vec![Priority::Low, Priority::High, Priority::Medium];
        p.sort();
        assert_eq!(p, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn tier_weights_decrease() {
        assert!(RequirementTier::Mandatory.weight() > RequirementTier::Recommended.weight());
        assert!(RequirementTier::Recommended.weight() > RequirementTier::Optional.weight());
    }
}
