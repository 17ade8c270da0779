//! # Requirement Categories: Single Source of Truth
//!
//! Defines the [`RequirementCategory`] enum used by every requirement in the
//! reference corpus, whether it comes from a national space law or from an
//! international guideline. Exhaustive `match` on this enum is enforced by
//! the compiler everywhere it is consumed.

use serde::{Deserialize, Serialize};

/// The regulatory category of a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    /// Technical qualification of the spacecraft or launch system.
    Technical,
    /// Financial standing of the operator.
    Financial,
    /// Third-party liability insurance.
    Insurance,
    /// Space debris mitigation.
    Debris,
    /// Safety of persons and property.
    Safety,
    /// Environmental impact assessment.
    Environmental,
    /// Corporate governance and control changes.
    Governance,
    /// Security, including cybersecurity.
    Security,
    /// Radio-frequency spectrum coordination.
    Spectrum,
    /// Data handling, including remote-sensing data.
    Data,
    /// End-of-life disposal.
    EndOfLife,
    /// Liability towards the state and third parties.
    Liability,
    /// Ongoing operational conduct.
    Operational,
    /// Notification and reporting duties.
    Notification,
}

impl_string_enum!(RequirementCategory {
    Technical => "technical",
    Financial => "financial",
    Insurance => "insurance",
    Debris => "debris",
    Safety => "safety",
    Environmental => "environmental",
    Governance => "governance",
    Security => "security",
    Spectrum => "spectrum",
    Data => "data",
    EndOfLife => "end_of_life",
    Liability => "liability",
    Operational => "operational",
    Notification => "notification",
});

impl RequirementCategory {
    /// The total number of requirement categories.
    pub const COUNT: usize = 14;
}
