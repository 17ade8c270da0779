#![deny(missing_docs)]

//! # spacereg-core: Foundational Types for the Compliance Engine
//!
//! This crate defines the vocabulary every other crate in the workspace
//! speaks. It has no internal crate dependencies; externally it uses only
//! `serde` and `thiserror`.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** A [`JurisdictionCode`] is not a
//!    [`GuidelineId`], and neither is a bare `String`. Both validate at
//!    construction and at deserialization time.
//!
//! 2. **Closed taxonomies.** Every category, status and regime that the
//!    reference data or a questionnaire can carry is a closed enum. Scoring
//!    code matches exhaustively, so a new variant is a compile error in every
//!    handler that has not yet considered it. There is no silent
//!    "else branch returns 0".
//!
//! 3. **One canonical status mapping.** [`RecordedStatus`] carries the single
//!    status → points table used by every compliance score in the workspace.

/// Implements `all()`, `as_str()`, `Display` and `FromStr` for a fieldless
/// enum from an explicit variant → wire-string table. The strings must match
/// the enum's `#[serde(rename_all = "snake_case")]` representation.
macro_rules! impl_string_enum {
    ($ty:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub fn all() -> &'static [$ty] {
                &[$(Self::$variant),+]
            }

            /// The snake_case wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($s => Ok(Self::$variant),)+
                    other => Err($crate::error::ValidationError::UnknownVariant {
                        kind: stringify!($ty),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod domain;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod legal;
pub mod profile;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use domain::RequirementCategory;
pub use error::ValidationError;
pub use identity::GuidelineId;
pub use jurisdiction::JurisdictionCode;
pub use legal::{CrossReferenceRelationship, LegislationStatus, LiabilityRegime};
pub use profile::{ActivityType, EntitySize, LicensingStatus, NationalityScope, OrbitRegime};
pub use status::{ComplianceClass, Effort, Priority, RecordedStatus, RequirementTier, Severity};
