//! # spacereg-pack: Reference Data
//!
//! The static corpus the compliance engine reads:
//!
//! - **Jurisdiction laws** ([`law`]): national space legislation with its
//!   requirements, applicability rules, and insurance, debris, timeline and
//!   registration terms.
//!
//! - **Guidelines** ([`guideline`]): international checklist items with
//!   priority tiers, severities and mission-profile conditions.
//!
//! - **Cross-references** ([`crossref`]): the EU Space Act article table.
//!
//! ## Data Format
//!
//! Tables are YAML files with a strict serde schema. Unknown enum values
//! fail at parse time; cross-table consistency is checked by
//! [`validation`] before a [`ReferenceData`] is handed out. The bundled
//! corpus under `data/` is compiled into the crate and can be replaced at
//! runtime with [`ReferenceData::load_dir`].
//!
//! ## Crate Policy
//!
//! - Depends only on `spacereg-core` internally.
//! - Loaded data is never mutated.

pub mod crossref;
pub mod error;
pub mod guideline;
pub mod law;
pub mod parser;
pub mod store;
pub mod validation;

// Re-export primary types.
pub use crossref::CrossReferenceRow;
pub use error::{PackError, PackResult};
pub use guideline::{ApplicabilityConditions, GuidelineDefinition, GuidelineSource};
pub use law::{
    ApplicabilityRule, Authority, CrossReference, DebrisTerms, InsuranceTerms, JurisdictionLaw,
    Legislation, Registration, RemoteSensingRegime, Requirement, SpecialProvision, Timeline,
    WeekRange,
};
pub use store::ReferenceData;
pub use validation::{validate_reference_data, PackValidationResult};
