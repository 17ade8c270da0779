//! # spacereg-engine: Compliance Scoring Engine
//!
//! Pure computation over a [`ReferenceData`](spacereg_pack::ReferenceData)
//! handle and a caller-supplied answer set:
//!
//! - **Inputs** (`answers.rs`): answer and profile records, and the range
//!   checks every entry point runs before assessing.
//!
//! - **Applicability** (`applicability.rs`): whether a jurisdiction or a
//!   guideline binds the described operator, with a reason.
//!
//! - **Requirements** (`requirements.rs`): activity-based requirement
//!   filtering.
//!
//! - **Scoring** (`scoring.rs`): jurisdiction favorability as a fold of
//!   named rules over a baseline, and the tier-weighted guideline
//!   compliance score.
//!
//! - **Matrix** (`matrix.rs`): independent comparison criteria, one 1-5
//!   cell per jurisdiction.
//!
//! - **Gaps** (`gap.rs`): prioritised remediation items for deficient
//!   guidelines.
//!
//! - **Cross-references** (`crossref.rs`): EU Space Act article preview
//!   and the aggregate harmonisation outlook.
//!
//! - **Recommendations** (`recommendations.rs`): capped list of advice
//!   from independent rules.
//!
//! - **Assessments** (`assessment.rs`): the two aggregate entry points.
//!
//! ## Invariants
//!
//! The engine holds no state between calls and performs no I/O outside
//! [`EngineConfig::from_yaml_file`]. Missing optional input is never an
//! error: every derivation has a defined fallback. A selected unit with no
//! reference record is dropped from the result, not reported as a failure.

pub mod answers;
pub mod applicability;
pub mod assessment;
pub mod config;
pub mod crossref;
pub mod display;
pub mod gap;
pub mod matrix;
pub mod recommendations;
pub mod requirements;
pub mod scoring;

pub use answers::{
    AssessmentAnswers, InputError, MissionProfile, Validate, MAX_SELECTED_JURISDICTIONS,
};
pub use applicability::{resolve_guideline, resolve_jurisdiction, Applicability};
pub use assessment::{
    assess_guidelines, assess_jurisdictions, AssessmentResult, GuidelineAssessment,
    GuidelineAssessmentInput, JurisdictionResult,
};
pub use config::{ConfigError, EngineConfig};
pub use crossref::{map_cross_references, CrossReferencePreview, CrossReferenced, HarmonizationOutlook};
pub use gap::{analyze_gaps, GapAnalysisItem};
pub use matrix::{build_matrix, ComparisonMatrix, CriterionContext, MatrixCell};
pub use recommendations::generate_recommendations;
pub use requirements::{filter_requirements, mandatory_count};
pub use scoring::{score_jurisdiction, weighted_compliance_score, Favorability};
