//! # API Route Modules
//!
//! - `reference`: read-only listings of the loaded reference data.
//! - `assessments`: jurisdiction and guideline assessments.

pub mod assessments;
pub mod reference;
