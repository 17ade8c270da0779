//! # Reference Data Validation
//!
//! Load-time consistency checks over the three reference tables. Every
//! check runs and every problem is collected, so a broken data file is
//! diagnosed in one pass.
//!
//! ## Errors
//!
//! - duplicate jurisdiction codes or guideline ids
//! - empty names, empty legislation titles, empty requirement ids
//! - requirement or rule ids repeated within one jurisdiction
//! - `processing_weeks.min` greater than `processing_weeks.max`
//! - `enacted` legislation without an `enacted_year`
//! - an `enacted_year` or `amended_year` outside [`LEGISLATION_YEARS`], or
//!   an amendment that predates enactment
//! - guideline `depends_on` ids that do not exist, or that point at the
//!   item itself
//! - cross-reference rows with an empty article, a repeated id, or a
//!   country code with no jurisdiction record
//!
//! ## Warnings
//!
//! - a requirement with an empty `applicable_to` set (it never survives an
//!   activity filter)
//! - `narrow_scope_activity` on a jurisdiction whose legislation is not
//!   `none` (it is ignored)
//! - a cross-reference row that names neither a country nor a source

use std::collections::{BTreeSet, HashSet};
use std::ops::RangeInclusive;

use spacereg_core::LegislationStatus;

use crate::crossref::CrossReferenceRow;
use crate::guideline::GuidelineDefinition;
use crate::law::JurisdictionLaw;

/// Years a legislation record may carry. Space law starts with Sputnik.
pub const LEGISLATION_YEARS: RangeInclusive<i32> = 1957..=2200;

// ---------------------------------------------------------------------------
// Validation Results
// ---------------------------------------------------------------------------

/// Result of validating the reference tables.
#[derive(Debug, Default)]
pub struct PackValidationResult {
    /// Problems that make the data unusable.
    pub errors: Vec<String>,
    /// Anomalies that are tolerated.
    pub warnings: Vec<String>,
}

impl PackValidationResult {
    /// Whether no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error.
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

// ---------------------------------------------------------------------------
// Table validation
// ---------------------------------------------------------------------------

/// Validate the three reference tables together.
pub fn validate_reference_data(
    jurisdictions: &[JurisdictionLaw],
    guidelines: &[GuidelineDefinition],
    cross_references: &[CrossReferenceRow],
) -> PackValidationResult {
    let mut result = PackValidationResult::default();

    let mut codes = BTreeSet::new();
    for law in jurisdictions {
        if !codes.insert(law.code.clone()) {
            result.add_error(format!("duplicate jurisdiction code {}", law.code));
        }
        validate_jurisdiction(law, &mut result);
    }

    let mut ids = BTreeSet::new();
    for guideline in guidelines {
        if !ids.insert(guideline.id.clone()) {
            result.add_error(format!("duplicate guideline id {}", guideline.id));
        }
    }
    for guideline in guidelines {
        validate_guideline(guideline, &ids, &mut result);
    }

    let mut row_ids = HashSet::new();
    for row in cross_references {
        if !row_ids.insert(row.id.as_str()) {
            result.add_error(format!("duplicate cross reference id {}", row.id));
        }
        if row.eu_article.trim().is_empty() {
            result.add_error(format!("cross reference {} has no EU article", row.id));
        }
        for code in &row.applicable_countries {
            if !codes.contains(code) {
                result.add_error(format!(
                    "cross reference {} names unknown jurisdiction {code}",
                    row.id
                ));
            }
        }
        if row.applicable_countries.is_empty() && row.applicable_sources.is_empty() {
            result.add_warning(format!(
                "cross reference {} names neither a country nor a guideline source",
                row.id
            ));
        }
    }

    result
}

fn validate_jurisdiction(law: &JurisdictionLaw, result: &mut PackValidationResult) {
    let code = &law.code;
    if law.name.trim().is_empty() {
        result.add_error(format!("{code}: empty name"));
    }
    if law.legislation.name.trim().is_empty() {
        result.add_error(format!("{code}: empty legislation name"));
    }
    if law.legislation.status == LegislationStatus::Enacted && law.legislation.enacted_year.is_none()
    {
        result.add_error(format!("{code}: enacted legislation has no enacted_year"));
    }
    let years = [
        ("enacted_year", law.legislation.enacted_year),
        ("amended_year", law.legislation.amended_year),
    ];
    for (field, year) in years {
        if let Some(year) = year.filter(|y| !LEGISLATION_YEARS.contains(y)) {
            result.add_error(format!(
                "{code}: {field} {year} outside {}..={}",
                LEGISLATION_YEARS.start(),
                LEGISLATION_YEARS.end()
            ));
        }
    }
    if let (Some(enacted), Some(amended)) = (law.legislation.enacted_year, law.legislation.amended_year) {
        if amended < enacted {
            result.add_error(format!("{code}: amended_year {amended} precedes enacted_year {enacted}"));
        }
    }
    if law.legislation.status != LegislationStatus::None && law.narrow_scope_activity.is_some() {
        result.add_warning(format!(
            "{code}: narrow_scope_activity is ignored unless legislation status is none"
        ));
    }
    if let Some(range) = law.timeline.processing_weeks {
        if range.min > range.max {
            result.add_error(format!(
                "{code}: processing_weeks min {} exceeds max {}",
                range.min, range.max
            ));
        }
    }

    let mut requirement_ids = HashSet::new();
    for requirement in &law.requirements {
        if requirement.id.trim().is_empty() {
            result.add_error(format!("{code}: requirement with empty id"));
        } else if !requirement_ids.insert(requirement.id.as_str()) {
            result.add_error(format!("{code}: duplicate requirement id {}", requirement.id));
        }
        if requirement.applicable_to.is_empty() {
            result.add_warning(format!(
                "{code}: requirement {} applies to no activity",
                requirement.id
            ));
        }
    }

    let mut rule_ids = HashSet::new();
    for rule in &law.applicability_rules {
        if !rule_ids.insert(rule.id.as_str()) {
            result.add_error(format!("{code}: duplicate applicability rule id {}", rule.id));
        }
    }
}

fn validate_guideline(
    guideline: &GuidelineDefinition,
    known: &BTreeSet<spacereg_core::GuidelineId>,
    result: &mut PackValidationResult,
) {
    let id = &guideline.id;
    if guideline.title.trim().is_empty() {
        result.add_error(format!("{id}: empty title"));
    }
    for dep in &guideline.depends_on {
        if dep == id {
            result.add_error(format!("{id}: depends on itself"));
        } else if !known.contains(dep) {
            result.add_error(format!("{id}: depends on unknown guideline {dep}"));
        }
    }
    let conditions = &guideline.applies_when;
    if let (Some(lo), Some(hi)) = (conditions.min_altitude_km, conditions.max_altitude_km) {
        if lo > hi {
            result.add_error(format!("{id}: min_altitude_km {lo} exceeds max_altitude_km {hi}"));
        }
    }
}
