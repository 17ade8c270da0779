//! # Gap Analysis
//!
//! Turns applicable guidelines plus a snapshot of recorded statuses into a
//! deterministic list of remediation items.
//!
//! | recorded class          | mandatory or high severity | medium severity | low |
//! |-------------------------|----------------------------|-----------------|-----|
//! | non-compliant / not assessed | high                  | medium          | -   |
//! | partial                 | medium                     | -               | -   |
//! | compliant / n.a.        | -                          | -               | -   |
//!
//! A guideline with no recorded status is `not_assessed`. The output is
//! sorted by priority, then guideline id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use spacereg_core::{ComplianceClass, Effort, GuidelineId, Priority, RecordedStatus, Severity};
use spacereg_pack::{GuidelineDefinition, GuidelineSource};

/// One remediation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisItem {
    /// Guideline the gap is against.
    pub guideline_id: GuidelineId,
    /// Guideline title.
    pub title: String,
    /// Issuing body.
    pub source: GuidelineSource,
    /// Status as recorded, `not_assessed` when absent.
    pub recorded_status: RecordedStatus,
    /// Checklist class of the recorded status.
    pub status: ComplianceClass,
    /// Remediation priority.
    pub priority: Priority,
    /// What is missing.
    pub gap_description: String,
    /// What to do about it.
    pub recommendation: String,
    /// Estimated remediation effort.
    pub estimated_effort: Effort,
    /// Guidelines that should be addressed first.
    pub dependencies: Vec<GuidelineId>,
}

/// Priority of a gap, or `None` when the status does not warrant one.
pub fn gap_priority(guideline: &GuidelineDefinition, status: RecordedStatus) -> Option<Priority> {
    let serious = guideline.is_mandatory() || guideline.severity == Severity::High;
    let class = status.class();
    if class.is_deficient() {
        if serious {
            Some(Priority::High)
        } else if guideline.severity == Severity::Medium {
            Some(Priority::Medium)
        } else {
            None
        }
    } else if class == ComplianceClass::Partial {
        serious.then_some(Priority::Medium)
    } else {
        None
    }
}

/// Gaps for `guidelines` given the recorded `statuses`.
pub fn analyze_gaps<'a, I>(
    guidelines: I,
    statuses: &BTreeMap<GuidelineId, RecordedStatus>,
) -> Vec<GapAnalysisItem>
where
    I: IntoIterator<Item = &'a GuidelineDefinition>,
{
    let mut gaps: Vec<GapAnalysisItem> = guidelines
        .into_iter()
        .filter_map(|g| {
            let status = statuses.get(&g.id).copied().unwrap_or_default();
            let priority = gap_priority(g, status)?;
            Some(GapAnalysisItem {
                guideline_id: g.id.clone(),
                title: g.title.clone(),
                source: g.source,
                recorded_status: status,
                status: status.class(),
                priority,
                gap_description: describe(g, status),
                recommendation: recommend(g),
                estimated_effort: g.effort,
                dependencies: g.depends_on.clone(),
            })
        })
        .collect();
    gaps.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.guideline_id.cmp(&b.guideline_id))
    });
    gaps
}

fn describe(g: &GuidelineDefinition, status: RecordedStatus) -> String {
    match status.class() {
        ComplianceClass::NotAssessed => format!(
            "{} ({}) has not been assessed yet.",
            g.title,
            g.source.label()
        ),
        ComplianceClass::Partial => format!(
            "{} ({}) is only partially met (status: {}).",
            g.title,
            g.source.label(),
            status
        ),
        _ => format!(
            "{} ({}) is not met (status: {}).",
            g.title,
            g.source.label(),
            status
        ),
    }
}

fn recommend(g: &GuidelineDefinition) -> String {
    match &g.article_ref {
        Some(article) => format!("{} See {}.", g.guidance.trim_end(), article),
        None => g.guidance.trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_pack::ReferenceData;

    fn guideline(id: &str) -> GuidelineDefinition {
        ReferenceData::builtin()
            .unwrap()
            .guideline(id)
            .cloned()
            .unwrap()
    }

    fn id(s: &str) -> GuidelineId {
        GuidelineId::new(s).unwrap()
    }

    // ── Priority table ───────────────────────────────────────────────

    #[test]
    fn deficient_mandatory_is_high() {
        let g = guideline("iadc-5.1");
        assert_eq!(gap_priority(&g, RecordedStatus::NotAssessed), Some(Priority::High));
        assert_eq!(gap_priority(&g, RecordedStatus::NonCompliant), Some(Priority::High));
        assert_eq!(gap_priority(&g, RecordedStatus::Expired), Some(Priority::High));
    }

    #[test]
    fn deficient_medium_severity_is_medium() {
        let g = guideline("iadc-5.4");
        assert_eq!(gap_priority(&g, RecordedStatus::NonCompliant), Some(Priority::Medium));
    }

    #[test]
    fn deficient_low_severity_is_omitted() {
        let g = guideline("esa-zd-trackability");
        assert_eq!(gap_priority(&g, RecordedStatus::NotAssessed), None);
    }

    #[test]
    fn partial_only_for_serious_items() {
        assert_eq!(
            gap_priority(&guideline("iadc-5.1"), RecordedStatus::Partial),
            Some(Priority::Medium)
        );
        assert_eq!(gap_priority(&guideline("iadc-5.4"), RecordedStatus::Partial), None);
    }

    #[test]
    fn compliant_and_not_applicable_never_gap() {
        let g = guideline("iadc-5.1");
        for status in [
            RecordedStatus::Compliant,
            RecordedStatus::Active,
            RecordedStatus::Bound,
            RecordedStatus::NotApplicable,
        ] {
            assert_eq!(gap_priority(&g, status), None, "{status}");
        }
    }

    // ── Analysis ─────────────────────────────────────────────────────

    #[test]
    fn missing_status_defaults_to_not_assessed() {
        let g = guideline("itu-rr-9");
        let gaps = analyze_gaps([&g], &BTreeMap::new());
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].recorded_status, RecordedStatus::NotAssessed);
        assert_eq!(gaps[0].status, ComplianceClass::NotAssessed);
        assert!(gaps[0].gap_description.contains("has not been assessed"));
    }

    #[test]
    fn sorted_by_priority_then_id() {
        let items = [
            guideline("iadc-5.4"),
            guideline("nis2-art21-2a"),
            guideline("iadc-5.1"),
            guideline("un-lts-b1"),
        ];
        let gaps = analyze_gaps(items.iter(), &BTreeMap::new());
        let order: Vec<_> = gaps
            .iter()
            .map(|g| (g.priority, g.guideline_id.as_str().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Priority::High, "iadc-5.1".to_string()),
                (Priority::High, "nis2-art21-2a".to_string()),
                (Priority::Medium, "iadc-5.4".to_string()),
                (Priority::Medium, "un-lts-b1".to_string()),
            ]
        );
    }

    #[test]
    fn compliant_items_are_dropped() {
        let g = guideline("iadc-5.1");
        let statuses = BTreeMap::from([(id("iadc-5.1"), RecordedStatus::Compliant)]);
        assert!(analyze_gaps([&g], &statuses).is_empty());
    }

    #[test]
    fn gap_carries_dependencies_and_effort() {
        let g = guideline("iadc-5.3.2");
        let gaps = analyze_gaps([&g], &BTreeMap::new());
        assert_eq!(gaps[0].dependencies, vec![id("iadc-5.2.1")]);
        assert_eq!(gaps[0].estimated_effort, g.effort);
        assert!(gaps[0].recommendation.starts_with(g.guidance.trim_end()));
    }
}
