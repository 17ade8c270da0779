//! # EU Space Act Cross-Reference Preview
//!
//! Maps the selected units onto the EU Space Act article table. Each unit
//! gets the first few matching articles plus its own embedded relationship
//! description; the relationships of all units are then folded into one
//! three-way outlook:
//!
//! - any unit whose framework has a **gap** → the Act fills a gap,
//! - every unit **parallel** → the frameworks run independently,
//! - otherwise → the Act harmonises the existing rules.
//!
//! A unit without an embedded relationship contributes the relationships
//! of its matching article rows instead.

use serde::{Deserialize, Serialize};
use spacereg_core::CrossReferenceRelationship;
use spacereg_pack::{CrossReference, CrossReferenceRow, GuidelineDefinition, JurisdictionLaw};

/// A reference unit that can be placed against the article table.
pub trait CrossReferenced {
    /// Stable key of the unit (jurisdiction code or guideline id).
    fn key(&self) -> &str;

    /// Display name.
    fn display_name(&self) -> &str;

    /// The unit's own relationship to the EU Space Act, if recorded.
    fn embedded(&self) -> Option<&CrossReference>;

    /// Whether an article row concerns this unit.
    fn matches_row(&self, row: &CrossReferenceRow) -> bool;
}

impl CrossReferenced for JurisdictionLaw {
    fn key(&self) -> &str {
        self.code.as_str()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn embedded(&self) -> Option<&CrossReference> {
        Some(&self.cross_reference)
    }

    fn matches_row(&self, row: &CrossReferenceRow) -> bool {
        row.covers_jurisdiction(&self.code)
    }
}

impl CrossReferenced for GuidelineDefinition {
    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn embedded(&self) -> Option<&CrossReference> {
        self.cross_reference.as_ref()
    }

    fn matches_row(&self, row: &CrossReferenceRow) -> bool {
        row.covers_source(self.source)
    }
}

/// Aggregate outlook across all selected units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonizationOutlook {
    /// At least one framework has no national rule the Act would replace.
    FillsGap,
    /// All frameworks run in parallel with the Act.
    Independent,
    /// The Act harmonises the existing national rules.
    Harmonizes,
}

impl HarmonizationOutlook {
    /// Fold unit relationships into an outlook.
    pub fn classify<I>(relationships: I) -> Self
    where
        I: IntoIterator<Item = CrossReferenceRelationship>,
    {
        let mut any = false;
        let mut all_parallel = true;
        for relationship in relationships {
            any = true;
            match relationship {
                CrossReferenceRelationship::Gap => return Self::FillsGap,
                CrossReferenceRelationship::Parallel => {}
                CrossReferenceRelationship::Superseded | CrossReferenceRelationship::Complementary => {
                    all_parallel = false;
                }
            }
        }
        if any && all_parallel {
            Self::Independent
        } else {
            Self::Harmonizes
        }
    }

    /// Summary sentence for the outlook.
    pub fn message(self) -> &'static str {
        match self {
            Self::FillsGap => {
                "The EU Space Act will provide harmonised rules where national space legislation is currently missing."
            }
            Self::Independent => {
                "The selected frameworks run in parallel to the EU Space Act; plan to satisfy both regimes."
            }
            Self::Harmonizes => {
                "The EU Space Act will harmonise the selected frameworks; plan for the transition period."
            }
        }
    }
}

/// One article reference in a unit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReference {
    /// Article number(s), e.g. `Art. 6`.
    pub article: String,
    /// Article title.
    pub title: String,
    /// How the article relates to the unit.
    pub relationship: CrossReferenceRelationship,
}

/// Preview entry for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferenceEntry {
    /// Unit key.
    pub key: String,
    /// Unit display name.
    pub name: String,
    /// The unit's own relationship, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CrossReferenceRelationship>,
    /// The first matching articles.
    pub articles: Vec<ArticleReference>,
    /// Matching articles beyond the preview limit.
    pub additional_articles: usize,
    /// Article list joined with the unit's own description.
    pub summary: String,
    /// Practical notes for the transition period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_notes: Option<String>,
}

/// The full preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferencePreview {
    /// One entry per unit, in selection order.
    pub entries: Vec<CrossReferenceEntry>,
    /// Aggregate outlook.
    pub outlook: HarmonizationOutlook,
    /// Outlook sentence.
    pub message: String,
}

/// Build the preview for `units`. `None` when there is nothing to preview.
pub fn map_cross_references<U>(
    units: &[&U],
    rows: &[CrossReferenceRow],
    preview_limit: usize,
) -> Option<CrossReferencePreview>
where
    U: CrossReferenced + ?Sized,
{
    if units.is_empty() {
        return None;
    }

    let mut relationships = Vec::new();
    let entries: Vec<CrossReferenceEntry> = units
        .iter()
        .map(|unit| {
            let matching: Vec<&CrossReferenceRow> =
                rows.iter().filter(|row| unit.matches_row(row)).collect();
            match unit.embedded() {
                Some(own) => relationships.push(own.relationship),
                None => relationships.extend(matching.iter().map(|row| row.relationship)),
            }
            entry(*unit, &matching, preview_limit)
        })
        .collect();

    let outlook = HarmonizationOutlook::classify(relationships);
    tracing::debug!(units = entries.len(), ?outlook, "cross-reference preview built");
    Some(CrossReferencePreview {
        entries,
        outlook,
        message: outlook.message().to_string(),
    })
}

fn entry<U>(unit: &U, matching: &[&CrossReferenceRow], preview_limit: usize) -> CrossReferenceEntry
where
    U: CrossReferenced + ?Sized,
{
    let shown = matching.len().min(preview_limit);
    let articles: Vec<ArticleReference> = matching[..shown]
        .iter()
        .map(|row| ArticleReference {
            article: row.eu_article.clone(),
            title: row.title.clone(),
            relationship: row.relationship,
        })
        .collect();
    let additional_articles = matching.len() - shown;

    let mut parts = Vec::new();
    if !articles.is_empty() {
        let mut listed = articles
            .iter()
            .map(|a| format!("{} ({})", a.article, a.title))
            .collect::<Vec<_>>()
            .join(", ");
        if additional_articles > 0 {
            listed.push_str(&format!(" and {additional_articles} more"));
        }
        parts.push(format!("{listed}."));
    }
    if let Some(own) = unit.embedded() {
        parts.push(own.description.trim().to_string());
    }

    CrossReferenceEntry {
        key: unit.key().to_string(),
        name: unit.display_name().to_string(),
        relationship: unit.embedded().map(|own| own.relationship),
        articles,
        additional_articles,
        summary: parts.join(" "),
        transition_notes: unit.embedded().and_then(|own| own.transition_notes.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacereg_pack::ReferenceData;
    use CrossReferenceRelationship::*;

    fn law(code: &str) -> JurisdictionLaw {
        ReferenceData::builtin()
            .unwrap()
            .jurisdiction(code)
            .cloned()
            .unwrap()
    }

    // ── Outlook ──────────────────────────────────────────────────────

    #[test]
    fn gap_wins() {
        assert_eq!(
            HarmonizationOutlook::classify([Parallel, Gap, Superseded]),
            HarmonizationOutlook::FillsGap
        );
    }

    #[test]
    fn all_parallel_is_independent() {
        assert_eq!(
            HarmonizationOutlook::classify([Parallel, Parallel]),
            HarmonizationOutlook::Independent
        );
    }

    #[test]
    fn mixed_harmonizes() {
        assert_eq!(
            HarmonizationOutlook::classify([Parallel, Complementary]),
            HarmonizationOutlook::Harmonizes
        );
        assert_eq!(
            HarmonizationOutlook::classify(Vec::new()),
            HarmonizationOutlook::Harmonizes
        );
    }

    // ── Preview ──────────────────────────────────────────────────────

    #[test]
    fn no_units_no_preview() {
        let data = ReferenceData::builtin().unwrap();
        let none: [&JurisdictionLaw; 0] = [];
        assert!(map_cross_references(&none, data.cross_references(), 3).is_none());
    }

    #[test]
    fn articles_are_capped_with_remainder() {
        let data = ReferenceData::builtin().unwrap();
        let fr = law("FR");
        let preview = map_cross_references(&[&fr], data.cross_references(), 3).unwrap();
        let entry = &preview.entries[0];
        let total = data
            .cross_references()
            .iter()
            .filter(|r| r.covers_jurisdiction(&fr.code))
            .count();
        assert!(total > 3);
        assert_eq!(entry.articles.len(), 3);
        assert_eq!(entry.additional_articles, total - 3);
        assert!(entry.summary.contains(&format!("and {} more", total - 3)));
        assert!(entry.summary.ends_with(fr.cross_reference.description.trim()));
        assert_eq!(entry.relationship, Some(Complementary));
    }

    #[test]
    fn germany_makes_the_outlook_a_gap() {
        let data = ReferenceData::builtin().unwrap();
        let (fr, de) = (law("FR"), law("DE"));
        let preview = map_cross_references(&[&fr, &de], data.cross_references(), 3).unwrap();
        assert_eq!(preview.outlook, HarmonizationOutlook::FillsGap);
        assert_eq!(preview.entries[1].key, "DE");
    }

    #[test]
    fn third_countries_are_independent() {
        let data = ReferenceData::builtin().unwrap();
        let (gb, no) = (law("GB"), law("NO"));
        let preview = map_cross_references(&[&gb, &no], data.cross_references(), 3).unwrap();
        assert_eq!(preview.outlook, HarmonizationOutlook::Independent);
    }

    #[test]
    fn guideline_units_use_row_relationships() {
        let data = ReferenceData::builtin().unwrap();
        let itu = data.guideline("itu-rr-9").unwrap();
        let preview = map_cross_references(&[itu], data.cross_references(), 3).unwrap();
        let entry = &preview.entries[0];
        assert_eq!(entry.relationship, None);
        assert!(!entry.articles.is_empty());
        assert!(entry.articles.iter().all(|a| a.relationship == Parallel));
        assert_eq!(preview.outlook, HarmonizationOutlook::Independent);
    }
}
