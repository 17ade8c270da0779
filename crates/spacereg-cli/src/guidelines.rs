//! # Guidelines Subcommand
//!
//! Scores a mission profile against the international guidelines, using
//! an optional file of recorded statuses keyed by guideline id:
//!
//! ```yaml
//! iadc-5.1: compliant
//! nis2-art23: under_review
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use spacereg_core::{GuidelineId, RecordedStatus};
use spacereg_engine::{assess_guidelines, GuidelineAssessment, MissionProfile};

use crate::GlobalOptions;

/// Arguments for the `spacereg guidelines` subcommand.
#[derive(Args, Debug)]
pub struct GuidelinesArgs {
    /// Mission profile (YAML, or JSON by extension).
    #[arg(value_name = "PROFILE")]
    pub profile: PathBuf,

    /// Recorded statuses keyed by guideline id.
    #[arg(long, value_name = "FILE")]
    pub statuses: Option<PathBuf>,

    /// Print the full assessment as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the guidelines subcommand.
///
/// Returns exit code 0, or 1 when a profile value is out of range.
pub fn run_guidelines(args: &GuidelinesArgs, options: &GlobalOptions) -> Result<u8> {
    let config = options.engine_config()?;
    let data = options.reference_data()?;
    let Some(profile) = crate::read_input::<MissionProfile>(&args.profile)? else {
        return Ok(1);
    };
    let statuses: BTreeMap<GuidelineId, RecordedStatus> = match &args.statuses {
        Some(path) => crate::read_document(path)?,
        None => BTreeMap::new(),
    };

    let assessment = assess_guidelines(&data, &profile, &statuses, &config);

    if args.json {
        crate::print_json(&assessment)?;
    } else {
        print!("{}", render_summary(&assessment));
    }
    Ok(0)
}

/// Plain-text summary of a guideline assessment.
pub fn render_summary(assessment: &GuidelineAssessment) -> String {
    let mut out = format!("Overall compliance: {}/100\n", assessment.overall_score);

    let s = &assessment.status_summary;
    out.push_str(&format!(
        "  compliant {}  partial {}  non-compliant {}  not assessed {}  not applicable {}\n",
        s.compliant, s.partial, s.non_compliant, s.not_assessed, s.not_applicable
    ));

    if !assessment.source_scores.is_empty() {
        out.push_str("\nBy source:\n");
        for source in &assessment.source_scores {
            out.push_str(&format!(
                "  {:<36} {:>3}/100  ({} assessed)\n",
                source.label, source.score, source.assessed
            ));
        }
    }

    if !assessment.gaps.is_empty() {
        out.push_str("\nGaps:\n");
        for gap in &assessment.gaps {
            out.push_str(&format!(
                "  [{}] {} {} ({} effort)\n",
                gap.priority, gap.guideline_id, gap.title, gap.estimated_effort
            ));
            out.push_str(&format!("      {}\n", gap.recommendation));
        }
    }

    if !assessment.excluded.is_empty() {
        out.push_str("\nNot applicable:\n");
        for excluded in &assessment.excluded {
            out.push_str(&format!("  {} {}\n", excluded.guideline_id, excluded.reason));
        }
    }
    out
}
