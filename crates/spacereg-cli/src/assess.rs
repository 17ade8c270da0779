//! # Assess Subcommand
//!
//! Runs a jurisdiction assessment over a questionnaire file and prints a
//! human-readable summary, or the full result as JSON with `--json`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use spacereg_engine::{assess_jurisdictions, AssessmentAnswers, AssessmentResult};

use crate::GlobalOptions;

/// Arguments for the `spacereg assess` subcommand.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Questionnaire answers (YAML, or JSON by extension).
    #[arg(value_name = "ANSWERS")]
    pub answers: PathBuf,

    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the assess subcommand.
///
/// Returns exit code 0, or 1 when an answer is out of range. An empty
/// selection is a valid, empty result.
pub fn run_assess(args: &AssessArgs, options: &GlobalOptions) -> Result<u8> {
    let config = options.engine_config()?;
    let data = options.reference_data()?;
    let Some(answers) = crate::read_input::<AssessmentAnswers>(&args.answers)? else {
        return Ok(1);
    };

    tracing::info!(
        selected = answers.selected_jurisdictions.len(),
        "running jurisdiction assessment"
    );
    let result = assess_jurisdictions(&data, &answers, &config);

    if args.json {
        crate::print_json(&result)?;
    } else {
        print!("{}", render_summary(&result));
    }
    Ok(0)
}

/// Plain-text summary of an assessment.
pub fn render_summary(result: &AssessmentResult) -> String {
    let mut out = String::new();
    if result.jurisdictions.is_empty() {
        out.push_str("No known jurisdictions selected.\n");
        return out;
    }

    out.push_str("Jurisdictions:\n");
    for j in &result.jurisdictions {
        let verdict = if j.is_applicable { "applicable" } else { "not applicable" };
        out.push_str(&format!(
            "  {} {:<16} {:>3}/100  {}\n",
            j.code, j.name, j.favorability_score, verdict
        ));
        out.push_str(&format!("      {}\n", j.applicability_reason));
        out.push_str(&format!(
            "      timeline: {}  cost: {}  requirements: {} ({} mandatory)\n",
            j.estimated_timeline, j.estimated_cost, j.total_requirements, j.mandatory_requirements
        ));
        for factor in &j.favorability_factors {
            out.push_str(&format!("      + {factor}\n"));
        }
    }

    out.push_str("\nComparison:\n");
    for criterion in &result.comparison_matrix.criteria {
        let cells: Vec<String> = criterion
            .jurisdictions
            .iter()
            .map(|(code, cell)| format!("{code} {}", cell.score))
            .collect();
        out.push_str(&format!("  {:<28} {}\n", criterion.name, cells.join("  ")));
    }

    if let Some(preview) = &result.eu_space_act_preview {
        out.push_str(&format!("\nEU Space Act: {}\n", preview.message));
    }

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("  {}. {recommendation}\n", i + 1));
        }
    }
    out
}
