//! # Data Subcommand
//!
//! Checks and lists the reference data: the bundled corpus, or the tables
//! under `--data-dir`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use spacereg_pack::{PackError, ReferenceData};

use crate::GlobalOptions;

/// Arguments for the `spacereg data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommand,
}

/// Reference data operations.
#[derive(Subcommand, Debug)]
pub enum DataCommand {
    /// Run the load-time checks and report every problem found.
    Validate,
    /// List jurisdictions and guidelines.
    List {
        /// Print the listing as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Execute the data subcommand.
///
/// `validate` returns exit code 1 when the tables have problems.
pub fn run_data(args: &DataArgs, options: &GlobalOptions) -> Result<u8> {
    match &args.command {
        DataCommand::Validate => run_validate(options),
        DataCommand::List { json } => run_list(options, *json),
    }
}

fn run_validate(options: &GlobalOptions) -> Result<u8> {
    let source = match &options.data_dir {
        Some(dir) => dir.display().to_string(),
        None => "bundled corpus".to_string(),
    };
    match ReferenceData::load(options.data_dir.as_deref()) {
        Ok(data) => {
            for warning in data.warnings() {
                println!("  WARN: {warning}");
            }
            println!(
                "Reference data OK ({source}): {} jurisdictions, {} guidelines, {} cross-references",
                data.jurisdictions().count(),
                data.guidelines().count(),
                data.cross_references().len()
            );
            Ok(0)
        }
        Err(PackError::Validation { problems }) => {
            for problem in &problems {
                println!("  FAIL: {problem}");
            }
            println!("\n{} problem(s) in {source}.", problems.len());
            Ok(1)
        }
        Err(e) => Err(e).with_context(|| format!("failed to load reference data from {source}")),
    }
}

/// One row of `spacereg data list`.
#[derive(Debug, Serialize)]
struct Listing {
    jurisdictions: Vec<ListedJurisdiction>,
    guidelines: Vec<ListedGuideline>,
}

#[derive(Debug, Serialize)]
struct ListedJurisdiction {
    code: String,
    name: String,
    status: String,
}

#[derive(Debug, Serialize)]
struct ListedGuideline {
    id: String,
    source: String,
    tier: String,
    title: String,
}

fn listing(data: &ReferenceData) -> Listing {
    Listing {
        jurisdictions: data
            .jurisdictions()
            .map(|law| ListedJurisdiction {
                code: law.code.to_string(),
                name: law.name.clone(),
                status: law.legislation.status.to_string(),
            })
            .collect(),
        guidelines: data
            .guidelines()
            .map(|g| ListedGuideline {
                id: g.id.to_string(),
                source: g.source.to_string(),
                tier: g.tier.to_string(),
                title: g.title.clone(),
            })
            .collect(),
    }
}

fn run_list(options: &GlobalOptions, json: bool) -> Result<u8> {
    let data = options.reference_data()?;
    let listing = listing(&data);
    if json {
        crate::print_json(&listing)?;
        return Ok(0);
    }

    println!("Jurisdictions ({}):", listing.jurisdictions.len());
    for j in &listing.jurisdictions {
        println!("  {}  {:<20} {}", j.code, j.name, j.status);
    }
    println!("\nGuidelines ({}):", listing.guidelines.len());
    for g in &listing.guidelines {
        println!("  {:<22} {:<16} {:<11} {}", g.id, g.source, g.tier, g.title);
    }
    Ok(0)
}
