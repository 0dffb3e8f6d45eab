// ===== fitradar/src/api.rs =====
use crate::config::{Config, ReportParams};
use crate::error::FrResult;
use crate::export::{AssessmentReport, ReportFormat};
use crate::inputs::{load_inputs_from_file, RawInputSet};
use crate::scorer::{ScoreDetails, Scorer};
use chrono::{DateTime, Local};
use clap::ArgMatches;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub details: ScoreDetails,
    /// Input ids that matched no catalog metric.
    pub unknown_ids: Vec<String>,
}

/// Service: Resolve the effective configuration.
///
/// A JSON file, when given, is the base; values typed on the command line
/// win over it. Without a file the CLI values (defaults included) are used.
pub fn resolve_config(
    file: Option<&Path>,
    cli: &Config,
    matches: Option<&ArgMatches>,
) -> FrResult<Config> {
    let config = match file {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path.display());
            let mut from_file = Config::load_from_file(path)?;
            if let Some(m) = matches {
                from_file.merge_from_cli(cli, m);
            }
            from_file
        }
        None => cli.clone(),
    };
    config.validate()?;
    Ok(config)
}

/// Service: Score an input set and report ids the catalog does not know.
pub fn evaluate(scorer: &Scorer, inputs: &RawInputSet) -> EvaluationResult {
    let unknown_ids: Vec<String> = inputs
        .ids()
        .into_iter()
        .filter(|id| scorer.catalog().find(id).is_none())
        .map(str::to_string)
        .collect();

    for id in &unknown_ids {
        warn!("Ignoring input for unknown metric '{}'", id);
    }

    EvaluationResult {
        details: scorer.score_details(inputs),
        unknown_ids,
    }
}

/// Service: Load inputs from disk and score them.
pub fn evaluate_file<P: AsRef<Path>>(scorer: &Scorer, path: P) -> FrResult<(RawInputSet, EvaluationResult)> {
    let inputs = load_inputs_from_file(path)?;
    let result = evaluate(scorer, &inputs);
    Ok((inputs, result))
}

/// Service: Score the inputs and assemble the export artifact.
pub fn build_report(
    scorer: &Scorer,
    inputs: &RawInputSet,
    submitted_at: Option<DateTime<Local>>,
    params: &ReportParams,
) -> FrResult<AssessmentReport> {
    let scores = scorer.score_all(inputs);
    AssessmentReport::build(scorer.catalog(), inputs, &scores, submitted_at, params)
}

/// Service: Write a report to disk in the requested format.
///
/// A path without an extension gets the format's one (`.md` or `.json`).
/// Returns the path actually written.
pub fn save_report<P: AsRef<Path>>(
    report: &AssessmentReport,
    path: P,
    format: ReportFormat,
) -> FrResult<PathBuf> {
    let path = path.as_ref();
    let path = match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension(format.extension()),
    };
    let file = File::create(&path)?;
    report.write_to(BufWriter::new(file), format)?;
    info!("💾 Report saved to: {}", path.display());
    Ok(path)
}
