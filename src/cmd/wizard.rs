use crate::reports;
use clap::Args;
use fitradar::api;
use fitradar::config::Config;
use fitradar::error::FrResult;
use fitradar::export::{AssessmentReport, ReportFormat};
use fitradar::inputs::{save_inputs_json, RawInputSet};
use fitradar::scorer::{RawValue, Scorer};
use fitradar::session::{Submission, Wizard};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

const BACK: &str = ":back";
const QUIT: &str = ":quit";

#[derive(Args, Debug, Clone)]
pub struct WizardArgs {
    #[command(flatten)]
    pub config: Config,

    /// Save the collected raw inputs as JSON
    #[arg(long)]
    pub save_inputs: Option<PathBuf>,

    /// Write the report here after submitting
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "markdown")]
    pub format: ReportFormat,
}

enum StepAction {
    Forward(RawInputSet),
    Back(RawInputSet),
    Quit,
}

pub fn run(args: WizardArgs, scorer: &Scorer, config: &Config) -> FrResult<()> {
    let mut wizard = Wizard::new(scorer.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();

    let Some(submission) = drive(&mut wizard, stdin.lock(), stdout.lock())? else {
        println!("\n👋 Assessment cancelled.");
        return Ok(());
    };

    println!("\n🏁 === RESULTS === 🏁");
    reports::print_metric_breakdown(&submission.details);
    reports::print_category_scores(&submission.scores);

    let report = AssessmentReport::build(
        scorer.catalog(),
        &submission.inputs,
        &submission.scores,
        Some(submission.submitted_at),
        &config.report,
    )?;
    reports::print_radar(&report.radar);

    if let Some(path) = args.save_inputs {
        save_inputs_json(File::create(&path)?, &submission.inputs)?;
        info!("💾 Inputs saved to: {}", path.display());
    }
    if let Some(path) = args.output {
        api::save_report(&report, path, args.format)?;
    }
    Ok(())
}

/// Runs the step loop until submit, quit or end of input.
pub fn drive<R: BufRead, W: Write>(
    wizard: &mut Wizard,
    mut input: R,
    mut out: W,
) -> FrResult<Option<Submission>> {
    wizard.start();
    writeln!(
        out,
        "\nEnter each value and press Enter. Empty keeps the value in brackets, '{}' returns to the previous step, '{}' exits.",
        BACK, QUIT
    )?;

    loop {
        let values = match read_step(wizard, &mut input, &mut out)? {
            StepAction::Quit => return Ok(None),
            StepAction::Back(values) => {
                if let Err(e) = wizard.previous(&values) {
                    writeln!(out, "⚠️  {}", e)?;
                }
                continue;
            }
            StepAction::Forward(values) => values,
        };

        let result = if wizard.is_last_step() {
            wizard.submit(&values).map(Some)
        } else {
            wizard.next(&values).map(|_| None)
        };

        match result {
            Ok(Some(submission)) => return Ok(Some(submission)),
            Ok(None) => {}
            Err(e) => {
                // Keep what was typed so the retry shows it in brackets
                wizard.save_step(&values);
                writeln!(out, "❌ {}", e)?;
            }
        }
    }
}

fn read_step<R: BufRead, W: Write>(
    wizard: &Wizard,
    input: &mut R,
    out: &mut W,
) -> FrResult<StepAction> {
    let Some(category) = wizard.current_category() else {
        return Ok(StepAction::Quit);
    };
    writeln!(out, "\n== {} · {} ==", wizard.step_label(), category)?;

    let mut values = RawInputSet::new();
    for metric in wizard.current_metrics() {
        let prefill = wizard.prefill(metric.id);
        write!(
            out,
            "{}{}, {} [{}] {}: ",
            metric.name,
            metric.unit_suffix(),
            metric.tracking,
            prefill,
            metric.placeholder()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(StepAction::Quit);
        }
        let line = line.trim();

        match line {
            QUIT => return Ok(StepAction::Quit),
            BACK => return Ok(StepAction::Back(values)),
            "" => {
                values.insert(metric.id, RawValue::from(prefill));
            }
            typed => {
                values.insert(metric.id, RawValue::from(typed));
            }
        }
    }
    Ok(StepAction::Forward(values))
}
