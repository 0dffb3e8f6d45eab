use chrono::{DateTime, Local};
use clap::Args;
use fitradar::api;
use fitradar::config::Config;
use fitradar::error::{FitRadarError, FrResult};
use fitradar::export::ReportFormat;
use fitradar::inputs::load_inputs_from_file;
use fitradar::scorer::Scorer;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: Config,

    /// Raw inputs (.json object or metric,value .csv)
    #[arg(short, long)]
    pub inputs: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "markdown")]
    pub format: ReportFormat,

    /// RFC 3339 timestamp, or "now". Omitted means "Date not recorded".
    #[arg(long)]
    pub recorded_at: Option<String>,
}

pub fn parse_recorded_at(s: &str) -> FrResult<DateTime<Local>> {
    if s.eq_ignore_ascii_case("now") {
        return Ok(Local::now());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| FitRadarError::Validation(format!("Invalid --recorded-at '{}': {}", s, e)))
}

pub fn run(args: ReportArgs, scorer: &Scorer, config: &Config) -> FrResult<()> {
    let recorded_at = args.recorded_at.as_deref().map(parse_recorded_at).transpose()?;
    let inputs = load_inputs_from_file(&args.inputs)?;
    let report = api::build_report(scorer, &inputs, recorded_at, &config.report)?;

    match args.output {
        Some(path) => api::save_report(&report, path, args.format).map(|_| ()),
        None => report.write_to(io::stdout().lock(), args.format),
    }
}
