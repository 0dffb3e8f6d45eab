use crate::reports;
use clap::Args;
use fitradar::api;
use fitradar::config::Config;
use fitradar::error::FrResult;
use fitradar::export::RadarSeries;
use fitradar::scorer::Scorer;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Raw inputs (.json object or metric,value .csv)
    #[arg(short, long)]
    pub inputs: PathBuf,

    /// Print the full breakdown as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer, config: &Config) -> FrResult<()> {
    let (_, result) = api::evaluate_file(scorer, &args.inputs)?;

    if args.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &result)?;
        println!();
        return Ok(());
    }

    println!("\n🏋️  === ASSESSMENT SCORES === 🏋️");
    reports::print_metric_breakdown(&result.details);
    reports::print_category_scores(&result.details.categories);
    reports::print_radar(&RadarSeries::new(&result.details.categories, &config.report));

    if !result.unknown_ids.is_empty() {
        println!(
            "\n⚠️  Ignored unknown ids: {}",
            result.unknown_ids.join(", ")
        );
    }
    Ok(())
}
