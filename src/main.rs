// ===== fitradar/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fitradar::api;
use fitradar::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with calibration and report settings
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every metric the assessment asks for
    Catalog(cmd::catalog::CatalogArgs),
    /// Score a file of raw inputs
    Score(cmd::score::ScoreArgs),
    /// Build the assessment report from a file of raw inputs
    Report(cmd::report::ReportArgs),
    /// Enter the values step by step on the terminal
    Wizard(cmd::wizard::WizardArgs),
}

fn main() {
    // 1. Parse raw matches (to tell typed values from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // 2. Logging goes to stderr so stdout stays clean for reports
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("🚀 Initializing FitRadar...");

    // 3. The subcommand's own matches carry --plank-min-secs and friends
    let (cli_config, sub_name) = match &cli.command {
        Commands::Catalog(args) => (&args.config, "catalog"),
        Commands::Score(args) => (&args.config, "score"),
        Commands::Report(args) => (&args.config, "report"),
        Commands::Wizard(args) => (&args.config, "wizard"),
    };
    let sub_matches = matches.subcommand_matches(sub_name);

    let config = api::resolve_config(cli.config.as_deref(), cli_config, sub_matches)
        .unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(2);
        });

    // 4. Build the scorer
    let scorer = Scorer::from_config(&config).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
        process::exit(2);
    });

    // 5. Execute
    let result = match cli.command {
        Commands::Catalog(args) => cmd::catalog::run(args, &scorer),
        Commands::Score(args) => cmd::score::run(args, &scorer, &config),
        Commands::Report(args) => cmd::report::run(args, &scorer, &config),
        Commands::Wizard(args) => cmd::wizard::run(args, &scorer, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
