use crate::reports;
use clap::Args;
use fitradar::config::Config;
use fitradar::error::FrResult;
use fitradar::scorer::Scorer;
use std::io;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the catalog as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CatalogArgs, scorer: &Scorer) -> FrResult<()> {
    let catalog = scorer.catalog();
    if args.json {
        let groups: Vec<_> = catalog.groups().collect();
        serde_json::to_writer_pretty(io::stdout().lock(), &groups)?;
        println!();
        return Ok(());
    }

    println!(
        "\n📋 {} metrics in {} categories",
        catalog.metric_count(),
        catalog.category_count()
    );
    reports::print_catalog(catalog);
    Ok(())
}
