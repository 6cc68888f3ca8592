use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sox_index_collector::collector::Collector;
use sox_index_collector::config::Config;
use sox_index_collector::report;

#[derive(Parser)]
#[command(about = "Collects Philadelphia SE Semiconductor Index (.SOX) snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the quote page once and append the sample to today's table
    Collect,
    /// Summarize today's table into the daily report log
    Report,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Commands::Collect) {
        Commands::Collect => {
            let collector = Collector::new(&config)?;
            collector.run_cycle().await?;
        }
        Commands::Report => report::run(&config)?,
    }

    Ok(())
}
