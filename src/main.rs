use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use banks_etl::config::Config;
use banks_etl::progress::FileProgressLog;
use banks_etl::{logging, pipeline};

#[derive(Parser)]
#[command(name = "banks_etl")]
#[command(about = "One-shot ETL for the world's largest banks by market capitalization")]
#[command(version)]
struct Cli {
    /// TOML file overriding the built-in configuration defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let progress = FileProgressLog::new(&config.log_path);

    if let Err(e) = pipeline::run(&config, &progress) {
        error!("ETL run aborted: {e}");
        return Err(e.into());
    }
    Ok(())
}
