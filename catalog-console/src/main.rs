use anyhow::Context;
use catalog_console::cli::{self, Cli};
use catalog_console::{ConsoleConfig, logger};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    let _ = dotenvy::dotenv();
    let config = ConsoleConfig::from_env();

    // 2. Logging
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 3. Command
    let cli = Cli::parse();
    tracing::debug!(api_url = %config.api_url, page_size = config.page_size, "Starting catalog console");

    cli::run(cli, config).await.context("catalog console failed")
}
