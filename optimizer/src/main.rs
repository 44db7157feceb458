//! Command line entry point

use clap::Parser;
use log::info;
use route_optimizer::cli::{self, Cli};
use route_optimizer::*;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration from environment: {}", e))?;

    // Try to load log configuration from the provided log file.
    // Will default to stderr debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()).await {
        log::error!("(main) {}", e);
    }

    info!("(main) Loaded config: {:?}", config);

    let result = cli::run(&args, &config);

    // Make sure all log message are written/ displayed before output
    log::logger().flush();

    println!("{}", result?);
    Ok(())
}
