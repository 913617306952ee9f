//! Main entry point for locstore.

use anyhow::Context;
use clap::Parser;
use locstore_cli::{init_logging, App, Cli};
use locstore_config::ConfigLoader;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let config =
        ConfigLoader::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!("Storage folder: {:?}", config.storage.storage_dir());

    let app = App::new(config);
    let output = match app.execute(cli.command).await {
        Ok(output) => output,
        Err(e) => {
            error!("Command failed: {}", e);
            return Err(e.into());
        }
    };

    for line in output {
        println!("{line}");
    }

    Ok(())
}
