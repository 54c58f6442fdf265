use anyhow::Result;
use clap::Parser;
use tracing::info;

use duty_console::{cli::Cli, config, logging, App};

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors exit with status 2 before anything else is loaded
    let cli = Cli::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!(
        base_url = %config.api.base_url,
        "Starting duty console v{}",
        env!("CARGO_PKG_VERSION")
    );

    let command = cli.into_command(config.assignment.default_radius_meters);
    let app = App::new(config)?;
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app.run(command, &mut stdout).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}
