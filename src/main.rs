use clap::Parser;
use daybrief::cli::Cli;
use daybrief::{config, shell};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so the menu and fetched data on stdout stay clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("daybrief starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, "Parsed CLI arguments");

    // Early check: a broken config file or endpoint fails here, before any prompt
    let config = match config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration is invalid (fix the file or flags and retry)");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    shell::run(&config).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
