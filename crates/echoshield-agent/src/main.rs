//! EchoShield Agent - runs verification cycles against the claim store

use anyhow::Context;
use clap::Parser;
use echoshield_agent::schedule::shutdown_channel;
use echoshield_agent::{Cli, HttpAgentWorker};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("echoshield=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;

    tracing::info!(
        backend_url = %config.backend_url,
        interval_secs = config.update_interval_secs,
        "Starting EchoShield agent"
    );

    let mut worker = HttpAgentWorker::from_config(&config).context("Failed to build agent")?;

    match cli.cycles {
        Some(cycles) => {
            worker.run_cycles(cycles).await;
        }
        None => {
            let (shutdown, signal) = shutdown_channel();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => shutdown.trigger(),
                    Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
                }
            });

            worker.run(signal).await;
        }
    }

    Ok(())
}
