//! Gannhook CLI
//!
//! Starts the webhook alert server.

use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use gannhook::api::HttpServer;
use gannhook::ingest::Ingestor;
use gannhook::store::AlertStore;
use gannhook::Config;

/// Gannhook - webhook alert server for Gann-based TradingView alerts
#[derive(Parser)]
#[command(name = "gannhook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// HTTP port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = Config::default();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    match run_serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_serve(config: Config) -> anyhow::Result<()> {
    info!(
        "starting Gann webhook server on {} (max_alerts={}, page_size={})",
        config.server.addr(),
        config.alerts.max_alerts,
        config.alerts.page_size
    );

    let store = AlertStore::new(config.alerts.max_alerts);
    let ingestor = Ingestor::new(store);
    let server = HttpServer::new(ingestor, config.alerts.page_size);

    server.serve(&config.server.addr()).await?;
    Ok(())
}
