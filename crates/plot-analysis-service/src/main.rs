//! plotd - mock plot analysis service
//!
//! Serves `GET /analyze_plot/{plot_id}` for the land-records frontend demo.

use clap::Parser;
use plot_analysis_service::{Server, ServiceConfig, ServiceError, ServiceResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plot analysis service CLI
#[derive(Parser)]
#[command(name = "plotd")]
#[command(about = "Mock plot analysis service for the land-records frontend", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PLOT_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "PLOT_LISTEN_ADDR")]
    listen: Option<String>,

    /// Owner fixture (JSON keyed by plot id, with a `default` entry)
    #[arg(short, long, env = "PLOT_FIXTURE")]
    fixture: Option<String>,

    /// Simulated model latency in milliseconds
    #[arg(long, env = "PLOT_LATENCY_MS")]
    latency_ms: Option<u64>,

    /// Seed for reproducible predictions
    #[arg(long, env = "PLOT_SEED")]
    seed: Option<u64>,

    /// Log level
    #[arg(long, env = "PLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "PLOT_LOG_JSON")]
    json: bool,
}

fn apply_overrides(config: &mut ServiceConfig, cli: &Cli) -> ServiceResult<()> {
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| ServiceError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(fixture) = &cli.fixture {
        config.data.fixture_path = fixture.into();
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.predictor.simulated_latency_ms = latency_ms;
    }
    if cli.seed.is_some() {
        config.predictor.seed = cli.seed;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json {
        config.logging.json = true;
    }
    Ok(())
}

fn init_tracing(config: &ServiceConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli)?;
    init_tracing(&config);

    let server = Server::new(config).inspect_err(|err| {
        tracing::error!(error = %err, "Failed to start plot analysis service");
    })?;
    server.run().await?;
    Ok(())
}
