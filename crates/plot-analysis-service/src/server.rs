//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use axum::Router;
use plot_analysis_core::{LandPredictor, MockPredictor, OwnerRegistry, PlotAnalyzer};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Plot analysis server
pub struct Server {
    config: ServiceConfig,
    analyzer: Arc<PlotAnalyzer>,
}

impl Server {
    /// Create a new server, loading the owner fixture. A missing or malformed
    /// fixture fails here, before anything is bound.
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        let registry = Arc::new(OwnerRegistry::load(&config.data.fixture_path)?);
        let predictor: Arc<dyn LandPredictor> = Arc::new(MockPredictor::new(
            config.predictor.to_predictor_config(),
        ));

        Ok(Self::with_analyzer(
            config,
            Arc::new(PlotAnalyzer::new(registry, predictor)),
        ))
    }

    pub fn with_analyzer(config: ServiceConfig, analyzer: Arc<PlotAnalyzer>) -> Self {
        Self { config, analyzer }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build the router without binding a socket
    pub fn router(&self) -> ServiceResult<Router> {
        create_router(AppState::new(self.analyzer.clone()), &self.config.server)
    }

    /// Run the server
    pub async fn run(self) -> ServiceResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(self.config.server.listen_addr).await?;

        tracing::info!(
            addr = %listener.local_addr()?,
            known_plots = self.analyzer.registry().len(),
            simulated_latency_ms = self.config.predictor.simulated_latency_ms,
            "Plot analysis service listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServiceError::Server(e.to_string()))?;

        tracing::info!("Plot analysis service shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
