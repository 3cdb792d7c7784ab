//! Error types for plot-analysis-service

use thiserror::Error;

/// Service-level errors. All of them surface during startup; the analysis
/// route itself has no failure path.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Owner fixture could not be loaded
    #[error(transparent)]
    Core(#[from] plot_analysis_core::PlotError),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ServiceError {
    fn from(err: config::ConfigError) -> Self {
        ServiceError::Config(err.to_string())
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
