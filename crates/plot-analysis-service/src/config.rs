//! Configuration for plot-analysis-service

use plot_analysis_core::PredictorConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Owner fixture configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Mock predictor configuration
    #[serde(default)]
    pub predictor: PredictorSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Origins allowed to call the API with credentials
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Owner fixture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file mapping plot ids to owner records
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fixture_path: default_fixture_path(),
        }
    }
}

/// Mock predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorSettings {
    /// Simulated inference latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,

    /// RNG seed for reproducible predictions
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency_ms(),
            seed: None,
        }
    }
}

impl PredictorSettings {
    pub fn to_predictor_config(&self) -> PredictorConfig {
        PredictorConfig {
            simulated_latency: Duration::from_millis(self.simulated_latency_ms),
            seed: self.seed,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8000".to_string(),
        "http://127.0.0.1:8000".to_string(),
    ]
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("data/mock_data.json")
}

fn default_latency_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    /// Load configuration: defaults, then the optional file, then `PLOT_*`
    /// environment variables (`__` separates nested keys, e.g.
    /// `PLOT_PREDICTOR__SIMULATED_LATENCY_MS`).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&ServiceConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PLOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Configuration for local tests: no latency and a fixed seed.
    pub fn instant(seed: u64) -> Self {
        Self {
            predictor: PredictorSettings {
                simulated_latency_ms: 0,
                seed: Some(seed),
            },
            ..Default::default()
        }
    }
}
