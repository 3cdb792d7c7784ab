use std::path::PathBuf;
use thiserror::Error;

/// Plot analysis errors.
///
/// Every variant is raised while loading the owner fixture; request handling
/// itself never fails.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to read owner fixture '{path}': {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed owner fixture '{path}': {source}")]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Owner fixture has no '{0}' entry")]
    MissingDefault(String),
}
