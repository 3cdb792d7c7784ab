//! Plot analysis core.
//!
//! Static owner lookup, a mock land-classification predictor with injectable
//! randomness, and the decision-support advisories derived from its labels.

#![deny(unsafe_code)]

pub mod analyzer;
pub mod dss;
pub mod error;
pub mod predictor;
pub mod registry;
pub mod types;

pub use analyzer::PlotAnalyzer;
pub use dss::{advisories, recommend, NO_ACTION_RECOMMENDATION};
pub use error::PlotError;
pub use predictor::{LandPredictor, MockPredictor, PredictorConfig};
pub use registry::{OwnerRegistry, DEFAULT_PLOT_KEY};
pub use types::{
    AnalysisResponse, EncroachmentRisk, FencingStatus, LandType, OwnerRecord, PredictionResult,
};
