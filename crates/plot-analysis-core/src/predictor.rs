//! Simulated land-classification model.
//!
//! There is no inference here: labels are drawn uniformly and independently
//! after an artificial delay. The RNG is owned by the predictor so a fixed
//! seed reproduces the same sequence of predictions.

use crate::types::{EncroachmentRisk, FencingStatus, LandType, PredictionResult};
use async_trait::async_trait;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::Mutex;

/// Produces land labels for a plot.
#[async_trait]
pub trait LandPredictor: Send + Sync {
    async fn predict(&self, plot_id: &str) -> PredictionResult;
}

/// Mock predictor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Delay applied before every prediction to emulate inference latency.
    pub simulated_latency: Duration,

    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(500),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct MockPredictor {
    simulated_latency: Duration,
    rng: Mutex<StdRng>,
}

impl MockPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.simulated_latency)
    }

    pub fn with_rng(rng: StdRng, simulated_latency: Duration) -> Self {
        Self {
            simulated_latency,
            rng: Mutex::new(rng),
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }
}

#[async_trait]
impl LandPredictor for MockPredictor {
    async fn predict(&self, plot_id: &str) -> PredictionResult {
        tracing::debug!(plot_id, "Running land model");

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        let prediction: PredictionResult = {
            let mut rng = self.rng.lock().await;
            rng.gen()
        };

        tracing::info!(
            plot_id,
            land_type = %prediction.land_type,
            encroachment_risk = %prediction.encroachment_risk,
            fencing_status = %prediction.fencing_status,
            "Land model predictions"
        );

        prediction
    }
}

impl Distribution<LandType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LandType {
        LandType::ALL[rng.gen_range(0..LandType::ALL.len())]
    }
}

impl Distribution<EncroachmentRisk> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EncroachmentRisk {
        EncroachmentRisk::ALL[rng.gen_range(0..EncroachmentRisk::ALL.len())]
    }
}

impl Distribution<FencingStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FencingStatus {
        FencingStatus::ALL[rng.gen_range(0..FencingStatus::ALL.len())]
    }
}

impl Distribution<PredictionResult> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PredictionResult {
        PredictionResult {
            land_type: rng.gen(),
            encroachment_risk: rng.gen(),
            fencing_status: rng.gen(),
        }
    }
}
