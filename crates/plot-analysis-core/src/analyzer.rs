//! Request pipeline: owner lookup, land prediction, then DSS advisories.

use crate::dss::recommend;
use crate::predictor::LandPredictor;
use crate::registry::OwnerRegistry;
use crate::types::AnalysisResponse;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlotAnalyzer {
    registry: Arc<OwnerRegistry>,
    predictor: Arc<dyn LandPredictor>,
}

impl PlotAnalyzer {
    pub fn new(registry: Arc<OwnerRegistry>, predictor: Arc<dyn LandPredictor>) -> Self {
        Self {
            registry,
            predictor,
        }
    }

    pub fn registry(&self) -> &OwnerRegistry {
        &self.registry
    }

    /// Analyze a plot. Any id is accepted; unknown ids carry the default
    /// owner record.
    pub async fn analyze(&self, plot_id: &str) -> AnalysisResponse {
        tracing::info!(
            plot_id,
            known = self.registry.contains(plot_id),
            "New plot analysis request"
        );

        let owner = self.registry.get(plot_id).clone();
        let ai_analysis = self.predictor.predict(plot_id).await;
        let dss_recommendation = recommend(&ai_analysis);

        tracing::info!(plot_id, "Plot analysis complete");

        AnalysisResponse {
            owner,
            ai_analysis,
            dss_recommendation,
        }
    }
}

impl std::fmt::Debug for PlotAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotAnalyzer")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dss::NO_ACTION_RECOMMENDATION;
    use crate::predictor::{MockPredictor, PredictorConfig};
    use crate::registry::DEFAULT_PLOT_KEY;
    use crate::types::{
        EncroachmentRisk, FencingStatus, LandType, OwnerRecord, PredictionResult,
    };
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::time::Duration;

    struct FixedPredictor(PredictionResult);

    #[async_trait]
    impl LandPredictor for FixedPredictor {
        async fn predict(&self, _plot_id: &str) -> PredictionResult {
            self.0
        }
    }

    fn registry() -> Arc<OwnerRegistry> {
        let mut records = BTreeMap::new();
        records.insert(
            DEFAULT_PLOT_KEY.to_string(),
            OwnerRecord {
                owner_name: "Unregistered Owner".to_string(),
                rtc_number: "RTC-0000-0000".to_string(),
                ownership_status: "Unverified".to_string(),
            },
        );
        records.insert(
            "PLOT-001".to_string(),
            OwnerRecord {
                owner_name: "Ramesh Gowda".to_string(),
                rtc_number: "RTC-2023-0451".to_string(),
                ownership_status: "Clear Title".to_string(),
            },
        );
        Arc::new(OwnerRegistry::from_records(records).unwrap())
    }

    #[tokio::test]
    async fn merges_owner_prediction_and_recommendation() {
        let fixed = PredictionResult {
            land_type: LandType::Agricultural,
            encroachment_risk: EncroachmentRisk::High,
            fencing_status: FencingStatus::Unfenced,
        };
        let analyzer = PlotAnalyzer::new(registry(), Arc::new(FixedPredictor(fixed)));

        let response = analyzer.analyze("PLOT-001").await;
        assert_eq!(response.owner.owner_name, "Ramesh Gowda");
        assert_eq!(response.ai_analysis, fixed);
        assert_eq!(
            response.dss_recommendation,
            "High encroachment risk detected. Flag for survey. \
             Eligible for agricultural subsidies. \
             Consider applying for fencing support schemes."
        );
    }

    #[tokio::test]
    async fn unknown_plot_gets_default_owner() {
        let fixed = PredictionResult {
            land_type: LandType::Homestead,
            encroachment_risk: EncroachmentRisk::Low,
            fencing_status: FencingStatus::Fenced,
        };
        let analyzer = PlotAnalyzer::new(registry(), Arc::new(FixedPredictor(fixed)));

        let response = analyzer.analyze("unknown-id").await;
        assert_eq!(&response.owner, analyzer.registry().default_record());
        assert_eq!(response.dss_recommendation, NO_ACTION_RECOMMENDATION);
    }

    #[tokio::test]
    async fn recommendation_matches_random_prediction() {
        let predictor = MockPredictor::new(PredictorConfig {
            simulated_latency: Duration::ZERO,
            seed: Some(99),
        });
        let analyzer = PlotAnalyzer::new(registry(), Arc::new(predictor));

        for _ in 0..25 {
            let response = analyzer.analyze("PLOT-001").await;
            assert_eq!(response.dss_recommendation, recommend(&response.ai_analysis));
        }
    }
}
