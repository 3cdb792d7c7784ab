//! Decision-support advisories derived from predictor labels.

use crate::types::{FencingStatus, LandType, PredictionResult};

pub const NO_ACTION_RECOMMENDATION: &str = "No immediate risks or actions recommended.";

struct AdvisoryRule {
    applies: fn(&PredictionResult) -> bool,
    advisory: &'static str,
}

// Evaluated in order; every matching rule contributes.
const RULES: [AdvisoryRule; 3] = [
    AdvisoryRule {
        applies: elevated_risk,
        advisory: "High encroachment risk detected. Flag for survey.",
    },
    AdvisoryRule {
        applies: agricultural,
        advisory: "Eligible for agricultural subsidies.",
    },
    AdvisoryRule {
        applies: unfenced,
        advisory: "Consider applying for fencing support schemes.",
    },
];

fn elevated_risk(prediction: &PredictionResult) -> bool {
    prediction.encroachment_risk.is_elevated()
}

fn agricultural(prediction: &PredictionResult) -> bool {
    prediction.land_type == LandType::Agricultural
}

fn unfenced(prediction: &PredictionResult) -> bool {
    prediction.fencing_status == FencingStatus::Unfenced
}

/// Advisories that apply to `prediction`, in rule order.
pub fn advisories(prediction: &PredictionResult) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(prediction))
        .map(|rule| rule.advisory)
        .collect()
}

/// Space-joined advisories, or [`NO_ACTION_RECOMMENDATION`] when none apply.
pub fn recommend(prediction: &PredictionResult) -> String {
    let matched = advisories(prediction);
    if matched.is_empty() {
        NO_ACTION_RECOMMENDATION.to_string()
    } else {
        matched.join(" ")
    }
}
