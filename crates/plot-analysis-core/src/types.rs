use serde::{Deserialize, Serialize};
use std::fmt;

/// Static owner information for a plot, as held in the lookup fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRecord {
    pub owner_name: String,
    pub rtc_number: String,
    pub ownership_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandType {
    Agricultural,
    Homestead,
    #[serde(rename = "Fallow Land")]
    FallowLand,
}

impl LandType {
    pub const ALL: [LandType; 3] = [
        LandType::Agricultural,
        LandType::Homestead,
        LandType::FallowLand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandType::Agricultural => "Agricultural",
            LandType::Homestead => "Homestead",
            LandType::FallowLand => "Fallow Land",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncroachmentRisk {
    Low,
    Medium,
    High,
}

impl EncroachmentRisk {
    pub const ALL: [EncroachmentRisk; 3] = [
        EncroachmentRisk::Low,
        EncroachmentRisk::Medium,
        EncroachmentRisk::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EncroachmentRisk::Low => "Low",
            EncroachmentRisk::Medium => "Medium",
            EncroachmentRisk::High => "High",
        }
    }

    /// Medium and High both warrant a survey flag.
    pub fn is_elevated(&self) -> bool {
        matches!(self, EncroachmentRisk::Medium | EncroachmentRisk::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FencingStatus {
    Fenced,
    Unfenced,
    #[serde(rename = "Partially Fenced")]
    PartiallyFenced,
}

impl FencingStatus {
    pub const ALL: [FencingStatus; 3] = [
        FencingStatus::Fenced,
        FencingStatus::Unfenced,
        FencingStatus::PartiallyFenced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FencingStatus::Fenced => "Fenced",
            FencingStatus::Unfenced => "Unfenced",
            FencingStatus::PartiallyFenced => "Partially Fenced",
        }
    }
}

impl fmt::Display for LandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EncroachmentRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FencingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels produced by the land predictor for one plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionResult {
    pub land_type: LandType,
    pub encroachment_risk: EncroachmentRisk,
    pub fencing_status: FencingStatus,
}

/// Full analysis returned to the frontend: owner fields at the top level,
/// the predictor output nested under `ai_analysis`, and the DSS advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub owner: OwnerRecord,
    pub ai_analysis: PredictionResult,
    pub dss_recommendation: String,
}
