//! Crop recommendation and risk prediction models.

use serde::{Deserialize, Serialize};

/// One crop the advisory engine suggests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSuggestion {
    pub crop: String,
    /// Confidence in 0..=1.
    pub confidence: f64,
    pub why: String,
}

/// Ranked crop suggestions with a human-readable rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_crops: Vec<CropSuggestion>,
    pub rationale: String,
}

/// Qualitative risk band reported by the risk endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Seasonal risk outlook for the stored farm profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Normalized risk in 0..=1.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub top_risks: Vec<String>,
    pub mitigation: Vec<String>,
}
