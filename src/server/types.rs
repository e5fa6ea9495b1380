use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of POST /predict in the regression variant. `Revenue` is kept as a
/// raw JSON number so the response can echo it exactly as sent.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Revenue")]
    pub revenue: Option<Number>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(rename = "Revenue")]
    pub revenue: Number,
    #[serde(rename = "Predicted R&D Spend")]
    pub predicted_spend: f64,
}

/// Body of POST /predict in the lookup-table variant. All three inputs are
/// optional and default to mid-range.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default = "default_input")]
    pub market_value: f64,
    #[serde(default = "default_input")]
    pub r_and_d: f64,
    #[serde(default = "default_input")]
    pub competitor_threat: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub market_value: f64,
    pub r_and_d: f64,
    pub competitor_threat: f64,
    pub recommended_action: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn default_input() -> f64 {
    50.0
}
