use super::types::{
    ErrorResponse, PredictRequest, PredictResponse, RecommendRequest, RecommendResponse,
};
use crate::{
    model::{PolicyTable, RegressionModel},
    Error,
};
use axum::{extract::State, http::StatusCode, response::Json};
use ndarray::arr2;
use std::sync::Arc;
use tracing::{error, info};

/// Shared state for the regression variant. The model is loaded once at
/// startup and read concurrently without locking.
#[derive(Clone)]
pub struct RegressionState {
    pub model: Arc<RegressionModel>,
}

/// Shared state for the lookup-table variant.
#[derive(Clone)]
pub struct LookupState {
    pub table: Arc<PolicyTable>,
}

pub async fn predict(
    State(state): State<RegressionState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Validate-then-construct: no inference is attempted without Revenue.
    let Some(revenue) = request.revenue else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: Error::missing_field("Revenue").to_string(),
            }),
        ));
    };

    let Some(revenue_value) = revenue.as_f64() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Revenue is not representable as a number".to_string(),
            }),
        ));
    };

    // One row, one feature column: the shape the artifact was fit against.
    let features = arr2(&[[revenue_value]]);

    match state.model.predict(&features) {
        Ok(outputs) => {
            let predicted_spend = outputs[0];
            info!(revenue = revenue_value, predicted_spend, "Prediction served");
            Ok(Json(PredictResponse {
                revenue,
                predicted_spend,
            }))
        }
        Err(e) => {
            error!("Inference failed for revenue {}: {}", revenue_value, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Inference error: {}", e),
                }),
            ))
        }
    }
}

pub async fn recommend(
    State(state): State<LookupState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let action = state
        .table
        .recommend(request.market_value, request.r_and_d, request.competitor_threat);

    info!(
        market_value = request.market_value,
        r_and_d = request.r_and_d,
        competitor_threat = request.competitor_threat,
        action = action.label(),
        "Recommendation served"
    );

    Json(RecommendResponse {
        market_value: request.market_value,
        r_and_d: request.r_and_d,
        competitor_threat: request.competitor_threat,
        recommended_action: action.label(),
    })
}
