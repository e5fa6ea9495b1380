use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rnd_predictor::{
    model::{PolicyTable, RegressionModel},
    server,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Regression router over a model with known coefficients (slope 0.2,
/// intercept 1000), injected directly instead of loaded from disk.
pub fn regression_app() -> Router {
    let model = RegressionModel::from_parts(vec![0.2], 1000.0).unwrap();
    server::regression_router(Arc::new(model))
}

/// Lookup router over the untrained all-zero decision table.
pub fn lookup_app() -> Router {
    server::lookup_router(Arc::new(PolicyTable::new()))
}

/// POSTs a JSON body to /predict and returns the status plus the parsed
/// response body (Null when the body is empty or not JSON).
pub async fn post_predict(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, parsed)
}
