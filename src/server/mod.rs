pub mod handlers;
pub mod types;

use crate::{
    config::{Config, ModelVariant},
    model::{PolicyTable, RegressionModel},
    Result,
};
use axum::{routing::post, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the regression-variant router around an already-loaded model, so
/// tests can inject a model with known coefficients.
pub fn regression_router(model: Arc<RegressionModel>) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(handlers::RegressionState { model })
}

pub fn lookup_router(table: Arc<PolicyTable>) -> Router {
    Router::new()
        .route("/predict", post(handlers::recommend))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(handlers::LookupState { table })
}

pub async fn run(config: Config) -> Result<()> {
    // Build the variant's router first so a missing artifact is fatal before
    // the socket is bound.
    let app = match config.model.variant {
        ModelVariant::Regression => {
            let model = RegressionModel::load(&config.model.artifact_path)?;
            info!(
                "Loaded regression artifact from {} ({} feature(s))",
                config.model.artifact_path,
                model.n_features()
            );
            regression_router(Arc::new(model))
        }
        ModelVariant::Lookup => {
            info!("Allocating untrained decision table (all recommendations degenerate to low)");
            lookup_router(Arc::new(PolicyTable::new()))
        }
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
