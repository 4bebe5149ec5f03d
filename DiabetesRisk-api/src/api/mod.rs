pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use diabetes_risk_domain::health::create_health_service;
use diabetes_risk_domain::services::{create_inference_relay, PredictionRelayTrait, RelayError};

use crate::config::ServerConfig;

/// Create the application router wired to the configured inference service
pub fn create_application(config: &ServerConfig) -> Result<Router, RelayError> {
    let relay: Arc<dyn PredictionRelayTrait + Send + Sync> =
        Arc::new(create_inference_relay(&config.inference_url, config.inference_timeout)?);
    let health_service = create_health_service(relay.clone());

    info!(
        inference_url = %config.inference_url,
        timeout_secs = config.inference_timeout.as_secs(),
        "Prediction relay configured"
    );

    Ok(routes::create_app(
        relay,
        health_service,
        config.client_origin.as_deref(),
        &config.environment,
    ))
}
