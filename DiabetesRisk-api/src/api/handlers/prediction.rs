use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use diabetes_risk_domain::entities::MedicalInput;
use diabetes_risk_domain::services::{PredictionRelayTrait, RelayError};

use crate::entities::common::{ErrorResponse, PredictionFailure};
use crate::entities::prediction::PredictionRequest;

/// Relay type shared with the handlers
pub type PredictionRelay = Arc<dyn PredictionRelayTrait + Send + Sync>;

/// Banner returned by the root route
pub const ROOT_BANNER: &str = "Diabetes Risk Predictor Backend";

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Backend is running", body = String)),
    tag = "prediction"
)]
pub async fn root() -> &'static str {
    ROOT_BANNER
}

/// Forward medical measurements to the inference service.
///
/// The inference body is returned unchanged; failures come back as
/// `500 {message: "Error in prediction", error}`.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Prediction returned by the inference service, e.g. {\"prediction\": 1}"),
        (status = 400, description = "Negative measurements", body = ErrorResponse),
        (status = 500, description = "Inference failed", body = PredictionFailure)
    ),
    tag = "prediction"
)]
#[instrument(skip(relay, request))]
pub async fn predict(State(relay): State<PredictionRelay>, Json(request): Json<PredictionRequest>) -> Response {
    let input = MedicalInput::from(request);
    match relay.relay(&input).await {
        Ok(body) => {
            info!("Prediction relayed to client");
            Json::<Value>(body).into_response()
        }
        Err(RelayError::Validation(message)) => {
            warn!("Prediction request failed validation: {}", message);
            ErrorResponse::validation_error(&message, None).into_response()
        }
        Err(RelayError::Upstream(e)) => {
            error!("Error in prediction: {}", e);
            PredictionFailure::new(e.to_string()).into_response()
        }
    }
}
