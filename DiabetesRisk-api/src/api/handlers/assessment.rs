use axum::{
    extract::Json,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use diabetes_risk_domain::entities::{LifestyleInput, MedicalInput, PredictionLabel, ResultState};
use diabetes_risk_domain::services::{render_result, validate_medical_input, RelayError};

use crate::entities::common::ErrorResponse;
use crate::entities::prediction::AssessmentRequest;

/// Turn a request body into a result state; `None` when no prediction is present
fn into_result_state(request: AssessmentRequest) -> Result<Option<ResultState>, ErrorResponse> {
    let Some(raw) = request.prediction else {
        return Ok(None);
    };

    let prediction = PredictionLabel::try_from(raw)
        .map_err(|e| ErrorResponse::validation_error(&e.to_string(), None))?;

    let prediction_input = request.prediction_input.map(MedicalInput::from).unwrap_or_default();
    validate_medical_input(&prediction_input).map_err(|e| match e {
        RelayError::Validation(message) => ErrorResponse::validation_error(&message, None),
        RelayError::Upstream(_) => ErrorResponse::internal_error(),
    })?;

    let lifestyle = match request.lifestyle {
        Some(lifestyle) => LifestyleInput::try_from(lifestyle)
            .map_err(|e| ErrorResponse::validation_error(&e.to_string(), None))?,
        // No selections means no lifestyle condition fires
        None => LifestyleInput::UNSELECTED,
    };

    Ok(Some(ResultState {
        prediction,
        prediction_input,
        lifestyle,
    }))
}

/// Render the risk assessment for a result state.
///
/// Without a prediction the empty view is returned.
#[utoipa::path(
    post,
    path = "/api/v1/assessment",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Rendered result view (kind \"empty\" or \"assessment\")"),
        (status = 400, description = "Invalid label, measurement or lifestyle choice", body = ErrorResponse)
    ),
    tag = "assessment"
)]
#[instrument(skip(request))]
pub async fn create_assessment(Json(request): Json<AssessmentRequest>) -> Response {
    match into_result_state(request) {
        Ok(state) => {
            let view = render_result(state.as_ref());
            debug!(empty = view.is_empty(), "Assessment rendered");
            Json(view).into_response()
        }
        Err(e) => {
            warn!("Rejected assessment request: {}", e.message);
            e.into_response()
        }
    }
}
