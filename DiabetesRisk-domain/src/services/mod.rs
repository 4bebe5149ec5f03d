pub mod form;
pub mod insights;
pub mod prediction;
pub mod result_view;
pub mod validation;

// Domain services
// Form flow, risk explanation, result rendering and the inference relay.

// Re-export service traits and factory functions
pub use form::{FormController, FormError, FormStep, SubmissionStatus, SUBMISSION_FAILED_MESSAGE};
pub use insights::{derive_recommendations, derive_risk_factors, explain, Explanation};
pub use prediction::{
    create_inference_relay, validate_medical_input, HttpPredictionClient, InferenceRelay, PredictionClient,
    PredictionError, PredictionRelayTrait, RelayError,
};
pub use result_view::{render_result, AssessmentView, EmptyState, LifestyleSection, ResultView};
pub use validation::{accept_numeric_edit, can_advance, is_acceptable_numeric};
