use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Relay endpoints
        crate::api::handlers::prediction::root,
        crate::api::handlers::prediction::predict,

        // Assessment endpoints
        crate::api::handlers::assessment::create_assessment,

        // Health endpoints
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            // Entities
            crate::entities::prediction::PredictionRequest,
            crate::entities::prediction::LifestyleRequest,
            crate::entities::prediction::AssessmentRequest,
            crate::entities::common::ErrorResponse,
            crate::entities::common::PredictionFailure,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "prediction", description = "Relay to the inference service"),
        (name = "assessment", description = "Risk factors and recommendations for a prediction"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Diabetes Risk Predictor API",
        version = "0.1.0",
        description = "Relays medical measurements to a diabetes inference model and explains the result",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
