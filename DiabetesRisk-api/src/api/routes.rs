use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::api::handlers::health::{self, AppEnvironment, HealthService};
use crate::api::handlers::prediction::{self, PredictionRelay};
use crate::api::handlers::assessment;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(
    relay: PredictionRelay,
    health_service: HealthService,
    client_origin: Option<&str>,
    environment: &str,
) -> Router {
    debug!("Creating application router");

    // Relay routes called by the form client
    let relay_routes = Router::new()
        .route("/", get(prediction::root))
        .route("/predict", post(prediction::predict))
        .with_state(relay);

    // Versioned API routes
    let api_routes = Router::new().route("/assessment", post(assessment::create_assessment));

    // Public system routes
    let system_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(AppEnvironment(environment.to_string())));

    let app = Router::new()
        .merge(relay_routes)
        .merge(system_routes)
        .nest("/api/v1", api_routes);

    debug!("Routes configured");

    let app = add_swagger_ui(app);

    // Initialize health check service startup time
    health::initialize_server_start_time();

    configure_security(app, client_origin).layer(TraceLayer::new_for_http())
}

/// Build the CORS layer; an exact origin allows credentials, otherwise any origin
pub fn cors_layer(client_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    match client_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => cors.allow_origin(origin).allow_credentials(true),
        Some(Err(e)) => {
            warn!("Invalid CLIENT_ORIGIN ({}), allowing any origin", e);
            cors.allow_origin(Any)
        }
        None => cors.allow_origin(Any),
    }
}

/// Apply CORS and security headers to the whole application
pub fn configure_security(app: Router, client_origin: Option<&str>) -> Router {
    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ));

    app.layer(cors_layer(client_origin)).layer(security_headers)
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
