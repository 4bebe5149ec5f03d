#[cfg(test)]
mod prediction_tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use diabetes_risk_domain::testing::{sample_medical_input, MockHealthService, MockPredictionRelay};

    use super::super::{json_request, send, send_json, test_app};
    use crate::api::routes::create_app;

    fn sample_body() -> serde_json::Value {
        json!({
            "pregnancies": 2, "glucose": 150, "bloodPressure": 120, "skinThickness": 25,
            "insulin": 90, "bmi": 28, "diabetesPedigreeFunction": 0.5, "age": 50
        })
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = test_app(Arc::new(MockPredictionRelay::new()), MockHealthService::new());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Diabetes Risk Predictor Backend");
    }

    #[tokio::test]
    async fn test_predict_returns_inference_body_unchanged() {
        let relay = Arc::new(
            MockPredictionRelay::new().with_response(json!({ "prediction": 0, "probability": 0.12 })),
        );
        let app = test_app(relay.clone(), MockHealthService::new());

        let (status, body) = send_json(app, json_request("POST", "/predict", sample_body())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "prediction": 0, "probability": 0.12 }));
        assert_eq!(relay.received(), vec![sample_medical_input()]);
    }

    #[tokio::test]
    async fn test_predict_failure_maps_to_500() {
        let app = test_app(Arc::new(MockPredictionRelay::new().with_failure()), MockHealthService::new());

        let (status, body) = send_json(app, json_request("POST", "/predict", sample_body())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error in prediction");
        assert!(body["error"].as_str().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_predict_rejects_negative_values() {
        let relay = Arc::new(MockPredictionRelay::new());
        let app = test_app(relay.clone(), MockHealthService::new());
        let mut body = sample_body();
        body["insulin"] = json!(-5);

        let (status, body) = send_json(app, json_request("POST", "/predict", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "insulin cannot be negative");
        assert!(relay.received().is_empty());
    }

    #[tokio::test]
    async fn test_predict_rejects_missing_fields() {
        let app = test_app(Arc::new(MockPredictionRelay::new()), MockHealthService::new());

        let (status, _) = send(app, json_request("POST", "/predict", json!({ "glucose": 150 }))).await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_with_credentials() {
        let app = create_app(
            Arc::new(MockPredictionRelay::new()),
            Arc::new(MockHealthService::new()),
            Some("http://localhost:3000"),
            "test",
        );
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/predict")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let headers = response.headers();

        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_security_headers_are_set() {
        let app = test_app(Arc::new(MockPredictionRelay::new()), MockHealthService::new());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }
}
