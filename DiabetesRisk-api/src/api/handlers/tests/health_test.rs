#[cfg(test)]
mod health_tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    use diabetes_risk_domain::health::{ComponentStatus, SystemStatus};
    use diabetes_risk_domain::testing::{MockHealthService, MockPredictionRelay};

    use super::super::{send_json, test_app};

    fn health_request() -> Request<Body> {
        Request::builder().uri("/health").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_healthy() {
        let app = test_app(Arc::new(MockPredictionRelay::new()), MockHealthService::new());

        let (status, body) = send_json(app, health_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["components"]["api"]["status"], "ok");
        assert_eq!(body["components"]["inference"]["status"], "ok");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_check_degraded_when_inference_down() {
        let app = test_app(
            Arc::new(MockPredictionRelay::new()),
            MockHealthService::new().with_inference_down(),
        );

        let (status, body) = send_json(app, health_request()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["components"]["inference"]["status"], "error");
        assert_eq!(body["components"]["inference"]["message"], "inference service unreachable");
    }

    #[tokio::test]
    async fn test_health_check_unhealthy() {
        let app = test_app(
            Arc::new(MockPredictionRelay::new()),
            MockHealthService::new()
                .with_system_status(SystemStatus::Unhealthy)
                .with_component("api", ComponentStatus::Unhealthy, Some("overloaded".to_string())),
        );

        let (status, body) = send_json(app, health_request()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["components"]["api"]["message"], "overloaded");
    }
}
