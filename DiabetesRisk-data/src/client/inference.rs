use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{build_http_client, parse_endpoint, ClientError};
use crate::models::InferencePayload;

/// Client for the external inference service
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl InferenceClient {
    /// Create a client that posts to `endpoint` (e.g. `http://localhost:5001/predict`)
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    /// The configured prediction endpoint
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Forward a payload and return the service's JSON body untouched
    #[instrument(skip(self, payload), fields(endpoint = %self.endpoint))]
    pub async fn predict(&self, payload: &InferencePayload) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Inference service returned {}", status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!("Inference service answered");
        Ok(body)
    }

    /// Liveness probe against the service root
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), ClientError> {
        let mut root = self.endpoint.clone();
        root.set_path("/");
        root.set_query(None);

        let response = self.client.get(root).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                body: String::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::spawn_stub;
    use axum::{http::StatusCode, routing::{get, post}, Json, Router};
    use serde_json::json;

    fn payload() -> InferencePayload {
        InferencePayload {
            pregnancies: 1.0,
            glucose: 85.0,
            blood_pressure: 66.0,
            skin_thickness: 29.0,
            insulin: 0.0,
            bmi: 26.6,
            diabetes_pedigree_function: 0.351,
            age: 31.0,
        }
    }

    #[tokio::test]
    async fn test_predict_sends_capitalized_body_and_returns_response() {
        let router = Router::new().route(
            "/predict",
            post(|Json(body): Json<Value>| async move {
                // Echo the keys back so the test can see what arrived
                let seen_bmi = body.get("BMI").cloned();
                let seen_lower = body.get("bmi").cloned();
                Json(json!({ "prediction": 0, "bmi": seen_bmi, "lower": seen_lower }))
            }),
        );
        let base = spawn_stub(router).await;
        let client = InferenceClient::new(&format!("{}/predict", base), Duration::from_secs(5)).unwrap();

        let body = client.predict(&payload()).await.unwrap();

        assert_eq!(body["prediction"], 0);
        assert_eq!(body["bmi"], 26.6);
        assert!(body["lower"].is_null());
    }

    #[tokio::test]
    async fn test_predict_surfaces_error_status() {
        let router = Router::new().route(
            "/predict",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "'Age'" }))) }),
        );
        let base = spawn_stub(router).await;
        let client = InferenceClient::new(&format!("{}/predict", base), Duration::from_secs(5)).unwrap();

        let err = client.predict(&payload()).await.unwrap_err();

        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Age"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_rejects_non_json_body() {
        let router = Router::new().route("/predict", post(|| async { "definitely not json" }));
        let base = spawn_stub(router).await;
        let client = InferenceClient::new(&format!("{}/predict", base), Duration::from_secs(5)).unwrap();

        let err = client.predict(&payload()).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_predict_times_out() {
        let router = Router::new().route(
            "/predict",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "prediction": 1 }))
            }),
        );
        let base = spawn_stub(router).await;
        let client = InferenceClient::new(&format!("{}/predict", base), Duration::from_millis(100)).unwrap();

        let err = client.predict(&payload()).await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_ping_hits_service_root() {
        let router = Router::new().route("/", get(|| async { "Diabetes ML Model Server is up!" }));
        let base = spawn_stub(router).await;
        let client = InferenceClient::new(&format!("{}/predict", base), Duration::from_secs(5)).unwrap();

        assert!(client.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_fails_when_service_is_down() {
        // Port 9 (discard) is not expected to be listening locally
        let client = InferenceClient::new("http://127.0.0.1:9/predict", Duration::from_millis(500)).unwrap();
        assert!(client.ping().await.is_err());
    }
}
