use std::time::Duration;

use tracing::{instrument, warn};

use super::{build_http_client, parse_endpoint, ClientError};
use crate::models::{PredictionPayload, PredictionResponse};

/// Client used by the form to reach the backend relay
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    predict_url: reqwest::Url,
}

impl BackendClient {
    /// Create a client for a backend rooted at `base_url` (e.g. `http://localhost:5000`).
    ///
    /// A path prefix is kept: `http://host/api` posts to `http://host/api/predict`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base = parse_endpoint(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let predict_url = base
            .join("predict")
            .map_err(|e| ClientError::Config(format!("cannot derive /predict from '{}': {}", base_url, e)))?;

        Ok(Self {
            client: build_http_client(timeout)?,
            predict_url,
        })
    }

    /// Resolved prediction URL
    pub fn predict_url(&self) -> &str {
        self.predict_url.as_str()
    }

    /// Post the numeric form fields and decode `{prediction}`
    #[instrument(skip(self, payload))]
    pub async fn predict(&self, payload: &PredictionPayload) -> Result<PredictionResponse, ClientError> {
        let response = self
            .client
            .post(self.predict_url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Backend returned {} for prediction request", status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
