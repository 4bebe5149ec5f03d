use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use diabetes_risk_data::client::{BackendClient, ClientError, InferenceClient};

use crate::entities::conversions;
use crate::entities::medical::MedicalInput;
use crate::entities::prediction::PredictionLabel;

/// Errors seen by the form when asking for a prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The backend could not be reached or timed out
    #[error("Prediction service unreachable: {0}")]
    Network(String),
    
    /// The backend answered with an error status
    #[error("Prediction service failed: {0}")]
    Rejected(String),
    
    /// The backend answered with something other than `{prediction: 0|1}`
    #[error("Unexpected prediction response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for PredictionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(_) | ClientError::Config(_) => PredictionError::Network(err.to_string()),
            ClientError::Status { .. } => PredictionError::Rejected(err.to_string()),
            ClientError::Decode(msg) => PredictionError::InvalidResponse(msg),
        }
    }
}

/// Anything that can turn medical input into a risk label
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Request a prediction for the given measurements
    async fn predict(&self, input: &MedicalInput) -> Result<PredictionLabel, PredictionError>;
}

/// Prediction client that talks to the backend relay over HTTP
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    backend: BackendClient,
}

impl HttpPredictionClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictionError> {
        let backend = BackendClient::new(base_url, timeout)?;
        Ok(Self { backend })
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    #[instrument(skip(self, input))]
    async fn predict(&self, input: &MedicalInput) -> Result<PredictionLabel, PredictionError> {
        let payload = conversions::convert_to_data_payload(input);
        let response = self.backend.predict(&payload).await?;

        PredictionLabel::try_from(response.prediction)
            .map_err(|e| PredictionError::InvalidResponse(e.to_string()))
    }
}

/// Errors raised while relaying a prediction to the inference service
#[derive(Debug, Error)]
pub enum RelayError {
    /// The incoming measurements are not acceptable
    #[error("Validation error: {0}")]
    Validation(String),
    
    /// The inference service call failed
    #[error("{0}")]
    Upstream(#[from] ClientError),
}

/// Trait for the backend relay between the form and the inference service
#[async_trait]
pub trait PredictionRelayTrait: Send + Sync {
    /// Forward measurements and return the inference body unchanged
    async fn relay(&self, input: &MedicalInput) -> Result<Value, RelayError>;
    
    /// Check that the inference service is reachable
    async fn check_upstream(&self) -> Result<(), RelayError>;
}

/// Relay backed by the HTTP inference client
#[derive(Debug, Clone)]
pub struct InferenceRelay {
    client: InferenceClient,
}

impl InferenceRelay {
    /// Create a new relay
    pub fn new(client: InferenceClient) -> Self {
        Self { client }
    }

    /// Validate incoming measurements before they leave the process
    pub fn validate_input(&self, input: &MedicalInput) -> Result<(), RelayError> {
        validate_medical_input(input)
    }
}

/// Reject negative (or otherwise out-of-domain) measurements
pub fn validate_medical_input(input: &MedicalInput) -> Result<(), RelayError> {
    if let Err(validation_errors) = input.validate() {
        let mut messages: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
            })
            .collect();
        messages.sort();
        return Err(RelayError::Validation(messages.join("; ")));
    }
    Ok(())
}

#[async_trait]
impl PredictionRelayTrait for InferenceRelay {
    #[instrument(skip(self, input), fields(endpoint = %self.client.endpoint()))]
    async fn relay(&self, input: &MedicalInput) -> Result<Value, RelayError> {
        self.validate_input(input)?;

        let payload = conversions::convert_to_inference_payload(input);
        match self.client.predict(&payload).await {
            Ok(body) => {
                info!("Prediction relayed");
                Ok(body)
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!("Inference request timed out");
                } else {
                    error!("Inference request failed: {}", e);
                }
                Err(RelayError::Upstream(e))
            }
        }
    }

    async fn check_upstream(&self) -> Result<(), RelayError> {
        self.client.ping().await.map_err(RelayError::from)
    }
}

/// Create the default relay from an inference endpoint and timeout
pub fn create_inference_relay(endpoint: &str, timeout: Duration) -> Result<InferenceRelay, RelayError> {
    let client = InferenceClient::new(endpoint, timeout)?;
    Ok(InferenceRelay::new(client))
}
