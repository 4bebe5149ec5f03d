pub mod backend;
pub mod errors;
pub mod inference;

pub use backend::BackendClient;
pub use errors::ClientError;
pub use inference::InferenceClient;

use std::time::Duration;

/// Default timeout applied to outbound prediction requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared reqwest client with the given timeout
fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Config(e.to_string()))
}

/// Parse and validate an absolute http(s) URL
fn parse_endpoint(endpoint: &str) -> Result<reqwest::Url, ClientError> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| ClientError::Config(format!("invalid URL '{}': {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::Config(format!("unsupported scheme '{}' in '{}'", other, endpoint))),
    }
}
