use thiserror::Error;

/// Error type for calls to the backend or the inference service
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    
    /// The service answered with a non-success status
    #[error("Service responded with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },
    
    /// The response body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
    
    /// The client was built with an unusable endpoint
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure was caused by the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }
}
