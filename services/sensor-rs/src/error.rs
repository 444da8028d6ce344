use thiserror::Error;

/// Startup errors. Nothing after startup is fatal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load config: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// No HTTP response was obtained for a reading.
///
/// A response with an error status is not a delivery failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeliveryError::Timeout(err.to_string())
        } else if err.is_connect() {
            DeliveryError::Connect(err.to_string())
        } else {
            DeliveryError::Request(err.to_string())
        }
    }
}
