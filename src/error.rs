use crate::models::ApiFailure;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be parsed as the expected JSON contract
    #[error("Invalid response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiFailure),

    #[error("Missing data: {0}")]
    MissingData(&'static str),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),

    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
