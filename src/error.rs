use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptsigError {
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Crypto error: {0}")]
    Crypto(#[from] openssl::error::ErrorStack),
}

pub type Result<T> = std::result::Result<T, OptsigError>;
