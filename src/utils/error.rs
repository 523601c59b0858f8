use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("network failure for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("service returned HTTP {status} for {url}")]
    Service { url: String, status: StatusCode },

    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ProjError>;
