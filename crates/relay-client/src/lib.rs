mod client;

pub use client::ConfigApiClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error converting data to JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Error making POST request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error: API responded with status {0}")]
    RemoteStatus(reqwest::StatusCode),
}

pub type Result<T> = std::result::Result<T, ClientError>;
