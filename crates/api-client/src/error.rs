use core_types::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The request could not be completed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No record with id {id} exists in {resource}")]
    NotFound { resource: String, id: RecordId },

    #[error("The API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to deserialize the API response: {0}")]
    MalformedResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build the HTTP client: {0}")]
    ClientBuild(String),
}
