use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("the backend is unreachable: {0}")]
    Unreachable(String),
    #[error("the backend responded with status {0}")]
    NonOkStatus(StatusCode),
    #[error("the response could not be decoded: {0}")]
    DecodeFailure(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            NetworkError::DecodeFailure(error.to_string())
        } else if let Some(status) = error.status() {
            NetworkError::NonOkStatus(status)
        } else {
            NetworkError::Unreachable(error.to_string())
        }
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(error: serde_json::Error) -> Self {
        NetworkError::DecodeFailure(error.to_string())
    }
}
