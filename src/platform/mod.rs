mod console;

use crate::domain::Coordinates;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub use console::{ConfiguredPosition, ConsoleDialer, PromptRecognizer};

/// The device's one-shot position request primitive.
#[async_trait]
pub trait PositionSource: Debug + Send + Sync {
    fn is_supported(&self) -> bool;

    async fn current_position(&self) -> Result<Coordinates, PositionFailure>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionFailure {
    #[error("permission to access the location was denied")]
    PermissionDenied,
    #[error("the position is unavailable: {0}")]
    Unavailable(String),
}

/// The device's one-shot speech capture primitive.
#[async_trait]
pub trait SpeechRecognizer: Debug + Send + Sync {
    /// Resolves with the first final transcript of a capture session in `locale`.
    async fn capture(&self, locale: &str) -> Result<String, CaptureFailure>;
}

#[derive(Error, Debug, PartialEq)]
#[error("speech capture failed: {0}")]
pub struct CaptureFailure(pub String);

/// Opens the device dialer. This is a one-way navigation that cannot be undone.
pub trait Dialer: Debug + Send + Sync {
    fn dial(&self, uri: &str) -> Result<(), DialFailure>;
}

#[derive(Error, Debug, PartialEq)]
#[error("unable to open '{uri}': {reason}")]
pub struct DialFailure {
    pub uri: String,
    pub reason: String,
}
