use crate::domain::Coordinates;
use crate::platform::{CaptureFailure, DialFailure, Dialer, PositionFailure, PositionSource, SpeechRecognizer};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Reports a position fixed in the configuration. Without one the capability is absent.
#[derive(Debug)]
pub struct ConfiguredPosition {
    position: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn new(position: Option<Coordinates>) -> Self {
        ConfiguredPosition { position }
    }
}

#[async_trait]
impl PositionSource for ConfiguredPosition {
    fn is_supported(&self) -> bool {
        self.position.is_some()
    }

    async fn current_position(&self) -> Result<Coordinates, PositionFailure> {
        self.position.ok_or_else(|| PositionFailure::Unavailable("no position configured".to_string()))
    }
}

/// Uses a transcript given up front, or reads one line from stdin.
#[derive(Debug)]
pub struct PromptRecognizer {
    transcript: Option<String>,
}

impl PromptRecognizer {
    pub fn new(transcript: Option<String>) -> Self {
        PromptRecognizer { transcript }
    }
}

#[async_trait]
impl SpeechRecognizer for PromptRecognizer {
    async fn capture(&self, locale: &str) -> Result<String, CaptureFailure> {
        if let Some(transcript) = &self.transcript {
            return Ok(transcript.clone());
        }

        println!("🎤 Speak your need ({}):", locale);
        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|e| CaptureFailure(e.to_string()))?;

        if read == 0 {
            return Err(CaptureFailure("no speech detected".to_string()));
        }

        Ok(line.trim().to_string())
    }
}

#[derive(Debug, Default)]
pub struct ConsoleDialer;

impl Dialer for ConsoleDialer {
    fn dial(&self, uri: &str) -> Result<(), DialFailure> {
        if !uri.starts_with("tel:") {
            return Err(DialFailure {
                uri: uri.to_string(),
                reason: "not a tel: uri".to_string(),
            });
        }

        info!("📞 Opening dialer for {}", uri);
        println!("📞 Calling {}", uri.trim_start_matches("tel:"));
        Ok(())
    }
}
