use crate::domain::VoiceIntent;
use crate::platform::SpeechRecognizer;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("no speech was recognized within {0:?}")]
    TimedOut(Duration),
    #[error("speech recognition is unavailable: {0}")]
    Unavailable(String),
}

impl RecognitionError {
    pub fn user_message(&self) -> &'static str {
        "Sorry, we could not hear you. Please say 'Ambulance' or 'Hospital'"
    }
}

/// A recognized utterance together with its classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Recognition {
    pub transcript: String,
    pub intent: VoiceIntent,
}

/// Runs one capture session in `locale` and classifies its first final transcript.
#[instrument(skip(recognizer))]
pub async fn recognize_intent(recognizer: &dyn SpeechRecognizer, locale: &str, deadline: Duration) -> Result<Recognition, RecognitionError> {
    info!("🎤 Listening...");
    let transcript = match timeout(deadline, recognizer.capture(locale)).await {
        Ok(Ok(transcript)) => transcript,
        Ok(Err(failure)) => {
            warn!("🎤 Listening... failed, {}", failure);
            return Err(RecognitionError::Unavailable(failure.0));
        }
        Err(_) => {
            warn!("🎤 Listening... failed, nothing heard within {:?}", deadline);
            return Err(RecognitionError::TimedOut(deadline));
        }
    };

    let intent = VoiceIntent::classify(&transcript);
    info!(transcript = %transcript, ?intent, "🎤 Listening... OK");

    Ok(Recognition { transcript, intent })
}
