use crate::api::fetch_nearby;
use crate::app_config::AppConfig;
use crate::domain::{Coordinates, ResourceKind, ResourceResult, VoiceIntent};
use crate::geolocation::{GeoError, acquire_location};
use crate::intent::{Recognition, RecognitionError, recognize_intent};
use crate::platform::{PositionSource, SpeechRecognizer};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, instrument};

/// The outcome of one completed nearby search, owned by whoever issued it.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbySearch {
    pub kind: ResourceKind,
    pub coordinates: Coordinates,
    pub results: Vec<ResourceResult>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VoiceOutcome {
    Searched {
        recognition: Recognition,
        search: Result<NearbySearch, GeoError>,
    },
    Unrecognized(Recognition),
}

impl VoiceOutcome {
    pub fn recognition(&self) -> &Recognition {
        match self {
            VoiceOutcome::Searched { recognition, .. } => recognition,
            VoiceOutcome::Unrecognized(recognition) => recognition,
        }
    }
}

/// Finds hospitals and ambulances around the device, from a button or a spoken request.
#[derive(Debug, Clone)]
pub struct Discovery {
    client: Client,
    config: Arc<AppConfig>,
    position: Arc<dyn PositionSource>,
    speech: Arc<dyn SpeechRecognizer>,
}

impl Discovery {
    pub fn new(client: Client, config: Arc<AppConfig>, position: Arc<dyn PositionSource>, speech: Arc<dyn SpeechRecognizer>) -> Self {
        Discovery {
            client,
            config,
            position,
            speech,
        }
    }

    #[instrument(skip(self))]
    pub async fn search_nearby(&self, kind: ResourceKind) -> Result<NearbySearch, GeoError> {
        let coordinates = acquire_location(self.position.as_ref(), self.config.geolocation().timeout()).await?;
        let results = fetch_nearby(&self.client, &self.config, kind, coordinates).await;

        Ok(NearbySearch { kind, coordinates, results })
    }

    #[instrument(skip(self))]
    pub async fn voice_search(&self) -> Result<VoiceOutcome, RecognitionError> {
        let voice = self.config.voice();
        let recognition = recognize_intent(self.speech.as_ref(), voice.locale(), voice.timeout()).await?;

        let kind = match recognition.intent {
            VoiceIntent::Ambulance => ResourceKind::Ambulance,
            VoiceIntent::Hospital => ResourceKind::Hospital,
            VoiceIntent::Unrecognized(_) => {
                info!("🎤 Nothing to search for in '{}'", recognition.transcript);
                return Ok(VoiceOutcome::Unrecognized(recognition));
            }
        };

        let search = self.search_nearby(kind).await;
        Ok(VoiceOutcome::Searched { recognition, search })
    }
}
