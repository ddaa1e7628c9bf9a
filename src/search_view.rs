use crate::discovery::NearbySearch;
use crate::domain::{ResourceKind, ResourceResult, VoiceIntent};
use crate::intent::Recognition;

pub const VOICE_PROMPT: &str = "Say: 'Ambulance' or 'Hospital'";
pub const VOICE_RETRY: &str = "Please say 'Ambulance' or 'Hospital'";

/// What the user currently sees: at most one list of nearby resources and the voice status line.
/// The last completed search wins, it replaces its own list and clears the other one.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchView {
    hospitals: Vec<ResourceResult>,
    ambulances: Vec<ResourceResult>,
    voice_status: String,
    max_results: usize,
}

impl SearchView {
    pub fn new(max_results: usize) -> Self {
        SearchView {
            hospitals: Vec::new(),
            ambulances: Vec::new(),
            voice_status: VOICE_PROMPT.to_string(),
            max_results,
        }
    }

    pub fn apply(&mut self, search: NearbySearch) {
        match search.kind {
            ResourceKind::Hospital => {
                self.hospitals = search.results;
                self.ambulances.clear();
            }
            ResourceKind::Ambulance => {
                self.ambulances = search.results;
                self.hospitals.clear();
            }
        }
    }

    pub fn heard(&mut self, recognition: &Recognition) {
        self.voice_status = match recognition.intent {
            VoiceIntent::Unrecognized(_) => VOICE_RETRY.to_string(),
            _ => format!("You said: {}", recognition.transcript.to_lowercase()),
        };
    }

    pub fn voice_status(&self) -> &str {
        &self.voice_status
    }

    /// The entries of `kind` to display, capped at the configured maximum.
    pub fn visible(&self, kind: ResourceKind) -> &[ResourceResult] {
        let list = match kind {
            ResourceKind::Hospital => &self.hospitals,
            ResourceKind::Ambulance => &self.ambulances,
        };
        &list[..self.max_results.min(list.len())]
    }
}
