/// The classified meaning of a single utterance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceIntent {
    Ambulance,
    Hospital,
    Unrecognized(String),
}

impl VoiceIntent {
    /// Case-insensitive keyword match, "ambulance" takes priority over "hospital".
    pub fn classify(transcript: &str) -> Self {
        let lowercase = transcript.to_lowercase();
        if lowercase.contains("ambulance") {
            VoiceIntent::Ambulance
        } else if lowercase.contains("hospital") {
            VoiceIntent::Hospital
        } else {
            VoiceIntent::Unrecognized(transcript.to_string())
        }
    }
}
