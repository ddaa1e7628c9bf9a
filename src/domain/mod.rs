mod callback_request;
mod coordinates;
mod credentials;
mod resource;
mod voice_intent;

pub use callback_request::{CallbackRequest, ContactRequest};
pub use coordinates::Coordinates;
pub use credentials::{LoginRequest, SignupRequest};
pub use resource::{ResourceKind, ResourceResult};
pub use voice_intent::VoiceIntent;
