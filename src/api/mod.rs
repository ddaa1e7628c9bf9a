mod admin;
mod auth;
mod client;
mod leads;
mod nearby;
mod network_error;
mod places_response;
mod sos_alert;

pub use admin::{Dashboard, fetch_dashboard};
pub use auth::{login, signup};
pub use client::new_client;
pub use leads::{submit_callback, submit_contact};
pub use nearby::fetch_nearby;
pub use network_error::NetworkError;
pub use sos_alert::send_sos_alert;
