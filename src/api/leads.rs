use crate::api::NetworkError;
use crate::app_config::AppConfig;
use crate::domain::{CallbackRequest, ContactRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const CALLBACK_SUBMITTED: &str = "Your request has been submitted. We will call you shortly!";
pub const CONTACT_SUBMITTED: &str = "Your request has been submitted successfully!";

#[derive(Error, Debug, PartialEq)]
pub enum LeadError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("the request was rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl LeadError {
    pub fn user_message(&self) -> &str {
        match self {
            LeadError::MissingFields => "Please fill all fields",
            LeadError::Rejected(Some(msg)) => msg,
            LeadError::Rejected(None) => "Error submitting request",
            LeadError::Network(_) => "Server error. Please try again later.",
        }
    }
}

#[derive(Debug, Deserialize)]
struct LeadResponse {
    msg: Option<String>,
}

/// Asks the backend to call the submitter back. The request is cleared once accepted.
#[instrument(skip_all)]
pub async fn submit_callback(client: &Client, config: &AppConfig, request: &mut CallbackRequest) -> Result<&'static str, LeadError> {
    if !request.is_complete() {
        return Err(LeadError::MissingFields);
    }

    post_lead(client, config, "/api/callback/request", request).await?;
    request.clear();
    Ok(CALLBACK_SUBMITTED)
}

#[instrument(skip_all)]
pub async fn submit_contact(client: &Client, config: &AppConfig, request: &mut ContactRequest) -> Result<&'static str, LeadError> {
    if !request.is_complete() {
        return Err(LeadError::MissingFields);
    }

    post_lead(client, config, "/api/contact/request", request).await?;
    *request = ContactRequest::default();
    Ok(CONTACT_SUBMITTED)
}

async fn post_lead<T: Serialize>(client: &Client, config: &AppConfig, path: &str, body: &T) -> Result<(), LeadError> {
    info!("📝 Submitting {}...", path);
    let response = client.post(config.api().url(path)).json(body).send().await.map_err(NetworkError::from)?;

    let status = response.status();
    let text = response.text().await.map_err(NetworkError::from)?;

    if status.is_success() {
        info!(status = %status, "📝 Submitting {}... OK", path);
        return Ok(());
    }

    let lead_response = serde_json::from_str::<LeadResponse>(&text).map_err(NetworkError::from)?;
    warn!(status = %status, "📝 Submitting {}... failed, {:?}", path, lead_response.msg);
    Err(LeadError::Rejected(lead_response.msg))
}
