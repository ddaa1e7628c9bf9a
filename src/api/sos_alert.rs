use crate::api::NetworkError;
use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use reqwest::Client;
use tracing::{info, instrument};

/// Records an SOS alert at `coordinates`. The response body is not inspected.
#[instrument(skip(client, config))]
pub async fn send_sos_alert(client: &Client, config: &AppConfig, coordinates: Coordinates) -> Result<(), NetworkError> {
    info!("🚨 Sending SOS alert...");
    let response = client.post(config.api().url("/api/sos")).json(&coordinates).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::NonOkStatus(status));
    }

    info!(status = %status, "🚨 Sending SOS alert... OK");
    Ok(())
}
