use crate::api::NetworkError;
use crate::api::places_response::PlacesResponse;
use crate::app_config::AppConfig;
use crate::domain::{Coordinates, ResourceKind, ResourceResult};
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Searches for resources of `kind` near `coordinates`. Any failure is logged and yields an
/// empty list, the complete upstream list is returned otherwise, in upstream order.
#[instrument(skip(client, config))]
pub async fn fetch_nearby(client: &Client, config: &AppConfig, kind: ResourceKind, coordinates: Coordinates) -> Vec<ResourceResult> {
    info!("🔎 Searching nearby {}s...", kind);
    match try_fetch_nearby(client, config, kind, coordinates).await {
        Ok(results) => {
            info!("🔎 Searching nearby {}s... OK, {} found", kind, results.len());
            results
        }
        Err(error) => {
            warn!("⚠️ Searching nearby {}s... failed, {}", kind, error);
            Vec::new()
        }
    }
}

pub async fn try_fetch_nearby(
    client: &Client,
    config: &AppConfig,
    kind: ResourceKind,
    coordinates: Coordinates,
) -> Result<Vec<ResourceResult>, NetworkError> {
    let response = client
        .get(config.api().url(kind.endpoint()))
        .query(&[("lat", coordinates.latitude), ("lng", coordinates.longitude)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::NonOkStatus(status));
    }

    let places = response.json::<PlacesResponse>().await?;
    let results = places
        .results
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, place)| match ResourceResult::try_from(place) {
            Ok(result) => Some(result),
            Err(error) => {
                warn!(index, "⚠️ Skipping malformed {} entry: {}", kind, error);
                None
            }
        })
        .collect::<Vec<ResourceResult>>();

    Ok(results)
}
