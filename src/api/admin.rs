use crate::api::NetworkError;
use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallbackRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SosRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl SosRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn map_link(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Deserialize)]
struct AllDataResponse {
    #[serde(default)]
    users: Option<Vec<UserRecord>>,
    #[serde(default)]
    contacts: Option<Vec<ContactRecord>>,
    #[serde(default)]
    callbacks: Option<Vec<CallbackRecord>>,
}

/// Everything the admin view lists: registered users, collected leads and SOS alerts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub users: Vec<UserRecord>,
    pub contacts: Vec<ContactRecord>,
    pub callbacks: Vec<CallbackRecord>,
    pub sos: Vec<SosRecord>,
}

impl Dashboard {
    pub fn recent_users(&self, count: usize) -> &[UserRecord] {
        &self.users[..count.min(self.users.len())]
    }
}

/// Fetches the admin data and the SOS alerts. Missing SOS alerts do not fail the dashboard.
#[instrument(skip_all)]
pub async fn fetch_dashboard(client: &Client, config: &AppConfig) -> Result<Dashboard, NetworkError> {
    info!("📊 Loading dashboard...");
    let (all_data, sos) = tokio::join!(fetch_all_data(client, config), fetch_sos_alerts(client, config));

    let all_data = all_data.inspect_err(|e| warn!("📊 Loading dashboard... failed, {}", e))?;
    let sos = sos.unwrap_or_else(|e| {
        warn!("⚠️ SOS alerts unavailable, skipping: {}", e);
        Vec::new()
    });

    let dashboard = Dashboard {
        users: all_data.users.unwrap_or_default(),
        contacts: all_data.contacts.unwrap_or_default(),
        callbacks: all_data.callbacks.unwrap_or_default(),
        sos,
    };
    info!(
        users = dashboard.users.len(),
        contacts = dashboard.contacts.len(),
        callbacks = dashboard.callbacks.len(),
        sos = dashboard.sos.len(),
        "📊 Loading dashboard... OK"
    );
    Ok(dashboard)
}

async fn fetch_all_data(client: &Client, config: &AppConfig) -> Result<AllDataResponse, NetworkError> {
    let response = client.get(config.api().url("/api/admin/all-data")).send().await?.error_for_status()?;
    Ok(response.json::<AllDataResponse>().await?)
}

async fn fetch_sos_alerts(client: &Client, config: &AppConfig) -> Result<Vec<SosRecord>, NetworkError> {
    let response = client.get(config.api().url("/api/sos")).send().await?.error_for_status()?;
    Ok(response.json::<Option<Vec<SosRecord>>>().await?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use test_log::test;

    #[test(tokio::test)]
    async fn fetch_dashboard_combines_admin_data_and_sos_alerts() -> Result<(), NetworkError> {
        let mut server = mockito::Server::new_async().await;

        let all_data = server
            .mock("GET", "/api/admin/all-data")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/admin_all_data_response.json"))
            .create_async()
            .await;
        let sos = server
            .mock("GET", "/api/sos")
            .with_status(200)
            .with_body(r#"[{"_id": "s1", "latitude": 28.61, "longitude": 77.2, "createdAt": "2025-03-04T08:00:00Z"}]"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let dashboard = fetch_dashboard(&Client::new(), &config).await?;

        all_data.assert_async().await;
        sos.assert_async().await;
        assert_eq!(dashboard.users.len(), 2);
        assert_eq!(dashboard.contacts[0].email, None);
        assert_eq!(dashboard.contacts[0].message.as_deref(), Some("Do you cover Nashik district?"));
        assert!(dashboard.callbacks.is_empty());
        assert_eq!(
            dashboard.sos,
            vec![SosRecord {
                latitude: 28.61,
                longitude: 77.2,
                created_at: Some(Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap()),
            }]
        );
        assert_eq!(dashboard.sos[0].map_link(), "https://www.google.com/maps?q=28.61,77.2");
        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_dashboard_skips_unavailable_sos_alerts() -> Result<(), NetworkError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/admin/all-data")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/admin_all_data_response.json"))
            .create_async()
            .await;
        server.mock("GET", "/api/sos").with_status(404).create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let dashboard = fetch_dashboard(&Client::new(), &config).await?;

        assert_eq!(dashboard.users.len(), 2);
        assert!(dashboard.sos.is_empty());
        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_dashboard_fails_when_admin_data_is_unavailable() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/api/admin/all-data").with_status(500).create_async().await;
        server.mock("GET", "/api/sos").with_status(200).with_body("[]").create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let result = fetch_dashboard(&Client::new(), &config).await;

        assert_eq!(result, Err(NetworkError::NonOkStatus(StatusCode::INTERNAL_SERVER_ERROR)));
    }

    #[test(tokio::test)]
    async fn fetch_dashboard_tolerates_null_lists_and_partial_records() -> Result<(), NetworkError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/admin/all-data")
            .with_status(200)
            .with_body(r#"{"users": [{"name": "Asha"}], "contacts": null, "callbacks": [{"phone": "9876543210", "email": null}]}"#)
            .create_async()
            .await;
        server.mock("GET", "/api/sos").with_status(200).with_body("null").create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let dashboard = fetch_dashboard(&Client::new(), &config).await?;

        assert_eq!(
            dashboard.users,
            vec![UserRecord {
                name: Some("Asha".to_string()),
                email: None,
                created_at: None,
            }]
        );
        assert!(dashboard.contacts.is_empty());
        assert_eq!(
            dashboard.callbacks,
            vec![CallbackRecord {
                name: None,
                phone: Some("9876543210".to_string()),
                created_at: None,
            }]
        );
        assert!(dashboard.sos.is_empty());
        Ok(())
    }

    #[test]
    fn recent_users_caps_the_list() {
        let user = UserRecord {
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            created_at: None,
        };
        let dashboard = Dashboard {
            users: vec![user; 7],
            ..Dashboard::default()
        };

        assert_eq!(dashboard.recent_users(5).len(), 5);
        assert_eq!(Dashboard::default().recent_users(5).len(), 0);
    }
}
