use crate::api::NetworkError;
use crate::app_config::AppConfig;
use crate::domain::{LoginRequest, SignupRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("authentication was rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl AuthError {
    pub fn user_message(&self) -> &str {
        match self {
            AuthError::MissingFields => "Please fill all fields",
            AuthError::Rejected(Some(msg)) => msg,
            AuthError::Rejected(None) => "Error occurred",
            AuthError::Network(_) => "Server error. Try again later.",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The token handed out by the backend for authenticated requests, with the account it belongs to.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    pub fn signed_up_message(&self) -> String {
        format!("Signup successful for {}", self.user.name.as_deref().unwrap_or_default())
    }

    pub fn logged_in_message(&self) -> String {
        format!("Login successful for {}", self.user.email.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct RejectionResponse {
    msg: Option<String>,
}

/// Registers an account. The form is cleared once the backend accepts it.
#[instrument(skip_all)]
pub async fn signup(client: &Client, config: &AppConfig, request: &mut SignupRequest) -> Result<Session, AuthError> {
    if !request.is_complete() {
        return Err(AuthError::MissingFields);
    }

    let session = authenticate(client, config, "/api/auth/register", request).await?;
    *request = SignupRequest::default();
    Ok(session)
}

#[instrument(skip_all)]
pub async fn login(client: &Client, config: &AppConfig, request: &mut LoginRequest) -> Result<Session, AuthError> {
    if !request.is_complete() {
        return Err(AuthError::MissingFields);
    }

    let session = authenticate(client, config, "/api/auth/login", request).await?;
    *request = LoginRequest::default();
    Ok(session)
}

async fn authenticate<T: Serialize>(client: &Client, config: &AppConfig, path: &str, body: &T) -> Result<Session, AuthError> {
    info!("🔑 Authenticating with {}...", path);
    let response = client.post(config.api().url(path)).json(body).send().await.map_err(NetworkError::from)?;

    let status = response.status();
    let text = response.text().await.map_err(NetworkError::from)?;

    if !status.is_success() {
        let rejection = serde_json::from_str::<RejectionResponse>(&text).map_err(NetworkError::from)?;
        warn!(status = %status, "🔑 Authenticating with {}... failed, {:?}", path, rejection.msg);
        return Err(AuthError::Rejected(rejection.msg));
    }

    let session = serde_json::from_str::<Session>(&text).map_err(NetworkError::from)?;
    info!(status = %status, "🔑 Authenticating with {}... OK", path);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            name: "Asha Patil".to_string(),
            email: "asha@example.com".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn signup_registers_and_clears_the_form() -> Result<(), AuthError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::Json(json!({ "name": "Asha Patil", "email": "asha@example.com", "password": "s3cret" })))
            .with_status(201)
            .with_body(r#"{"token": "jwt-token", "user": {"_id": "u1", "name": "Asha Patil", "email": "asha@example.com"}}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let mut request = signup_request();
        let session = signup(&Client::new(), &config, &mut request).await?;

        mock.assert_async().await;
        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.signed_up_message(), "Signup successful for Asha Patil");
        assert_eq!(request, SignupRequest::default());
        Ok(())
    }

    #[tokio::test]
    async fn login_posts_only_email_and_password() -> Result<(), AuthError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(json!({ "email": "asha@example.com", "password": "s3cret" })))
            .with_status(200)
            .with_body(r#"{"token": "jwt-token", "user": {"email": "asha@example.com"}}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let mut request = LoginRequest {
            email: "asha@example.com".to_string(),
            password: "s3cret".to_string(),
        };
        let session = login(&Client::new(), &config, &mut request).await?;

        mock.assert_async().await;
        assert_eq!(session.logged_in_message(), "Login successful for asha@example.com");
        assert_eq!(request, LoginRequest::default());
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_missing_fields_without_calling_the_backend() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("POST", "/api/auth/login").expect(0).create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let mut request = LoginRequest {
            email: "asha@example.com".to_string(),
            password: String::new(),
        };
        let result = login(&Client::new(), &config, &mut request).await;

        mock.assert_async().await;
        assert_eq!(result, Err(AuthError::MissingFields));
    }

    #[tokio::test]
    async fn login_surfaces_the_server_message() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"msg": "Invalid credentials"}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let mut request = LoginRequest {
            email: "asha@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let error = login(&Client::new(), &config, &mut request).await.unwrap_err();

        assert_eq!(error.user_message(), "Invalid credentials");
        assert_eq!(request.password, "wrong");
    }

    #[tokio::test]
    async fn signup_falls_back_to_a_generic_message() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", "/api/auth/register").with_status(400).with_body("{}").create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let error = signup(&Client::new(), &config, &mut signup_request()).await.unwrap_err();

        assert_eq!(error, AuthError::Rejected(None));
        assert_eq!(error.user_message(), "Error occurred");
    }

    #[tokio::test]
    async fn signup_reports_a_server_error_for_a_success_without_a_session() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", "/api/auth/register").with_status(200).with_body(r#"{"msg": "ok"}"#).create_async().await;

        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let error = signup(&Client::new(), &config, &mut signup_request()).await.unwrap_err();

        assert!(matches!(error, AuthError::Network(NetworkError::DecodeFailure(_))));
        assert_eq!(error.user_message(), "Server error. Try again later.");
    }
}
