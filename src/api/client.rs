use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ApiClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&user_agent)?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.api().request_timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
