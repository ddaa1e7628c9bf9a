use crate::domain::Coordinates;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    geolocation: Geolocation,
    voice: Voice,
    #[serde(default)]
    sos: Sos,
    #[serde(default)]
    display: Display,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("SEHAT").separator("__"));

        Self::from_builder(builder, env::var(API_BASE_URL_ENV).ok())
    }

    /// Builds the configuration, `base_url_override` replaces `api.base_url` when set.
    fn from_builder(builder: ConfigBuilder<DefaultState>, base_url_override: Option<String>) -> Result<Self, ConfigError> {
        builder
            .set_override_option("api.base_url", base_url_override)?
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn geolocation(&self) -> &Geolocation {
        &self.geolocation
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn sos(&self) -> &Sos {
        &self.sos
    }

    pub fn display(&self) -> &Display {
        &self.display
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Api {
    /// The base url without a trailing slash, so endpoint paths can be appended.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

#[derive(Debug, Deserialize)]
pub struct Geolocation {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    #[serde(default)]
    position: Option<Coordinates>,
}

impl Geolocation {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The fixed position reported by the console position source, if any.
    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }
}

#[derive(Debug, Deserialize)]
pub struct Voice {
    #[serde(default = "default_locale")]
    locale: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Voice {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn default_locale() -> String {
    "en-IN".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Sos {
    #[serde(default = "default_emergency_number")]
    emergency_number: String,
}

impl Sos {
    pub fn dialer_uri(&self) -> String {
        format!("tel:{}", self.emergency_number)
    }
}

fn default_emergency_number() -> String {
    "108".to_string()
}

impl Default for Sos {
    fn default() -> Self {
        Sos {
            emergency_number: default_emergency_number(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    max_results: usize,
}

impl Default for Display {
    fn default() -> Self {
        Display { max_results: 5 }
    }
}

impl Display {
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    base_url: "http://localhost:5000".to_string(),
                    request_timeout: Duration::from_secs(5),
                },
                geolocation: Geolocation {
                    timeout: Duration::from_secs(1),
                    position: Some(Coordinates::new(28.61, 77.20)),
                },
                voice: Voice {
                    locale: default_locale(),
                    timeout: Duration::from_secs(1),
                },
                sos: Sos::default(),
                display: Display::default(),
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.api.base_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
