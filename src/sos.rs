use crate::api::{NetworkError, send_sos_alert};
use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use crate::geolocation::{GeoError, acquire_location};
use crate::platform::{Dialer, PositionSource};
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum SosState {
    Idle,
    AcquiringLocation,
    SendingAlert(Coordinates),
    DialerLaunched(AlertDelivery),
    Done(AlertDelivery),
    Failed(SosFailure),
}

impl SosState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SosState::Done(_) | SosState::Failed(_))
    }

    fn can_advance_to(&self, next: &SosState) -> bool {
        use SosState::*;
        match (self, next) {
            (_, Failed(_)) => !self.is_terminal(),
            (Idle, AcquiringLocation) => true,
            (AcquiringLocation, SendingAlert(_)) => true,
            (SendingAlert(_), DialerLaunched(_)) => true,
            (DialerLaunched(_), Done(_)) => true,
            _ => false,
        }
    }
}

/// Whether the backend recorded the alert. The call is placed either way.
#[derive(Clone, Debug, PartialEq)]
pub enum AlertDelivery {
    Delivered,
    NotDelivered(NetworkError),
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum SosFailure {
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl SosFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            SosFailure::Geo(GeoError::Unsupported) => "Geolocation is not supported by your browser.",
            SosFailure::Geo(GeoError::Denied) => "Failed to get location. Please enable GPS.",
            SosFailure::Unknown(_) => "Error sending SOS alert. Try again!",
        }
    }
}

/// The states one SOS run went through, in order, starting at [`SosState::Idle`].
#[derive(Clone, Debug, PartialEq)]
pub struct SosReport {
    trail: Vec<SosState>,
}

impl SosReport {
    fn new() -> Self {
        SosReport { trail: vec![SosState::Idle] }
    }

    fn advance(&mut self, next: SosState) {
        let current = self.state();
        debug_assert!(current.can_advance_to(&next), "illegal SOS transition {:?} -> {:?}", current, next);
        debug!(from = ?current, to = ?next, "🚨 SOS transition");
        self.trail.push(next);
    }

    pub fn state(&self) -> &SosState {
        // The trail starts at Idle and only grows.
        &self.trail[self.trail.len() - 1]
    }

    pub fn trail(&self) -> &[SosState] {
        &self.trail
    }

    pub fn dialer_launched(&self) -> bool {
        self.trail.iter().any(|state| matches!(state, SosState::DialerLaunched(_)))
    }

    pub fn user_message(&self) -> &'static str {
        match self.state() {
            SosState::Done(AlertDelivery::Delivered) => "📍 Location sent and emergency call initiated!",
            SosState::Done(AlertDelivery::NotDelivered(_)) => "📞 Emergency call initiated, but your location could not be sent.",
            SosState::Failed(failure) => failure.user_message(),
            _ => "SOS alert in progress...",
        }
    }
}

/// Runs the SOS sequence: acquire the location, post the alert, then open the dialer.
/// The dialer is opened once the post has settled, whatever its outcome. Runs are independent
/// of each other, triggering twice runs two sequences.
#[derive(Debug, Clone)]
pub struct SosDispatcher {
    client: Client,
    config: Arc<AppConfig>,
    position: Arc<dyn PositionSource>,
    dialer: Arc<dyn Dialer>,
}

impl SosDispatcher {
    pub fn new(client: Client, config: Arc<AppConfig>, position: Arc<dyn PositionSource>, dialer: Arc<dyn Dialer>) -> Self {
        SosDispatcher {
            client,
            config,
            position,
            dialer,
        }
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self) -> SosReport {
        let mut report = SosReport::new();
        info!("🚨 Dispatching SOS...");

        report.advance(SosState::AcquiringLocation);
        let coordinates = match acquire_location(self.position.as_ref(), self.config.geolocation().timeout()).await {
            Ok(coordinates) => coordinates,
            Err(error) => {
                warn!("🚨 Dispatching SOS... failed, {}", error);
                report.advance(SosState::Failed(error.into()));
                return report;
            }
        };

        report.advance(SosState::SendingAlert(coordinates));
        let delivery = match send_sos_alert(&self.client, &self.config, coordinates).await {
            Ok(()) => AlertDelivery::Delivered,
            Err(error) => {
                warn!("⚠️ SOS alert was not delivered, calling anyway: {}", error);
                AlertDelivery::NotDelivered(error)
            }
        };

        let uri = self.config.sos().dialer_uri();
        if let Err(failure) = self.dialer.dial(&uri) {
            error!("🚨 Dispatching SOS... failed, {}", failure);
            report.advance(SosState::Failed(SosFailure::Unknown(failure.to_string())));
            return report;
        }
        report.advance(SosState::DialerLaunched(delivery.clone()));

        report.advance(SosState::Done(delivery));
        info!("🚨 Dispatching SOS... OK");
        report
    }
}
