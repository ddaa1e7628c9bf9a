use crate::domain::Coordinates;
use crate::platform::PositionSource;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("location access was denied or failed")]
    Denied,
}

impl GeoError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Unsupported => "Geolocation is not supported in your browser.",
            GeoError::Denied => "Please allow location access!",
        }
    }
}

/// Issues exactly one position request. A failure or an elapsed `deadline` is reported as
/// [`GeoError::Denied`], the caller re-invokes on a fresh user action.
#[instrument(skip(source))]
pub async fn acquire_location(source: &dyn PositionSource, deadline: Duration) -> Result<Coordinates, GeoError> {
    if !source.is_supported() {
        warn!("📍 Acquiring location... failed, geolocation is not supported");
        return Err(GeoError::Unsupported);
    }

    info!("📍 Acquiring location...");
    match timeout(deadline, source.current_position()).await {
        Ok(Ok(coordinates)) => {
            info!(latitude = coordinates.latitude, longitude = coordinates.longitude, "📍 Acquiring location... OK");
            Ok(coordinates)
        }
        Ok(Err(failure)) => {
            warn!("📍 Acquiring location... failed, {}", failure);
            Err(GeoError::Denied)
        }
        Err(_) => {
            warn!("📍 Acquiring location... failed, no position within {:?}", deadline);
            Err(GeoError::Denied)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::platform::PositionFailure;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_log::test;

    #[derive(Debug)]
    pub(crate) enum FakePosition {
        Unsupported,
        Fix(Coordinates),
        Fail(PositionFailure),
        Hang,
    }

    #[derive(Debug)]
    pub(crate) struct FakePositionSource {
        behavior: FakePosition,
        requests: AtomicUsize,
    }

    impl FakePositionSource {
        pub(crate) fn new(behavior: FakePosition) -> Self {
            FakePositionSource {
                behavior,
                requests: AtomicUsize::new(0),
            }
        }

        pub(crate) fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PositionSource for FakePositionSource {
        fn is_supported(&self) -> bool {
            !matches!(self.behavior, FakePosition::Unsupported)
        }

        async fn current_position(&self) -> Result<Coordinates, PositionFailure> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                FakePosition::Fix(coordinates) => Ok(*coordinates),
                FakePosition::Fail(failure) => Err(failure.clone()),
                FakePosition::Hang => std::future::pending().await,
                FakePosition::Unsupported => unreachable!("position requested without capability"),
            }
        }
    }

    #[test(tokio::test)]
    async fn acquire_location_returns_the_position_fix() {
        let source = FakePositionSource::new(FakePosition::Fix(Coordinates::new(28.61, 77.20)));

        let result = acquire_location(&source, Duration::from_secs(1)).await;

        assert_eq!(result, Ok(Coordinates::new(28.61, 77.20)));
        assert_eq!(source.requests(), 1);
    }

    #[test(tokio::test)]
    async fn acquire_location_fails_without_requesting_when_unsupported() {
        let source = FakePositionSource::new(FakePosition::Unsupported);

        let result = acquire_location(&source, Duration::from_secs(1)).await;

        assert_eq!(result, Err(GeoError::Unsupported));
        assert_eq!(source.requests(), 0);
    }

    #[test(tokio::test)]
    async fn acquire_location_maps_a_denial_to_denied() {
        let source = FakePositionSource::new(FakePosition::Fail(PositionFailure::PermissionDenied));

        assert_eq!(acquire_location(&source, Duration::from_secs(1)).await, Err(GeoError::Denied));
    }

    #[test(tokio::test)]
    async fn acquire_location_maps_a_hardware_failure_to_denied() {
        let source = FakePositionSource::new(FakePosition::Fail(PositionFailure::Unavailable("no fix".to_string())));

        assert_eq!(acquire_location(&source, Duration::from_secs(1)).await, Err(GeoError::Denied));
    }

    #[tokio::test(start_paused = true)]
    async fn acquire_location_gives_up_after_the_deadline() {
        let source = FakePositionSource::new(FakePosition::Hang);

        let result = acquire_location(&source, Duration::from_secs(10)).await;

        assert_eq!(result, Err(GeoError::Denied));
        assert_eq!(source.requests(), 1);
    }
}
