use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::model::{Location, LocationSource};

/// Why a location could not be acquired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    Unavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn locate(&self) -> Result<Location, LocationError>;
}

/// Always answers with the same location, e.g. coordinates passed on the command line.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Location, LocationError> {
        Ok(self.0.clone())
    }
}

/// A provider with nothing to offer; callers end up on their default location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn locate(&self) -> Result<Location, LocationError> {
        Err(LocationError::Unavailable)
    }
}

/// Ask `provider` for a location, giving up after `timeout` and falling back to `default`.
pub async fn resolve_location(
    provider: &dyn LocationProvider,
    default: &Location,
    timeout: Duration,
) -> (Location, LocationSource) {
    let outcome = match tokio::time::timeout(timeout, provider.locate()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    };

    match outcome {
        Ok(location) => {
            tracing::debug!(
                latitude = location.latitude,
                longitude = location.longitude,
                "location acquired"
            );
            (location, LocationSource::Detected)
        }
        Err(err) => {
            tracing::warn!("{err}; using default location");
            (default.clone(), LocationSource::Default)
        }
    }
}
