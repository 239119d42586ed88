// Location service over the host's geolocation capability
//
// The capability itself is the GeolocationProvider port. A host without one
// is modelled as `None`, which is a different failure from a provider that
// exists but refuses.

use super::traits::{GeolocationProvider, LocationService, PositionError};
use crate::error::{PetConnectError, Result};
use crate::model::Geolocation;
use async_trait::async_trait;
use std::sync::Arc;

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";
pub const RETRIEVAL_FAILED_MESSAGE: &str =
    "Unable to retrieve your location. Please enable location services.";

/// LocationService that asks an optional host provider exactly once per call
pub struct HostLocationService {
    provider: Option<Arc<dyn GeolocationProvider>>,
}

impl HostLocationService {
    pub fn new(provider: Arc<dyn GeolocationProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A host with no location capability at all
    pub fn unsupported() -> Self {
        Self { provider: None }
    }
}

#[async_trait]
impl LocationService for HostLocationService {
    async fn get_user_location(&self) -> Result<Geolocation> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| PetConnectError::LocationUnavailable(UNSUPPORTED_MESSAGE.to_string()))?;

        match provider.current_position().await {
            Ok(position) => {
                tracing::debug!(
                    "Position resolved: {:.4}, {:.4}",
                    position.latitude,
                    position.longitude
                );
                Ok(position)
            }
            Err(PositionError::PermissionDenied) => {
                tracing::warn!("Location permission denied");
                Err(PetConnectError::LocationDenied(RETRIEVAL_FAILED_MESSAGE.to_string()))
            }
            Err(e) => {
                tracing::warn!("Location lookup failed: {}", e);
                Err(PetConnectError::LocationError(RETRIEVAL_FAILED_MESSAGE.to_string()))
            }
        }
    }
}

/// Provider that always reports the same coordinates
pub struct FixedPositionProvider {
    position: Geolocation,
}

impl FixedPositionProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Geolocation {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl GeolocationProvider for FixedPositionProvider {
    async fn current_position(&self) -> std::result::Result<Geolocation, PositionError> {
        Ok(self.position)
    }
}

/// Provider standing in for a user who declined the permission prompt
pub struct DeniedPositionProvider;

#[async_trait]
impl GeolocationProvider for DeniedPositionProvider {
    async fn current_position(&self) -> std::result::Result<Geolocation, PositionError> {
        Err(PositionError::PermissionDenied)
    }
}
