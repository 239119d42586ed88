// Core trait definitions for service layer dependency injection
//
// Every service the orchestrator talks to sits behind one of these traits so
// tests can swap in mockall mocks or fresh mock stores. All traits are
// Send + Sync to live behind Arc on the tokio runtime.

use crate::error::Result;
use crate::model::{CareInstructions, Geolocation, NewPetListing, Pet, PetType, SearchFilters, User};
use crate::services::pets::LatencyProfile;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Pet and user data access
///
/// Mirrors a remote marketplace API: every call is async and may take a
/// while, and returned pets are snapshots decorated with a per-call distance.
///
/// Usage:
///     let pets: Arc<dyn PetService> =
///         Arc::new(InMemoryPetService::seeded(LatencyProfile::reference()));
///     let nearby = pets.get_nearby_pets().await?;
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PetService: Send + Sync {
    /// All listings, each with a fresh distance in miles
    async fn get_nearby_pets(&self) -> Result<Vec<Pet>>;

    /// Listings whose name, breed or type contains `query` (case-insensitive)
    ///
    /// Unknown filter keys are accepted and ignored.
    async fn search_pets(&self, query: &str, filters: &SearchFilters) -> Result<Vec<Pet>>;

    /// The signed-in user's profile
    async fn get_user_profile(&self) -> Result<User>;

    /// Create a listing owned by the current user
    ///
    /// # Errors
    /// - InvariantViolation if no id can be assigned
    async fn add_pet_listing(&self, listing: NewPetListing) -> Result<Pet>;

    /// Look up a single listing
    ///
    /// # Errors
    /// - NotFound if no pet has this id
    async fn get_pet(&self, id: u64) -> Result<Pet>;
}

/// Why the host failed to report a position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timed out")]
    Timeout,
}

/// Host-provided "current position" capability
///
/// One call, one answer. Implementations must not retry internally.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> std::result::Result<Geolocation, PositionError>;
}

/// Resolves the user's location for the load cycle
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationService: Send + Sync {
    /// # Errors
    /// - LocationUnavailable when the host has no capability
    /// - LocationDenied when permission was refused
    /// - LocationError for any other capability failure
    async fn get_user_location(&self) -> Result<Geolocation>;
}

/// AI assistance for the sell form
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PetTextGenerator: Send + Sync {
    /// Marketing description
    ///
    /// Under the default policy this never errors: failures come back as a
    /// fixed message string.
    async fn generate_pet_description(&self, name: &str, breed: &str, age: u32) -> Result<String>;

    /// Structured care instructions
    ///
    /// # Errors
    /// - CareGenerationFailed on call failure or unparseable output
    async fn generate_care_instructions(
        &self,
        breed: &str,
        pet_type: PetType,
    ) -> Result<CareInstructions>;
}

/// Configuration service for application settings
///
/// Loaded once at startup; all accessors are cheap.
#[cfg_attr(test, automock)]
pub trait ConfigService: Send + Sync {
    /// Generative API credential, if configured
    fn get_api_key(&self) -> Option<String>;

    /// Generative model identifier
    fn get_model(&self) -> String;

    /// Simulated latency for the mock pet service
    fn get_latency(&self) -> LatencyProfile;

    /// Coordinates the host reports, if it has a location capability
    fn get_position(&self) -> Option<Geolocation>;
}
