// Service layer for dependency injection and testability
//
// Traits in `traits` are the ports the orchestrator depends on; the other
// modules are the adapters:
// - pets: InMemoryPetService over an injected MockDataStore
// - location: HostLocationService over a GeolocationProvider
// - generation: GenerativeTextService over an LlmAdapter
// - config: EnvConfigService from environment variables
//
// Usage Example:
//     let pets = Arc::new(InMemoryPetService::seeded(LatencyProfile::reference()));
//     let nearby = pets.get_nearby_pets().await?;
//
//     // Test code gets a fresh store per test
//     let pets = InMemoryPetService::seeded(LatencyProfile::instant());

pub mod config;
pub mod generation;
pub mod location;
#[cfg(test)]
pub mod mocks;
pub mod pets;
pub mod traits;

// Re-export commonly used types
pub use config::EnvConfigService;
pub use generation::{FailurePolicy, GenerationPolicy, GenerativeTextService};
pub use location::{DeniedPositionProvider, FixedPositionProvider, HostLocationService};
pub use pets::{LatencyProfile, InMemoryPetService};
pub use traits::{
    ConfigService, GeolocationProvider, LocationService, PetService, PetTextGenerator,
    PositionError,
};
