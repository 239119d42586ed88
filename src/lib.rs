// Library interface for PetConnect
// Everything the marketplace front end needs, usable without any UI:
// - Domain model and the in-memory mock store
// - Async services (pets/users, location, generative text)
// - The app orchestrator and its event bus

pub mod app;
pub mod app_builder;
pub mod error;
pub mod events;
pub mod listing;
pub mod llm;
pub mod model;
pub mod services;
pub mod store;
pub mod version;

// Re-export commonly used types for convenience
pub use app::{ContentView, LoadState, PetConnectApp};
pub use app_builder::{AppBuilder, AppDependencies};
pub use error::{PetConnectError, Result};
pub use events::{Event, EventBus, EventKind, Modal};
pub use listing::ListingDraft;
pub use llm::{create_adapter, AdapterType, GenerationRequest, LlmAdapter};
pub use model::{
    CareInstructions, Gender, Geolocation, Location, NewPetListing, Page, Pet, PetType,
    SearchFilters, User,
};
pub use services::{
    ConfigService, EnvConfigService, GenerativeTextService, HostLocationService,
    InMemoryPetService, LatencyProfile, LocationService, PetService, PetTextGenerator,
};
pub use store::MockDataStore;
