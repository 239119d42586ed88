// Centralized error handling using thiserror for type-safe error management
//
// One error enum for the whole crate. Variants map onto the failure modes
// of the marketplace core: store lookups, the location capability, the
// generative text service and listing submission. JSON errors convert
// automatically via #[from]; adapter errors arrive as anyhow and map to
// LlmError.
//
// Which of these reach the user is decided by the caller, not here:
// location and description failures are absorbed by the orchestrator and
// the generative service, care-instruction and listing failures propagate.

use thiserror::Error;

/// Main error type for PetConnect
///
/// Usage:
///     fn lookup(store: &MockDataStore, id: u64) -> Result<&Pet> {
///         store.find_by_id(id)
///     }
#[derive(Debug, Error)]
pub enum PetConnectError {
    /// No pet with this id exists in the store
    #[error("Pet not found: {0}")]
    NotFound(u64),

    /// A store invariant would be broken (empty store, duplicate id)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The host has no location capability at all
    #[error("{0}")]
    LocationUnavailable(String),

    /// The location capability refused (permission denied)
    #[error("{0}")]
    LocationDenied(String),

    /// The location capability failed for another reason (timeout, no fix)
    #[error("{0}")]
    LocationError(String),

    /// Structured care-instruction generation failed or returned bad JSON
    ///
    /// Always propagated to the caller, which shows it to the user.
    #[error("{0}")]
    CareGenerationFailed(String),

    /// Submitting a new listing failed
    #[error("Listing failed: {0}")]
    ListingFailed(String),

    /// Required form fields were empty
    #[error("Please fill in {0}")]
    MissingFields(String),

    /// LLM adapter or communication error
    #[error("LLM error: {0}")]
    LlmError(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Environment variable invalid
    #[error("Environment error: {0}")]
    EnvError(String),

    /// JSON serialization/deserialization failed
    #[error("JSON serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl PetConnectError {
    /// True for the three location variants
    pub fn is_location(&self) -> bool {
        matches!(
            self,
            PetConnectError::LocationUnavailable(_)
                | PetConnectError::LocationDenied(_)
                | PetConnectError::LocationError(_)
        )
    }
}

/// Type alias for Result with PetConnectError
pub type Result<T> = std::result::Result<T, PetConnectError>;

// Adapters use anyhow internally; their failures surface as LlmError.
impl From<anyhow::Error> for PetConnectError {
    fn from(err: anyhow::Error) -> Self {
        PetConnectError::LlmError(err.to_string())
    }
}
