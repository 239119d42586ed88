// AppBuilder pattern for dependency construction and injection
//
// Builds every service the orchestrator needs, either from the environment
// (production) or from mocks (tests), with per-dependency overrides.
//
// Usage Example:
//     // Production
//     let app = AppBuilder::new()
//         .with_production_deps()?
//         .build()?
//         .into_app();
//
//     // Testing
//     let deps = AppBuilder::new()
//         .with_test_deps()
//         .with_pet_service(custom)
//         .build()?;

use crate::app::PetConnectApp;
use crate::error::{PetConnectError, Result};
use crate::events::EventBus;
use crate::llm::{create_adapter, AdapterType, LlmAdapter};
use crate::services::{
    ConfigService, EnvConfigService, FixedPositionProvider, GenerativeTextService,
    HostLocationService, InMemoryPetService, LocationService, PetService, PetTextGenerator,
};
use std::sync::Arc;

/// Builder for constructing PetConnectApp with dependency injection
///
/// # Examples
///
/// ```no_run
/// use petconnect::AppBuilder;
///
/// #[tokio::main]
/// async fn main() -> petconnect::Result<()> {
///     let mut app = AppBuilder::new()
///         .with_production_deps()?
///         .build()?
///         .into_app();
///
///     app.load().await;
///     Ok(())
/// }
/// ```
pub struct AppBuilder {
    // Overrides the key from config when set
    api_key: Option<String>,

    config: Option<Arc<dyn ConfigService>>,
    pet_service: Option<Arc<dyn PetService>>,
    location_service: Option<Arc<dyn LocationService>>,
    generator: Option<Arc<dyn PetTextGenerator>>,
    event_bus: Option<Arc<EventBus>>,
}

impl AppBuilder {
    /// Create a new AppBuilder with nothing configured
    pub fn new() -> Self {
        Self {
            api_key: None,
            config: None,
            pet_service: None,
            location_service: None,
            generator: None,
            event_bus: None,
        }
    }

    /// Set the generative API key, taking precedence over the environment
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Use production dependencies
    ///
    /// Creates real implementations for anything not already overridden:
    /// - EnvConfigService from the environment
    /// - InMemoryPetService over a freshly seeded store
    /// - HostLocationService (fixed coordinates if configured, else unsupported)
    /// - GenerativeTextService over Gemini, or unconfigured without a key
    ///
    /// # Errors
    ///
    /// Returns error if the environment configuration is invalid.
    pub fn with_production_deps(mut self) -> Result<Self> {
        let config = match self.config.take() {
            Some(config) => config,
            None => Arc::new(EnvConfigService::load()?) as Arc<dyn ConfigService>,
        };

        if self.pet_service.is_none() {
            let pet_service = InMemoryPetService::seeded(config.get_latency());
            self.pet_service = Some(Arc::new(pet_service) as Arc<dyn PetService>);
        }

        if self.location_service.is_none() {
            let location = match config.get_position() {
                Some(pos) => HostLocationService::new(Arc::new(FixedPositionProvider::new(
                    pos.latitude,
                    pos.longitude,
                ))),
                None => HostLocationService::unsupported(),
            };
            self.location_service = Some(Arc::new(location) as Arc<dyn LocationService>);
        }

        if self.generator.is_none() {
            let api_key = self.api_key.clone().or_else(|| config.get_api_key());
            let adapter = api_key.map(|key| {
                Arc::from(create_adapter(AdapterType::Gemini, key)) as Arc<dyn LlmAdapter>
            });
            let generator = GenerativeTextService::new(adapter).with_model(config.get_model());
            if generator.is_configured() {
                tracing::info!("Generative text service configured");
            } else {
                tracing::info!("Generative text service unavailable (no API key)");
            }
            self.generator = Some(Arc::new(generator) as Arc<dyn PetTextGenerator>);
        }

        if self.event_bus.is_none() {
            self.event_bus = Some(Arc::new(EventBus::new()));
        }

        self.config = Some(config);
        Ok(self)
    }

    /// Use test dependencies (mocks)
    #[cfg(test)]
    pub fn with_test_deps(mut self) -> Self {
        use crate::services::mocks::test_helpers::*;

        self.config = Some(Arc::new(create_mock_config()) as Arc<dyn ConfigService>);
        self.pet_service = Some(Arc::new(create_mock_pet_service()) as Arc<dyn PetService>);
        self.location_service =
            Some(Arc::new(create_located_service()) as Arc<dyn LocationService>);
        self.generator = Some(Arc::new(create_mock_generator()) as Arc<dyn PetTextGenerator>);
        self.event_bus = Some(Arc::new(EventBus::new()));

        self
    }

    /// Override config service
    pub fn with_config(mut self, config: Arc<dyn ConfigService>) -> Self {
        self.config = Some(config);
        self
    }

    /// Override pet service (e.g. a service over a custom store)
    pub fn with_pet_service(mut self, pet_service: Arc<dyn PetService>) -> Self {
        self.pet_service = Some(pet_service);
        self
    }

    /// Override location service
    pub fn with_location_service(mut self, location_service: Arc<dyn LocationService>) -> Self {
        self.location_service = Some(location_service);
        self
    }

    /// Override text generator
    pub fn with_generator(mut self, generator: Arc<dyn PetTextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Override event bus
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Build the configured dependencies
    ///
    /// # Errors
    ///
    /// Returns error if any required dependency is missing.
    pub fn build(self) -> Result<AppDependencies> {
        Ok(AppDependencies {
            config: self
                .config
                .ok_or_else(|| PetConnectError::ConfigError("Config not configured".to_string()))?,
            pet_service: self.pet_service.ok_or_else(|| {
                PetConnectError::ConfigError("Pet service not configured".to_string())
            })?,
            location_service: self.location_service.ok_or_else(|| {
                PetConnectError::ConfigError("Location service not configured".to_string())
            })?,
            generator: self.generator.ok_or_else(|| {
                PetConnectError::ConfigError("Text generator not configured".to_string())
            })?,
            event_bus: self.event_bus.ok_or_else(|| {
                PetConnectError::ConfigError("Event bus not configured".to_string())
            })?,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all application dependencies
pub struct AppDependencies {
    pub config: Arc<dyn ConfigService>,
    pub pet_service: Arc<dyn PetService>,
    pub location_service: Arc<dyn LocationService>,
    pub generator: Arc<dyn PetTextGenerator>,
    pub event_bus: Arc<EventBus>,
}

impl AppDependencies {
    /// Wire the orchestrator
    pub fn into_app(self) -> PetConnectApp {
        PetConnectApp::new(
            self.pet_service,
            self.location_service,
            self.generator,
            self.event_bus,
        )
    }
}
