// Configuration service implementation
//
// Everything comes from the environment (optionally seeded from a .env
// file via dotenvy). Unlike most credentials the generative API key is
// optional: without it the AI features answer with placeholders instead
// of failing startup.

use super::pets::LatencyProfile;
use super::traits::ConfigService;
use crate::error::{PetConnectError, Result};
use crate::llm::DEFAULT_MODEL;
use crate::model::Geolocation;

/// Environment-backed configuration
///
/// Environment Variables:
/// - GEMINI_API_KEY (optional, falls back to API_KEY): generative API credential
/// - GEMINI_MODEL (optional): model id, defaults to gemini-2.5-flash
/// - PETCONNECT_LATENCY (optional): "reference" (default) or "instant"
/// - PETCONNECT_LATITUDE / PETCONNECT_LONGITUDE (optional, both or neither):
///   coordinates the host reports; when unset the host has no location capability
#[derive(Debug, Clone)]
pub struct EnvConfigService {
    api_key: Option<String>,
    model: String,
    latency: LatencyProfile,
    position: Option<Geolocation>,
}

impl EnvConfigService {
    /// Load configuration from .env and the process environment
    ///
    /// # Errors
    /// - PETCONNECT_LATENCY is not a known profile
    /// - Coordinates are unparseable or only one of the pair is set
    pub fn load() -> Result<Self> {
        // Load .env file (ignore if not found)
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));
        if api_key.is_none() {
            tracing::warn!("Gemini API key not found. AI features will not work.");
        }

        let model = non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let latency = match non_empty("PETCONNECT_LATENCY") {
            Some(name) => LatencyProfile::from_name(&name).ok_or_else(|| {
                PetConnectError::EnvError(format!(
                    "PETCONNECT_LATENCY must be 'reference' or 'instant', got '{}'",
                    name
                ))
            })?,
            None => LatencyProfile::reference(),
        };

        let position = match (non_empty("PETCONNECT_LATITUDE"), non_empty("PETCONNECT_LONGITUDE")) {
            (Some(lat), Some(lon)) => Some(Geolocation {
                latitude: parse_coordinate("PETCONNECT_LATITUDE", &lat, 90.0)?,
                longitude: parse_coordinate("PETCONNECT_LONGITUDE", &lon, 180.0)?,
            }),
            (None, None) => None,
            _ => {
                return Err(PetConnectError::EnvError(
                    "PETCONNECT_LATITUDE and PETCONNECT_LONGITUDE must be set together".to_string(),
                ))
            }
        };

        Ok(Self {
            api_key,
            model,
            latency,
            position,
        })
    }
}

fn parse_coordinate(name: &str, raw: &str, limit: f64) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PetConnectError::EnvError(format!("{} is not a number: '{}'", name, raw)))?;

    if !(-limit..=limit).contains(&value) {
        return Err(PetConnectError::EnvError(format!(
            "{} out of range: {}",
            name, value
        )));
    }
    Ok(value)
}

impl ConfigService for EnvConfigService {
    fn get_api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_latency(&self) -> LatencyProfile {
        self.latency
    }

    fn get_position(&self) -> Option<Geolocation> {
        self.position
    }
}
