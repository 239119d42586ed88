// Generative text service for the sell form
//
// Two narrow operations over an LlmAdapter. They differ on purpose in how
// failures surface: a failed description comes back as a fixed message,
// a failed care-instruction request is an error the form must show. The
// difference lives in GenerationPolicy rather than in the call sites.
//
// A missing credential is not a failure under either policy: the service
// answers with a placeholder description or empty care instructions.

use super::traits::PetTextGenerator;
use crate::error::{PetConnectError, Result};
use crate::llm::{GenerationRequest, LlmAdapter, DEFAULT_MODEL};
use crate::model::{CareInstructions, PetType};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub const UNAVAILABLE_DESCRIPTION: &str = "AI service is unavailable.";
pub const FAILED_DESCRIPTION: &str = "Failed to generate description. Please try again.";
pub const CARE_FAILED_MESSAGE: &str =
    "Failed to generate care instructions. Please check the breed and try again.";

/// What an operation does when the upstream call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and return a safe default
    DegradeSilently,
    /// Return the error to the caller
    Propagate,
}

/// Failure policy per generative operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub description: FailurePolicy,
    pub care_instructions: FailurePolicy,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            description: FailurePolicy::DegradeSilently,
            care_instructions: FailurePolicy::Propagate,
        }
    }
}

/// JSON schema for care instructions, in Gemini's OpenAPI subset
pub fn care_instructions_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "feeding": {
                "type": "STRING",
                "description": "Detailed feeding instructions including frequency and type of food."
            },
            "grooming": {
                "type": "STRING",
                "description": concat!(
                    "Grooming requirements, including brushing, ",
                    "bathing, and nail trimming."
                )
            },
            "exercise": {
                "type": "STRING",
                "description": "Daily exercise needs and suggested activities."
            },
            "medicalNeeds": {
                "type": "STRING",
                "description": concat!(
                    "Common medical needs, vaccination advice, ",
                    "and potential health issues to watch for."
                )
            }
        },
        "required": ["feeding", "grooming", "exercise", "medicalNeeds"]
    })
}

pub fn description_prompt(name: &str, breed: &str, age: u32) -> String {
    format!(
        "Generate a creative and appealing e-commerce description for a pet. \
         The description should be about 80-100 words.\n\
         Pet's Name: {}\n\
         Breed: {}\n\
         Age: {} years old",
        name, breed, age
    )
}

pub fn care_prompt(breed: &str, pet_type: PetType) -> String {
    format!(
        "Generate detailed care instructions for a {} which is a type of {}. \
         Provide concise, practical advice for a new owner.",
        breed, pet_type
    )
}

/// PetTextGenerator over an optional LLM adapter
///
/// `adapter` is None when no API key is configured.
pub struct GenerativeTextService {
    adapter: Option<Arc<dyn LlmAdapter>>,
    model: String,
    policy: GenerationPolicy,
}

impl GenerativeTextService {
    pub fn new(adapter: Option<Arc<dyn LlmAdapter>>) -> Self {
        Self {
            adapter,
            model: DEFAULT_MODEL.to_string(),
            policy: GenerationPolicy::default(),
        }
    }

    /// Service with no credential; every call soft-degrades
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    pub fn is_configured(&self) -> bool {
        self.adapter.is_some()
    }

    async fn request_care(
        &self,
        adapter: &dyn LlmAdapter,
        breed: &str,
        pet_type: PetType,
    ) -> Result<CareInstructions> {
        let request = GenerationRequest::new(care_prompt(breed, pet_type))
            .with_model(self.model.clone())
            .with_json_schema(care_instructions_schema());

        let text = adapter.generate_text(request).await?;
        let care = serde_json::from_str::<CareInstructions>(text.trim())?;
        Ok(care)
    }
}

#[async_trait]
impl PetTextGenerator for GenerativeTextService {
    async fn generate_pet_description(&self, name: &str, breed: &str, age: u32) -> Result<String> {
        let Some(adapter) = self.adapter.as_ref() else {
            return Ok(UNAVAILABLE_DESCRIPTION.to_string());
        };

        let request = GenerationRequest::new(description_prompt(name, breed, age))
            .with_model(self.model.clone());

        match adapter.generate_text(request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::error!("Error generating pet description via {}: {:#}", adapter.name(), e);
                match self.policy.description {
                    FailurePolicy::DegradeSilently => Ok(FAILED_DESCRIPTION.to_string()),
                    FailurePolicy::Propagate => Err(PetConnectError::LlmError(e.to_string())),
                }
            }
        }
    }

    async fn generate_care_instructions(
        &self,
        breed: &str,
        pet_type: PetType,
    ) -> Result<CareInstructions> {
        let Some(adapter) = self.adapter.as_ref() else {
            return Ok(CareInstructions::default());
        };

        match self.request_care(adapter.as_ref(), breed, pet_type).await {
            Ok(care) => Ok(care),
            Err(e) => {
                tracing::error!("Error generating care instructions: {}", e);
                match self.policy.care_instructions {
                    FailurePolicy::DegradeSilently => Ok(CareInstructions::default()),
                    FailurePolicy::Propagate => {
                        Err(PetConnectError::CareGenerationFailed(CARE_FAILED_MESSAGE.to_string()))
                    }
                }
            }
        }
    }
}
