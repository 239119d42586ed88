use serde::{Deserialize, Serialize};

/// Type of LLM adapter to use
#[derive(Debug, Clone, Copy)]
pub enum AdapterType {
    Gemini,
}

/// Unified request format for all LLM adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: Option<String>, // Override default model

    /// e.g. "application/json" for structured output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    /// Schema the structured response must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            response_mime_type: None,
            response_schema: None,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = Some(model);
        self
    }

    /// Ask for JSON constrained to `schema`
    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self.response_schema = Some(schema);
        self
    }

    pub fn is_structured(&self) -> bool {
        self.response_schema.is_some()
    }
}
