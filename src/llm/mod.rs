mod gemini;
mod types;

pub use gemini::{GeminiAdapter, DEFAULT_MODEL};
pub use types::*;

use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Unified LLM interface that all adapters must implement
/// Covers free-form text and schema-constrained JSON output
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LlmAdapter: Send + Sync {
    /// Run a single generation and return the concatenated response text
    /// For structured requests the text is the raw JSON payload
    async fn generate_text(&self, request: GenerationRequest) -> Result<String>;

    /// Get the adapter name for logging/debugging
    fn name(&self) -> &str;
}

/// Factory function to create the appropriate LLM adapter
pub fn create_adapter(adapter_type: AdapterType, api_key: String) -> Box<dyn LlmAdapter> {
    match adapter_type {
        AdapterType::Gemini => Box::new(GeminiAdapter::new(api_key)),
    }
}
