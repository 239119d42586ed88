use super::types::*;
use super::LlmAdapter;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiAdapter {
    client: Client,
    api_key: String,
    api_base: String,
    default_model: String,
}

impl GeminiAdapter {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: GEMINI_API_BASE.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (proxies, local stubs)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    async fn send_request(&self, model: &str, request: &ApiRequest) -> Result<reqwest::Response> {
        self.client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Gemini")
    }
}

#[async_trait]
impl LlmAdapter for GeminiAdapter {
    async fn generate_text(&self, request: GenerationRequest) -> Result<String> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());
        let api_request = ApiRequest::from(request);

        tracing::debug!(
            "Gemini request to {} (structured: {})",
            model,
            api_request.generation_config.is_some()
        );

        let response = self.send_request(&model, &api_request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, error_text);
        }

        let completion: ApiResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        completion.text()
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

// Internal API types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl From<GenerationRequest> for ApiRequest {
    fn from(request: GenerationRequest) -> Self {
        let generation_config =
            if request.response_mime_type.is_some() || request.response_schema.is_some() {
                Some(GenerationConfig {
                    response_mime_type: request.response_mime_type,
                    response_schema: request.response_schema,
                })
            } else {
                None
            };

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt),
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

impl ApiResponse {
    /// Concatenate the text parts of the first candidate
    fn text(&self) -> Result<String> {
        let candidate = self
            .candidates
            .first()
            .context("No candidates in Gemini response")?;

        let content = candidate.content.as_ref().with_context(|| {
            format!(
                "Gemini candidate has no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )
        })?;

        Ok(content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_request_body() {
        let request = ApiRequest::from(GenerationRequest::new("Describe Rex"));
        let body = serde_json::to_value(request).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Describe Rex");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_structured_request_body() {
        let request = GenerationRequest::new("Care for a Mutt")
            .with_json_schema(json!({"type": "OBJECT", "required": ["feeding"]}));
        let body = serde_json::to_value(ApiRequest::from(request)).unwrap();

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: ApiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "world"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(response.text().unwrap(), "Hello world");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: ApiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_err());

        let blocked: ApiResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        let err = blocked.text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_endpoint() {
        let adapter =
            GeminiAdapter::new("key".to_string()).with_api_base("http://localhost:9/v1beta/");
        assert_eq!(
            adapter.endpoint("gemini-2.5-flash"),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(adapter.name(), "Gemini");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        // Port 9 (discard) is closed on test hosts; the send must fail, not hang
        let adapter = GeminiAdapter::new("key".to_string()).with_api_base("http://127.0.0.1:9");
        let result = adapter.generate_text(GenerationRequest::new("hi")).await;
        assert!(result.is_err());
    }
}
