//! Mistral API Provider
//!
//! Adapter for Mistral's chat-completions API. Auth travels as a bearer
//! header; generated text lives at `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ProviderConfig, TextProvider};
use crate::types::error::ProviderError;
use crate::types::{CopyError, Result};

const PROVIDER_NAME: &str = "mistral";
const DEFAULT_API_BASE: &str = "https://api.mistral.ai/v1";
const DEFAULT_MODEL: &str = "mistral-small-latest";

/// Mistral provider with secure API key handling
pub struct MistralProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for MistralProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralProvider")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl MistralProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .clone()
            .or_else(|| std::env::var("MISTRAL_API_KEY").ok())
            .ok_or_else(|| {
                CopyError::Config(
                    "Mistral API key not found. Set MISTRAL_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| CopyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            model,
            max_tokens: config.max_tokens(),
            client,
        })
    }

    fn build_request(&self, prompt: &str, temperature: f64) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl TextProvider for MistralProvider {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f64,
    ) -> std::result::Result<String, ProviderError> {
        info!(model = %self.model, temperature, "Generating with Mistral");

        let url = format!("{}/chat/completions", self.api_base);
        let request = self.build_request(prompt, temperature);

        debug!("Sending request to Mistral API");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER_NAME, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::status(PROVIDER_NAME, status, body));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(PROVIDER_NAME, e.to_string()))?;

        extract_text(&body)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

/// Pull the generated text out of a 2xx response body.
fn extract_text(response: &ChatCompletionResponse) -> std::result::Result<String, ProviderError> {
    response
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| {
            ProviderError::malformed(PROVIDER_NAME, "no generated text in response")
        })
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MistralProvider {
        MistralProvider::new(ProviderConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_build_request_shape() {
        let request = provider().build_request("Write a tip", 0.8);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Write a tip");
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["max_tokens"], 2048);
    }

    #[test]
    fn test_extract_text_from_response() {
        let body: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Generated copy"}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(&body).unwrap(), "Generated copy");
    }

    #[test]
    fn test_extract_text_missing_choices() {
        let body: ChatCompletionResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        let err = extract_text(&body).unwrap_err();
        assert!(err.to_string().contains("no generated text"));
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        if std::env::var("MISTRAL_API_KEY").is_ok() {
            return;
        }
        let err = MistralProvider::new(ProviderConfig::default()).unwrap_err();
        assert!(matches!(err, CopyError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", provider());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-key"));
    }
}
