//! Gemini API Provider
//!
//! Adapter for Google's Gemini generateContent API. Auth travels as a `key`
//! query parameter; generated text lives at
//! `candidates[0].content.parts[0].text`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ProviderConfig, TextProvider};
use crate::types::error::ProviderError;
use crate::types::{CopyError, Result};

const PROVIDER_NAME: &str = "gemini";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini provider with secure API key handling
pub struct GeminiProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                CopyError::Config(
                    "Gemini API key not found. Set GEMINI_API_KEY env var or provide in config"
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

    fn build_request(&self, prompt: &str, temperature: f64) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: self.max_tokens,
            },
        }
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f64,
    ) -> std::result::Result<String, ProviderError> {
        info!(model = %self.model, temperature, "Generating with Gemini");

        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base, self.model
        );
        let request = self.build_request(prompt, temperature);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::transport(PROVIDER_NAME, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::status(PROVIDER_NAME, status, body));
        }

        let body: GenerateContentResponse = response
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
fn extract_text(response: &GenerateContentResponse) -> std::result::Result<String, ProviderError> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .and_then(|p| p.text.clone())
        .ok_or_else(|| {
            ProviderError::malformed(PROVIDER_NAME, "no generated text in response")
        })
}

// Request/Response types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
