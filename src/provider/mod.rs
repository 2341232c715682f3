//! Text-Generation Provider Abstraction
//!
//! Defines the TextProvider capability implemented once per backing service.
//! Each adapter owns its endpoint, credential, request/response wire shape,
//! and a fixed per-call timeout; all failure modes normalize to a single
//! `ProviderError` so the orchestrator can treat providers interchangeably.

mod gemini;
mod mistral;
mod synth;

pub use gemini::GeminiProvider;
pub use mistral::MistralProvider;
pub use synth::{LocalSynthProvider, PROVIDER_NAME as LOCAL_PROVIDER, synthesize};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::provider as provider_constants;
use crate::types::error::ProviderError;
use crate::types::{CopyError, Result};

/// Shared provider handle for concurrent use across generation calls.
pub type SharedProvider = Arc<dyn TextProvider>;

/// Uniform generate-text capability over one backing provider.
///
/// Implementations are stateless and safely callable concurrently.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate text for a prompt at the given temperature.
    async fn generate(
        &self,
        prompt: &str,
        temperature: f64,
    ) -> std::result::Result<String, ProviderError>;

    /// Provider name for provenance tagging and logging.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn TextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextProvider")
            .field("name", &self.name())
            .finish()
    }
}

// =============================================================================
// Provider Configuration
// =============================================================================

/// Per-adapter configuration, passed at construction time.
///
/// Note: API keys are handled securely - they are never serialized to output
/// and each adapter converts the key to SecretString internally.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key; falls back to the provider-specific env var when unset.
    /// Never serialized to output for security
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,
    /// Model name (provider-specific)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Maximum tokens to generate
    pub max_tokens: Option<usize>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ProviderConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(provider_constants::REQUEST_TIMEOUT_SECS)
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
            .unwrap_or(provider_constants::MAX_OUTPUT_TOKENS)
    }
}

/// Create a shared provider by name.
pub fn create_provider(name: &str, config: ProviderConfig) -> Result<SharedProvider> {
    match name {
        "gemini" => Ok(Arc::new(GeminiProvider::new(config)?)),
        "mistral" => Ok(Arc::new(MistralProvider::new(config)?)),
        "local" => Ok(Arc::new(LocalSynthProvider)),
        _ => Err(CopyError::Config(format!(
            "Unknown provider: {}. Supported: gemini, mistral, local",
            name
        ))),
    }
}

// =============================================================================
// Provider Registry
// =============================================================================

/// Closed set of named providers, validated at the orchestrator boundary.
///
/// Insertion order is preserved; the first other registered provider serves
/// as the designated alternate when no explicit choice applies.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<(String, SharedProvider)>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, provider: SharedProvider) -> Self {
        self.providers
            .push((provider.name().to_string(), provider));
        self
    }

    /// Look up a provider by name. Unknown names are a configuration error.
    pub fn get(&self, name: &str) -> Result<SharedProvider> {
        self.providers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| Arc::clone(p))
            .ok_or_else(|| {
                CopyError::Config(format!(
                    "Unknown provider: {}. Registered: {}",
                    name,
                    self.names().join(", ")
                ))
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// First registered provider with a different name, if any.
    pub fn first_other(&self, name: &str) -> Option<&str> {
        self.providers
            .iter()
            .map(|(n, _)| n.as_str())
            .find(|n| *n != name)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProvider(&'static str);

    #[async_trait]
    impl TextProvider for StubProvider {
        async fn generate(
            &self,
            _prompt: &str,
            _temperature: f64,
        ) -> std::result::Result<String, ProviderError> {
            Ok("stub".to_string())
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_provider_config_debug_redacts_key() {
        let config = ProviderConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.timeout_secs(), 15);
        assert_eq!(config.max_tokens(), 2048);
    }

    #[test]
    fn test_create_provider_unknown_name() {
        let err = create_provider("unknown-x", ProviderConfig::default()).unwrap_err();
        assert!(matches!(err, CopyError::Config(_)));
    }

    #[test]
    fn test_create_local_provider() {
        let provider = create_provider("local", ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "local");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ProviderRegistry::new()
            .register(Arc::new(StubProvider("gemini")))
            .register(Arc::new(StubProvider("mistral")));

        assert!(registry.contains("gemini"));
        assert_eq!(registry.get("mistral").unwrap().name(), "mistral");
        assert!(matches!(
            registry.get("missing").unwrap_err(),
            CopyError::Config(_)
        ));
        assert_eq!(registry.names(), vec!["gemini", "mistral"]);
    }

    #[test]
    fn test_registry_first_other() {
        let registry = ProviderRegistry::new()
            .register(Arc::new(StubProvider("gemini")))
            .register(Arc::new(StubProvider("mistral")));

        assert_eq!(registry.first_other("gemini"), Some("mistral"));
        assert_eq!(registry.first_other("mistral"), Some("gemini"));

        let single = ProviderRegistry::new().register(Arc::new(StubProvider("gemini")));
        assert_eq!(single.first_other("gemini"), None);
    }
}
