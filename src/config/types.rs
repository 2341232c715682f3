//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/copyforge/) and project (.copyforge/) level
//! configuration.

use serde::{Deserialize, Serialize};

use crate::provider::ProviderConfig;
use crate::types::{CopyError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Generation policy settings
    pub generation: GenerationConfig,

    /// Per-provider settings
    pub providers: ProvidersConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            generation: GenerationConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `CopyError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.generation.default_temperature) {
            return Err(CopyError::Config(format!(
                "default_temperature must be between 0.0 and 1.0, got {}",
                self.generation.default_temperature
            )));
        }

        if self.generation.default_provider == self.generation.fallback_provider {
            return Err(CopyError::Config(format!(
                "fallback_provider must differ from default_provider ({})",
                self.generation.default_provider
            )));
        }

        for (name, provider) in [
            ("gemini", &self.providers.gemini),
            ("mistral", &self.providers.mistral),
        ] {
            if provider.timeout_secs == Some(0) {
                return Err(CopyError::Config(format!(
                    "providers.{}.timeout_secs must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Generation Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Provider used when the caller does not pick one
    pub default_provider: String,

    /// Designated fallback provider for failed calls; also the contrasting
    /// provider in A/B mode
    pub fallback_provider: String,

    /// Temperature used when the caller does not pick one
    pub default_temperature: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_provider: "gemini".to_string(),
            fallback_provider: "mistral".to_string(),
            default_temperature: 0.7,
        }
    }
}

// =============================================================================
// Provider Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub gemini: ProviderConfig,
    pub mistral: ProviderConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = Config::default();
        config.generation.default_temperature = 1.5;
        assert!(matches!(
            config.validate().unwrap_err(),
            CopyError::Config(_)
        ));
    }

    #[test]
    fn test_validate_rejects_identical_fallback() {
        let mut config = Config::default();
        config.generation.fallback_provider = config.generation.default_provider.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.providers.gemini.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialized_config_omits_api_keys() {
        let mut config = Config::default();
        config.providers.gemini.api_key = Some("super-secret".to_string());
        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("super-secret"));
    }
}
