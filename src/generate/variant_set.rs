//! Variant Set Builder
//!
//! Drives single-variant or dual-variant (A/B) generation on top of the
//! orchestrator. Dual mode pins distinct providers and a raised temperature
//! for the secondary variant and runs both calls concurrently, so end-to-end
//! latency stays near one provider round-trip.

use tracing::{info, instrument};

use super::orchestrator::Orchestrator;
use super::prompt;
use crate::constants::generation::AB_TEMPERATURE_STEP;
use crate::types::{GenerationRequest, Result, VariantSet};

/// How many variants one request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// One variant with the caller-chosen provider and temperature
    Single,
    /// Two variants: the caller's choice plus a contrasting provider at a
    /// slightly higher temperature
    AbTest,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Single => write!(f, "single"),
            GenerationMode::AbTest => write!(f, "ab-test"),
        }
    }
}

/// Stateless builder over an orchestrator.
pub struct VariantSetBuilder {
    orchestrator: Orchestrator,
}

impl VariantSetBuilder {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Build a complete variant set for a request.
    ///
    /// Blank prompts are rejected before any provider call. The result is a
    /// complete set or a typed error, never a partial set.
    #[instrument(skip(self, request), fields(mode = %mode, provider = %request.provider))]
    pub async fn build(
        &self,
        request: &GenerationRequest,
        mode: GenerationMode,
    ) -> Result<VariantSet> {
        request.validate()?;

        let base_prompt = prompt::build_prompt(request);

        match mode {
            GenerationMode::Single => {
                let variant = self
                    .orchestrator
                    .generate_variant(
                        &base_prompt,
                        &request.provider,
                        request.temperature,
                        &request.target_platform,
                    )
                    .await?;
                Ok(VariantSet::single(variant))
            }
            GenerationMode::AbTest => {
                let alt_provider = self
                    .orchestrator
                    .fallback_for(&request.provider)
                    .unwrap_or_else(|| request.provider.clone());
                let alt_prompt = prompt::with_alternative_cue(&base_prompt);
                let alt_temperature = (request.temperature + AB_TEMPERATURE_STEP).min(1.0);

                info!(
                    primary = %request.provider,
                    alternative = %alt_provider,
                    alt_temperature,
                    "Running A/B generation"
                );

                let (primary, alternative) = tokio::join!(
                    self.orchestrator.generate_variant(
                        &base_prompt,
                        &request.provider,
                        request.temperature,
                        &request.target_platform,
                    ),
                    self.orchestrator.generate_variant(
                        &alt_prompt,
                        &alt_provider,
                        alt_temperature,
                        &request.target_platform,
                    ),
                );

                Ok(VariantSet::dual(primary?, alternative?))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::provider::{ProviderRegistry, TextProvider};
    use crate::types::{AudienceProfile, CopyError, ProviderError};

    struct MockProvider {
        name: String,
        should_fail: bool,
    }

    #[async_trait]
    impl TextProvider for MockProvider {
        async fn generate(
            &self,
            _prompt: &str,
            _temperature: f64,
        ) -> std::result::Result<String, ProviderError> {
            if self.should_fail {
                return Err(ProviderError::transport(&self.name, "simulated outage"));
            }
            Ok(format!("text from {}", self.name))
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn builder(primary_fails: bool) -> VariantSetBuilder {
        let registry = ProviderRegistry::new()
            .register(Arc::new(MockProvider {
                name: "gemini".to_string(),
                should_fail: primary_fails,
            }))
            .register(Arc::new(MockProvider {
                name: "mistral".to_string(),
                should_fail: false,
            }));
        VariantSetBuilder::new(Orchestrator::new(registry, "mistral"))
    }

    fn request(provider: &str, temperature: f64) -> GenerationRequest {
        GenerationRequest {
            prompt: "Announce the launch".to_string(),
            target_platform: "twitter".to_string(),
            audience: AudienceProfile {
                profile_name: "Developers".to_string(),
                age_group: "25-40".to_string(),
                persona_type: "developer".to_string(),
                tone: "casual".to_string(),
            },
            temperature,
            provider: provider.to_string(),
        }
    }

    #[tokio::test]
    async fn test_single_mode_one_primary_variant() {
        let set = builder(false)
            .build(&request("gemini", 0.7), GenerationMode::Single)
            .await
            .unwrap();

        assert_eq!(set.variants.len(), 1);
        assert!(set.variants[0].is_primary);
        assert_eq!(set.variants[0].provider_used, "gemini");
        assert_eq!(set.variants[0].temperature_used, 0.7);
    }

    #[tokio::test]
    async fn test_dual_mode_properties() {
        let set = builder(false)
            .build(&request("gemini", 0.6), GenerationMode::AbTest)
            .await
            .unwrap();

        assert_eq!(set.variants.len(), 2);
        assert!(set.variants[0].is_primary);
        assert!(!set.variants[1].is_primary);
        assert_eq!(set.variants[0].provider_used, "gemini");
        assert_eq!(set.variants[1].provider_used, "mistral");
        assert!((set.variants[1].temperature_used - 0.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_dual_mode_temperature_caps_at_one() {
        let set = builder(false)
            .build(&request("gemini", 0.95), GenerationMode::AbTest)
            .await
            .unwrap();
        assert_eq!(set.variants[1].temperature_used, 1.0);
    }

    #[tokio::test]
    async fn test_dual_mode_collapses_provider_on_fallback() {
        // Primary provider is down: variant A falls back to mistral, so both
        // variants report the same provider.
        let set = builder(true)
            .build(&request("gemini", 0.6), GenerationMode::AbTest)
            .await
            .unwrap();

        assert_eq!(set.variants.len(), 2);
        assert_eq!(set.variants[0].provider_used, "mistral");
        assert_eq!(set.variants[1].provider_used, "mistral");
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected_before_generation() {
        let mut req = request("gemini", 0.7);
        req.prompt = "   ".to_string();
        let err = builder(false)
            .build(&req, GenerationMode::Single)
            .await
            .unwrap_err();
        assert!(matches!(err, CopyError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_provider_surfaces_config_error() {
        let err = builder(false)
            .build(&request("unknown-x", 0.7), GenerationMode::Single)
            .await
            .unwrap_err();
        assert!(matches!(err, CopyError::Config(_)));
    }
}
