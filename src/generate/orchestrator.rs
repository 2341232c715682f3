//! Generation Orchestrator
//!
//! Turns one (prompt, provider, temperature, platform) tuple into a scored
//! Variant. Provider failures are absorbed by an explicit ordered fallback
//! policy whose terminal step is local synthesis, so the only caller-visible
//! failure is a configuration error for an unknown provider name.

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::analysis::ContentAnalyzer;
use crate::provider::{LOCAL_PROVIDER, ProviderRegistry, synthesize};
use crate::types::{Result, Variant};

/// One step of the fallback policy, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStep {
    /// Call the named registered provider
    Provider(String),
    /// Synthesize placeholder text locally; never fails
    LocalSynthesis,
}

/// Ordered recovery actions for one generation call.
///
/// Evaluated front to back by a single loop; the policy is data, not control
/// flow, so tests can assert on the order directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub steps: Vec<GenerationStep>,
}

impl FallbackPolicy {
    /// Standard policy: requested provider, then the designated fallback
    /// (when one is available), then local synthesis.
    pub fn for_provider(primary: &str, fallback: Option<&str>) -> Self {
        let mut steps = vec![GenerationStep::Provider(primary.to_string())];
        if let Some(fallback) = fallback
            && fallback != primary
        {
            steps.push(GenerationStep::Provider(fallback.to_string()));
        }
        steps.push(GenerationStep::LocalSynthesis);
        Self { steps }
    }
}

/// Orchestrates provider dispatch, fallback, and scoring for one variant.
pub struct Orchestrator {
    registry: ProviderRegistry,
    /// Designated fallback provider name
    fallback_provider: String,
    analyzer: ContentAnalyzer,
}

impl Orchestrator {
    pub fn new(registry: ProviderRegistry, fallback_provider: impl Into<String>) -> Self {
        Self {
            registry,
            fallback_provider: fallback_provider.into(),
            analyzer: ContentAnalyzer::new(),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Designated fallback for a primary, guaranteed distinct from it.
    /// Falls back to the first other registered provider when the primary
    /// *is* the designated fallback; None with a single-provider registry.
    pub fn fallback_for(&self, primary: &str) -> Option<String> {
        if self.fallback_provider != primary && self.registry.contains(&self.fallback_provider) {
            return Some(self.fallback_provider.clone());
        }
        self.registry.first_other(primary).map(str::to_string)
    }

    /// Generate and score one variant.
    ///
    /// Unknown provider names fail fast with a configuration error and zero
    /// network calls. Every other path produces a valid Variant: the policy
    /// terminates in local synthesis. The analyzer runs exactly once, on the
    /// finalized text.
    #[instrument(skip(self, prompt), fields(provider = provider_name, platform))]
    pub async fn generate_variant(
        &self,
        prompt: &str,
        provider_name: &str,
        temperature: f64,
        platform: &str,
    ) -> Result<Variant> {
        // Validate the name before any network traffic.
        self.registry.get(provider_name)?;

        let policy = FallbackPolicy::for_provider(
            provider_name,
            self.fallback_for(provider_name).as_deref(),
        );

        let (text, provider_used) = self.run_policy(&policy, prompt, temperature).await;
        let metrics = self.analyzer.score(&text, platform);

        Ok(Variant {
            text,
            provider_used,
            temperature_used: temperature,
            is_primary: false,
            metrics,
            created_at: Utc::now(),
        })
    }

    /// Walk the policy until a step yields text. Infallible by construction:
    /// the terminal synthesis step always succeeds.
    async fn run_policy(
        &self,
        policy: &FallbackPolicy,
        prompt: &str,
        temperature: f64,
    ) -> (String, String) {
        for step in &policy.steps {
            match step {
                GenerationStep::Provider(name) => {
                    let Ok(provider) = self.registry.get(name) else {
                        warn!(provider = %name, "Fallback provider not registered, skipping");
                        continue;
                    };
                    debug!(provider = %name, "Attempting provider");
                    match provider.generate(prompt, temperature).await {
                        Ok(text) => {
                            info!(provider = %name, chars = text.len(), "Provider succeeded");
                            return (text, name.clone());
                        }
                        Err(err) => {
                            warn!(provider = %name, error = %err, "Provider failed, continuing policy");
                        }
                    }
                }
                GenerationStep::LocalSynthesis => {
                    info!("All providers failed, degrading to local synthesis");
                    return (synthesize(prompt, temperature), LOCAL_PROVIDER.to_string());
                }
            }
        }
        // Policies built by FallbackPolicy::for_provider always end in
        // LocalSynthesis; an empty custom policy still degrades gracefully.
        (synthesize(prompt, temperature), LOCAL_PROVIDER.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
