//! Generate Command
//!
//! Produce one variant (or an A/B pair) of platform-targeted copy and print
//! the scored result.
//!
//! Usage:
//!   copyforge generate "Announce our launch" -p twitter
//!   copyforge ab-test "Announce our launch" -p linkedin --provider mistral

use tracing::{debug, warn};

use crate::cli::render;
use crate::config::Config;
use crate::generate::{GenerationMode, Orchestrator, VariantSetBuilder};
use crate::provider::{ProviderConfig, ProviderRegistry, create_provider};
use crate::store::{InMemoryProfileStore, InMemoryVariantStore, ProfileStore, VariantStore};
use crate::types::{AudienceProfile, GenerationRequest, Result};

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub prompt: String,
    pub platform: String,
    pub provider: Option<String>,
    pub temperature: Option<f64>,
    /// Named built-in audience profile; overrides the individual fields
    pub profile: Option<String>,
    pub age_group: String,
    pub persona: String,
    pub tone: String,
    pub json: bool,
}

pub async fn run(config: &Config, options: GenerateOptions, mode: GenerationMode) -> Result<()> {
    let registry = build_registry(config);
    let orchestrator = Orchestrator::new(registry, config.generation.fallback_provider.clone());
    let builder = VariantSetBuilder::new(orchestrator);

    let audience = match &options.profile {
        Some(id) => builtin_profiles().get_audience_profile(id).await?,
        None => AudienceProfile {
            profile_name: "Custom".to_string(),
            age_group: options.age_group.clone(),
            persona_type: options.persona.clone(),
            tone: options.tone.clone(),
        },
    };

    let request = GenerationRequest {
        prompt: options.prompt.clone(),
        target_platform: options.platform.to_lowercase(),
        audience,
        temperature: options
            .temperature
            .unwrap_or(config.generation.default_temperature),
        provider: options
            .provider
            .clone()
            .unwrap_or_else(|| config.generation.default_provider.clone()),
    };

    let set = builder.build(&request, mode).await?;

    let store = InMemoryVariantStore::new();
    store.save(&request, &set).await?;
    debug!(sets = store.len(), "Variant set recorded");

    if options.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
    } else {
        render::print_variant_set(&set);
    }

    Ok(())
}

/// Register every provider the configuration can construct.
///
/// A provider with a missing credential is skipped with a warning instead of
/// failing the whole command; "local" has no credential and always registers.
pub fn build_registry(config: &Config) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();

    for (name, provider_config) in [
        ("gemini", config.providers.gemini.clone()),
        ("mistral", config.providers.mistral.clone()),
        ("local", ProviderConfig::default()),
    ] {
        match create_provider(name, provider_config) {
            Ok(provider) => registry = registry.register(provider),
            Err(err) => {
                warn!(provider = name, error = %err, "Provider unavailable, skipping");
            }
        }
    }

    registry
}

/// Audience profiles available to `--profile` without external storage.
fn builtin_profiles() -> InMemoryProfileStore {
    InMemoryProfileStore::new()
        .with_profile(
            "general",
            AudienceProfile {
                profile_name: "General readers".to_string(),
                age_group: "18-65".to_string(),
                persona_type: "casual reader".to_string(),
                tone: "friendly".to_string(),
            },
        )
        .with_profile(
            "developers",
            AudienceProfile {
                profile_name: "Software developers".to_string(),
                age_group: "25-40".to_string(),
                persona_type: "developer".to_string(),
                tone: "casual".to_string(),
            },
        )
        .with_profile(
            "executives",
            AudienceProfile {
                profile_name: "Business decision makers".to_string(),
                age_group: "35-55".to_string(),
                persona_type: "executive".to_string(),
                tone: "professional".to_string(),
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CopyError;

    #[tokio::test]
    async fn test_builtin_profiles_lookup() {
        let store = builtin_profiles();
        let devs = store.get_audience_profile("developers").await.unwrap();
        assert_eq!(devs.persona_type, "developer");

        let err = store.get_audience_profile("gamers").await.unwrap_err();
        assert!(matches!(err, CopyError::NotFound(_)));
    }

    #[test]
    fn test_registry_always_has_local() {
        // No credentials configured: remote providers are skipped.
        let config = Config::default();
        let registry = build_registry(&config);
        assert!(registry.contains("local"));
    }
}
