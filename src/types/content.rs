//! Core Content Types
//!
//! Domain types for generation requests, audience targeting, computed
//! metrics, and generated variants. All types are plain immutable data;
//! construction happens at the boundary and nothing here mutates after
//! creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{CopyError, Result};

// =============================================================================
// Inputs
// =============================================================================

/// Audience targeting attributes, owned by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceProfile {
    /// Display name of the profile
    pub profile_name: String,
    /// e.g. "18-24", "25-40"
    pub age_group: String,
    /// e.g. "developer", "founder", "casual reader"
    pub persona_type: String,
    /// e.g. "professional", "witty", "empathetic"
    pub tone: String,
}

/// One content request, immutable once constructed by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Raw natural-language request from the caller
    pub prompt: String,
    /// Target publishing surface (e.g. "twitter", "linkedin", "email")
    pub target_platform: String,
    /// Audience the content is written for
    pub audience: AudienceProfile,
    /// Sampling temperature in [0, 1]
    pub temperature: f64,
    /// Requested provider name
    pub provider: String,
}

impl GenerationRequest {
    /// Reject degenerate input before any provider call is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(CopyError::Validation(
                "prompt must not be empty or blank".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(CopyError::Validation(format!(
                "temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Deterministic quality metrics derived purely from (text, platform).
///
/// Recomputed on every call; never cached across edits of the same text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Normalized Flesch Reading Ease, 0-10
    pub readability: f64,
    /// Sentence-structure score, 0-10
    pub clarity: f64,
    /// Platform-fit score, 0-100
    pub platform_optimization: u8,
    /// Weighted engagement prediction, 0-100
    pub engagement: u8,
    /// Human-readable optimization tips
    pub tips: String,
}

/// One generated text result with its metrics and generation provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Final text body
    pub text: String,
    /// Provider that actually produced the text (fallback may differ from
    /// the one requested)
    pub provider_used: String,
    /// Temperature the producing call actually used
    pub temperature_used: f64,
    /// Whether this is the primary variant of its set
    pub is_primary: bool,
    /// Metrics computed once on the final text
    pub metrics: Metrics,
    pub created_at: DateTime<Utc>,
}

impl Variant {
    /// Tag this variant as the primary of its set.
    pub fn into_primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

/// Complete output of one generation request: one variant in single mode,
/// two in A/B mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSet {
    /// Ordered variants; in dual mode the primary comes first
    pub variants: Vec<Variant>,
}

impl VariantSet {
    pub fn single(variant: Variant) -> Self {
        Self {
            variants: vec![variant.into_primary()],
        }
    }

    pub fn dual(primary: Variant, alternative: Variant) -> Self {
        Self {
            variants: vec![primary.into_primary(), alternative],
        }
    }

    pub fn primary(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.is_primary)
    }

    pub fn alternative(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| !v.is_primary)
    }
}

// =============================================================================
// Tests
// =============================================================================
