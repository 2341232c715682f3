//! Generation Pipeline
//!
//! Prompt construction, the provider orchestrator with its fallback policy,
//! and the single/dual variant set builder.

pub mod orchestrator;
pub mod prompt;
pub mod variant_set;

pub use orchestrator::{FallbackPolicy, GenerationStep, Orchestrator};
pub use variant_set::{GenerationMode, VariantSetBuilder};
