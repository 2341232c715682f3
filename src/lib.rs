//! copyforge - Audience-Targeted Content Generation
//!
//! Generates platform-targeted marketing copy through interchangeable
//! text-generation providers and scores every result with a deterministic
//! content analysis engine.
//!
//! ## Core Features
//!
//! - **Provider Chain**: Gemini and Mistral adapters behind one trait, with
//!   ordered fallback ending in offline local synthesis
//! - **A/B Generation**: primary/alternative pairs from contrasting providers
//!   at contrasting temperatures, generated concurrently
//! - **Deterministic Scoring**: readability, clarity, platform fit, and
//!   engagement computed purely from (text, platform)
//!
//! ## Quick Start
//!
//! ```ignore
//! use copyforge::generate::{GenerationMode, Orchestrator, VariantSetBuilder};
//! use copyforge::provider::{ProviderConfig, ProviderRegistry, create_provider};
//!
//! let registry = ProviderRegistry::new()
//!     .register(create_provider("gemini", ProviderConfig::default())?)
//!     .register(create_provider("local", ProviderConfig::default())?);
//! let builder = VariantSetBuilder::new(Orchestrator::new(registry, "mistral"));
//! let set = builder.build(&request, GenerationMode::AbTest).await?;
//! ```
//!
//! ## Modules
//!
//! - [`provider`]: text-generation adapters, registry, local synthesis
//! - [`generate`]: prompt assembly, fallback orchestration, variant sets
//! - [`analysis`]: deterministic content quality scoring
//! - [`store`]: profile and variant persistence contracts
//! - [`config`]: layered configuration loading

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generate;
pub mod provider;
pub mod store;
pub mod types;

pub use analysis::ContentAnalyzer;
pub use generate::{GenerationMode, Orchestrator, VariantSetBuilder};
pub use provider::{ProviderRegistry, TextProvider};
pub use types::{CopyError, GenerationRequest, Metrics, Result, Variant, VariantSet};
