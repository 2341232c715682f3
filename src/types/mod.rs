//! Core domain types and the unified error system.

pub mod content;
pub mod error;

pub use content::{AudienceProfile, GenerationRequest, Metrics, Variant, VariantSet};
pub use error::{CopyError, ProviderError, ProviderErrorKind, Result};
