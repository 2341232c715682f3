//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Config, GenerationConfig, ProvidersConfig};
