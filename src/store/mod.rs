//! External Collaborator Contracts
//!
//! The core never talks to storage directly; it reads audience profiles
//! through `ProfileStore` and hands finished variant sets to `VariantStore`.
//! The in-memory implementations back the CLI and tests; a real deployment
//! plugs its own persistence behind the same traits.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::{AudienceProfile, CopyError, GenerationRequest, Result, VariantSet};

/// Read-only audience profile lookup.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_audience_profile(&self, id: &str) -> Result<AudienceProfile>;
}

/// Sink for finished variant sets plus their parent request metadata.
/// Never queried mid-generation.
#[async_trait]
pub trait VariantStore: Send + Sync {
    async fn save(&self, request: &GenerationRequest, set: &VariantSet) -> Result<()>;
}

// =============================================================================
// In-Memory Implementations
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, AudienceProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, id: impl Into<String>, profile: AudienceProfile) -> Self {
        self.profiles.insert(id.into(), profile);
        self
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_audience_profile(&self, id: &str) -> Result<AudienceProfile> {
        self.profiles
            .get(id)
            .cloned()
            .ok_or_else(|| CopyError::NotFound(format!("audience profile: {}", id)))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryVariantStore {
    saved: Mutex<Vec<(GenerationRequest, VariantSet)>>,
}

impl InMemoryVariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saved.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VariantStore for InMemoryVariantStore {
    async fn save(&self, request: &GenerationRequest, set: &VariantSet) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| CopyError::Config("variant store lock poisoned".to_string()))?;
        saved.push((request.clone(), set.clone()));
        Ok(())
    }
}
