//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Taxonomy
//!
//! - **Config**: unknown/unsupported provider or invalid configuration.
//!   Fatal, surfaced immediately, never retried
//! - **Validation**: bad caller input (blank prompt, out-of-range temperature),
//!   rejected before any provider call
//! - **Provider**: a single provider call failed. Recovered internally by the
//!   fallback policy and never surfaced past the orchestrator
//!
//! ## Design Principles
//!
//! - Single unified error type (CopyError) for the entire application
//! - Provider failures carry the provider name and a structured cause
//! - No panic/unwrap - all errors are recoverable or surfaced as typed values

use thiserror::Error;

// =============================================================================
// Provider Error
// =============================================================================

/// Cause of a failed provider call
#[derive(Debug, Clone)]
pub enum ProviderErrorKind {
    /// Network failure, including the per-call deadline elapsing
    Transport(String),
    /// Non-2xx HTTP status; body kept for diagnostics
    Status { status: u16, body: String },
    /// 2xx response without the expected generated-text field
    MalformedResponse(String),
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            Self::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

/// A single provider call failure, normalized across transport errors,
/// non-2xx statuses, and malformed response bodies.
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// Provider that produced the error
    pub provider: String,
    /// Structured cause
    pub kind: ProviderErrorKind,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.provider, self.kind)
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    pub fn transport(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            kind: ProviderErrorKind::Transport(message.into()),
        }
    }

    pub fn status(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            kind: ProviderErrorKind::Status {
                status,
                body: body.into(),
            },
        }
    }

    pub fn malformed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            kind: ProviderErrorKind::MalformedResponse(message.into()),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CopyError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Unknown provider name or invalid configuration; never retried
    #[error("Config error: {0}")]
    Config(String),

    /// Caller input rejected before any provider call
    #[error("Validation error: {0}")]
    Validation(String),

    /// A provider call failed; absorbed by the fallback policy inside the
    /// orchestrator, surfaced only by callers that bypass it
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ProviderError> for CopyError {
    fn from(err: ProviderError) -> Self {
        CopyError::Provider(err)
    }
}

pub type Result<T> = std::result::Result<T, CopyError>;

// =============================================================================
// Tests
// =============================================================================
