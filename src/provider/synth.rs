//! Local Synthesis Provider
//!
//! Terminal step of the fallback chain: synthesizes placeholder text from a
//! small rotating set of sentence starters plus the head of the prompt. Fully
//! deterministic for a given (prompt, temperature) and it never fails, which
//! is what lets the orchestrator guarantee a complete result even when every
//! remote provider is down.

use async_trait::async_trait;

use super::TextProvider;
use crate::constants::generation::SYNTH_PROMPT_PREVIEW_CHARS;
use crate::types::error::ProviderError;

pub const PROVIDER_NAME: &str = "local";

const STARTERS: [&str; 4] = [
    "Here's an approach: ",
    "Consider this perspective: ",
    "One way to think about this: ",
    "An alternative viewpoint: ",
];

/// Synthesize placeholder text for a prompt.
///
/// The starter is selected by `(temperature * starter_count) mod
/// starter_count`, so nearby temperatures rotate through distinct openings
/// without any randomness.
pub fn synthesize(prompt: &str, temperature: f64) -> String {
    let index = (temperature * STARTERS.len() as f64) as usize % STARTERS.len();
    format!("{}{}", STARTERS[index], truncate(prompt, SYNTH_PROMPT_PREVIEW_CHARS))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Always-available provider backed by [`synthesize`].
#[derive(Debug, Clone, Default)]
pub struct LocalSynthProvider;

#[async_trait]
impl TextProvider for LocalSynthProvider {
    async fn generate(
        &self,
        prompt: &str,
        temperature: f64,
    ) -> std::result::Result<String, ProviderError> {
        Ok(synthesize(prompt, temperature))
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}
