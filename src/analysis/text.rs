//! Text Splitting Primitives
//!
//! Sentence, word, and syllable splitting used by the analyzer. These rules
//! are deliberately simple and language-agnostic: the goal is a reproducible
//! heuristic, not linguistic accuracy.

/// Split text into non-empty trimmed sentences on `.`, `!`, `?` runs.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate syllables in one word: vowel-group runs (minimum one), minus one
/// for a silent trailing "e".
pub fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();

    let mut runs = 0usize;
    let mut in_run = false;
    for c in lower.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }

    let mut count = runs.max(1);
    if lower.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count
}

/// Total estimated syllables across all words in the text.
pub fn total_syllables(text: &str) -> usize {
    text.split_whitespace().map(syllable_count).sum()
}
