//! Content Analysis Engine
//!
//! Deterministic, provider-independent scorer. Computes readability, clarity,
//! platform-fit, and engagement metrics from raw text plus a target platform.
//! Pure function of its inputs: no I/O, no side effects, no state carried
//! between calls. It never fails; degenerate input yields neutral defaults.

pub mod text;

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::scoring;
use crate::types::Metrics;
use text::{split_sentences, syllable_count, total_syllables, word_count};

/// Be-verb followed eventually by "by", the classic passive construction.
static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(am|are|is|was|were|be|being|been)\b.+\bby\b")
        .expect("passive voice pattern is valid")
});

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

/// Deterministic content scorer.
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer;

impl ContentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score text against a target platform.
    ///
    /// Repeated calls with identical inputs return bit-identical metrics.
    pub fn score(&self, content: &str, platform: &str) -> Metrics {
        let readability = self.readability(content);
        let clarity = self.clarity(content);
        let platform_optimization = self.platform_score(content, platform);

        // 40% readability, 40% clarity, 20% platform, on a 0-100 scale
        let engagement = (readability * 4.0
            + clarity * 4.0
            + f64::from(platform_optimization) * 0.2)
            .round()
            .clamp(0.0, 100.0) as u8;

        Metrics {
            readability,
            clarity,
            platform_optimization,
            engagement,
            tips: self.optimization_tips(content),
        }
    }

    /// Flesch Reading Ease approximation, normalized to 0-10.
    fn readability(&self, content: &str) -> f64 {
        let sentences = split_sentences(content).len();
        let words = word_count(content);

        if sentences == 0 || words == 0 {
            return scoring::NEUTRAL_READABILITY;
        }

        let syllables = total_syllables(content);
        let raw = 206.835
            - 1.015 * (words as f64 / sentences as f64)
            - 84.6 * (syllables as f64 / words as f64);

        raw.clamp(0.0, 100.0) / 10.0
    }

    /// Sentence-structure score on 0-10: penalizes comma-heavy sentences and
    /// passive voice.
    fn clarity(&self, content: &str) -> f64 {
        let sentences = split_sentences(content);
        if sentences.is_empty() {
            return scoring::NEUTRAL_CLARITY;
        }

        let mut complex = 0usize;
        let mut passive = 0usize;

        for sentence in &sentences {
            if sentence.matches(',').count() > scoring::COMPLEX_SENTENCE_COMMAS {
                complex += 1;
            }
            if PASSIVE_VOICE.is_match(sentence) {
                passive += 1;
            }
        }

        let penalty = complex as f64 * scoring::COMPLEXITY_PENALTY
            + passive as f64 * scoring::PASSIVE_PENALTY;
        (10.0 - penalty).max(0.0)
    }

    /// Platform-fit score on 0-100, biased by platform-specific rules.
    fn platform_score(&self, content: &str, platform: &str) -> u8 {
        let platform = platform.to_lowercase();
        let length = content.chars().count();
        let mut score = scoring::PLATFORM_BASE_SCORE;

        if platform.contains("twitter") {
            if length <= scoring::TWITTER_CHAR_LIMIT {
                score += 20;
            }
            if HASHTAG.find_iter(content).count() >= 2 {
                score += 10;
            }
        } else if platform.contains("linkedin") {
            if content.contains('?') {
                score += 10;
            }
            if has_bullet_marker(content) {
                score += 10;
            }
            if length > 100 && length < 500 {
                score += 10;
            }
        } else if platform.contains("email") {
            if content.split("\n\n").count() > 3 {
                score += 10;
            }
            if content.to_lowercase().contains("regards") {
                score += 10;
            }
        }

        score.min(100) as u8
    }

    /// Human-readable improvement tips, one bullet line per detected issue.
    fn optimization_tips(&self, content: &str) -> String {
        let mut tips = Vec::new();

        let long_sentences = split_sentences(content)
            .iter()
            .filter(|s| word_count(s) > scoring::LONG_SENTENCE_WORDS)
            .count();
        if long_sentences > 0 {
            tips.push(format!("- Break up {} long sentences", long_sentences));
        }

        let complex_words = content
            .split_whitespace()
            .filter(|w| {
                w.chars().count() > scoring::COMPLEX_WORD_LEN
                    && syllable_count(w) > scoring::COMPLEX_WORD_SYLLABLES
            })
            .count();
        if complex_words > scoring::COMPLEX_WORD_TIP_THRESHOLD {
            tips.push(format!("- Simplify {} complex words", complex_words));
        }

        if PASSIVE_VOICE.is_match(content) {
            tips.push("- Reduce passive voice constructions".to_string());
        }

        if tips.is_empty() {
            "Great job! This content is well-optimized".to_string()
        } else {
            tips.join("\n")
        }
    }
}

fn has_bullet_marker(content: &str) -> bool {
    content.contains('•') || content.contains("* ") || content.contains("- ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn analyzer() -> ContentAnalyzer {
        ContentAnalyzer::new()
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let metrics = analyzer().score("", "twitter");
        assert_eq!(metrics.readability, 6.0);
    }

    #[test]
    fn test_punctuation_only_is_neutral() {
        let metrics = analyzer().score("...", "email");
        assert_eq!(metrics.readability, 6.0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let text = "Ship early. Ask questions, gather feedback, then iterate!";
        let a = analyzer().score(text, "linkedin");
        let b = analyzer().score(text, "linkedin");
        assert_eq!(a, b);
    }

    #[test]
    fn test_readability_formula() {
        // "Go now." -> 1 sentence, 2 words, 2 syllables
        // 206.835 - 1.015*2 - 84.6*1 = 120.235 -> clamped to 100 -> 10.0
        let metrics = analyzer().score("Go now.", "blog");
        assert_eq!(metrics.readability, 10.0);
    }

    #[test]
    fn test_clarity_penalizes_comma_heavy_sentences() {
        let text = "First, second, third, and fourth all in one breath.";
        let metrics = analyzer().score(text, "blog");
        assert!((metrics.clarity - 9.7).abs() < 1e-9);
    }

    #[test]
    fn test_clarity_penalizes_passive_voice() {
        let text = "The report was written by the intern.";
        let metrics = analyzer().score(text, "blog");
        assert!((metrics.clarity - 9.8).abs() < 1e-9);
    }

    #[test]
    fn test_clarity_combined_penalties() {
        let text = "One, two, three, four was done by them.";
        let metrics = analyzer().score(text, "blog");
        assert!((metrics.clarity - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_twitter_short_with_hashtags_beats_long_untagged() {
        let tagged = analyzer().score("Great news! #launch #ai", "twitter");
        assert_eq!(tagged.platform_optimization, 100);

        let untagged = "Great news without tags ".repeat(13); // > 280 chars
        assert!(untagged.chars().count() > 280);
        let plain = analyzer().score(&untagged, "twitter");
        assert_eq!(plain.platform_optimization, 70);
        assert!(tagged.platform_optimization > plain.platform_optimization);
    }

    #[test]
    fn test_twitter_one_hashtag_no_bonus() {
        let metrics = analyzer().score("Short update #launch", "twitter");
        assert_eq!(metrics.platform_optimization, 90);
    }

    #[test]
    fn test_linkedin_bonuses() {
        let text = format!(
            "What did we learn this quarter?\n• Ship faster\n• Talk to users\n{}",
            "Growth compounds when teams listen closely to real user feedback. ".repeat(2)
        );
        let len = text.chars().count();
        assert!(len > 100 && len < 500);
        let metrics = analyzer().score(&text, "linkedin");
        assert_eq!(metrics.platform_optimization, 100);
    }

    #[test]
    fn test_linkedin_length_bounds_are_strict() {
        let exactly_100: String = "a".repeat(100);
        let metrics = analyzer().score(&exactly_100, "linkedin");
        // no question, no bullets, length not strictly above 100
        assert_eq!(metrics.platform_optimization, 70);
    }

    #[test]
    fn test_email_bonuses() {
        let text = "Hi team,\n\nFirst update.\n\nSecond update.\n\nBest regards,\nSam";
        let metrics = analyzer().score(text, "email");
        assert_eq!(metrics.platform_optimization, 90);
    }

    #[test]
    fn test_unknown_platform_gets_base_score() {
        let metrics = analyzer().score("Anything at all.", "tiktok");
        assert_eq!(metrics.platform_optimization, 70);
    }

    #[test]
    fn test_engagement_weighting() {
        // "Great news! #launch #ai": readability 10.0, clarity 10.0, platform 100
        // -> 10*4 + 10*4 + 100*0.2 = 100
        let metrics = analyzer().score("Great news! #launch #ai", "twitter");
        assert_eq!(metrics.engagement, 100);
    }

    #[test]
    fn test_tips_flags_long_sentences() {
        let long = format!("{} end.", "word ".repeat(25));
        let metrics = analyzer().score(&long, "blog");
        assert!(metrics.tips.contains("Break up 1 long sentences"));
    }

    #[test]
    fn test_tips_flags_passive_voice_once() {
        let text = "Errors were caught by the linter. Bugs were found by reviewers.";
        let metrics = analyzer().score(text, "blog");
        assert_eq!(
            metrics.tips.matches("Reduce passive voice").count(),
            1
        );
    }

    #[test]
    fn test_tips_flags_complex_words_above_threshold() {
        let text = "Organizational prioritization necessitates collaborative optimization initiatives.";
        let metrics = analyzer().score(text, "blog");
        assert!(metrics.tips.contains("complex words"));
    }

    #[test]
    fn test_tips_positive_when_clean() {
        let metrics = analyzer().score("Short and clear. Easy to read.", "blog");
        assert_eq!(metrics.tips, "Great job! This content is well-optimized");
    }

    proptest! {
        #[test]
        fn prop_metric_ranges(text in ".{0,400}", platform in "(twitter|linkedin|email|blog)") {
            let metrics = analyzer().score(&text, &platform);
            prop_assert!((0.0..=10.0).contains(&metrics.readability));
            prop_assert!((0.0..=10.0).contains(&metrics.clarity));
            prop_assert!(metrics.platform_optimization <= 100);
            prop_assert!(metrics.engagement <= 100);
        }

        #[test]
        fn prop_score_is_deterministic(text in ".{0,200}") {
            let a = analyzer().score(&text, "twitter");
            let b = analyzer().score(&text, "twitter");
            prop_assert_eq!(a, b);
        }
    }
}
