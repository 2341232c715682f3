//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Provider adapter constants
pub mod provider {
    /// Per-call timeout for outbound provider requests (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;

    /// Fixed max-output-token ceiling sent to every provider
    pub const MAX_OUTPUT_TOKENS: usize = 2048;
}

/// Content analysis constants
pub mod scoring {
    /// Base platform-fit score before platform-specific bonuses
    pub const PLATFORM_BASE_SCORE: u32 = 70;

    /// Sentences above this word count are flagged as long
    pub const LONG_SENTENCE_WORDS: usize = 20;

    /// Words longer than this are complex-word candidates
    pub const COMPLEX_WORD_LEN: usize = 5;

    /// Complex-word candidates need more syllables than this
    pub const COMPLEX_WORD_SYLLABLES: usize = 3;

    /// Complex-word tip fires only above this many occurrences
    pub const COMPLEX_WORD_TIP_THRESHOLD: usize = 3;

    /// Sentences with more commas than this take the complexity penalty
    pub const COMPLEX_SENTENCE_COMMAS: usize = 2;

    /// Clarity penalty per complex sentence
    pub const COMPLEXITY_PENALTY: f64 = 0.3;

    /// Clarity penalty per passive-voice sentence
    pub const PASSIVE_PENALTY: f64 = 0.2;

    /// Readability returned when the text has no sentences or words
    pub const NEUTRAL_READABILITY: f64 = 6.0;

    /// Clarity returned when the text has no non-empty sentences
    pub const NEUTRAL_CLARITY: f64 = 7.0;

    /// Twitter character limit bonus cutoff
    pub const TWITTER_CHAR_LIMIT: usize = 280;
}

/// Generation policy constants
pub mod generation {
    /// Temperature offset applied to the secondary variant in A/B mode
    pub const AB_TEMPERATURE_STEP: f64 = 0.2;

    /// How much of the prompt the local synthesis fallback echoes back
    pub const SYNTH_PROMPT_PREVIEW_CHARS: usize = 200;
}
