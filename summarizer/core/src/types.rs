//! Request and result types for the summarization pipeline

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A request to summarize one text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRequest {
    /// Text to summarize (must not be blank)
    pub text: String,
    /// Maximum summary length in model tokens (must be > 0)
    pub max_length: u32,
    /// Minimum summary length in model tokens (must be ≤ `max_length`)
    pub min_length: u32,
    /// Explicit language code; bypasses detection when present
    pub language_hint: Option<String>,
}

impl SummarizationRequest {
    /// Create a request without a language hint
    pub fn new(text: impl Into<String>, max_length: u32, min_length: u32) -> Self {
        Self {
            text: text.into(),
            max_length,
            min_length,
            language_hint: None,
        }
    }

    /// Set an explicit language hint
    #[must_use]
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.language_hint = Some(code.into());
        self
    }
}

/// Outcome of a successful summarization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummarizationResult {
    /// Text as submitted (never truncated)
    pub original_text: String,
    /// Generated summary
    pub summary_text: String,
    /// Character count of `original_text`
    pub original_length: usize,
    /// Character count of `summary_text`
    pub summary_length: usize,
    /// `1 - summary_length / original_length`, rounded to two decimals
    pub compression_ratio: f64,
    /// Language bucket that handled the request
    pub detected_language: Language,
    /// Whether the input was clipped to the character budget before inference
    pub truncated: bool,
}
