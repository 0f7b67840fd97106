//! Supported Languages
//!
//! The service ships exactly two summarization models, so language is a
//! closed two-variant enum rather than an open string. Adding a third
//! language means adding a variant here, and every `match` on [`Language`]
//! then refuses to compile until the new bucket is handled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

/// A language bucket with its own summarization model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English, and every detected language that is not Thai
    #[serde(rename = "en")]
    English,
    /// Thai
    #[serde(rename = "th")]
    Thai,
}

impl Language {
    /// Every supported language, in load order
    pub const ALL: [Language; 2] = [Language::English, Language::Thai];

    /// Fallback when detection cannot decide
    pub const DEFAULT: Language = Language::English;

    /// Wire code (`"en"` / `"th"`)
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Thai => "th",
        }
    }

    /// Human-readable name
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Thai => "Thai",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "th" => Ok(Self::Thai),
            _ => Err(SummarizeError::UnsupportedLanguage(s.to_string())),
        }
    }
}
