//! Language Detection
//!
//! Best-effort guess of a text's natural language. Detection is never a hard
//! dependency: the router treats every [`DetectionError`] as "use the
//! default".
//!
//! The shipped [`ScriptDetector`] votes by Unicode script, which is enough to
//! separate Thai from everything else.

use std::collections::HashMap;

use thiserror::Error;

/// Why detection could not produce an answer
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// Too few letters to decide
    #[error("text too short to detect language ({letters} letters, need {required})")]
    TooShort {
        /// Letters found
        letters: usize,
        /// Minimum required
        required: usize,
    },

    /// No single script dominates
    #[error("ambiguous language: no dominant script")]
    Ambiguous,
}

/// Guesses the language of a text span
pub trait LanguageDetector: Send + Sync {
    /// Return a language tag such as `"th"` or `"en"`
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError`] when the text gives no usable signal.
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Writing systems the script detector distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Script {
    Thai,
    Latin,
    Han,
    Kana,
    Hangul,
    Cyrillic,
    Arabic,
    Devanagari,
}

impl Script {
    fn of(c: char) -> Option<Self> {
        match c {
            '\u{0E00}'..='\u{0E7F}' => Some(Self::Thai),
            // U+00D7 and U+00F7 are the multiplication and division signs
            'a'..='z'
            | 'A'..='Z'
            | '\u{00C0}'..='\u{00D6}'
            | '\u{00D8}'..='\u{00F6}'
            | '\u{00F8}'..='\u{024F}' => Some(Self::Latin),
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' => Some(Self::Han),
            '\u{3040}'..='\u{30FF}' => Some(Self::Kana),
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' => Some(Self::Hangul),
            '\u{0400}'..='\u{04FF}' => Some(Self::Cyrillic),
            '\u{0600}'..='\u{06FF}' => Some(Self::Arabic),
            '\u{0900}'..='\u{097F}' => Some(Self::Devanagari),
            _ => None,
        }
    }

    fn language_tag(self) -> &'static str {
        match self {
            Self::Thai => "th",
            Self::Latin => "en",
            Self::Han => "zh",
            Self::Kana => "ja",
            Self::Hangul => "ko",
            Self::Cyrillic => "ru",
            Self::Arabic => "ar",
            Self::Devanagari => "hi",
        }
    }
}

/// Detects language from the dominant Unicode script
#[derive(Clone, Debug)]
pub struct ScriptDetector {
    min_letters: usize,
}

impl ScriptDetector {
    /// Default minimum number of script letters
    pub const DEFAULT_MIN_LETTERS: usize = 3;

    /// Create a detector that needs at least `min_letters` script letters
    #[must_use]
    pub fn new(min_letters: usize) -> Self {
        Self {
            min_letters: min_letters.max(1),
        }
    }
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LETTERS)
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        let mut counts: HashMap<Script, usize> = HashMap::new();
        for script in text.chars().filter_map(Script::of) {
            *counts.entry(script).or_default() += 1;
        }

        let letters: usize = counts.values().sum();
        if letters < self.min_letters {
            return Err(DetectionError::TooShort {
                letters,
                required: self.min_letters,
            });
        }

        let mut ranked: Vec<(Script, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        match ranked.as_slice() {
            [(_, n1), (_, n2), ..] if n1 == n2 => Err(DetectionError::Ambiguous),
            [(first, _), ..] => Ok(first.language_tag().to_string()),
            [] => Err(DetectionError::Ambiguous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_thai() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect("สวัสดีครับ ยินดีต้อนรับ").unwrap(), "th");
    }

    #[test]
    fn test_detects_latin_as_english() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect(&"A".repeat(50)).unwrap(), "en");
        assert_eq!(
            detector.detect("The quick brown fox jumps over the lazy dog").unwrap(),
            "en"
        );
    }

    #[test]
    fn test_dominant_script_wins_in_mixed_text() {
        let detector = ScriptDetector::default();
        // Thai sentence with an embedded English product name
        assert_eq!(
            detector.detect("วันนี้เราจะพูดถึง iPhone รุ่นใหม่ที่เพิ่งเปิดตัว").unwrap(),
            "th"
        );
    }

    #[test]
    fn test_other_scripts_are_reported() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect("Привет, как дела?").unwrap(), "ru");
        assert_eq!(detector.detect("今天天气很好").unwrap(), "zh");
    }

    #[test]
    fn test_short_text_fails() {
        let detector = ScriptDetector::default();
        assert_eq!(
            detector.detect("ok").unwrap_err(),
            DetectionError::TooShort {
                letters: 2,
                required: 3
            }
        );
        assert!(detector.detect("12345 !!!").is_err());
    }

    #[test]
    fn test_math_signs_are_not_letters() {
        let detector = ScriptDetector::default();
        assert_eq!(
            detector.detect("2 × 3 ÷ 6 ab").unwrap_err(),
            DetectionError::TooShort {
                letters: 2,
                required: 3
            }
        );
        assert_eq!(detector.detect("Ærøskøbing façade").unwrap(), "en");
    }

    #[test]
    fn test_tie_is_ambiguous() {
        let detector = ScriptDetector::new(2);
        assert_eq!(detector.detect("ab กข").unwrap_err(), DetectionError::Ambiguous);
    }
}
