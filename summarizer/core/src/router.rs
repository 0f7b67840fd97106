//! Language Router
//!
//! Picks the model bucket for a request:
//!
//! 1. An explicit hint wins and skips detection entirely.
//! 2. Otherwise the detector runs; `"th"` routes to Thai and every other
//!    recognized language routes to English.
//! 3. Detection failure falls back to [`Language::DEFAULT`] with a warning.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::detect::LanguageDetector;
use crate::error::SummarizeError;
use crate::language::Language;

/// Routes text to a language bucket
#[derive(Clone)]
pub struct LanguageRouter {
    detector: Arc<dyn LanguageDetector>,
    fallback: Language,
}

impl LanguageRouter {
    /// Create a router that falls back to English
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self {
            detector,
            fallback: Language::DEFAULT,
        }
    }

    /// Language used when detection fails
    #[must_use]
    pub fn fallback(&self) -> Language {
        self.fallback
    }

    /// Decide which language bucket handles `text`
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::UnsupportedLanguage`] if `hint` is present
    /// but not a supported code. Detection problems are never errors.
    pub fn route(&self, text: &str, hint: Option<&str>) -> Result<Language, SummarizeError> {
        if let Some(hint) = hint {
            let language: Language = hint.parse()?;
            debug!(language = %language, "Routing by explicit hint");
            return Ok(language);
        }

        match self.detector.detect(text) {
            Ok(tag) => {
                let language = if tag == Language::Thai.code() {
                    Language::Thai
                } else {
                    Language::English
                };
                debug!(detected = %tag, language = %language, "Routing by detection");
                Ok(language)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.fallback,
                    "Language detection failed, using fallback"
                );
                Ok(self.fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::detect::{DetectionError, ScriptDetector};

    /// Detector returning a fixed answer and counting calls
    struct FixedDetector {
        answer: Result<String, DetectionError>,
        calls: AtomicUsize,
    }

    impl FixedDetector {
        fn new(answer: Result<&str, DetectionError>) -> Arc<Self> {
            Arc::new(Self {
                answer: answer.map(String::from),
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    #[test]
    fn test_hint_bypasses_detection() {
        let detector = FixedDetector::new(Ok("en"));
        let router = LanguageRouter::new(detector.clone());

        assert_eq!(
            router.route("plain english text", Some("th")).unwrap(),
            Language::Thai
        );
        assert_eq!(router.route("ข้อความ", Some("en")).unwrap(), Language::English);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_hint_is_rejected() {
        let detector = FixedDetector::new(Ok("en"));
        let router = LanguageRouter::new(detector.clone());

        let err = router.route("text", Some("jp")).unwrap_err();
        assert!(matches!(err, SummarizeError::UnsupportedLanguage(ref c) if c == "jp"));
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_detected_thai_routes_to_thai() {
        let router = LanguageRouter::new(FixedDetector::new(Ok("th")));
        assert_eq!(router.route("whatever", None).unwrap(), Language::Thai);
    }

    #[test]
    fn test_other_languages_route_to_english() {
        for tag in ["en", "fr", "zh", "ru"] {
            let router = LanguageRouter::new(FixedDetector::new(Ok(tag)));
            assert_eq!(router.route("whatever", None).unwrap(), Language::English);
        }
    }

    #[test]
    fn test_detection_failure_falls_back_to_english() {
        let detector = FixedDetector::new(Err(DetectionError::Ambiguous));
        let router = LanguageRouter::new(detector.clone());

        assert_eq!(router.route("??", None).unwrap(), Language::English);
        assert_eq!(router.fallback(), Language::English);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_script_detector() {
        let router = LanguageRouter::new(Arc::new(ScriptDetector::default()));

        assert_eq!(
            router.route("ประเทศไทยมีจังหวัดทั้งหมด 77 จังหวัด", None).unwrap(),
            Language::Thai
        );
        assert_eq!(router.route(&"A".repeat(50), None).unwrap(), Language::English);
        assert_eq!(router.route("!", None).unwrap(), Language::English);
    }
}
