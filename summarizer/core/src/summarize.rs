//! Summarization Orchestrator
//!
//! The public entry point of the core. One call runs:
//!
//! ```text
//! validate ─▶ route ─▶ truncate ─▶ infer ─▶ metrics
//! ```
//!
//! Truncation keeps the first `max_input_tokens * 4` characters and drops
//! the tail. It may cut mid-sentence; the model sees the clipped text while
//! `original_length` and the compression ratio still describe what the
//! caller submitted.
//!
//! Nothing here retries. Retry policy belongs to the caller.

use std::sync::Arc;

use tracing::{debug, info, Instrument};
use uuid::Uuid;

use crate::backend::GenerationRequest;
use crate::config::ModelConfig;
use crate::error::SummarizeError;
use crate::pool::ModelProvider;
use crate::router::LanguageRouter;
use crate::types::{SummarizationRequest, SummarizationResult};

/// Validates, routes and runs summarization requests
#[derive(Clone)]
pub struct SummarizationService {
    models: Arc<dyn ModelProvider>,
    router: LanguageRouter,
    char_budget: usize,
}

impl SummarizationService {
    /// Create a service over a model provider
    ///
    /// `char_budget` is the maximum number of input characters passed to a
    /// model; see [`ModelConfig::char_budget`].
    pub fn new(models: Arc<dyn ModelProvider>, router: LanguageRouter, char_budget: usize) -> Self {
        Self {
            models,
            router,
            char_budget,
        }
    }

    /// Create a service using the model config's character budget
    pub fn from_config(
        models: Arc<dyn ModelProvider>,
        router: LanguageRouter,
        config: &ModelConfig,
    ) -> Self {
        Self::new(models, router, config.char_budget())
    }

    /// Maximum input characters passed to a model
    #[must_use]
    pub fn char_budget(&self) -> usize {
        self.char_budget
    }

    /// Whether the underlying models are loaded
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.models.is_ready()
    }

    /// Summarize one text
    ///
    /// # Errors
    ///
    /// - [`SummarizeError::InvalidParameter`] for blank text, zero
    ///   `max_length`, or `min_length > max_length`
    /// - [`SummarizeError::UnsupportedLanguage`] for a bad explicit hint
    /// - [`SummarizeError::ResourceInitialization`] if models cannot load
    /// - [`SummarizeError::Inference`] if generation fails or is empty
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, SummarizeError> {
        let span = tracing::info_span!("summarize", request_id = %Uuid::new_v4());
        self.summarize_inner(request).instrument(span).await
    }

    async fn summarize_inner(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, SummarizeError> {
        validate(request)?;

        let language = self
            .router
            .route(&request.text, request.language_hint.as_deref())?;

        let original_length = request.text.chars().count();
        let input = truncate_chars(&request.text, self.char_budget);
        let truncated = input.len() < request.text.len();
        if truncated {
            debug!(
                original_chars = original_length,
                budget = self.char_budget,
                "Input truncated to character budget"
            );
        }

        let model = self.models.model_for(language).await?;
        let generation = GenerationRequest::new(input, request.max_length, request.min_length);

        let summary_text =
            model
                .summarize(&generation)
                .await
                .map_err(|e| SummarizeError::Inference {
                    language,
                    reason: e.to_string(),
                })?;

        let summary_length = summary_text.chars().count();
        if summary_length == 0 {
            return Err(SummarizeError::Inference {
                language,
                reason: "model returned an empty summary".to_string(),
            });
        }

        let compression_ratio = compression_ratio(original_length, summary_length)?;

        info!(
            language = %language,
            model_id = model.model_id(),
            original_length,
            summary_length,
            compression_ratio,
            truncated,
            "Summarized text"
        );

        Ok(SummarizationResult {
            original_text: request.text.clone(),
            summary_text,
            original_length,
            summary_length,
            compression_ratio,
            detected_language: language,
            truncated,
        })
    }
}

/// Check request parameters before any routing or inference
fn validate(request: &SummarizationRequest) -> Result<(), SummarizeError> {
    if request.text.trim().is_empty() {
        return Err(SummarizeError::InvalidParameter(
            "text must not be empty".to_string(),
        ));
    }
    if request.max_length == 0 {
        return Err(SummarizeError::InvalidParameter(
            "max_length must be greater than 0".to_string(),
        ));
    }
    if request.min_length > request.max_length {
        return Err(SummarizeError::InvalidParameter(format!(
            "min_length ({}) must not exceed max_length ({})",
            request.min_length, request.max_length
        )));
    }
    Ok(())
}

/// Leading `budget` characters of `text`, cut on a char boundary
#[must_use]
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// `1 - summary/original`, rounded to two decimals
///
/// Rounding is done on the exact rational value with ties going to the even
/// hundredth, so `1 - 7/8 = 0.125` becomes `0.12`.
///
/// # Errors
///
/// Returns [`SummarizeError::DegenerateInput`] when `original_length` is 0.
pub fn compression_ratio(
    original_length: usize,
    summary_length: usize,
) -> Result<f64, SummarizeError> {
    if original_length == 0 {
        return Err(SummarizeError::DegenerateInput);
    }
    let original = original_length as i128;
    let hundredths = 100 * (original - summary_length as i128);

    // floor division keeps the remainder non-negative for negative ratios
    let quotient = hundredths.div_euclid(original);
    let twice_remainder = 2 * hundredths.rem_euclid(original);
    let rounded = match twice_remainder.cmp(&original) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    };
    Ok(rounded as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_at_budget_is_untouched() {
        let text = "a".repeat(16);
        assert_eq!(truncate_chars(&text, 16), text);
        assert_eq!(truncate_chars(&text, 100), text);
    }

    #[test]
    fn test_truncate_one_over_budget() {
        let text = "a".repeat(17);
        assert_eq!(truncate_chars(&text, 16).chars().count(), 16);
    }

    #[test]
    fn test_truncate_respects_multibyte_chars() {
        // Each Thai character is three bytes in UTF-8
        let text = "กขคงจ";
        assert_eq!(truncate_chars(text, 3), "กขค");
        assert_eq!(truncate_chars(text, 0), "");
    }

    #[test]
    fn test_compression_ratio_rounding() {
        assert!((compression_ratio(50, 10).unwrap() - 0.8).abs() < f64::EPSILON);
        assert!((compression_ratio(3, 1).unwrap() - 0.67).abs() < f64::EPSILON);
        assert!((compression_ratio(10, 10).unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compression_ratio_ties_round_to_even() {
        // 0.125, 0.625 and -0.125 sit exactly between two hundredths
        assert!((compression_ratio(8, 7).unwrap() - 0.12).abs() < f64::EPSILON);
        assert!((compression_ratio(8, 3).unwrap() - 0.62).abs() < f64::EPSILON);
        assert!((compression_ratio(8, 9).unwrap() - -0.12).abs() < f64::EPSILON);
        assert!((compression_ratio(8, 1).unwrap() - 0.88).abs() < f64::EPSILON);
        assert!((compression_ratio(40, 1).unwrap() - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compression_ratio_can_be_negative() {
        assert!((compression_ratio(10, 25).unwrap() - -1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compression_ratio_zero_original() {
        assert!(matches!(
            compression_ratio(0, 5),
            Err(SummarizeError::DegenerateInput)
        ));
    }

    #[test]
    fn test_validate() {
        assert!(validate(&SummarizationRequest::new("text", 150, 30)).is_ok());
        assert!(validate(&SummarizationRequest::new("text", 30, 30)).is_ok());
        assert!(validate(&SummarizationRequest::new("text", 10, 0)).is_ok());

        for bad in [
            SummarizationRequest::new("", 150, 30),
            SummarizationRequest::new("   \n", 150, 30),
            SummarizationRequest::new("text", 0, 0),
            SummarizationRequest::new("text", 20, 40),
        ] {
            assert!(matches!(
                validate(&bad),
                Err(SummarizeError::InvalidParameter(_))
            ));
        }
    }
}
