//! Summarization Errors
//!
//! Typed failures raised by the core. Every error knows which [`Stage`] of
//! the pipeline produced it, and its message starts with that stage so a
//! caller reading the HTTP detail can tell which collaborator is at fault.
//! Translating errors to status codes is the boundary's job.

use std::fmt;

use thiserror::Error;

use crate::language::Language;

/// Pipeline stage that produced an error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Request parameter checks
    Validation,
    /// Language hint parsing and detection
    Routing,
    /// Model resource initialization
    Loading,
    /// Model invocation
    Inference,
    /// Derived metric computation
    Metrics,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Routing => "routing",
            Self::Loading => "loading",
            Self::Inference => "inference",
            Self::Metrics => "metrics",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the summarization core
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Caller input violates a request contract
    #[error("validation: {0}")]
    InvalidParameter(String),

    /// Explicit language hint outside the supported set
    #[error("routing: unsupported language '{0}' (expected 'en' or 'th')")]
    UnsupportedLanguage(String),

    /// A model resource failed to load; the pool stays retryable
    #[error("loading: failed to load {language} model '{model_id}': {reason}")]
    ResourceInitialization {
        /// Language whose model failed
        language: Language,
        /// Model identifier passed to the loader
        model_id: String,
        /// Loader failure description
        reason: String,
    },

    /// The inference collaborator failed during generation
    #[error("inference: {language} model failed: {reason}")]
    Inference {
        /// Language of the model that was invoked
        language: Language,
        /// Collaborator failure description
        reason: String,
    },

    /// Zero-length input reached ratio computation
    #[error("metrics: cannot compute compression ratio for zero-length input")]
    DegenerateInput,

    /// A batch item failed and aborted the whole batch
    #[error("batch: item {index} failed: {source}")]
    BatchItem {
        /// Zero-based position of the failing request
        index: usize,
        /// The item's own error
        #[source]
        source: Box<SummarizeError>,
    },
}

impl SummarizeError {
    /// Stage that raised this error
    ///
    /// For batch failures this is the stage of the failing item.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidParameter(_) => Stage::Validation,
            Self::UnsupportedLanguage(_) => Stage::Routing,
            Self::ResourceInitialization { .. } => Stage::Loading,
            Self::Inference { .. } => Stage::Inference,
            Self::DegenerateInput => Stage::Metrics,
            Self::BatchItem { source, .. } => source.stage(),
        }
    }

    /// Whether a later identical call could succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ResourceInitialization { .. } | Self::Inference { .. } => true,
            Self::BatchItem { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_start_with_stage() {
        let cases = [
            SummarizeError::InvalidParameter("text must not be empty".into()),
            SummarizeError::UnsupportedLanguage("fr".into()),
            SummarizeError::ResourceInitialization {
                language: Language::Thai,
                model_id: "thai-model".into(),
                reason: "connection refused".into(),
            },
            SummarizeError::Inference {
                language: Language::English,
                reason: "timeout".into(),
            },
            SummarizeError::DegenerateInput,
        ];

        for err in cases {
            let msg = err.to_string();
            assert!(
                msg.starts_with(&err.stage().to_string()),
                "message '{msg}' should start with stage '{}'",
                err.stage()
            );
        }
    }

    #[test]
    fn test_stage_names() {
        let names: Vec<String> = [
            Stage::Validation,
            Stage::Routing,
            Stage::Loading,
            Stage::Inference,
            Stage::Metrics,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(
            names,
            ["validation", "routing", "loading", "inference", "metrics"]
        );
    }

    #[test]
    fn test_batch_item_reports_inner_stage() {
        let err = SummarizeError::BatchItem {
            index: 1,
            source: Box::new(SummarizeError::InvalidParameter("bad bounds".into())),
        };

        assert_eq!(err.stage(), Stage::Validation);
        assert!(!err.is_retryable());
        let msg = err.to_string();
        assert!(msg.contains("item 1"));
        assert!(msg.contains("bad bounds"));
    }

    #[test]
    fn test_retryable() {
        assert!(SummarizeError::Inference {
            language: Language::Thai,
            reason: "boom".into()
        }
        .is_retryable());
        assert!(!SummarizeError::UnsupportedLanguage("xx".into()).is_retryable());
        assert!(!SummarizeError::DegenerateInput.is_retryable());
    }
}
