//! Inference Backend Traits
//!
//! Trait definitions for the inference collaborator. The core never knows how
//! a model runs; it only asks a [`ModelLoader`] for a handle once per
//! language and then calls [`SummarizationModel::summarize`] on it.
//!
//! # Design Philosophy
//!
//! Loading and generating are separate traits:
//! - [`ModelLoader`] performs the expensive, one-time initialization
//! - [`SummarizationModel`] is the read-only handle shared by all requests
//!
//! Implementations handle provider-specific details (API formats, auth, etc.)

use std::sync::Arc;

use async_trait::async_trait;

use crate::language::Language;

/// Parameters for one generation call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Input text, already truncated to the character budget
    pub text: String,
    /// Maximum summary length (model tokens)
    pub max_length: u32,
    /// Minimum summary length (model tokens)
    pub min_length: u32,
    /// Whether to sample; the core always sends `false`
    pub do_sample: bool,
}

impl GenerationRequest {
    /// Create a deterministic (greedy/beam, non-sampling) request
    pub fn new(text: impl Into<String>, max_length: u32, min_length: u32) -> Self {
        Self {
            text: text.into(),
            max_length,
            min_length,
            do_sample: false,
        }
    }
}

/// A loaded summarization model
///
/// Handles are immutable after loading and may be used concurrently by any
/// number of requests.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    /// Identifier the model was loaded from
    fn model_id(&self) -> &str;

    /// Generate a summary for `request.text`
    async fn summarize(&self, request: &GenerationRequest) -> anyhow::Result<String>;
}

/// Creates model handles
///
/// `load` may block its task for a long time (downloads, warmup). The pool
/// calls it at most once per language per successful initialization.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Get the loader name (e.g., "HTTP inference")
    fn name(&self) -> &str;

    /// Load the model identified by `model_id` for `language`
    async fn load(
        &self,
        language: Language,
        model_id: &str,
    ) -> anyhow::Result<Arc<dyn SummarizationModel>>;
}
