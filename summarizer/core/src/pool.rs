//! Model Resource Pool
//!
//! Owns the two long-lived model handles (English and Thai) and performs the
//! expensive load exactly once per process.
//!
//! # Load State Machine
//!
//! ```text
//!            ensure_loaded()                both loads ok
//! Unloaded ──────────────────▶ Loading ──────────────────▶ Ready
//!     ▲                           │
//!     └───────── any load fails ──┘   (nothing partial is kept)
//! ```
//!
//! The `Loading → Ready` transition is guarded by an async mutex: callers that
//! arrive during an in-flight load wait on the lock and then observe the
//! outcome instead of starting a second load. Observable state lives behind a
//! `parking_lot` lock so [`ModelResourcePool::is_ready`] never awaits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::backend::{ModelLoader, SummarizationModel};
use crate::config::ModelConfig;
use crate::error::SummarizeError;
use crate::language::Language;

/// Lifecycle of the pool's resources
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing loaded (initial state, or after a failed load)
    Unloaded,
    /// A load sequence is in flight
    Loading,
    /// Both models loaded
    Ready,
}

/// One loaded model
#[derive(Clone)]
pub struct ModelResource {
    /// Language this model serves
    pub language: Language,
    /// Identifier the model was loaded from
    pub model_id: String,
    /// Shared read-only handle
    pub handle: Arc<dyn SummarizationModel>,
}

impl std::fmt::Debug for ModelResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelResource")
            .field("language", &self.language)
            .field("model_id", &self.model_id)
            .finish_non_exhaustive()
    }
}

/// Per-language load snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModelStatus {
    /// Language bucket
    pub language: Language,
    /// Configured model identifier
    pub model_id: String,
    /// Whether the handle is loaded
    pub loaded: bool,
}

/// Source of model handles for the orchestrator
///
/// [`ModelResourcePool`] is the production implementation; tests substitute
/// their own.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// True only when every language's model is loaded
    fn is_ready(&self) -> bool;

    /// Handle for `language`, loading models first if needed
    async fn model_for(
        &self,
        language: Language,
    ) -> Result<Arc<dyn SummarizationModel>, SummarizeError>;
}

#[derive(Default)]
struct Slots {
    english: Option<ModelResource>,
    thai: Option<ModelResource>,
    loading: bool,
}

/// Clears the `loading` flag when a load sequence ends, including when the
/// caller's future is dropped mid-load.
struct LoadingGuard<'a> {
    slots: &'a RwLock<Slots>,
}

impl<'a> LoadingGuard<'a> {
    fn start(slots: &'a RwLock<Slots>) -> Self {
        slots.write().loading = true;
        Self { slots }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.slots.write().loading = false;
    }
}

impl Slots {
    fn get(&self, language: Language) -> Option<&ModelResource> {
        match language {
            Language::English => self.english.as_ref(),
            Language::Thai => self.thai.as_ref(),
        }
    }

    fn is_ready(&self) -> bool {
        self.english.is_some() && self.thai.is_some()
    }
}

/// Lazily-loaded pair of model handles
pub struct ModelResourcePool {
    loader: Arc<dyn ModelLoader>,
    models: ModelConfig,
    load_lock: Mutex<()>,
    slots: RwLock<Slots>,
    load_count: AtomicUsize,
}

impl ModelResourcePool {
    /// Create an empty pool; nothing is loaded until first use
    pub fn new(loader: Arc<dyn ModelLoader>, models: ModelConfig) -> Self {
        Self {
            loader,
            models,
            load_lock: Mutex::new(()),
            slots: RwLock::new(Slots::default()),
            load_count: AtomicUsize::new(0),
        }
    }

    /// Current load state
    #[must_use]
    pub fn state(&self) -> LoadState {
        let slots = self.slots.read();
        if slots.is_ready() {
            LoadState::Ready
        } else if slots.loading {
            LoadState::Loading
        } else {
            LoadState::Unloaded
        }
    }

    /// True only when both models are loaded
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slots.read().is_ready()
    }

    /// Number of completed load sequences (0 or 1 in a healthy process)
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Configured model identifier for a language
    #[must_use]
    pub fn model_id(&self, language: Language) -> &str {
        self.models.model_id(language)
    }

    /// Snapshot of every language's load status
    #[must_use]
    pub fn statuses(&self) -> Vec<ModelStatus> {
        let slots = self.slots.read();
        Language::ALL
            .iter()
            .map(|&language| ModelStatus {
                language,
                model_id: self.models.model_id(language).to_string(),
                loaded: slots.get(language).is_some(),
            })
            .collect()
    }

    /// Loaded resource for a language, without triggering a load
    #[must_use]
    pub fn resource(&self, language: Language) -> Option<ModelResource> {
        self.slots.read().get(language).cloned()
    }

    /// Load both models if they are not loaded yet
    ///
    /// Idempotent. Concurrent callers share one load. On failure nothing is
    /// retained, so the next call retries from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::ResourceInitialization`] naming the first
    /// language whose load failed.
    pub async fn ensure_loaded(&self) -> Result<(), SummarizeError> {
        if self.is_ready() {
            return Ok(());
        }

        let _guard = self.load_lock.lock().await;

        // Another caller may have finished the load while we waited
        if self.is_ready() {
            return Ok(());
        }

        let _loading = LoadingGuard::start(&self.slots);
        info!(
            loader = self.loader.name(),
            english_model = %self.models.english_model,
            thai_model = %self.models.thai_model,
            "Loading summarization models"
        );
        let start = Instant::now();

        let mut loaded = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let model_id = self.models.model_id(language);
            match self.loader.load(language, model_id).await {
                Ok(handle) => loaded.push(ModelResource {
                    language,
                    model_id: model_id.to_string(),
                    handle,
                }),
                Err(e) => {
                    error!(
                        language = %language,
                        model_id = model_id,
                        error = %e,
                        "Model load failed, pool left unloaded"
                    );
                    return Err(SummarizeError::ResourceInitialization {
                        language,
                        model_id: model_id.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        {
            let mut slots = self.slots.write();
            for resource in loaded {
                match resource.language {
                    Language::English => slots.english = Some(resource),
                    Language::Thai => slots.thai = Some(resource),
                }
            }
        }
        self.load_count.fetch_add(1, Ordering::SeqCst);

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Summarization models loaded"
        );
        Ok(())
    }

    /// Handle for a language code, loading models first if needed
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::UnsupportedLanguage`] for codes other than
    /// `"en"` / `"th"`, or a load error.
    pub async fn get(
        &self,
        language_code: &str,
    ) -> Result<Arc<dyn SummarizationModel>, SummarizeError> {
        let language: Language = language_code.parse()?;
        self.model_for(language).await
    }
}

#[async_trait]
impl ModelProvider for ModelResourcePool {
    fn is_ready(&self) -> bool {
        ModelResourcePool::is_ready(self)
    }

    async fn model_for(
        &self,
        language: Language,
    ) -> Result<Arc<dyn SummarizationModel>, SummarizeError> {
        self.ensure_loaded().await?;

        self.slots
            .read()
            .get(language)
            .map(|resource| Arc::clone(&resource.handle))
            .ok_or_else(|| SummarizeError::ResourceInitialization {
                language,
                model_id: self.models.model_id(language).to_string(),
                reason: "model missing after load".to_string(),
            })
    }
}
