//! Summarizer Core - Language Routing and Model Selection
//!
//! This crate decides which of two language-specific summarization models
//! handles a text, applies the length and truncation policy, invokes the
//! model and derives response metrics. It has no HTTP server dependencies;
//! the daemon crate is a thin boundary over it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    SummarizationService                      │
//! │   summarize_batch ──▶ summarize                              │
//! │                          │                                   │
//! │            ┌─────────────┼──────────────────┐                │
//! │            ▼             ▼                  ▼                │
//! │     LanguageRouter   truncate_chars   ModelProvider          │
//! │            │                                │                │
//! │            ▼                                ▼                │
//! │    LanguageDetector                 ModelResourcePool        │
//! │    (ScriptDetector)                 ┌──────┴──────┐          │
//! │                                     │ en    │  th │          │
//! │                                     └──────┬──────┘          │
//! │                                            ▼                 │
//! │                                       ModelLoader            │
//! │                                   (HttpModelLoader)          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use summarizer_core::{
//!     load_config, HttpModelLoader, LanguageRouter, ModelResourcePool, ScriptDetector,
//!     SummarizationRequest, SummarizationService,
//! };
//!
//! let config = load_config()?;
//! let loader = Arc::new(HttpModelLoader::new(&config.inference)?);
//! let pool = Arc::new(ModelResourcePool::new(loader, config.model.clone()));
//! let router = LanguageRouter::new(Arc::new(ScriptDetector::default()));
//! let service = SummarizationService::from_config(pool, router, &config.model);
//!
//! let result = service
//!     .summarize(&SummarizationRequest::new(text, 150, 30))
//!     .await?;
//! println!("{} ({})", result.summary_text, result.compression_ratio);
//! ```
//!
//! # Module Overview
//!
//! - [`backend`]: Inference collaborator traits and the HTTP implementation
//! - [`batch`]: Ordered, fail-fast batch summarization
//! - [`config`]: TOML/env configuration
//! - [`detect`]: Language detection collaborator
//! - [`error`]: Typed errors tagged with their pipeline stage
//! - [`language`]: The closed set of supported languages
//! - [`pool`]: Lazily-loaded model handles
//! - [`router`]: Hint/detection based language routing
//! - [`summarize`]: The orchestrator
//! - [`types`]: Request and result types

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod backend;
pub mod batch;
pub mod config;
pub mod detect;
pub mod error;
pub mod language;
pub mod pool;
pub mod router;
pub mod summarize;
pub mod types;

// Re-exports for convenience
pub use backend::{
    GenerationRequest, HttpModelLoader, HttpSummarizationModel, ModelLoader, SummarizationModel,
};
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, InferenceConfig, ModelConfig, SummarizerConfig, SummarizerToml,
    CHARS_PER_TOKEN,
};
pub use detect::{DetectionError, LanguageDetector, ScriptDetector};
pub use error::{Stage, SummarizeError};
pub use language::Language;
pub use pool::{LoadState, ModelProvider, ModelResource, ModelResourcePool, ModelStatus};
pub use router::LanguageRouter;
pub use summarize::{compression_ratio, truncate_chars, SummarizationService};
pub use types::{SummarizationRequest, SummarizationResult};
