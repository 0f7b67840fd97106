//! Inference Backend Integration
//!
//! This module provides abstracted access to summarization models through a
//! loader/handle pair of traits.
//!
//! # Available Backends
//!
//! - **HTTP**: Hugging Face–style inference server (default)
//!
//! # Usage
//!
//! ```ignore
//! use summarizer_core::backend::{GenerationRequest, HttpModelLoader, ModelLoader};
//!
//! let loader = HttpModelLoader::new(&config.inference)?;
//! let model = loader.load(Language::English, "facebook/bart-large-cnn").await?;
//! let summary = model.summarize(&GenerationRequest::new(text, 150, 30)).await?;
//! ```

mod http;
mod traits;

pub use http::{HttpModelLoader, HttpSummarizationModel};
pub use traits::{GenerationRequest, ModelLoader, SummarizationModel};
