//! HTTP Inference Backend
//!
//! Model loader for a Hugging Face–style inference server.
//!
//! # Inference API
//!
//! The server provides:
//! - `GET /status/{model_id}` - Whether the model is available (used as the load step)
//! - `POST /models/{model_id}` - Run the summarization pipeline
//!
//! Requests always disable sampling so identical inputs produce identical
//! summaries.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use super::traits::{GenerationRequest, ModelLoader, SummarizationModel};
use crate::config::InferenceConfig;
use crate::language::Language;

/// Loads model handles backed by an HTTP inference server
#[derive(Clone)]
pub struct HttpModelLoader {
    /// Server base URL without trailing slash
    base_url: String,
    /// Optional bearer token
    api_token: Option<String>,
    /// HTTP client shared with every loaded model
    http_client: reqwest::Client,
}

impl HttpModelLoader {
    /// Create a loader from inference configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            http_client,
        })
    }

    /// Get the status endpoint URL for a model
    fn status_url(&self, model_id: &str) -> String {
        format!("{}/status/{model_id}", self.base_url)
    }

    /// Get the inference endpoint URL for a model
    fn models_url(&self, model_id: &str) -> String {
        format!("{}/models/{model_id}", self.base_url)
    }
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
    fn name(&self) -> &str {
        "HTTP inference"
    }

    async fn load(
        &self,
        language: Language,
        model_id: &str,
    ) -> anyhow::Result<Arc<dyn SummarizationModel>> {
        let start = Instant::now();

        let mut request = self.http_client.get(self.status_url(model_id));
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("inference server returned {status} for model status: {body}");
        }

        debug!(
            language = %language,
            model_id = model_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Model available on inference server"
        );

        Ok(Arc::new(HttpSummarizationModel {
            model_id: model_id.to_string(),
            url: self.models_url(model_id),
            api_token: self.api_token.clone(),
            http_client: self.http_client.clone(),
        }))
    }
}

/// Handle for one model on the inference server
pub struct HttpSummarizationModel {
    model_id: String,
    url: String,
    api_token: Option<String>,
    http_client: reqwest::Client,
}

impl HttpSummarizationModel {
    fn build_payload(request: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "inputs": request.text,
            "parameters": {
                "max_length": request.max_length,
                "min_length": request.min_length,
                "do_sample": request.do_sample,
                "truncation": "only_first",
            },
        })
    }
}

/// Pull `summary_text` out of a pipeline response
///
/// Accepts both the list form (`[{"summary_text": ...}]`) and a bare object.
fn extract_summary(data: &serde_json::Value) -> anyhow::Result<String> {
    if let Some(error) = data.get("error").and_then(|e| e.as_str()) {
        anyhow::bail!("inference server error: {error}");
    }

    let entry = match data {
        serde_json::Value::Array(items) => items.first(),
        other => Some(other),
    };

    entry
        .and_then(|e| e.get("summary_text"))
        .and_then(|s| s.as_str())
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("response has no summary_text: {data}"))
}

#[async_trait]
impl SummarizationModel for HttpSummarizationModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn summarize(&self, request: &GenerationRequest) -> anyhow::Result<String> {
        let start = Instant::now();

        let mut http_request = self
            .http_client
            .post(&self.url)
            .json(&Self::build_payload(request));
        if let Some(ref token) = self.api_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("inference server returned {status}: {body}");
        }

        let data: serde_json::Value = response.json().await?;
        let summary = extract_summary(&data)?;

        debug!(
            model_id = %self.model_id,
            input_chars = request.text.chars().count(),
            summary_chars = summary.chars().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generated summary"
        );

        Ok(summary)
    }
}
