//! HTTP Server
//!
//! Thin axum boundary over the summarization core. Handlers map JSON bodies
//! onto [`SummarizationRequest`]s, apply configured length defaults, and
//! translate every core failure into a 500 with a `detail` message.
//!
//! ```text
//!   /                  GET   service banner + model status
//!   /health            GET   liveness + model_loaded
//!   /summarize[/]      POST  one text
//!   /summarize/batch   POST  list of texts (fail-fast)
//! ```
//!
//! The same routes are mounted again under the configured API prefix.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use summarizer_core::{
    Language, ModelResourcePool, ModelStatus, SummarizationRequest, SummarizationResult,
    SummarizationService, SummarizeError, SummarizerConfig,
};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator
    pub service: SummarizationService,
    /// Pool backing the orchestrator, for status reporting
    pub pool: Arc<ModelResourcePool>,
    /// Resolved configuration
    pub config: Arc<SummarizerConfig>,
}

impl AppState {
    /// Bundle handler state
    pub fn new(
        service: SummarizationService,
        pool: Arc<ModelResourcePool>,
        config: SummarizerConfig,
    ) -> Self {
        Self {
            service,
            pool,
            config: Arc::new(config),
        }
    }
}

/// Summarize request body
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SummarizeRequestBody {
    /// Text to summarize
    pub text: String,
    /// Maximum summary length; configured default when absent
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Minimum summary length; configured default when absent
    #[serde(default)]
    pub min_length: Option<u32>,
    /// Language code (`"en"` or `"th"`); detected when absent
    #[serde(default)]
    pub language: Option<String>,
}

/// Summarize response body
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SummarizeResponseBody {
    /// Text as submitted
    pub original_text: String,
    /// Generated summary
    pub summary: String,
    /// Character count of `original_text`
    pub original_length: usize,
    /// Character count of `summary`
    pub summary_length: usize,
    /// `1 - summary_length / original_length`, two decimals
    pub compression_ratio: f64,
    /// Language that handled the request
    pub language: Language,
}

impl From<SummarizationResult> for SummarizeResponseBody {
    fn from(result: SummarizationResult) -> Self {
        Self {
            original_text: result.original_text,
            summary: result.summary_text,
            original_length: result.original_length,
            summary_length: result.summary_length,
            compression_ratio: result.compression_ratio,
            language: result.detected_language,
        }
    }
}

/// `GET /health` body
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests
    pub status: String,
    /// Whether both models are loaded
    pub model_loaded: bool,
    /// Service version
    pub version: String,
}

/// `GET /` body
#[derive(Clone, Debug, Serialize)]
pub struct RootResponse {
    /// Banner message
    pub message: String,
    /// Service version
    pub version: String,
    /// Per-language model status
    pub models: Vec<ModelStatus>,
}

/// Core failure rendered as HTTP 500
#[derive(Debug, Error)]
#[error("Error summarizing text: {0}")]
pub struct ApiError(#[from] SummarizeError);

impl ApiError {
    /// Whether resubmitting the same request could succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.0.is_retryable()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(
            stage = %self.0.stage(),
            retryable = self.is_retryable(),
            error = %self.0,
            "Request failed"
        );
        let body = serde_json::json!({ "detail": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn to_request(body: SummarizeRequestBody, config: &SummarizerConfig) -> SummarizationRequest {
    SummarizationRequest {
        text: body.text,
        max_length: body.max_length.unwrap_or(config.model.default_max_length),
        min_length: body.min_length.unwrap_or(config.model.default_min_length),
        language_hint: body.language,
    }
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", state.config.app.name),
        version: state.config.app.version.clone(),
        models: state.pool.statuses(),
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.pool.is_ready(),
        version: state.config.app.version.clone(),
    })
}

async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequestBody>,
) -> Result<Json<SummarizeResponseBody>, ApiError> {
    let request = to_request(body, &state.config);
    debug!(
        chars = request.text.chars().count(),
        language = ?request.language_hint,
        "Summarize request"
    );
    let result = state.service.summarize(&request).await?;
    Ok(Json(result.into()))
}

async fn summarize_batch(
    State(state): State<AppState>,
    Json(bodies): Json<Vec<SummarizeRequestBody>>,
) -> Result<Json<Vec<SummarizeResponseBody>>, ApiError> {
    let requests: Vec<SummarizationRequest> = bodies
        .into_iter()
        .map(|body| to_request(body, &state.config))
        .collect();
    debug!(batch_size = requests.len(), "Batch summarize request");
    let results = state.service.summarize_batch(&requests).await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/summarize", post(summarize))
        .route("/summarize/", post(summarize))
        .route("/summarize/batch", post(summarize_batch))
}

/// Build the application router
///
/// Routes are served at the root and, when configured, under
/// `config.app.api_prefix`.
pub fn create_router(state: AppState) -> Router {
    let prefix = state.config.app.api_prefix.trim_end_matches('/').to_string();
    let mut router = routes();
    if !prefix.is_empty() {
        router = router.nest(&prefix, routes());
    }
    router.with_state(state)
}
