//! TOML Configuration File Support
//!
//! This module provides centralized configuration loading for the summarization
//! service, supporting a TOML configuration file at
//! `~/.config/summarizer/summarizer.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (applied by the daemon through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [app]
//! name = "Summarize API"
//! api_prefix = "/api/v1"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! preload_models = true
//!
//! [model]
//! english_model = "facebook/bart-large-cnn"
//! thai_model = "csebuetnlp/mT5_multilingual_XLSum"
//! max_input_tokens = 1024
//! default_max_length = 150
//! default_min_length = 30
//!
//! [inference]
//! base_url = "http://localhost:8080"
//! timeout_secs = 120
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Approximate characters per model token, used to turn the token budget
/// into a character budget for truncation
pub const CHARS_PER_TOKEN: usize = 4;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// App section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppToml {
    /// Display name reported by the root endpoint
    pub name: Option<String>,

    /// Prefix under which the API is mounted a second time
    pub api_prefix: Option<String>,
}

/// Server section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerToml {
    /// Bind address
    pub host: Option<String>,

    /// Bind port
    pub port: Option<u16>,

    /// Whether to load both models before accepting requests
    pub preload_models: Option<bool>,
}

/// Model section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelToml {
    /// Model identifier for English (and every non-Thai language)
    pub english_model: Option<String>,

    /// Model identifier for Thai
    pub thai_model: Option<String>,

    /// Maximum model input length in tokens
    pub max_input_tokens: Option<usize>,

    /// Default summary `max_length` when a request omits it
    pub default_max_length: Option<u32>,

    /// Default summary `min_length` when a request omits it
    pub default_min_length: Option<u32>,
}

/// Inference section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceToml {
    /// Inference server base URL
    pub base_url: Option<String>,

    /// Bearer token for the inference server
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerToml {
    /// App configuration section
    pub app: AppToml,

    /// Server configuration section
    pub server: ServerToml,

    /// Model configuration section
    pub model: ModelToml,

    /// Inference configuration section
    pub inference: InferenceToml,
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Application metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Display name
    pub name: String,
    /// Version reported by `/health`
    pub version: String,
    /// Prefix under which the API is mounted a second time
    pub api_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Summarize API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_prefix: "/api/v1".to_string(),
        }
    }
}

/// HTTP listener settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Load models at startup instead of on the first request
    pub preload_models: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            preload_models: true,
        }
    }
}

/// Model identifiers and length policy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    /// Model for English (and every non-Thai language)
    pub english_model: String,
    /// Model for Thai
    pub thai_model: String,
    /// Maximum model input length in tokens
    pub max_input_tokens: usize,
    /// Default summary `max_length`
    pub default_max_length: u32,
    /// Default summary `min_length`
    pub default_min_length: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            english_model: "facebook/bart-large-cnn".to_string(),
            thai_model: "csebuetnlp/mT5_multilingual_XLSum".to_string(),
            max_input_tokens: 1024,
            default_max_length: 150,
            default_min_length: 30,
        }
    }
}

impl ModelConfig {
    /// Model identifier for a language
    #[must_use]
    pub fn model_id(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english_model,
            Language::Thai => &self.thai_model,
        }
    }

    /// Character budget for model input
    #[must_use]
    pub fn char_budget(&self) -> usize {
        self.max_input_tokens.saturating_mul(CHARS_PER_TOKEN)
    }
}

/// Inference server connection settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Server base URL
    pub base_url: String,
    /// Optional bearer token
    pub api_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_token: None,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Centralized configuration for the summarization service
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug, Default)]
pub struct SummarizerConfig {
    /// Application metadata
    pub app: AppConfig,

    /// HTTP listener settings
    pub server: ServerConfig,

    /// Model identifiers and length policy
    pub model: ModelConfig,

    /// Inference server settings
    pub inference: InferenceConfig,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::Default
    }
}

impl SummarizerConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check value constraints
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.max_input_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "model.max_input_tokens must be greater than 0".to_string(),
            ));
        }
        if self.model.default_max_length == 0 {
            return Err(ConfigError::ValidationError(
                "model.default_max_length must be greater than 0".to_string(),
            ));
        }
        if self.model.default_min_length > self.model.default_max_length {
            return Err(ConfigError::ValidationError(format!(
                "model.default_min_length ({}) must not exceed model.default_max_length ({})",
                self.model.default_min_length, self.model.default_max_length
            )));
        }
        for language in Language::ALL {
            if self.model.model_id(language).trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "model id for {} must not be empty",
                    language.display_name()
                )));
            }
        }
        if !self.app.api_prefix.is_empty() && !self.app.api_prefix.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "app.api_prefix must start with '/', got '{}'",
                self.app.api_prefix
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/summarizer/summarizer.toml` or
/// `~/.config/summarizer/summarizer.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("summarizer").join("summarizer.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if the
/// resulting values are invalid. A missing config file is not an error.
pub fn load_config() -> Result<SummarizerConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed, or
/// if validation fails.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<SummarizerConfig, ConfigError> {
    let mut config = SummarizerConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: SummarizerToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut SummarizerConfig, toml: &SummarizerToml) {
    if let Some(ref name) = toml.app.name {
        config.app.name = name.clone();
    }
    if let Some(ref prefix) = toml.app.api_prefix {
        config.app.api_prefix = prefix.clone();
    }

    if let Some(ref host) = toml.server.host {
        config.server.host = host.clone();
    }
    if let Some(port) = toml.server.port {
        config.server.port = port;
    }
    if let Some(preload) = toml.server.preload_models {
        config.server.preload_models = preload;
    }

    if let Some(ref model) = toml.model.english_model {
        config.model.english_model = model.clone();
    }
    if let Some(ref model) = toml.model.thai_model {
        config.model.thai_model = model.clone();
    }
    if let Some(tokens) = toml.model.max_input_tokens {
        config.model.max_input_tokens = tokens;
    }
    if let Some(length) = toml.model.default_max_length {
        config.model.default_max_length = length;
    }
    if let Some(length) = toml.model.default_min_length {
        config.model.default_min_length = length;
    }

    if let Some(ref url) = toml.inference.base_url {
        config.inference.base_url = url.clone();
    }
    if toml.inference.api_token.is_some() {
        config.inference.api_token = toml.inference.api_token.clone();
    }
    if let Some(secs) = toml.inference.timeout_secs {
        config.inference.timeout = Duration::from_secs(secs);
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut SummarizerConfig) {
    if let Ok(name) = std::env::var("SUMMARIZER_APP_NAME") {
        config.app.name = name;
        config.source = ConfigSource::Env;
    }
    if let Ok(prefix) = std::env::var("SUMMARIZER_API_PREFIX") {
        config.app.api_prefix = prefix;
        config.source = ConfigSource::Env;
    }

    if let Ok(host) = std::env::var("SUMMARIZER_HOST") {
        config.server.host = host;
        config.source = ConfigSource::Env;
    }
    if let Ok(port) = std::env::var("SUMMARIZER_PORT") {
        if let Ok(p) = port.parse::<u16>() {
            config.server.port = p;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(preload) = std::env::var("SUMMARIZER_PRELOAD") {
        config.server.preload_models = preload != "0" && preload.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }

    if let Ok(model) = std::env::var("SUMMARIZER_ENGLISH_MODEL") {
        config.model.english_model = model;
        config.source = ConfigSource::Env;
    }
    if let Ok(model) = std::env::var("SUMMARIZER_THAI_MODEL") {
        config.model.thai_model = model;
        config.source = ConfigSource::Env;
    }
    if let Ok(tokens) = std::env::var("SUMMARIZER_MAX_INPUT_LENGTH") {
        if let Ok(t) = tokens.parse::<usize>() {
            config.model.max_input_tokens = t;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(length) = std::env::var("SUMMARIZER_MAX_OUTPUT_LENGTH") {
        if let Ok(l) = length.parse::<u32>() {
            config.model.default_max_length = l;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(length) = std::env::var("SUMMARIZER_MIN_OUTPUT_LENGTH") {
        if let Ok(l) = length.parse::<u32>() {
            config.model.default_min_length = l;
            config.source = ConfigSource::Env;
        }
    }

    if let Ok(url) = std::env::var("SUMMARIZER_INFERENCE_URL") {
        config.inference.base_url = url;
        config.source = ConfigSource::Env;
    }
    if let Ok(token) = std::env::var("SUMMARIZER_INFERENCE_TOKEN") {
        config.inference.api_token = Some(token);
        config.source = ConfigSource::Env;
    }
    if let Ok(timeout) = std::env::var("SUMMARIZER_INFERENCE_TIMEOUT") {
        if let Ok(secs) = timeout.parse::<u64>() {
            config.inference.timeout = Duration::from_secs(secs);
            config.source = ConfigSource::Env;
        }
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Bind address override
    pub host: Option<String>,

    /// Bind port override
    pub port: Option<u16>,

    /// Preload override
    pub preload_models: Option<bool>,

    /// Inference server URL override
    pub inference_url: Option<String>,

    /// English model override
    pub english_model: Option<String>,

    /// Thai model override
    pub thai_model: Option<String>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bind address override
    #[must_use]
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set bind port override
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set preload override
    #[must_use]
    pub fn with_preload_models(mut self, preload: bool) -> Self {
        self.preload_models = Some(preload);
        self
    }

    /// Set inference server URL override
    #[must_use]
    pub fn with_inference_url(mut self, url: String) -> Self {
        self.inference_url = Some(url);
        self
    }

    /// Set English model override
    #[must_use]
    pub fn with_english_model(mut self, model: String) -> Self {
        self.english_model = Some(model);
        self
    }

    /// Set Thai model override
    #[must_use]
    pub fn with_thai_model(mut self, model: String) -> Self {
        self.thai_model = Some(model);
        self
    }

    fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.preload_models.is_none()
            && self.inference_url.is_none()
            && self.english_model.is_none()
            && self.thai_model.is_none()
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut SummarizerConfig) {
        if !self.is_empty() {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(preload) = self.preload_models {
            config.server.preload_models = preload;
        }
        if let Some(ref url) = self.inference_url {
            config.inference.base_url = url.clone();
        }
        if let Some(ref model) = self.english_model {
            config.model.english_model = model.clone();
        }
        if let Some(ref model) = self.thai_model {
            config.model.thai_model = model.clone();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = SummarizerConfig::default();

        assert_eq!(config.app.name, "Summarize API");
        assert_eq!(config.app.api_prefix, "/api/v1");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.preload_models);
        assert_eq!(config.model.english_model, "facebook/bart-large-cnn");
        assert_eq!(config.model.max_input_tokens, 1024);
        assert_eq!(config.model.default_max_length, 150);
        assert_eq!(config.model.default_min_length, 30);
        assert_eq!(config.inference.timeout, Duration::from_secs(120));
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_char_budget_is_four_chars_per_token() {
        let model = ModelConfig::default();
        assert_eq!(model.char_budget(), 4096);
    }

    #[test]
    fn test_model_id_per_language() {
        let model = ModelConfig::default();
        assert_eq!(model.model_id(Language::English), "facebook/bart-large-cnn");
        assert_eq!(
            model.model_id(Language::Thai),
            "csebuetnlp/mT5_multilingual_XLSum"
        );
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("summarizer"));
            assert!(p.to_string_lossy().ends_with("summarizer.toml"));
        }
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let file = write_toml(
            r#"
[app]
name = "Custom Summaries"
api_prefix = "/api/v2"

[server]
host = "0.0.0.0"
port = 9000
preload_models = false

[model]
thai_model = "custom/thai-sum"
max_input_tokens = 512
default_max_length = 100
default_min_length = 10

[inference]
base_url = "http://inference:9090"
"#,
        );

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.app.name, "Custom Summaries");
        assert_eq!(config.app.api_prefix, "/api/v2");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.preload_models);
        assert_eq!(config.model.thai_model, "custom/thai-sum");
        assert_eq!(config.model.max_input_tokens, 512);
        assert_eq!(config.model.default_max_length, 100);
        assert_eq!(config.model.default_min_length, 10);
        assert_eq!(config.inference.base_url, "http://inference:9090");
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let file = write_toml(
            r#"
[server]
port = 8123
"#,
        );

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.model.max_input_tokens, 1024);
        assert_eq!(config.model.default_max_length, 150);
    }

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/path/summarizer.toml");
        let config = load_config_from_path(Some(path)).unwrap();

        assert!(config.config_file_path.is_none());
        assert!(
            config.source() == ConfigSource::Default || config.source() == ConfigSource::Env,
            "Expected Default or Env source, got: {:?}",
            config.source()
        );
    }

    #[test]
    fn test_malformed_toml_error() {
        let file = write_toml(
            r#"
[server
port = "not a number"
"#,
        );

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let file = write_toml(
            r#"
[model]
default_max_length = 20
default_min_length = 40
"#,
        );

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        match result.unwrap_err() {
            ConfigError::ValidationError(msg) => {
                assert!(msg.contains("default_min_length"));
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SummarizerConfig::default();
        config.model.max_input_tokens = 0;
        assert!(config.validate().is_err());

        let mut config = SummarizerConfig::default();
        config.model.thai_model = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = SummarizerConfig::default();
        config.app.api_prefix = "api".to_string();
        assert!(config.validate().is_err());

        let mut config = SummarizerConfig::default();
        config.app.api_prefix = String::new();
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // Priority Ordering Tests
    // =========================================================================

    /// Environment variables override file values.
    ///
    /// No other test reads `SUMMARIZER_INFERENCE_TIMEOUT`.
    #[test]
    fn test_env_overrides_file() {
        let file = write_toml(
            r#"
[inference]
timeout_secs = 30
"#,
        );

        std::env::set_var("SUMMARIZER_INFERENCE_TIMEOUT", "45");
        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        std::env::remove_var("SUMMARIZER_INFERENCE_TIMEOUT");

        assert_eq!(config.inference.timeout, Duration::from_secs(45));
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = SummarizerConfig::default();
        config.inference.base_url = "http://env-host:1".to_string();
        config.set_source(ConfigSource::Env);

        let overrides =
            ConfigOverrides::new().with_inference_url("http://cli-host:2".to_string());
        overrides.apply(&mut config);

        assert_eq!(config.inference.base_url, "http://cli-host:2");
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_apply() {
        let mut config = SummarizerConfig::default();

        ConfigOverrides::new()
            .with_host("0.0.0.0".to_string())
            .with_port(9999)
            .with_preload_models(false)
            .with_english_model("sshleifer/distilbart-cnn-12-6".to_string())
            .with_thai_model("custom/thai".to_string())
            .apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9999);
        assert!(!config.server.preload_models);
        assert_eq!(config.model.english_model, "sshleifer/distilbart-cnn-12-6");
        assert_eq!(config.model.thai_model, "custom/thai");
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = SummarizerConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI");
        assert_eq!(format!("{}", ConfigSource::Env), "environment");
        assert_eq!(format!("{}", ConfigSource::File), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{}", read_err);
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));

        let validation_err = ConfigError::ValidationError("invalid value".to_string());
        assert!(format!("{}", validation_err).contains("invalid value"));
    }
}
