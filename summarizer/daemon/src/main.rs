//! Summarizer Daemon - Bilingual Summarization Server
//!
//! Serves English and Thai summarization over HTTP. Models live behind an
//! inference server; this process routes requests to the right one.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (127.0.0.1:8000)
//! summarizer-daemon
//!
//! # Custom bind address and inference server
//! summarizer-daemon --host 0.0.0.0 --port 9000 --inference-url http://gpu-box:8080
//!
//! # With config file
//! summarizer-daemon --config /etc/summarizer/summarizer.toml
//!
//! # Verbose logging
//! RUST_LOG=debug summarizer-daemon
//! ```
//!
//! # Signals
//!
//! - `SIGTERM` / `SIGINT`: Graceful shutdown

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info, warn};

use summarizer_core::config::{default_config_path, load_config_from_path, ConfigOverrides};
use summarizer_core::{
    HttpModelLoader, LanguageRouter, ModelResourcePool, ScriptDetector, SummarizationService,
};
use summarizer_daemon::{create_router, AppState};

/// Summarizer Daemon - English/Thai text summarization server
#[derive(Parser, Debug)]
#[command(name = "summarizer-daemon")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "SUMMARIZER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bind host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Bind port
    #[arg(short = 'p', long, value_name = "PORT")]
    port: Option<u16>,

    /// Inference server base URL
    #[arg(long, value_name = "URL")]
    inference_url: Option<String>,

    /// Model identifier for English
    #[arg(long, value_name = "MODEL")]
    english_model: Option<String>,

    /// Model identifier for Thai
    #[arg(long, value_name = "MODEL")]
    thai_model: Option<String>,

    /// Skip loading models at startup (load on first request)
    #[arg(long)]
    no_preload: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "SUMMARIZER_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ref host) = self.host {
            overrides = overrides.with_host(host.clone());
        }
        if let Some(port) = self.port {
            overrides = overrides.with_port(port);
        }
        if let Some(ref url) = self.inference_url {
            overrides = overrides.with_inference_url(url.clone());
        }
        if let Some(ref model) = self.english_model {
            overrides = overrides.with_english_model(model.clone());
        }
        if let Some(ref model) = self.thai_model {
            overrides = overrides.with_thai_model(model.clone());
        }
        if self.no_preload {
            overrides = overrides.with_preload_models(false);
        }
        overrides
    }
}

/// Initialize logging with the specified level
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "summarizer_daemon={level},summarizer_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Resolve once SIGTERM or SIGINT arrives
async fn shutdown_signal() {
    let (mut sigterm, mut sigint) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(term), Ok(int)) => (term, int),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = %e, "Failed to install signal handlers, falling back to ctrl-c");
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for ctrl-c");
            }
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM, initiating shutdown"),
        _ = sigint.recv() => info!("Received SIGINT, initiating shutdown"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging first
    init_logging(&args.log_level);

    info!("Summarizer Daemon starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(config_path).context("Failed to load configuration")?;
    args.overrides().apply(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(
        source = %config.source(),
        config_file = ?config.config_file_path,
        inference_url = %config.inference.base_url,
        english_model = %config.model.english_model,
        thai_model = %config.model.thai_model,
        "Configuration resolved"
    );

    let loader = Arc::new(
        HttpModelLoader::new(&config.inference).context("Failed to build inference client")?,
    );
    let pool = Arc::new(ModelResourcePool::new(loader, config.model.clone()));
    let router = LanguageRouter::new(Arc::new(ScriptDetector::default()));
    let service = SummarizationService::from_config(pool.clone(), router, &config.model);

    if config.server.preload_models {
        // Startup continues on failure; the first request retries the load
        if let Err(e) = pool.ensure_loaded().await {
            warn!(error = %e, "Model preload failed, will retry on first request");
        }
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let api_prefix = config.app.api_prefix.clone();
    let app = create_router(AppState::new(service, pool, config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %addr, api_prefix = %api_prefix, "Listening");

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match result {
        Ok(()) => {
            info!("Summarizer daemon stopped cleanly");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Daemon stopped with error");
            Err(e.into())
        }
    }
}
