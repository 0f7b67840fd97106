//! Summarizer Daemon - HTTP boundary for the summarization core
//!
//! The binary in `main.rs` resolves configuration, builds the model pool and
//! serves the router defined in [`server`]. The router is exposed here so
//! tests can drive it without binding a socket.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod server;

pub use server::{
    create_router, ApiError, AppState, HealthResponse, RootResponse, SummarizeRequestBody,
    SummarizeResponseBody,
};
