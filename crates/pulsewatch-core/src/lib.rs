//! Core types and configuration for pulsewatch.
//!
//! Holds the canonical [`Post`] record, the per-cycle [`Report`] shape with
//! its sentiment/topic components, and env-driven application configuration.
//! Analysis and retrieval live in their own crates; this one has no I/O
//! beyond reading environment variables.

pub mod app_config;
pub mod config;
pub mod post;
pub mod report;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use post::Post;
pub use report::{Report, SentimentLabel, SentimentSummary, TopicSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
