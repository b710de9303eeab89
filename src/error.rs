//! Error handling for vitae.
//!
//! A small taxonomy: IO and serialization failures bubble up via `#[from]`,
//! everything else is a domain error with a human-readable message.

use std::io;

use thiserror::Error;

/// Main error type for vitae operations.
#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Not an interactive terminal: {0}")]
    NotInteractive(String),

    #[error("Content validation failed: {0}")]
    ContentInvalid(String),
}

impl VitaeError {
    /// Stable machine-readable code, used by the JSON error envelope.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
            Self::UnknownSection(_) => "unknown_section",
            Self::NotInteractive(_) => "not_interactive",
            Self::ContentInvalid(_) => "content_invalid",
        }
    }
}

/// Result type alias using VitaeError.
pub type Result<T> = std::result::Result<T, VitaeError>;
