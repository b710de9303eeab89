pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod tui;

pub use error::{Result, VitaeError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
