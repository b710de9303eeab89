//! Output formatters for CLI commands
//!
//! Provides structured formatters for common output types that can render
//! to multiple formats (Human, JSON, Plain).

mod page_text;

pub use page_text::PageText;
