//! Interlinear formatter WASM API
//!
//! This module provides the JavaScript-facing API of the formatter.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `format`: Formatting, result panel and close operations

pub mod helpers;
pub mod format;

// Re-export all public functions to keep a flat API
pub use format::{
    close_format_result, escape_tier_name_js, format_sentence_js, format_sentence_with_url,
    show_format_result,
};
