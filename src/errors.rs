//! Error types for the host boundary
//!
//! The formatting pipeline itself never fails: bad annotation data degrades
//! to placeholder text. Errors only come from the page the formatter is
//! mounted in (missing container, no window, props that do not deserialize).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    /// Props handed in from JavaScript did not match the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No `.formatResultContainer` carries the requested sentence id
    #[error("No result container for sentence {0}")]
    ContainerNotFound(String),

    /// DOM call failed (element creation, append, ...)
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Current page location could not be read or changed
    #[error("Location unavailable: {0}")]
    Location(String),
}
