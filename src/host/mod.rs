//! Host capabilities
//!
//! The formatter never reads browser globals directly. The page location
//! and the result container are reached through the two traits below, so
//! the pipeline can run (and be tested) without a DOM.

pub mod dom;
pub mod location;

pub use dom::{DomRenderTarget, reload_view};
pub use location::{StaticUrl, WindowLocation};

use crate::errors::FormatError;

/// Supplies the URL of the page the story is being viewed on
pub trait UrlProvider {
    fn current_url(&self) -> Result<String, FormatError>;
}

/// Somewhere preformatted text blocks can be written
pub trait RenderTarget {
    /// Append one preformatted block after the existing ones
    fn append_preformatted(&mut self, text: &str) -> Result<(), FormatError>;

    /// Drop every block written so far
    fn clear(&mut self) -> Result<(), FormatError>;
}
