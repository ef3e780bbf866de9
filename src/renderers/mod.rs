//! Renderers module for the interlinear formatter
//!
//! This module contains the output side of a formatting pass:
//! the LaTeX export and the result panel presenter.

pub mod latex;
pub mod presenter;

// Re-export commonly used items
pub use latex::{to_latex, render_gloss, classify, GlossKind};
pub use presenter::{present, presentation_blocks, MemoryTarget};
