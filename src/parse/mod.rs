//! Parsing module for the interlinear formatter
//!
//! String-level helpers: tier-name escaping and morph segmentation.

pub mod escape;
pub mod morphs;

// Re-export commonly used functions
pub use escape::escape_tier_name;
pub use morphs::{split_morphs, is_boundary_marker, CLITIC_MARKER, AFFIX_MARKER};
