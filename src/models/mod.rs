//! Models module for the interlinear formatter
//!
//! This module contains the data models handed in by the host page
//! (sentence tiers, story metadata) and the structures produced by a
//! formatting pass.

pub mod tier;
pub mod metadata;
pub mod result;
pub mod serde_helpers;

// Re-export commonly used types
pub use tier::*;
pub use metadata::*;
pub use result::*;
