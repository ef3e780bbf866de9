//! Sentence structure
//!
//! Derives the interlinear structure of a sentence from its tiers:
//! which tier feeds which section, which morphs belong to which word,
//! and the metadata needed to cite the sentence.
//!
//! ## Modules
//!
//! - `tiers`: tier selection -> section values
//! - `alignment`: words -> morph/gloss tokens (single forward pass)
//! - `metadata`: title, story id, permalink

pub mod tiers;
pub mod alignment;
pub mod metadata;

// Re-exports for convenience
pub use tiers::{resolve_tiers, ResolvedTiers};
pub use alignment::{align_words, pair_entries, Alignment, EntryPair};
pub use metadata::{extract_citation, permalink_index, sentence_url, Citation};
