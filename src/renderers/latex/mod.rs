//! LaTeX export module
//!
//! Renders an aligned sentence as a gb4e / gb4e-modified interlinear example.
//!
//! # Module Structure
//!
//! - **classify**: stem vs. bound-morph decision for gloss tokens
//! - **assembler**: line builders and the complete `exe` environment

pub mod classify;
pub mod assembler;

pub use classify::{classify, render_gloss, GlossKind};
pub use assembler::{to_latex, escape_underscores};
