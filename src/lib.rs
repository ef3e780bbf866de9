//! Interlinear Gloss Formatter WASM Module
//!
//! Converts an annotated sentence from the story viewer into a gb4e
//! interlinear-gloss LaTeX example and shows it in the sentence's result
//! panel.

pub mod config;
pub mod errors;
pub mod models;
pub mod parse;
pub mod structure;
pub mod renderers;
pub mod diagnostics;
pub mod host;
pub mod pipeline;
pub mod api;

// Re-export commonly used types
pub use config::FormatSettings;
pub use errors::FormatError;
pub use models::*;
pub use pipeline::{format_sentence, FormatOutput};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Interlinear formatter WASM module initialized");
}
