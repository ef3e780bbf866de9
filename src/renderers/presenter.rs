//! Result panel presentation
//!
//! The result panel shows a short header, the citation fields and the
//! LaTeX source, each as its own preformatted block, in a fixed order.

use crate::config::FormatSettings;
use crate::errors::FormatError;
use crate::host::RenderTarget;
use crate::models::FormattedResult;
use crate::renderers::latex::escape_underscores;

/// Blocks shown in the result panel, in display order
pub fn presentation_blocks(
    result: &FormattedResult,
    latex: &str,
    settings: &FormatSettings,
) -> Vec<String> {
    vec![
        settings.header.clone(),
        format!("Story title: {}\n", result.title.replace('_', " ")),
        format!("Story ID: {}\n", escape_underscores(&result.story_id)),
        format!("Sentence URL: {}\n", escape_underscores(&result.sentence_url)),
        settings.library_note.clone(),
        latex.to_string(),
    ]
}

/// Write the result panel into `target`
///
/// Blocks are appended after whatever the target already holds; the host
/// clears the panel by resetting the view.
pub fn present(
    target: &mut dyn RenderTarget,
    result: &FormattedResult,
    latex: &str,
    settings: &FormatSettings,
) -> Result<(), FormatError> {
    let blocks = presentation_blocks(result, latex, settings);
    for block in &blocks {
        target.append_preformatted(block)?;
    }
    log::debug!("Presented {} blocks for story {}", blocks.len(), result.story_id);
    Ok(())
}

/// In-memory render target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTarget {
    pub blocks: Vec<String>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks joined the way they read on screen
    pub fn text(&self) -> String {
        self.blocks.concat()
    }
}

impl RenderTarget for MemoryTarget {
    fn append_preformatted(&mut self, text: &str) -> Result<(), FormatError> {
        self.blocks.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), FormatError> {
        self.blocks.clear();
        Ok(())
    }
}
