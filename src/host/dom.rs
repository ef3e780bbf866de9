//! DOM-backed result container
//!
//! The story viewer renders one `.formatResultContainer` per sentence that
//! has a pending format request, tagged with a `sentenceId` attribute.

use web_sys::{Document, Element};

use super::RenderTarget;
use crate::errors::FormatError;

/// Class of the elements the story viewer reserves for format results
pub const CONTAINER_CLASS: &str = "formatResultContainer";

/// Attribute carrying the sentence id on the container
pub const SENTENCE_ID_ATTRIBUTE: &str = "sentenceId";

fn document() -> Result<Document, FormatError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FormatError::Dom("no document available".to_string()))
}

/// Writes `<pre>` blocks into the container belonging to one sentence
pub struct DomRenderTarget {
    document: Document,
    container: Element,
}

impl DomRenderTarget {
    /// Find the first container whose `sentenceId` attribute matches
    pub fn locate(sentence_id: &str) -> Result<Self, FormatError> {
        let document = document()?;
        let containers = document.get_elements_by_class_name(CONTAINER_CLASS);

        let container = (0..containers.length())
            .filter_map(|i| containers.item(i))
            .find(|el| el.get_attribute(SENTENCE_ID_ATTRIBUTE).as_deref() == Some(sentence_id))
            .ok_or_else(|| FormatError::ContainerNotFound(sentence_id.to_string()))?;

        Ok(Self { document, container })
    }
}

impl RenderTarget for DomRenderTarget {
    fn append_preformatted(&mut self, text: &str) -> Result<(), FormatError> {
        let pre = self
            .document
            .create_element("pre")
            .map_err(|e| FormatError::Dom(format!("create <pre>: {:?}", e)))?;
        // Text content, not innerHTML: LaTeX source is shown literally
        pre.set_text_content(Some(text));
        self.container
            .append_child(&pre)
            .map_err(|e| FormatError::Dom(format!("append <pre>: {:?}", e)))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), FormatError> {
        self.container.set_inner_html("");
        Ok(())
    }
}

/// Reload the page, clearing the tier selection window and every result panel
pub fn reload_view() -> Result<(), FormatError> {
    let window = web_sys::window()
        .ok_or_else(|| FormatError::Location("no global window".to_string()))?;
    window
        .location()
        .reload()
        .map_err(|e| FormatError::Location(format!("reload failed: {:?}", e)))
}
