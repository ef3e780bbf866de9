//! Formatting operations for the WASM API
//!
//! Entry points used by the story viewer's "format sentence" popup:
//! - `formatSentence`: LaTeX plus intermediate result, as a JS object
//! - `showFormatResult`: format and write the result panel for a sentence
//! - `closeFormatResult`: reset the view

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, format_error, serialize};
use crate::config::FormatSettings;
use crate::host::{reload_view, DomRenderTarget, StaticUrl, UrlProvider, WindowLocation};
use crate::models::{Sentence, StoryMetadata, TierMap};
use crate::parse::escape_tier_name;
use crate::pipeline::{format_sentence, FormatOutput};
use crate::renderers::presenter::present;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Props shared by every formatting entry point
struct Props {
    sentence: Sentence,
    tier_map: TierMap,
    metadata: StoryMetadata,
    settings: FormatSettings,
}

impl Props {
    fn from_js(
        sentence: JsValue,
        tier_map: JsValue,
        metadata: JsValue,
        settings: JsValue,
    ) -> Result<Self, JsValue> {
        Ok(Self {
            sentence: deserialize(sentence, "Invalid sentence")?,
            tier_map: deserialize(tier_map, "Invalid tier map")?,
            metadata: deserialize(metadata, "Invalid story metadata")?,
            settings: deserialize_or_default(settings, "Invalid format settings")?,
        })
    }

    fn run(&self, urls: &dyn UrlProvider) -> Result<FormatOutput, JsValue> {
        let output = format_sentence(
            &self.sentence,
            &self.tier_map,
            &self.metadata,
            urls,
            &self.settings,
        )
        .map_err(format_error)?;

        for mark in &output.diagnostics {
            wasm_warn!("{}: {}", mark.kind, mark.message);
        }
        Ok(output)
    }
}

/// Format a sentence using the current page URL for the permalink
///
/// # Parameters
/// - `sentence`: sentence object (`dependents`, `sentence_id`, `start_time_ms`)
/// - `tier_map`: logical section name -> escaped tier name
/// - `metadata`: story metadata (`title._default`, `story ID`, `timed`)
/// - `settings`: optional `FormatSettings`
///
/// # Returns
/// `FormatOutput` as a plain JS object
#[wasm_bindgen(js_name = formatSentence)]
pub fn format_sentence_js(
    sentence: JsValue,
    tier_map: JsValue,
    metadata: JsValue,
    settings: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("formatSentence called");

    let props = Props::from_js(sentence, tier_map, metadata, settings)?;
    let output = props.run(&WindowLocation)?;

    wasm_log!("  LaTeX generated: {} bytes", output.latex.len());
    serialize(&output, "Failed to serialize format output")
}

/// Format a sentence against an explicit page URL (no window access)
#[wasm_bindgen(js_name = formatSentenceWithUrl)]
pub fn format_sentence_with_url(
    sentence: JsValue,
    tier_map: JsValue,
    metadata: JsValue,
    page_url: String,
    settings: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("formatSentenceWithUrl called: {}", page_url);

    let props = Props::from_js(sentence, tier_map, metadata, settings)?;
    let output = props.run(&StaticUrl::new(page_url))?;

    serialize(&output, "Failed to serialize format output")
}

/// Format a sentence and write the result panel into its container
///
/// The container is the `.formatResultContainer` whose `sentenceId`
/// attribute equals `sentence_id`.
#[wasm_bindgen(js_name = showFormatResult)]
pub fn show_format_result(
    sentence: JsValue,
    tier_map: JsValue,
    metadata: JsValue,
    sentence_id: String,
    settings: JsValue,
) -> Result<(), JsValue> {
    wasm_info!("showFormatResult called for sentence {}", sentence_id);

    let props = Props::from_js(sentence, tier_map, metadata, settings)?;
    let output = props.run(&WindowLocation)?;

    let mut target = DomRenderTarget::locate(&sentence_id).map_err(format_error)?;
    present(&mut target, &output.result, &output.latex, &props.settings).map_err(format_error)?;

    wasm_info!("showFormatResult completed successfully");
    Ok(())
}

/// Close the result panel by reloading the page
///
/// This also clears the tier selection window.
#[wasm_bindgen(js_name = closeFormatResult)]
pub fn close_format_result() -> Result<(), JsValue> {
    wasm_info!("closeFormatResult called");
    reload_view().map_err(format_error)
}

/// Escape a tier name the way tier selections are stored
#[wasm_bindgen(js_name = escapeTierName)]
pub fn escape_tier_name_js(name: &str) -> String {
    escape_tier_name(name)
}
