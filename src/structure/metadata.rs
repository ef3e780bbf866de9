//! Citation metadata
//!
//! Pulls the story title, story id and a permalink to the sentence out of
//! the story metadata. The permalink reuses the story viewer's addressing
//! scheme: the page URL with its query string replaced by the sentence
//! index (`start_time_ms - 1` for time-aligned stories, the sentence id
//! otherwise).

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::FormatError;
use crate::host::UrlProvider;
use crate::models::{Sentence, StoryMetadata};

lazy_static! {
    static ref QUERY_STRING: Regex = Regex::new(r"\?.*$").expect("query string pattern is valid");
}

/// Story title, story id and sentence permalink
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Citation {
    pub title: String,
    pub story_id: String,
    pub sentence_url: String,
}

/// Index the story viewer uses to address a sentence
pub fn permalink_index(sentence: &Sentence, metadata: &StoryMetadata) -> String {
    if metadata.timed {
        match sentence.start_time_ms {
            Some(ms) => return format!("{}", ms - 1.0),
            None => log::warn!(
                "Timed story but sentence {} has no start_time_ms, using sentence id",
                sentence.sentence_id
            ),
        }
    }
    sentence.sentence_id.clone()
}

/// Replace the query string of `page_url` with `?index`
pub fn sentence_url(page_url: &str, index: &str) -> String {
    format!("{}?{}", QUERY_STRING.replace(page_url, ""), index)
}

/// Gather the citation fields for one sentence
pub fn extract_citation(
    sentence: &Sentence,
    metadata: &StoryMetadata,
    urls: &dyn UrlProvider,
) -> Result<Citation, FormatError> {
    let page_url = urls.current_url()?;
    let index = permalink_index(sentence, metadata);

    Ok(Citation {
        title: metadata.title.default.clone(),
        story_id: metadata.story_id.clone(),
        sentence_url: sentence_url(&page_url, &index),
    })
}
