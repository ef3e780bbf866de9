//! Story metadata as exported by the story index

use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_id_as_string;

/// Localized story title; only the default-locale entry is used
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StoryTitle {
    #[serde(rename = "_default", default)]
    pub default: String,
}

/// Per-story metadata handed to the formatter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StoryMetadata {
    #[serde(default)]
    pub title: StoryTitle,

    #[serde(rename = "story ID", default, deserialize_with = "deserialize_id_as_string")]
    pub story_id: String,

    /// Whether the story is time-aligned to media
    #[serde(default)]
    pub timed: bool,
}

impl StoryMetadata {
    pub fn new(title: impl Into<String>, story_id: impl Into<String>, timed: bool) -> Self {
        Self {
            title: StoryTitle { default: title.into() },
            story_id: story_id.into(),
            timed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_field_names() {
        let metadata: StoryMetadata = serde_json::from_value(json!({
            "title": { "_default": "Demo_Story", "es": "Cuento" },
            "story ID": "demo_01",
            "timed": true,
            "author": "ignored"
        }))
        .unwrap();

        assert_eq!(metadata.title.default, "Demo_Story");
        assert_eq!(metadata.story_id, "demo_01");
        assert!(metadata.timed);
    }

    #[test]
    fn test_untimed_by_default() {
        let metadata: StoryMetadata = serde_json::from_value(json!({
            "title": { "_default": "Demo" },
            "story ID": 12
        }))
        .unwrap();

        assert!(!metadata.timed);
        assert_eq!(metadata.story_id, "12");
    }
}
