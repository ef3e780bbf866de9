//! Annotation tier data structures
//!
//! A sentence arrives from the story index as a set of named tiers
//! ("dependents"), each holding offset-ordered values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::serde_helpers::deserialize_id_as_string;

/// One token of a tier, occupying a slot range in the tier's coordinate space
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TierValue {
    /// Token text; absent or empty in malformed exports
    #[serde(default)]
    pub value: Option<String>,

    /// First slot covered by this token
    #[serde(default)]
    pub start_slot: i64,

    /// Last slot covered by this token
    #[serde(default)]
    pub end_slot: i64,
}

impl TierValue {
    /// Create a value covering `[start_slot, end_slot]`
    pub fn new(value: impl Into<String>, start_slot: i64, end_slot: i64) -> Self {
        Self {
            value: Some(value.into()),
            start_slot,
            end_slot,
        }
    }

    /// Token text, treating an empty string the same as a missing one
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    /// Inclusive containment: `other` lies entirely within this value's span
    pub fn contains(&self, other: &TierValue) -> bool {
        other.start_slot >= self.start_slot && other.end_slot <= self.end_slot
    }
}

/// A named annotation channel over a sentence
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Tier {
    /// Tier name as stored in the story index (unescaped)
    pub tier: String,

    #[serde(default)]
    pub values: Vec<TierValue>,
}

/// A sentence as supplied by the story viewer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Sentence {
    #[serde(default)]
    pub dependents: Vec<Tier>,

    #[serde(default, deserialize_with = "deserialize_id_as_string")]
    pub sentence_id: String,

    /// Start time of the sentence in a time-aligned story
    #[serde(default)]
    pub start_time_ms: Option<f64>,
}

/// The four logical sections of an interlinear example
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    #[serde(rename = "original sentence")]
    OriginalSentence,
    #[serde(rename = "morphemes")]
    Morphemes,
    #[serde(rename = "morpheme translations")]
    MorphemeTranslations,
    #[serde(rename = "sentence translation")]
    SentenceTranslation,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::OriginalSentence,
        Section::Morphemes,
        Section::MorphemeTranslations,
        Section::SentenceTranslation,
    ];

    /// Key used for this section in the tier selection map
    pub fn key(self) -> &'static str {
        match self {
            Section::OriginalSentence => "original sentence",
            Section::Morphemes => "morphemes",
            Section::MorphemeTranslations => "morpheme translations",
            Section::SentenceTranslation => "sentence translation",
        }
    }
}

/// Logical section name -> escaped tier name picked in the tier selection window
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct TierMap(pub HashMap<String, String>);

impl TierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert keyed by section
    pub fn with(mut self, section: Section, escaped_tier_name: impl Into<String>) -> Self {
        self.0.insert(section.key().to_string(), escaped_tier_name.into());
        self
    }

    /// Selected (escaped) tier name for a section, if the user picked one
    pub fn selection(&self, section: Section) -> Option<&str> {
        self.0.get(section.key()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_is_inclusive() {
        let word = TierValue::new("cats", 0, 4);
        assert!(word.contains(&TierValue::new("cat-s", 0, 4)));
        assert!(word.contains(&TierValue::new("cat", 1, 3)));
        assert!(!word.contains(&TierValue::new("dog", 3, 5)));
    }

    #[test]
    fn test_empty_value_has_no_text() {
        let value = TierValue::new("", 0, 1);
        assert_eq!(value.text(), None);
        assert_eq!(TierValue::default().text(), None);
    }

    #[test]
    fn test_sentence_deserializes_from_story_json() {
        let sentence: Sentence = serde_json::from_value(json!({
            "sentence_id": 3,
            "start_time_ms": 1500,
            "dependents": [
                { "tier": "Words", "values": [{ "value": "cats", "start_slot": 0, "end_slot": 4 }] },
                { "tier": "Free translation", "values": [{ "value": "cats" }] }
            ]
        }))
        .unwrap();

        assert_eq!(sentence.sentence_id, "3");
        assert_eq!(sentence.start_time_ms, Some(1500.0));
        assert_eq!(sentence.dependents.len(), 2);
        assert_eq!(sentence.dependents[1].values[0].start_slot, 0);
    }

    #[test]
    fn test_tier_map_lookup_by_section() {
        let map: TierMap = serde_json::from_value(json!({
            "original sentence": "Words",
            "morphemes": "Morphs"
        }))
        .unwrap();

        assert_eq!(map.selection(Section::OriginalSentence), Some("Words"));
        assert_eq!(map.selection(Section::Morphemes), Some("Morphs"));
        assert_eq!(map.selection(Section::SentenceTranslation), None);
    }
}
