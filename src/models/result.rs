//! Structures produced by a formatting pass
//!
//! Nothing here outlives a single call; the host copies the LaTeX text
//! out of the result panel by hand.

use serde::{Deserialize, Serialize};

/// Tokens belonging to one word, in word order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WordTokens {
    /// The whole word as it appears in the word tier
    pub word: String,
    pub tokens: Vec<String>,
}

/// One word with its morph tokens and the parallel gloss tokens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AlignedWord {
    pub word: String,
    pub morphs: Vec<String>,
    pub glosses: Vec<String>,
}

impl AlignedWord {
    /// True when every morph has exactly one gloss
    pub fn is_balanced(&self) -> bool {
        self.morphs.len() == self.glosses.len()
    }
}

/// Intermediate product consumed by the LaTeX assembler and the presenter
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub story_id: String,
    pub title: String,
    pub sentence_url: String,
    pub morphemes_by_word: Vec<WordTokens>,
    pub gloss_by_word: Vec<WordTokens>,
    pub sentence_translation: Vec<String>,
}

impl FormattedResult {
    /// Split aligned words into the parallel morpheme and gloss mappings
    pub fn from_aligned(
        words: Vec<AlignedWord>,
        sentence_translation: Vec<String>,
        title: String,
        story_id: String,
        sentence_url: String,
    ) -> Self {
        let (morphemes_by_word, gloss_by_word) = words
            .into_iter()
            .map(|w| {
                (
                    WordTokens { word: w.word.clone(), tokens: w.morphs },
                    WordTokens { word: w.word, tokens: w.glosses },
                )
            })
            .unzip();

        Self {
            story_id,
            title,
            sentence_url,
            morphemes_by_word,
            gloss_by_word,
            sentence_translation,
        }
    }
}
