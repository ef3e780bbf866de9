//! Word/morpheme alignment
//!
//! Morpheme and gloss tiers are offset-ordered and parallel: entry `i` of
//! the gloss tier translates entry `i` of the morpheme tier. Each word
//! takes the run of entries whose span lies inside its own span.
//!
//! The walk is a single forward pass. An entry that does not fit the
//! current word ends that word; the next word starts from the same entry.
//! There is no look-ahead or resynchronization, so misaligned data shows
//! up as placeholder tokens (or empty words) instead of being repaired.

use crate::models::{AlignedWord, TierValue};
use crate::parse::split_morphs;

/// A morpheme entry paired with the gloss entry at the same index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryPair<'a> {
    pub morpheme: Option<&'a TierValue>,
    pub gloss: Option<&'a TierValue>,
}

impl<'a> EntryPair<'a> {
    /// Span used for containment: the morpheme's, or the gloss's once the
    /// morpheme tier has run out
    pub fn span(&self) -> Option<&'a TierValue> {
        self.morpheme.or(self.gloss)
    }

    /// True when this entry lies inside `word`
    pub fn within(&self, word: &TierValue) -> bool {
        self.span().map_or(false, |span| word.contains(span))
    }
}

/// Outcome of aligning one sentence
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Alignment {
    pub words: Vec<AlignedWord>,

    /// Entries no word consumed (left over after the cursor stopped)
    pub unconsumed: usize,
}

/// Pair morpheme and gloss entries by index, up to the longer tier
///
/// Without any morpheme entries the section is absent and no pairs are
/// produced; the gloss tier alone never yields morph tokens.
pub fn pair_entries<'a>(
    morphemes: &'a [TierValue],
    glosses: &'a [TierValue],
) -> impl Iterator<Item = EntryPair<'a>> + 'a {
    let len = if morphemes.is_empty() {
        0
    } else {
        morphemes.len().max(glosses.len())
    };
    (0..len).map(move |i| EntryPair {
        morpheme: morphemes.get(i),
        gloss: glosses.get(i),
    })
}

/// Split a tier value into tokens, falling back to the placeholder
fn tokens_of(entry: Option<&TierValue>, placeholder: &str) -> Vec<String> {
    split_morphs(entry.and_then(TierValue::text).unwrap_or(placeholder))
}

/// Align words with their morph and gloss tokens
///
/// # Arguments
/// * `words` - word tier values, one per word
/// * `morphemes` - morpheme tier values, offset-ordered
/// * `glosses` - gloss tier values, parallel to `morphemes`
/// * `placeholder` - text used for missing entries or values
pub fn align_words(
    words: &[TierValue],
    morphemes: &[TierValue],
    glosses: &[TierValue],
    placeholder: &str,
) -> Alignment {
    let mut entries = pair_entries(morphemes, glosses).peekable();

    let aligned = words
        .iter()
        .map(|word| {
            std::iter::from_fn(|| entries.next_if(|pair| pair.within(word))).fold(
                AlignedWord {
                    word: word.text().unwrap_or(placeholder).to_string(),
                    morphs: Vec::new(),
                    glosses: Vec::new(),
                },
                |mut acc, pair| {
                    acc.morphs.extend(tokens_of(pair.morpheme, placeholder));
                    acc.glosses.extend(tokens_of(pair.gloss, placeholder));
                    acc
                },
            )
        })
        .collect::<Vec<_>>();

    let unconsumed = entries.count();
    if unconsumed > 0 {
        log::warn!("{} morpheme/gloss entries were not assigned to any word", unconsumed);
    }

    Alignment { words: aligned, unconsumed }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: &str = "Undefined";

    fn v(value: &str, start: i64, end: i64) -> TierValue {
        TierValue::new(value, start, end)
    }

    #[test]
    fn test_single_word() {
        let alignment = align_words(
            &[v("cats", 0, 4)],
            &[v("cat-s", 0, 4)],
            &[v("cat-PL", 0, 4)],
            U,
        );

        assert_eq!(alignment.words.len(), 1);
        assert_eq!(alignment.words[0].word, "cats");
        assert_eq!(alignment.words[0].morphs, vec!["cat", "-s"]);
        assert_eq!(alignment.words[0].glosses, vec!["cat", "-PL"]);
        assert_eq!(alignment.unconsumed, 0);
    }

    #[test]
    fn test_multiple_entries_per_word() {
        let alignment = align_words(
            &[v("ni-wa", 0, 5), v("dogs", 6, 10)],
            &[v("ni", 0, 2), v("=wa", 2, 5), v("dog-s", 6, 10)],
            &[v("1SG", 0, 2), v("=TOP", 2, 5), v("dog-PL", 6, 10)],
            U,
        );

        assert_eq!(alignment.words[0].morphs, vec!["ni", "=wa"]);
        assert_eq!(alignment.words[0].glosses, vec!["1SG", "=TOP"]);
        assert_eq!(alignment.words[1].morphs, vec!["dog", "-s"]);
        assert_eq!(alignment.words[1].glosses, vec!["dog", "-PL"]);
    }

    #[test]
    fn test_missing_gloss_becomes_placeholder() {
        let alignment = align_words(
            &[v("a", 0, 1), v("b", 2, 3)],
            &[v("a", 0, 1), v("b", 2, 3)],
            &[v("A", 0, 1)],
            U,
        );

        assert_eq!(alignment.words[1].morphs, vec!["b"]);
        assert_eq!(alignment.words[1].glosses, vec![U]);
    }

    #[test]
    fn test_missing_morpheme_uses_gloss_span() {
        let alignment = align_words(
            &[v("a", 0, 1), v("b", 2, 3)],
            &[v("a", 0, 1)],
            &[v("A", 0, 1), v("B", 2, 3)],
            U,
        );

        assert_eq!(alignment.words[1].morphs, vec![U]);
        assert_eq!(alignment.words[1].glosses, vec!["B"]);
    }

    #[test]
    fn test_empty_value_becomes_placeholder() {
        let alignment = align_words(&[v("a", 0, 1)], &[v("", 0, 1)], &[v("A", 0, 1)], U);
        assert_eq!(alignment.words[0].morphs, vec![U]);
    }

    #[test]
    fn test_no_resync_after_misalignment() {
        // The second entry sits outside every word and blocks the cursor
        let alignment = align_words(
            &[v("a", 0, 1), v("b", 2, 3)],
            &[v("a", 0, 1), v("x", 10, 12), v("b", 2, 3)],
            &[v("A", 0, 1), v("X", 10, 12), v("B", 2, 3)],
            U,
        );

        assert_eq!(alignment.words[0].morphs, vec!["a"]);
        assert!(alignment.words[1].morphs.is_empty());
        assert_eq!(alignment.unconsumed, 2);
    }

    #[test]
    fn test_no_morpheme_tier() {
        let alignment = align_words(&[v("a", 0, 1), v("b", 2, 3)], &[], &[], U);
        assert_eq!(alignment.words.len(), 2);
        assert!(alignment.words.iter().all(|w| w.morphs.is_empty() && w.glosses.is_empty()));
    }

    #[test]
    fn test_gloss_tier_alone_yields_no_tokens() {
        let alignment = align_words(
            &[v("cats", 0, 4), v("run", 5, 8)],
            &[],
            &[v("cat-PL", 0, 4), v("RUN", 5, 8)],
            U,
        );

        assert!(alignment.words.iter().all(|w| w.morphs.is_empty() && w.glosses.is_empty()));
        assert_eq!(alignment.unconsumed, 0);
    }

    #[test]
    fn test_extra_entries_after_last_word() {
        let alignment = align_words(
            &[v("a", 0, 1)],
            &[v("a", 0, 1), v("b", 2, 3)],
            &[v("A", 0, 1), v("B", 2, 3)],
            U,
        );
        assert_eq!(alignment.words[0].morphs, vec!["a"]);
        assert_eq!(alignment.unconsumed, 1);
    }
}
