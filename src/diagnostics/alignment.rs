//! Alignment diagnostics - reports data-quality issues of one sentence
//!
//! Checks, in order:
//! - sections whose tier selection matched nothing
//! - an empty translation tier
//! - placeholder tokens produced by missing morphemes or glosses
//! - words whose morph and gloss counts differ
//! - entries the aligner never reached

use crate::models::{AlignedWord, Section};
use crate::structure::{Alignment, ResolvedTiers};

use super::{DiagnosticMark, DiagnosticSeverity, Diagnostics};

/// Tokens equal to the placeholder, as (token index, tier label) pairs
fn placeholder_tokens<'a>(
    word: &'a AlignedWord,
    placeholder: &'a str,
) -> impl Iterator<Item = (usize, &'static str)> + 'a {
    let morphs = word
        .morphs
        .iter()
        .enumerate()
        .filter(move |(_, t)| t.as_str() == placeholder)
        .map(|(i, _)| (i, "morpheme"));
    let glosses = word
        .glosses
        .iter()
        .enumerate()
        .filter(move |(_, t)| t.as_str() == placeholder)
        .map(|(i, _)| (i, "gloss"));
    morphs.chain(glosses)
}

/// Analyze a resolved and aligned sentence
///
/// # Arguments
/// * `tiers` - Resolver output (for unmatched sections and the translation)
/// * `alignment` - Aligner output
/// * `placeholder` - Text the aligner used for missing values
pub fn detect(tiers: &ResolvedTiers, alignment: &Alignment, placeholder: &str) -> Diagnostics {
    let mut diags = Diagnostics::new();

    diags.extend(tiers.unmatched.iter().map(|section| {
        DiagnosticMark::new(
            DiagnosticSeverity::Warning,
            "unmatched_tier",
            format!("No tier selected for '{}'", section.key()),
        )
    }));

    if tiers.translation.is_empty() && !tiers.unmatched.contains(&Section::SentenceTranslation) {
        diags.add(DiagnosticMark::new(
            DiagnosticSeverity::Warning,
            "missing_translation",
            "Sentence translation tier has no values",
        ));
    }

    for (word_idx, word) in alignment.words.iter().enumerate() {
        diags.extend(placeholder_tokens(word, placeholder).map(|(token_idx, tier)| {
            DiagnosticMark::new(
                DiagnosticSeverity::Warning,
                "undefined_token",
                format!("Missing {} in word '{}'", tier, word.word),
            )
            .at_word(word_idx)
            .at_token(token_idx)
        }));

        if !word.is_balanced() {
            diags.add(
                DiagnosticMark::new(
                    DiagnosticSeverity::Info,
                    "token_count_mismatch",
                    format!(
                        "Word '{}' has {} morphs but {} glosses",
                        word.word,
                        word.morphs.len(),
                        word.glosses.len()
                    ),
                )
                .at_word(word_idx),
            );
        }
    }

    if alignment.unconsumed > 0 {
        diags.add(DiagnosticMark::new(
            DiagnosticSeverity::Warning,
            "unconsumed_entries",
            format!(
                "{} morpheme/gloss entries fall outside the word spans",
                alignment.unconsumed
            ),
        ));
    }

    diags
}
