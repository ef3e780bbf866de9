//! Formatting pipeline
//!
//! One pass from the props handed in by the story viewer to the LaTeX
//! example: resolve tiers, align words, gather citation metadata, assemble.
//! Nothing is cached between calls, so formatting the same input twice
//! yields the same text.

use serde::{Deserialize, Serialize};

use crate::config::FormatSettings;
use crate::diagnostics::{self, DiagnosticMark};
use crate::errors::FormatError;
use crate::host::UrlProvider;
use crate::models::{FormattedResult, Sentence, StoryMetadata, TierMap};
use crate::renderers::latex::to_latex;
use crate::structure::{align_words, extract_citation, resolve_tiers};

/// Everything a formatting pass produces
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatOutput {
    pub result: FormattedResult,
    pub latex: String,
    pub diagnostics: Vec<DiagnosticMark>,
}

/// Format one sentence as a gb4e interlinear example
///
/// Annotation problems never fail the pass; they appear as placeholder
/// text in the output and as diagnostics. The only error source is the
/// URL provider.
pub fn format_sentence(
    sentence: &Sentence,
    tier_map: &TierMap,
    metadata: &StoryMetadata,
    urls: &dyn UrlProvider,
    settings: &FormatSettings,
) -> Result<FormatOutput, FormatError> {
    let tiers = resolve_tiers(tier_map, &sentence.dependents);
    let alignment = align_words(
        &tiers.words,
        &tiers.morphemes,
        &tiers.glosses,
        &settings.placeholder,
    );
    let diagnostics = diagnostics::detect(&tiers, &alignment, &settings.placeholder);
    let citation = extract_citation(sentence, metadata, urls)?;

    let sentence_translation = tiers
        .translation
        .iter()
        .map(|v| v.text().unwrap_or(settings.placeholder.as_str()).to_string())
        .collect();

    let result = FormattedResult::from_aligned(
        alignment.words,
        sentence_translation,
        citation.title,
        citation.story_id,
        citation.sentence_url,
    );
    let latex = to_latex(&result, settings);

    log::debug!(
        "Formatted sentence {}: {} words, {} diagnostics",
        sentence.sentence_id,
        result.morphemes_by_word.len(),
        diagnostics.marks.len()
    );

    Ok(FormatOutput {
        result,
        latex,
        diagnostics: diagnostics.marks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticUrl;
    use crate::models::{Section, Tier, TierValue};

    fn demo_sentence() -> Sentence {
        Sentence {
            sentence_id: "0".into(),
            start_time_ms: None,
            dependents: vec![
                Tier { tier: "Words".into(), values: vec![TierValue::new("cats", 0, 4)] },
                Tier { tier: "Morphs".into(), values: vec![TierValue::new("cat-s", 0, 4)] },
                Tier { tier: "Gloss".into(), values: vec![TierValue::new("cat-PL", 0, 4)] },
                Tier { tier: "Free".into(), values: vec![TierValue::new("cats", 0, 0)] },
            ],
        }
    }

    fn demo_map() -> TierMap {
        TierMap::new()
            .with(Section::OriginalSentence, "Words")
            .with(Section::Morphemes, "Morphs")
            .with(Section::MorphemeTranslations, "Gloss")
            .with(Section::SentenceTranslation, "Free")
    }

    #[test]
    fn test_format_demo_sentence() {
        let output = format_sentence(
            &demo_sentence(),
            &demo_map(),
            &StoryMetadata::new("Demo", "demo", false),
            &StaticUrl::new("https://host/story?9"),
            &FormatSettings::default(),
        )
        .unwrap();

        assert_eq!(output.result.sentence_url, "https://host/story?0");
        assert!(output.latex.contains("\\gll cat-s \\\\"));
        assert!(output.latex.contains("cat\\textsc{-pl} \\\\"));
        assert!(output.latex.contains("\\glt `cats' \\\\"));
        assert!(output.latex.contains("{(Demo)}"));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_without_translation_tier() {
        let mut sentence = demo_sentence();
        sentence.dependents.pop();

        let output = format_sentence(
            &sentence,
            &demo_map(),
            &StoryMetadata::new("Demo", "demo", false),
            &StaticUrl::new("https://host/story"),
            &FormatSettings::default(),
        )
        .unwrap();

        assert!(output.latex.contains("\\glt `Undefined' \\\\"));
        assert!(output.diagnostics.iter().any(|d| d.kind == "unmatched_tier"));
    }
}
