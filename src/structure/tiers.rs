//! Tier resolution
//!
//! Maps the four logical sections of an interlinear example to the tier
//! values the user selected for them.

use crate::models::{Section, Tier, TierMap, TierValue};
use crate::parse::escape_tier_name;

/// Tier values bound to each logical section
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ResolvedTiers {
    pub words: Vec<TierValue>,
    pub morphemes: Vec<TierValue>,
    pub glosses: Vec<TierValue>,
    pub translation: Vec<TierValue>,

    /// Sections whose selection matched none of the sentence's tiers
    pub unmatched: Vec<Section>,
}

impl ResolvedTiers {
    fn slot(&mut self, section: Section) -> &mut Vec<TierValue> {
        match section {
            Section::OriginalSentence => &mut self.words,
            Section::Morphemes => &mut self.morphemes,
            Section::MorphemeTranslations => &mut self.glosses,
            Section::SentenceTranslation => &mut self.translation,
        }
    }
}

/// Bind each section to the values of the tier whose escaped name matches
/// the selection in `tier_map`.
///
/// Tiers are visited in order and every match overwrites the previous
/// binding, so when two tiers escape to the same selected name the later
/// one wins. A section with no match keeps an empty value list.
pub fn resolve_tiers(tier_map: &TierMap, tiers: &[Tier]) -> ResolvedTiers {
    let mut resolved = ResolvedTiers::default();
    let mut matched = [false; 4];

    for tier in tiers {
        let escaped = escape_tier_name(&tier.tier);
        for (i, section) in Section::ALL.iter().enumerate() {
            if tier_map.selection(*section) == Some(escaped.as_str()) {
                *resolved.slot(*section) = tier.values.clone();
                matched[i] = true;
            }
        }
    }

    resolved.unmatched = Section::ALL
        .iter()
        .zip(matched)
        .filter(|(_, hit)| !hit)
        .map(|(section, _)| *section)
        .collect();

    for section in &resolved.unmatched {
        log::warn!("No tier matched section '{}'", section.key());
    }

    resolved
}
