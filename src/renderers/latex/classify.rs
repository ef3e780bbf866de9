//! Stem vs. bound-morph classification for gloss tokens

use crate::parse::morphs::is_boundary_marker;

/// How a gloss token is typeset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossKind {
    /// Lexical gloss, printed as written
    Stem,
    /// Suffix, clitic or grammatical gloss, printed in small caps
    BoundMorph,
}

/// Classify a gloss token
///
/// A token is a bound morph when it starts with a boundary marker (`=`/`-`)
/// or when it is entirely upper case (`PST`, `1SG`). Tokens with no cased
/// letters at all (`3`, `.`) count as upper case.
pub fn classify(token: &str) -> GlossKind {
    let has_marker = token.chars().next().map_or(false, is_boundary_marker);
    if has_marker || token == token.to_uppercase() {
        GlossKind::BoundMorph
    } else {
        GlossKind::Stem
    }
}

/// Render a gloss token: `\textsc{...}` lower-cased for bound morphs
pub fn render_gloss(token: &str) -> String {
    match classify(token) {
        GlossKind::BoundMorph => format!("\\textsc{{{}}}", token.to_lowercase()),
        GlossKind::Stem => token.to_string(),
    }
}
