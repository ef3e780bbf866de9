//! Morph segmentation
//!
//! A morpheme-tier value may hold a whole word ("cundyi-'je='fa"); it is
//! split on clitic and affix boundaries so that every root, suffix and
//! clitic becomes its own token. The boundary marker stays on the token
//! that follows it.

/// Clitic boundary marker
pub const CLITIC_MARKER: char = '=';

/// Affix boundary marker
pub const AFFIX_MARKER: char = '-';

/// Check whether a character starts a bound morph
pub fn is_boundary_marker(ch: char) -> bool {
    ch == CLITIC_MARKER || ch == AFFIX_MARKER
}

/// Split a raw tier value into morph tokens
///
/// A space is inserted before every boundary marker and the result is split
/// on spaces; empty pieces are dropped.
///
/// # Examples
/// - "cundyi-'je='fa" -> ["cundyi", "-'je", "='fa"]
/// - "cat-PL" -> ["cat", "-PL"]
/// - "=la" -> ["=la"]
pub fn split_morphs(value: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if is_boundary_marker(ch) {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    spaced
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
