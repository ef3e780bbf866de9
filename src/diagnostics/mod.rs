//! Diagnostics module for annotation data quality
//!
//! The formatter never refuses to produce output; problems in the
//! annotation data (unselected tiers, misaligned morphemes) show up as
//! placeholder text in the LaTeX. Diagnostics report the same problems in
//! a structured form so the host page can point the user at them.

pub mod alignment;

use serde::{Deserialize, Serialize};

pub use alignment::detect;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Info,
}

/// A diagnostic mark pointing at a word (and optionally a token in it)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    /// Word index in the sentence, when the issue is local to a word
    pub word: Option<usize>,
    /// Token index within the word's morph/gloss list
    pub token: Option<usize>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "undefined_token", "unmatched_tier")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a sentence-level mark
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            word: None,
            token: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Attach a word index
    pub fn at_word(mut self, word: usize) -> Self {
        self.word = Some(word);
        self
    }

    /// Attach a token index
    pub fn at_token(mut self, token: usize) -> Self {
        self.token = Some(token);
        self
    }
}

/// Collection of diagnostic marks for one formatting pass
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks of one kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |m| m.kind == kind)
    }
}
