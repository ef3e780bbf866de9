//! Formatter settings
//!
//! Optional settings object passed from JavaScript. Every field has a
//! default, so `{}` (or no object at all) reproduces the standard output.

use serde::{Deserialize, Serialize};

/// Default `\label{}` of the generated example
pub const DEFAULT_EXAMPLE_LABEL: &str = "example";

/// Text shown in place of missing morphemes, glosses or translations
pub const DEFAULT_PLACEHOLDER: &str = "Undefined";

/// Settings for one formatting request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatSettings {
    /// Label placed in `\ex \label{...}`
    pub example_label: String,

    /// Sentinel for misaligned or missing annotation data
    pub placeholder: String,

    /// First block of the result panel
    pub header: String,

    /// Block announcing which LaTeX packages the output targets
    pub library_note: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            example_label: DEFAULT_EXAMPLE_LABEL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            header: "Format result: ".to_string(),
            library_note: "Formatted for gb4e and gb4e-modified LaTeX packages: ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings: FormatSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, FormatSettings::default());
        assert_eq!(settings.placeholder, "Undefined");
    }

    #[test]
    fn test_partial_override() {
        let settings: FormatSettings =
            serde_json::from_str(r#"{"exampleLabel": "ex:cats"}"#).unwrap();
        assert_eq!(settings.example_label, "ex:cats");
        assert_eq!(settings.placeholder, DEFAULT_PLACEHOLDER);
    }
}
