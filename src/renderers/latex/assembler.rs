//! gb4e example assembly
//!
//! Builds the `exe` environment for one sentence:
//!
//! ```text
//! \begin{exe}
//!   \ex \label{example}
//!   <words>
//!   \gll <morphs> \\
//!   <glosses> \\
//!   \glt `<translation>' \\
//!   \href{<url>}{(<title>)}
//! \end{exe}
//! ```
//!
//! Every line ends with " \n"; inner lines are indented two spaces.

use super::classify::render_gloss;
use crate::config::FormatSettings;
use crate::models::{FormattedResult, WordTokens};

const INDENT: &str = "  ";
const LINE_END: &str = " \n";
const GLOSS_BREAK: &str = "\\\\";

/// Opening of the example environment
pub fn preamble(label: &str) -> String {
    format!("\\begin{{exe}}{LINE_END}{INDENT}\\ex \\label{{{label}}}{LINE_END}{INDENT}")
}

/// Plain line with the whole words
pub fn word_line(morphemes: &[WordTokens]) -> String {
    let words: Vec<&str> = morphemes.iter().map(|w| w.word.as_str()).collect();
    format!("{}{LINE_END}{INDENT}", words.join(" "))
}

/// `\gll` line: each word's morph tokens concatenated, words space-separated
pub fn morpheme_line(morphemes: &[WordTokens]) -> String {
    let mut parts = vec!["\\gll".to_string()];
    parts.extend(morphemes.iter().map(|w| w.tokens.concat()));
    parts.push(format!("{GLOSS_BREAK}{LINE_END}{INDENT}"));
    parts.join(" ")
}

/// Gloss line aligned with the `\gll` line
///
/// A gloss spanning several words would be read by gb4e as several glosses,
/// so spaces inside one word's gloss are written as `\_`.
pub fn gloss_line(glosses: &[WordTokens]) -> String {
    let mut parts: Vec<String> = glosses
        .iter()
        .map(|w| {
            w.tokens
                .iter()
                .map(|token| render_gloss(token))
                .collect::<String>()
                .replace(' ', "\\_")
        })
        .collect();
    parts.push(format!("{GLOSS_BREAK}{LINE_END}{INDENT}"));
    parts.join(" ")
}

/// `\glt` line with the free translation
///
/// Only the first translation value is used; with none, the placeholder
/// is printed.
pub fn translation_line(translation: &[String], placeholder: &str) -> String {
    let sentence = translation.first().map(String::as_str).unwrap_or(placeholder);
    format!("\\glt `{sentence}' {GLOSS_BREAK}{LINE_END}{INDENT}")
}

/// Escape underscores so LaTeX does not read them as subscripts
pub fn escape_underscores(text: &str) -> String {
    text.replace('_', "\\_")
}

/// Hyperlinked citation back to the sentence
pub fn citation_line(url: &str, title: &str) -> String {
    format!("\\href{{{url}}}{{({})}}{LINE_END}", escape_underscores(title))
}

/// Closing of the example environment
pub fn closing() -> String {
    format!("\\end{{exe}}{LINE_END}")
}

/// Assemble the complete example for a formatted sentence
pub fn to_latex(result: &FormattedResult, settings: &FormatSettings) -> String {
    let mut latex = preamble(&settings.example_label);
    latex.push_str(&word_line(&result.morphemes_by_word));
    latex.push_str(&morpheme_line(&result.morphemes_by_word));
    latex.push_str(&gloss_line(&result.gloss_by_word));
    latex.push_str(&translation_line(&result.sentence_translation, &settings.placeholder));
    latex.push_str(&citation_line(&result.sentence_url, &result.title));
    latex.push_str(&closing());
    latex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(word: &str, tokens: &[&str]) -> WordTokens {
        WordTokens {
            word: word.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_preamble() {
        assert_eq!(preamble("ex:1"), "\\begin{exe} \n  \\ex \\label{ex:1} \n  ");
    }

    #[test]
    fn test_morpheme_line() {
        let words = vec![tokens("cats", &["cat", "-s"]), tokens("run", &["run"])];
        assert_eq!(word_line(&words), "cats run \n  ");
        assert_eq!(morpheme_line(&words), "\\gll cat-s run \\\\ \n  ");
    }

    #[test]
    fn test_gloss_line_classifies_tokens() {
        let glosses = vec![tokens("cats", &["cat", "-PL"]), tokens("run", &["RUN"])];
        assert_eq!(gloss_line(&glosses), "cat\\textsc{-pl} \\textsc{run} \\\\ \n  ");
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(word_line(&[]), " \n  ");
        assert_eq!(morpheme_line(&[]), "\\gll \\\\ \n  ");
        assert_eq!(gloss_line(&[]), "\\\\ \n  ");
    }

    #[test]
    fn test_translation_uses_first_value() {
        let translation = vec!["cats run".to_string(), "ignored".to_string()];
        assert_eq!(
            translation_line(&translation, "Undefined"),
            "\\glt `cats run' \\\\ \n  "
        );
    }

    #[test]
    fn test_missing_translation_uses_placeholder() {
        assert_eq!(translation_line(&[], "Undefined"), "\\glt `Undefined' \\\\ \n  ");
    }

    #[test]
    fn test_citation_escapes_title_only() {
        assert_eq!(
            citation_line("https://host/my_story?3", "My_Story"),
            "\\href{https://host/my_story?3}{(My\\_Story)} \n"
        );
    }

    #[test]
    fn test_full_example() {
        let result = FormattedResult {
            story_id: "demo".into(),
            title: "Demo".into(),
            sentence_url: "https://host/demo?0".into(),
            morphemes_by_word: vec![tokens("cats", &["cat", "-s"])],
            gloss_by_word: vec![tokens("cats", &["cat", "-PL"])],
            sentence_translation: vec!["cats".into()],
        };

        let expected = "\\begin{exe} \n\
                        \x20 \\ex \\label{example} \n\
                        \x20 cats \n\
                        \x20 \\gll cat-s \\\\ \n\
                        \x20 cat\\textsc{-pl} \\\\ \n\
                        \x20 \\glt `cats' \\\\ \n\
                        \x20 \\href{https://host/demo?0}{(Demo)} \n\
                        \\end{exe} \n";

        assert_eq!(to_latex(&result, &FormatSettings::default()), expected);
    }
}
