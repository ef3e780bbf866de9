//! HTML escaping of tier names
//!
//! The tier selection window stores tier names HTML-escaped, so the
//! resolver has to escape the raw names the same way before comparing.
//! Any drift from that escaping makes tier resolution silently fail.

/// Escape a raw tier name the way the tier selection window stores it
pub fn escape_tier_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '`' => escaped.push_str("&#96;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(escape_tier_name("Morpheme translations"), "Morpheme translations");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(
            escape_tier_name(r#"Gloss <en> & "notes" 'x' `y`"#),
            "Gloss &lt;en&gt; &amp; &quot;notes&quot; &#39;x&#39; &#96;y&#96;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_tier_name("a&lt;b"), "a&amp;lt;b");
    }
}
