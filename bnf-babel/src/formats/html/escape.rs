//! Character reference escaping

/// Escape `& < > " '` so the result is safe both as element text and inside a
/// double- or single-quoted attribute. Everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_the_five_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_passes_other_characters_through() {
        assert_eq!(escape_html("#x20 [^a-z] é"), "#x20 [^a-z] é");
    }

    #[test]
    fn test_ampersand_is_not_double_escaped_by_order() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
