// src/sanitize.rs
use std::fmt::Display;

/// Replacements applied in order. `&` has to come first so the ampersands
/// introduced by the later entries are left alone.
const REPLACEMENTS: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&#39;"),
];

/// Escapes the five HTML-significant characters in free-text input.
///
/// Not idempotent: escaping already escaped text escapes its ampersands again.
pub fn escape_input(input: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Like [`escape_input`], but for any displayable value. A missing value
/// yields an empty string.
pub fn escape_value<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => escape_input(&value.to_string()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_input(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_input("  EnerTech GmbH "), "  EnerTech GmbH ");
    }

    #[test]
    fn double_escapes_ampersands() {
        let once = escape_input("a<b");
        assert_eq!(once, "a&lt;b");
        assert_eq!(escape_input(&once), "a&amp;lt;b");
    }

    #[test]
    fn missing_value_is_empty() {
        assert_eq!(escape_value::<&str>(None), "");
        assert_eq!(escape_input(""), "");
    }

    #[test]
    fn non_text_values_are_stringified() {
        assert_eq!(escape_value(Some(42)), "42");
        assert_eq!(escape_value(Some(1.5)), "1.5");
    }

    proptest! {
        #[test]
        fn output_has_no_raw_markup(input in ".*") {
            let out = escape_input(&input);
            prop_assert!(!out.contains('<'));
            prop_assert!(!out.contains('>'));
            prop_assert!(!out.contains('"'));
            prop_assert!(!out.contains('\''));
            // every ampersand starts one of the entities
            for (idx, _) in out.match_indices('&') {
                let rest = &out[idx..];
                prop_assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                        .iter()
                        .any(|entity| rest.starts_with(entity))
                );
            }
        }
    }
}
