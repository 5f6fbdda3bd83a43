//! Locale resolution for multi-language text maps.
//!
//! Resolution is single-level: the preferred language or nothing. There is no
//! fallback to another locale, not even to `"en"`. Search tiles use their own
//! three-level fallback instead (see [`crate::normalize::search`]); the two
//! behaviours are intentionally kept separate.

use crate::raw::LocalizedString;

/// Returns exactly `map[preferred]`, or `None` if the map has no entry for
/// the preferred language.
///
/// # Examples
///
/// ```
/// use mdx_normalize::locale::resolve;
/// use mdx_normalize::raw::LocalizedString;
///
/// let map = LocalizedString::from([("en".to_string(), "Hello".to_string())]);
/// assert_eq!(resolve(&map, "en"), Some("Hello"));
/// assert_eq!(resolve(&map, "fr"), None);
/// ```
pub fn resolve<'a>(map: &'a LocalizedString, preferred: &str) -> Option<&'a str> {
    map.get(preferred).map(String::as_str)
}

/// Resolves the primary title followed by every alternate title, in source
/// order, dropping absent and empty results.
///
/// Repeats are kept: if the primary and an alternate resolve to the same
/// string, both appear.
pub fn resolve_titles<'a>(
    primary: &'a LocalizedString,
    alternates: impl IntoIterator<Item = &'a LocalizedString>,
    preferred: &str,
) -> Vec<String> {
    std::iter::once(primary)
        .chain(alternates)
        .filter_map(|map| resolve(map, preferred))
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn map(entries: &[(&str, &str)]) -> LocalizedString {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[rstest]
    #[case(&[("en", "English")], "en", Some("English"))]
    #[case(&[("en", "English")], "fr", None)]
    #[case(&[("fr", "Français"), ("en", "English")], "ja", None)]
    #[case(&[("en", "")], "en", Some(""))]
    #[case(&[], "en", None)]
    #[case(&[("pt-br", "Português")], "pt", None)]
    fn test_resolve(#[case] entries: &[(&str, &str)], #[case] preferred: &str, #[case] expected: Option<&str>) {
        assert_eq!(resolve(&map(entries), preferred), expected);
    }

    #[test]
    fn test_resolve_never_falls_back_to_english() {
        let titles = map(&[("en", "English"), ("ja-ro", "Romaji")]);
        assert_eq!(resolve(&titles, "de"), None);
    }

    #[test]
    fn test_resolve_titles_order_and_filtering() {
        let primary = map(&[("en", "Main"), ("ja", "Shu")]);
        let alternates = vec![
            map(&[("ja", "Betsu")]),
            map(&[("en", "Other")]),
            map(&[("en", "")]),
            map(&[("en", "Main")]),
        ];
        let titles = resolve_titles(&primary, &alternates, "en");
        assert_eq!(titles, ["Main", "Other", "Main"]);
    }

    #[test]
    fn test_resolve_titles_missing_primary() {
        let primary = map(&[("ja", "Shu")]);
        let alternates = vec![map(&[("en", "Alt")])];
        assert_eq!(resolve_titles(&primary, &alternates, "en"), ["Alt"]);
        assert!(resolve_titles(&primary, &alternates, "fr").is_empty());
    }
}
