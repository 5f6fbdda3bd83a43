use std::collections::BTreeMap;

use mdx_normalize::PreferenceStore;
use mdx_normalize::models::ContentRating;
use mdx_normalize::settings::LANGUAGE_KEY;
use serde::{Deserialize, Serialize};

const RATING_KEY_PREFIX: &str = "contentRating-";

/// User preferences as persisted in the configuration file.
///
/// Nothing is filled in by default: an unset language or rating stays unset
/// so [`Settings::resolve`](mdx_normalize::Settings::resolve) can apply its
/// own fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Rating id to enabled flag, e.g. `safe = true`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content_ratings: BTreeMap<String, bool>,
}
impl Preferences {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_rating(mut self, rating: ContentRating, enabled: bool) -> Self {
        self.content_ratings.insert(rating.id().to_string(), enabled);
        self
    }

    /// Rating keys that are not in the rating catalog.
    pub(crate) fn unknown_ratings(&self) -> impl Iterator<Item = &str> {
        self.content_ratings
            .keys()
            .map(String::as_str)
            .filter(|id| ContentRating::from_id(id).is_none())
    }
}

impl PreferenceStore for Preferences {
    fn string(&self, key: &str) -> Option<String> {
        if key == LANGUAGE_KEY { self.language.clone() } else { None }
    }

    fn flag(&self, key: &str) -> Option<bool> {
        let id = key.strip_prefix(RATING_KEY_PREFIX)?;
        self.content_ratings.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdx_normalize::Settings;
    use mdx_normalize::settings::rating_key;

    #[test]
    fn test_store_keys() {
        let prefs = Preferences::default()
            .with_language("es-la")
            .with_rating(ContentRating::Safe, true)
            .with_rating(ContentRating::Erotica, false);
        assert_eq!(prefs.string("language").as_deref(), Some("es-la"));
        assert_eq!(prefs.string("contentRating-safe"), None);
        assert_eq!(prefs.flag(&rating_key(ContentRating::Safe)), Some(true));
        assert_eq!(prefs.flag(&rating_key(ContentRating::Erotica)), Some(false));
        assert_eq!(prefs.flag(&rating_key(ContentRating::Suggestive)), None);
        assert_eq!(prefs.flag("safe"), None);
    }

    #[test]
    fn test_resolves_into_settings() {
        let prefs = Preferences::default().with_rating(ContentRating::Suggestive, true);
        let settings = Settings::resolve(&prefs);
        assert_eq!(settings.language(), "en");
        assert_eq!(settings.allowed_ratings().collect::<Vec<_>>(), [ContentRating::Suggestive]);
    }

    #[test]
    fn test_unknown_ratings() {
        let mut prefs = Preferences::default().with_rating(ContentRating::Safe, true);
        prefs.content_ratings.insert("gore".to_string(), true);
        assert_eq!(prefs.unknown_ratings().collect::<Vec<_>>(), ["gore"]);
    }
}
