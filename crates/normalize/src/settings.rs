//! User preferences, read from a host-provided key-value store.
//!
//! A [`Settings`] snapshot is resolved fresh for each host operation and
//! passed explicitly into the normalizers; nothing here is cached or global.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::instrument;

use crate::models::ContentRating;

/// Key holding the preferred language code.
pub const LANGUAGE_KEY: &str = "language";
/// Language used when the store has none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Key holding the enabled flag for a content rating, e.g. `contentRating-safe`.
pub fn rating_key(rating: ContentRating) -> String {
    format!("contentRating-{}", rating.id())
}

/// Read access to persisted preferences. Reads are best effort: a missing or
/// wrongly-typed value is simply `None`.
pub trait PreferenceStore {
    fn string(&self, key: &str) -> Option<String>;
    fn flag(&self, key: &str) -> Option<bool>;
}
impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn string(&self, key: &str) -> Option<String> {
        (**self).string(key)
    }
    fn flag(&self, key: &str) -> Option<bool> {
        (**self).flag(key)
    }
}
impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn string(&self, key: &str) -> Option<String> {
        (**self).string(key)
    }
    fn flag(&self, key: &str) -> Option<bool> {
        (**self).flag(key)
    }
}

/// A single stored preference, for the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceValue {
    String(String),
    Bool(bool),
}
impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl PreferenceStore for HashMap<String, PreferenceValue> {
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            PreferenceValue::String(value) => Some(value.clone()),
            PreferenceValue::Bool(_) => None,
        }
    }
    fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            PreferenceValue::Bool(value) => Some(*value),
            PreferenceValue::String(_) => None,
        }
    }
}

/// Immutable snapshot of the user's preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    preferred_language: String,
    allowed_ratings: BTreeSet<ContentRating>,
}
impl Default for Settings {
    /// The snapshot of an empty store: English, and no ratings allowed.
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, std::iter::empty())
    }
}
impl Settings {
    pub fn new(language: impl Into<String>, allowed_ratings: impl IntoIterator<Item = ContentRating>) -> Self {
        Self {
            preferred_language: language.into(),
            allowed_ratings: allowed_ratings.into_iter().collect(),
        }
    }

    /// Reads a fresh snapshot from the store.
    ///
    /// A rating is allowed only when its flag has been explicitly stored as
    /// `true`. This differs from [`menu`](Self::menu), where an unset flag is
    /// shown as enabled: until the user first saves their settings, filtering
    /// excludes every rating they never touched.
    #[instrument(level = "debug", skip(store))]
    pub fn resolve(store: &(impl PreferenceStore + ?Sized)) -> Self {
        let preferred_language = store.string(LANGUAGE_KEY).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let allowed_ratings = ContentRating::ALL
            .into_iter()
            .filter(|rating| store.flag(&rating_key(*rating)).unwrap_or(false))
            .collect();
        Self {
            preferred_language,
            allowed_ratings,
        }
    }

    /// Builds the settings section the host renders.
    pub fn menu(store: &(impl PreferenceStore + ?Sized)) -> SettingsMenu {
        let language = store.string(LANGUAGE_KEY).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let mut rows = vec![MenuRow::Input {
            id: LANGUAGE_KEY.to_string(),
            label: "Preferred Language",
            placeholder: DEFAULT_LANGUAGE,
            value: language,
        }];
        rows.extend(ContentRating::ALL.into_iter().map(|rating| {
            let id = rating_key(rating);
            let value = store.flag(&id).unwrap_or(true);
            MenuRow::Switch {
                id,
                label: rating.display_name(),
                value,
            }
        }));
        SettingsMenu {
            id: "main",
            header: "Source Settings",
            rows,
        }
    }

    pub fn language(&self) -> &str {
        &self.preferred_language
    }

    /// The language chapters are filtered by; `None` when no language is
    /// configured, which disables the filter.
    pub fn language_filter(&self) -> Option<&str> {
        Some(self.preferred_language.as_str()).filter(|lang| !lang.is_empty())
    }

    /// Allowed ratings, in catalog order.
    pub fn allowed_ratings(&self) -> impl Iterator<Item = ContentRating> + '_ {
        self.allowed_ratings.iter().copied()
    }

    pub fn is_allowed(&self, rating: ContentRating) -> bool {
        self.allowed_ratings.contains(&rating)
    }
}

/// A settings section for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsMenu {
    pub id: &'static str,
    pub header: &'static str,
    pub rows: Vec<MenuRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
    Input {
        id: String,
        label: &'static str,
        placeholder: &'static str,
        value: String,
    },
    Switch {
        id: String,
        label: &'static str,
        value: bool,
    },
}
