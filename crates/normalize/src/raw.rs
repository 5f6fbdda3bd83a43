//! Raw API payloads, exactly as the MangaDex API returns them.
//!
//! Only the fields the normalizers read are modelled; everything else in the
//! response is ignored. Missing optional fields fall back to empty values so
//! the normalizers can apply their own defaults.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Relationship type that carries cover art.
pub const COVER_ART: &str = "cover_art";

/// Language code to text.
pub type LocalizedString = BTreeMap<String, String>;

/// A top-level response body that can be handed to [`parse`].
pub trait Payload: DeserializeOwned {
    /// Payload name used in error messages.
    const KIND: &'static str;
}

/// Deserializes a response body.
///
/// This is the only fallible step of the pipeline: a body that does not have
/// the expected shape is reported as [`ErrorKind::MalformedPayload`] and is
/// not recovered from.
#[instrument(level = "debug", skip(bytes), fields(kind = T::KIND, bytes = bytes.as_ref().len()))]
pub fn parse<T: Payload>(bytes: impl AsRef<[u8]>) -> Result<T> {
    match serde_json::from_slice(bytes.as_ref()) {
        Ok(payload) => Ok(payload),
        Err(err) => exn::bail!(ErrorKind::MalformedPayload {
            what: T::KIND,
            reason: err.to_string(),
        }),
    }
}

/// `GET /manga/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct MangaResponse {
    pub data: RawManga,
}
impl Payload for MangaResponse {
    const KIND: &'static str = "manga";
}

/// `GET /manga` (search)
#[derive(Debug, Clone, Deserialize)]
pub struct MangaListResponse {
    #[serde(default)]
    pub data: Vec<RawManga>,
}
impl Payload for MangaListResponse {
    const KIND: &'static str = "manga list";
}

/// `GET /chapter`
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterListResponse {
    #[serde(default)]
    pub data: Vec<RawChapter>,
}
impl Payload for ChapterListResponse {
    const KIND: &'static str = "chapter list";
}

/// `GET /at-home/server/{chapter_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct RawAtHome {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub chapter: AtHomeChapter,
}
impl Payload for RawAtHome {
    const KIND: &'static str = "at-home server";
}

#[derive(Debug, Clone, Deserialize)]
pub struct AtHomeChapter {
    pub hash: String,
    /// Page file names, in reading order.
    #[serde(default)]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawManga {
    pub id: String,
    pub attributes: MangaAttributes,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}
impl RawManga {
    /// Cover-art file names in relationship order. Cover relationships that
    /// were not expanded (no `fileName`) are skipped.
    pub fn cover_file_names(&self) -> impl Iterator<Item = &str> {
        self.relationships.iter().filter(|rel| rel.is_cover_art()).filter_map(|rel| {
            let file_name = rel.file_name();
            if file_name.is_none() {
                tracing::debug!(relationship = %rel.id, "Cover art relationship has no file name; skipping");
            }
            file_name
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaAttributes {
    #[serde(default, deserialize_with = "localized")]
    pub title: LocalizedString,
    #[serde(default)]
    pub alt_titles: Vec<LocalizedString>,
    #[serde(default, deserialize_with = "localized")]
    pub description: LocalizedString,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub content_rating: Option<String>,
    /// Older payloads carried the rating under this key.
    #[serde(default)]
    pub hentai: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl MangaAttributes {
    /// The rating id, preferring `contentRating` over the legacy `hentai` key.
    pub fn content_rating(&self) -> Option<&str> {
        self.content_rating.as_deref().or(self.hentai.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Option<RelationshipAttributes>,
}
impl Relationship {
    pub fn is_cover_art(&self) -> bool {
        self.kind == COVER_ART
    }

    pub fn file_name(&self) -> Option<&str> {
        self.attributes.as_ref().and_then(|attrs| attrs.file_name.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipAttributes {
    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChapter {
    pub id: String,
    pub attributes: ChapterAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterAttributes {
    pub translated_language: String,
    /// Chapter number as text; `null` for oneshots.
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

/// The API serializes an empty localized map as `[]` (and occasionally
/// `null`); both mean "no entries".
fn localized<'de, D>(deserializer: D) -> std::result::Result<LocalizedString, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Localized {
        Map(LocalizedString),
        List(Vec<serde_json::Value>),
        Null,
    }
    Ok(match Localized::deserialize(deserializer)? {
        Localized::Map(map) => map,
        Localized::List(_) | Localized::Null => LocalizedString::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANGA: &str = r#"{
        "result": "ok",
        "data": {
            "id": "m-1",
            "type": "manga",
            "attributes": {
                "title": {"en": "Title"},
                "altTitles": [{"ja": "Taitoru"}, {"en": "Alt"}],
                "description": [],
                "status": "ongoing",
                "contentRating": "safe",
                "updatedAt": "2021-05-24T17:05:58+02:00"
            },
            "relationships": [
                {"id": "a-1", "type": "author"},
                {"id": "c-1", "type": "cover_art", "attributes": {"fileName": "one.jpg", "volume": "1"}},
                {"id": "c-2", "type": "cover_art"}
            ]
        }
    }"#;

    #[test]
    fn test_parse_manga() {
        let response: MangaResponse = parse(MANGA).unwrap();
        let manga = response.data;
        assert_eq!(manga.id, "m-1");
        assert_eq!(manga.attributes.title.get("en").map(String::as_str), Some("Title"));
        assert_eq!(manga.attributes.alt_titles.len(), 2);
        assert!(manga.attributes.description.is_empty());
        assert_eq!(manga.attributes.content_rating.as_deref(), Some("safe"));
        assert_eq!(manga.attributes.updated_at.offset().whole_hours(), 2);
        assert_eq!(manga.cover_file_names().collect::<Vec<_>>(), ["one.jpg"]);
    }

    #[test]
    fn test_parse_legacy_rating_field() {
        let json = r#"{"data": {"id": "m", "attributes": {"hentai": "erotica", "updatedAt": "2020-01-01T00:00:00Z"}}}"#;
        let response: MangaResponse = parse(json).unwrap();
        assert_eq!(response.data.attributes.content_rating(), Some("erotica"));
        assert!(response.data.relationships.is_empty());
    }

    #[test]
    fn test_parse_both_rating_fields() {
        let json = r#"{"data": {"id": "m", "attributes": {"contentRating": "safe", "hentai": "erotica", "updatedAt": "2020-01-01T00:00:00Z"}}}"#;
        let response: MangaResponse = parse(json).unwrap();
        assert_eq!(response.data.attributes.content_rating(), Some("safe"));
    }

    #[test]
    fn test_parse_chapter_nulls() {
        let json = r#"{"data": [{"id": "c", "attributes": {"translatedLanguage": "en", "chapter": null, "volume": null, "title": null}}]}"#;
        let response: ChapterListResponse = parse(json).unwrap();
        let chapter = &response.data[0].attributes;
        assert_eq!(chapter.translated_language, "en");
        assert!(chapter.chapter.is_none());
        assert!(chapter.volume.is_none());
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse::<RawAtHome>(r#"{"baseUrl": 12}"#).unwrap_err();
        assert!(matches!(&*err, ErrorKind::MalformedPayload { what: "at-home server", .. }));
        let err = parse::<MangaResponse>("not json").unwrap_err();
        assert!(matches!(&*err, ErrorKind::MalformedPayload { what: "manga", .. }));
    }

    #[test]
    fn test_parse_bad_timestamp() {
        let json = r#"{"data": {"id": "m", "attributes": {"updatedAt": "yesterday"}}}"#;
        assert!(parse::<MangaResponse>(json).is_err());
    }
}
