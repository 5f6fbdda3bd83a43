//! Normalization of raw MangaDex API payloads.
//!
//! Takes already-fetched response bodies and reduces them into flat,
//! de-duplicated, locale-resolved records. Nothing in this crate performs I/O;
//! every function is a pure function of its inputs plus the current
//! [`Settings`] snapshot.
//!
//! ```
//! use mdx_normalize::Settings;
//!
//! let body = br#"{"data": [
//!     {"id": "a", "attributes": {"translatedLanguage": "en", "chapter": "1", "volume": "1"}},
//!     {"id": "b", "attributes": {"translatedLanguage": "en", "chapter": "1", "volume": "1"}},
//!     {"id": "c", "attributes": {"translatedLanguage": "fr", "chapter": "1", "volume": "1"}}
//! ]}"#;
//! let chapters = mdx_normalize::chapters("work", body, &Settings::default())?;
//! assert_eq!(chapters.len(), 1);
//! assert_eq!(chapters[0].id, "a");
//! # Ok::<(), mdx_normalize::error::Error>(())
//! ```

mod consts;
pub mod error;
pub mod locale;
pub mod models;
pub mod normalize;
pub mod raw;
pub mod settings;

use tracing::instrument;

pub use crate::consts::{COVER_BASE_URL, PAGE_DATA_SEGMENT, UNKNOWN_TITLE};
use crate::error::Result;
use crate::models::{Chapter, ChapterPages, SearchTile, Work};
use crate::raw::{ChapterListResponse, MangaListResponse, MangaResponse, RawAtHome, parse};
pub use crate::settings::{PreferenceStore, Settings};

/// Parses and normalizes a `GET /manga/{id}` body.
#[instrument(skip_all)]
pub fn work(body: impl AsRef<[u8]>, settings: &Settings) -> Result<Work> {
    let response: MangaResponse = parse(body)?;
    Ok(normalize::normalize_work(&response.data, settings))
}

/// Parses and normalizes a `GET /chapter` body.
#[instrument(skip(body, settings))]
pub fn chapters(work_id: &str, body: impl AsRef<[u8]>, settings: &Settings) -> Result<Vec<Chapter>> {
    let response: ChapterListResponse = parse(body)?;
    Ok(normalize::normalize_chapters(work_id, response.data, settings))
}

/// Parses and normalizes a `GET /at-home/server/{chapter_id}` body.
#[instrument(skip(body))]
pub fn pages(work_id: &str, chapter_id: &str, body: impl AsRef<[u8]>) -> Result<ChapterPages> {
    let response: RawAtHome = parse(body)?;
    Ok(normalize::normalize_pages(work_id, chapter_id, response))
}

/// Parses and normalizes a `GET /manga` (search) body.
#[instrument(skip_all)]
pub fn search(body: impl AsRef<[u8]>, settings: &Settings) -> Result<Vec<SearchTile>> {
    let response: MangaListResponse = parse(body)?;
    Ok(normalize::normalize_search(&response.data, settings))
}
