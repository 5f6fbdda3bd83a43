use std::collections::HashSet;

use tracing::instrument;

use crate::models::Chapter;
use crate::raw::RawChapter;
use crate::settings::Settings;

/// Converts raw chapter records into a filtered, de-duplicated chapter list.
///
/// - Chapters in any language other than the preferred one are dropped. An
///   empty preferred language disables the filter.
/// - Chapters sharing a [`ChapterKey`](crate::models::ChapterKey) collapse to
///   the first one seen in input order.
/// - Output keeps input order. Sort with
///   [`sort_by_number`](crate::models::sort_by_number) if reading order is
///   needed.
#[instrument(skip(raw, settings), fields(input = raw.len(), language = settings.language(), chapters))]
pub fn normalize_chapters(work_id: &str, raw: Vec<RawChapter>, settings: &Settings) -> Vec<Chapter> {
    let filter = settings.language_filter();
    let candidates = raw.into_iter().filter_map(|RawChapter { id, attributes }| {
        if let Some(language) = filter
            && language != attributes.translated_language
        {
            tracing::trace!(chapter = %id, language = %attributes.translated_language, "Skipping chapter in other language");
            return None;
        }
        Some(Chapter {
            number: parse_number(attributes.chapter.as_deref()),
            id,
            work_id: work_id.to_string(),
            language: attributes.translated_language,
            title: attributes.title,
            volume: attributes.volume,
        })
    });
    let chapters = dedup_first(candidates);
    tracing::Span::current().record("chapters", chapters.len());
    chapters
}

/// Keeps the first chapter per identity key, preserving input order.
fn dedup_first(chapters: impl IntoIterator<Item = Chapter>) -> Vec<Chapter> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for chapter in chapters {
        let key = chapter.key();
        if seen.insert(key) {
            unique.push(chapter);
        } else {
            tracing::debug!(chapter = %chapter.id, key = %chapter.key(), "Dropping duplicate chapter");
        }
    }
    unique
}

/// Parses the textual chapter number. Missing, blank, unparseable and
/// non-finite values all become `NaN`.
fn parse_number(text: Option<&str>) -> f64 {
    text.map(str::trim)
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|number| number.is_finite())
        .unwrap_or(f64::NAN)
}
