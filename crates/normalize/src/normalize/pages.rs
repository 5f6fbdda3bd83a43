use tracing::instrument;

use crate::consts::page_url;
use crate::models::ChapterPages;
use crate::raw::RawAtHome;

/// Builds the page URLs for a chapter from an at-home server lookup.
///
/// Each URL is `{baseUrl}/data/{hash}/{fileName}`, by plain concatenation, in
/// exactly the order the server listed the files.
#[instrument(skip(raw), fields(pages = raw.chapter.data.len()))]
pub fn normalize_pages(work_id: &str, chapter_id: &str, raw: RawAtHome) -> ChapterPages {
    let RawAtHome { base_url, chapter } = raw;
    let page_urls = chapter
        .data
        .iter()
        .map(|file_name| page_url(&base_url, &chapter.hash, file_name))
        .collect();
    ChapterPages {
        chapter_id: chapter_id.to_string(),
        work_id: work_id.to_string(),
        page_urls,
        // The payload carries no layout hint; long strip detection is not done.
        is_long_strip: false,
    }
}
