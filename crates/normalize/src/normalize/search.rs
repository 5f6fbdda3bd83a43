use tracing::instrument;

use crate::consts::{UNKNOWN_TITLE, cover_url};
use crate::models::SearchTile;
use crate::raw::RawManga;
use crate::settings::Settings;

/// Maps a page of search results to tiles.
#[instrument(skip_all, fields(results = raw.len(), language = settings.language()))]
pub fn normalize_search(raw: &[RawManga], settings: &Settings) -> Vec<SearchTile> {
    raw.iter().map(|manga| tile(manga, settings.language())).collect()
}

fn tile(manga: &RawManga, preferred: &str) -> SearchTile {
    SearchTile {
        id: manga.id.clone(),
        title: tile_title(manga, preferred).to_string(),
        thumbnail_url: manga.cover_file_names().next().map(cover_url),
    }
}

/// Resolves a tile title: `title[preferred]`, then the first alternate title
/// in `preferred`, then [`UNKNOWN_TITLE`].
///
/// NOTE: This is not the same resolution as work details, which use the
/// single-level [`locale::resolve`](crate::locale::resolve) and drop empty
/// strings. Here a present-but-empty title still wins over the fallbacks.
/// Both behaviours are kept as they are; unifying them changes which title
/// users see.
fn tile_title<'a>(manga: &'a RawManga, preferred: &str) -> &'a str {
    let attributes = &manga.attributes;
    attributes
        .title
        .get(preferred)
        .or_else(|| attributes.alt_titles.iter().find_map(|alt| alt.get(preferred)))
        .map_or(UNKNOWN_TITLE, String::as_str)
}
