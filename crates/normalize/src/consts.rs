/// Canonical cover image location; covers are `{COVER_BASE_URL}/{fileName}`.
pub const COVER_BASE_URL: &str = "https://mangadex.org/covers";
/// Path segment between an at-home base URL and the chapter hash.
pub const PAGE_DATA_SEGMENT: &str = "data";
/// Search tile title when neither the title nor any alternate title resolves.
pub const UNKNOWN_TITLE: &str = "Unknown Manga";

pub(crate) fn cover_url(file_name: &str) -> String {
    format!("{COVER_BASE_URL}/{file_name}")
}

pub(crate) fn page_url(base_url: &str, hash: &str, file_name: &str) -> String {
    format!("{base_url}/{PAGE_DATA_SEGMENT}/{hash}/{file_name}")
}
