//! Request builders for the four API endpoints the source uses.

use mdx_config::SourceConfig;
use mdx_normalize::Settings;

use crate::Request;

/// Page size for chapter lists; only the first page is ever requested.
pub const CHAPTER_LIMIT: u32 = 100;
const CONTENT_RATING_PARAM: &str = "contentRating[]";
const INCLUDES_PARAM: &str = "includes[]";

fn request(config: &SourceConfig, path: String) -> Request {
    Request::new(config.api_base(), path).with_limits(config.request_timeout(), config.requests_per_second)
}

fn content_ratings(settings: &Settings) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    settings.allowed_ratings().map(|rating| (CONTENT_RATING_PARAM, rating.id()))
}

/// Encodes an id as exactly one path segment.
fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// `GET /manga/{id}?includes[]=cover_art`
pub fn manga(config: &SourceConfig, work_id: &str) -> Request {
    request(config, format!("/manga/{}", segment(work_id))).param(INCLUDES_PARAM, "cover_art")
}

/// `GET /chapter?limit=100&manga={id}&contentRating[]=…`
pub fn chapters(config: &SourceConfig, work_id: &str, settings: &Settings) -> Request {
    request(config, "/chapter".to_string())
        .param("limit", CHAPTER_LIMIT.to_string())
        .param("manga", work_id)
        .params(content_ratings(settings))
}

/// `GET /at-home/server/{chapter_id}`
pub fn at_home(config: &SourceConfig, chapter_id: &str) -> Request {
    request(config, format!("/at-home/server/{}", segment(chapter_id)))
}

/// `GET /manga?title={query}&contentRating[]=…&includes[]=manga&includes[]=cover_art`
pub fn search(config: &SourceConfig, query: Option<&str>, settings: &Settings) -> Request {
    request(config, "/manga".to_string())
        .param("title", query.unwrap_or_default())
        .params(content_ratings(settings))
        .params([(INCLUDES_PARAM, "manga"), (INCLUDES_PARAM, "cover_art")])
}
