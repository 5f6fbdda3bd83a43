use std::sync::Arc;

use exn::ResultExt;
use mdx_config::SourceConfig;
use mdx_normalize::models::{Chapter, ChapterPages, SOURCE_INFO, SearchTile, SourceInfo, Work};
use mdx_normalize::settings::SettingsMenu;
use mdx_normalize::{PreferenceStore, Settings};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{TransportHandle, endpoints};

pub type StoreHandle = Arc<dyn PreferenceStore + Send + Sync>;

/// The four host-facing operations: fetch a body through the transport, then
/// hand it to the normalizer along with a freshly resolved [`Settings`].
///
/// Settings are read from the store on every call and never cached, so a
/// change the user saves applies to the very next operation.
#[derive(Clone)]
pub struct Source {
    transport: TransportHandle,
    store: StoreHandle,
    config: SourceConfig,
}
impl Source {
    pub fn new(transport: TransportHandle, store: StoreHandle, config: SourceConfig) -> Self {
        Self {
            transport,
            store,
            config,
        }
    }

    pub fn info(&self) -> &'static SourceInfo {
        &SOURCE_INFO
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// A fresh settings snapshot.
    pub fn settings(&self) -> Settings {
        Settings::resolve(&*self.store)
    }

    /// The settings section for the host to render.
    pub fn settings_menu(&self) -> SettingsMenu {
        Settings::menu(&*self.store)
    }

    #[instrument(skip(self), fields(transport = self.transport.name()))]
    pub async fn work_details(&self, work_id: &str) -> Result<Work> {
        let settings = self.settings();
        let body = self.transport.get(&endpoints::manga(&self.config, work_id)).await?;
        mdx_normalize::work(body, &settings).or_raise(|| ErrorKind::Normalize)
    }

    #[instrument(skip(self), fields(transport = self.transport.name()))]
    pub async fn chapters(&self, work_id: &str) -> Result<Vec<Chapter>> {
        let settings = self.settings();
        let body = self.transport.get(&endpoints::chapters(&self.config, work_id, &settings)).await?;
        mdx_normalize::chapters(work_id, body, &settings).or_raise(|| ErrorKind::Normalize)
    }

    #[instrument(skip(self), fields(transport = self.transport.name()))]
    pub async fn chapter_pages(&self, work_id: &str, chapter_id: &str) -> Result<ChapterPages> {
        let body = self.transport.get(&endpoints::at_home(&self.config, chapter_id)).await?;
        mdx_normalize::pages(work_id, chapter_id, body).or_raise(|| ErrorKind::Normalize)
    }

    #[instrument(skip(self), fields(transport = self.transport.name()))]
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<SearchTile>> {
        let settings = self.settings();
        let body = self.transport.get(&endpoints::search(&self.config, query, &settings)).await?;
        mdx_normalize::search(body, &settings).or_raise(|| ErrorKind::Normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;
    use mdx_normalize::models::WorkStatus;
    use mdx_normalize::settings::PreferenceValue;
    use std::collections::HashMap;

    const MANGA: &str = r#"{
        "result": "ok",
        "data": {
            "id": "m-1",
            "type": "manga",
            "attributes": {
                "title": {"en": "Frieren"},
                "altTitles": [{"ja": "Sousou no Frieren"}, {"en": "Frieren: Beyond Journey's End"}],
                "description": {"en": "An elf mage outlives her party."},
                "status": "ongoing",
                "contentRating": "safe",
                "updatedAt": "2024-01-02T03:04:05+00:00"
            },
            "relationships": [{"id": "c", "type": "cover_art", "attributes": {"fileName": "cover.jpg"}}]
        }
    }"#;

    const CHAPTERS: &str = r#"{"data": [
        {"id": "a", "attributes": {"translatedLanguage": "en", "volume": "1", "chapter": "1"}},
        {"id": "b", "attributes": {"translatedLanguage": "en", "volume": "1", "chapter": "1"}},
        {"id": "c", "attributes": {"translatedLanguage": "fr", "volume": "1", "chapter": "1"}}
    ]}"#;

    const AT_HOME: &str = r#"{"baseUrl": "https://node.example", "chapter": {"hash": "h1", "data": ["1.png", "2.png"]}}"#;

    const SEARCH: &str = r#"{"data": [
        {"id": "m-1", "attributes": {"title": {"ja": "Sousou"}, "altTitles": [{"en": "Frieren"}], "updatedAt": "2024-01-01T00:00:00Z"}, "relationships": []}
    ]}"#;

    fn store(entries: &[(&str, PreferenceValue)]) -> StoreHandle {
        Arc::new(entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect::<HashMap<_, _>>())
    }

    fn source(transport: Arc<MockTransport>, store: StoreHandle) -> Source {
        Source::new(transport, store, SourceConfig::default())
    }

    fn transport() -> Arc<MockTransport> {
        Arc::new(MockTransport::with_responses([
            ("/manga/m-1", MANGA),
            ("/chapter", CHAPTERS),
            ("/at-home/server/a", AT_HOME),
            ("/manga", SEARCH),
            ("/manga/broken", "{\"data\": 1}"),
        ]))
    }

    #[tokio::test]
    async fn test_work_details() {
        let transport = transport();
        let work = source(transport.clone(), store(&[])).work_details("m-1").await.unwrap();
        assert_eq!(work.titles, ["Frieren", "Frieren: Beyond Journey's End"]);
        assert_eq!(work.status, WorkStatus::Ongoing);
        assert_eq!(work.primary_image.as_deref(), Some("https://mangadex.org/covers/cover.jpg"));
        assert!(!work.is_mature);
        let requests = transport.requests().await;
        assert_eq!(requests[0].to_url(), "https://api.mangadex.org/manga/m-1?includes[]=cover_art");
    }

    #[tokio::test]
    async fn test_chapters() {
        let transport = transport();
        let store = store(&[("contentRating-safe", true.into()), ("contentRating-erotica", false.into())]);
        let chapters = source(transport.clone(), store).chapters("m-1").await.unwrap();
        assert_eq!(chapters.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), ["a"]);
        assert_eq!(chapters[0].work_id, "m-1");
        let requests = transport.requests().await;
        assert_eq!(requests[0].values("contentRating[]").collect::<Vec<_>>(), ["safe"]);
        assert_eq!(requests[0].values("manga").collect::<Vec<_>>(), ["m-1"]);
    }

    #[tokio::test]
    async fn test_chapter_pages() {
        let pages = source(transport(), store(&[])).chapter_pages("m-1", "a").await.unwrap();
        assert_eq!(pages.page_urls, ["https://node.example/data/h1/1.png", "https://node.example/data/h1/2.png"]);
        assert_eq!(pages.work_id, "m-1");
        assert!(!pages.is_long_strip);
    }

    #[tokio::test]
    async fn test_search() {
        let transport = transport();
        let tiles = source(transport.clone(), store(&[])).search(Some("frieren")).await.unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].title, "Frieren");
        assert_eq!(tiles[0].thumbnail_url, None);
        let requests = transport.requests().await;
        assert_eq!(requests[0].values("title").collect::<Vec<_>>(), ["frieren"]);
        assert_eq!(requests[0].values("includes[]").collect::<Vec<_>>(), ["manga", "cover_art"]);
    }

    #[tokio::test]
    async fn test_settings_are_read_per_call() {
        let transport = transport();
        let source = source(transport.clone(), store(&[("language", "ja".into())]));
        let work = source.work_details("m-1").await.unwrap();
        assert_eq!(work.titles, ["Sousou no Frieren"]);
        assert_eq!(work.description, None);
        // Only the French chapter survives a French language filter.
        let source = Source::new(transport, store(&[("language", "fr".into())]), SourceConfig::default());
        let chapters = source.chapters("m-1").await.unwrap();
        assert_eq!(chapters.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), ["c"]);
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let err = source(transport(), store(&[])).work_details("missing").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(path) if path == "/manga/missing"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let err = source(transport(), store(&[])).work_details("broken").await.unwrap_err();
        assert_eq!(&*err, &ErrorKind::Normalize);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_menu_and_info() {
        let source = source(transport(), store(&[]));
        assert_eq!(source.info().name, "MangaDex");
        assert_eq!(source.settings_menu().rows.len(), 5);
        assert_eq!(source.settings().allowed_ratings().count(), 0);
    }
}
