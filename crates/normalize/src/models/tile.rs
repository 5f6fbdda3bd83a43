/// Lightweight search result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTile {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}
