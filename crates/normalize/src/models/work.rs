use super::WorkStatus;
use time::OffsetDateTime;

/// A fully normalized catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    /// MangaDex manga UUID
    pub id: String,
    /// Primary title then alternates, resolved against the preferred language
    pub titles: Vec<String>,
    /// First cover, if the work has any cover relationships
    pub primary_image: Option<String>,
    /// Every cover URL in relationship order
    pub all_images: Vec<String>,
    pub status: WorkStatus,
    /// Description in the preferred language only
    pub description: Option<String>,
    /// Raw update timestamp, offset preserved
    pub last_updated: OffsetDateTime,
    pub is_mature: bool,
}
impl Work {
    /// The first resolved title, if any resolved at all.
    pub fn title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }
}
