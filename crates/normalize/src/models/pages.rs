/// Ordered page images for a single chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPages {
    pub chapter_id: String,
    pub work_id: String,
    /// Page order is significant; never sorted or deduplicated.
    pub page_urls: Vec<String>,
    /// Always `false` for now; the at-home payload says nothing about layout.
    pub is_long_strip: bool,
}
