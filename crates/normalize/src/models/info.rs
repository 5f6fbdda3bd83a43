/// Audience the source as a whole is suitable for, independent of the
/// per-work [`ContentRating`](super::ContentRating).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceAudience {
    Everyone,
    Mature,
    Adult,
}

/// Static description of this source, as shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub website: &'static str,
    pub audience: SourceAudience,
}

pub const SOURCE_INFO: SourceInfo = SourceInfo {
    name: "MangaDex",
    description: "Catalog, chapters and pages from the MangaDex API",
    version: "0.1.0",
    website: "https://mangadex.org",
    audience: SourceAudience::Everyone,
};
