mod chapter;
mod info;
mod pages;
mod rating;
mod status;
mod tile;
mod work;

pub use self::chapter::{Chapter, ChapterKey, UNKNOWN_VOLUME, sort_by_number};
pub use self::info::{SOURCE_INFO, SourceAudience, SourceInfo};
pub use self::pages::ChapterPages;
pub use self::rating::{ContentRating, RatingRef, is_mature};
pub use self::status::WorkStatus;
pub use self::tile::SearchTile;
pub use self::work::Work;
