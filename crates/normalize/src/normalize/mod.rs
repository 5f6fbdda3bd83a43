//! Reduction of raw payloads into domain records.
//!
//! Every function here is pure and infallible: the only failure mode of the
//! pipeline is [`parse`](crate::raw::parse), and every edge case after that
//! has a defined fallback value.

pub mod chapter;
pub mod pages;
pub mod search;
pub mod work;

pub use self::chapter::normalize_chapters;
pub use self::pages::normalize_pages;
pub use self::search::normalize_search;
pub use self::work::normalize_work;
