use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Volume placeholder used in the identity key when a chapter has no volume.
pub const UNKNOWN_VOLUME: &str = "unknown";

/// A single translated chapter of a work.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    /// MangaDex chapter UUID
    pub id: String,
    /// MangaDex manga UUID the chapter belongs to
    pub work_id: String,
    /// Chapter number; `NaN` when the API value is missing or unparseable
    pub number: f64,
    /// Translated language code (e.g., "en", "pt-br")
    pub language: String,
    pub title: Option<String>,
    pub volume: Option<String>,
}
impl Chapter {
    /// The identity used for deduplication.
    pub fn key(&self) -> ChapterKey {
        ChapterKey::new(&self.language, self.volume.as_deref(), self.number)
    }

    pub fn has_number(&self) -> bool {
        !self.number.is_nan()
    }

    /// Orders chapters by number, ascending, with unnumbered (`NaN`) chapters
    /// after every numbered one. Unnumbered chapters compare equal to each
    /// other so a stable sort keeps their input order.
    pub fn number_cmp(&self, other: &Self) -> Ordering {
        match (self.number.is_nan(), other.number.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.number.partial_cmp(&other.number).unwrap_or(Ordering::Equal),
        }
    }
}

/// Sorts chapters in reading order using [`Chapter::number_cmp`].
///
/// Normalization deliberately leaves chapters in source order; hosts that want
/// sequential navigation call this themselves.
pub fn sort_by_number(chapters: &mut [Chapter]) {
    chapters.sort_by(Chapter::number_cmp);
}

/// Composite identity of a chapter: `(language, volume or "unknown", number)`.
///
/// The number is held as a canonical bit pattern so the key can be hashed:
/// every `NaN` is the same key, as are `0.0` and `-0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterKey {
    language: String,
    volume: String,
    number: u64,
}
impl ChapterKey {
    pub fn new(language: &str, volume: Option<&str>, number: f64) -> Self {
        let number = if number.is_nan() {
            f64::NAN.to_bits()
        } else if number == 0.0 {
            0.0_f64.to_bits()
        } else {
            number.to_bits()
        };
        Self {
            language: language.to_string(),
            volume: volume.unwrap_or(UNKNOWN_VOLUME).to_string(),
            number,
        }
    }
}
impl Display for ChapterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}-{}", self.language, self.volume, f64::from_bits(self.number))
    }
}
