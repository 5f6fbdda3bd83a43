use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// Content rating enum.
///
/// The catalog is fixed; ids outside of it are never represented by this type
/// (see [`is_mature`] for how they are classified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentRating {
    Safe,
    Suggestive,
    Erotica,
    Pornographic,
}
impl ContentRating {
    /// Every known rating, in catalog order.
    pub const ALL: [ContentRating; 4] = [Self::Safe, Self::Suggestive, Self::Erotica, Self::Pornographic];

    /// Returns the API id for the rating.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suggestive => "suggestive",
            Self::Erotica => "erotica",
            Self::Pornographic => "pornographic",
        }
    }

    /// Returns the display string for the rating.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Suggestive => "Suggestive",
            Self::Erotica => "Erotica",
            Self::Pornographic => "Pornographic/Hentai",
        }
    }

    pub fn is_mature(&self) -> bool {
        matches!(self, Self::Erotica | Self::Pornographic)
    }

    /// Looks an id up in the catalog. Exact match only.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rating| rating.id() == id)
    }
}
impl TryFrom<String> for ContentRating {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl FromStr for ContentRating {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_id(s) {
            Some(rating) => Ok(rating),
            None => exn::bail!(ErrorKind::UnknownRating(s.to_string())),
        }
    }
}
impl Display for ContentRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.display_name())
    }
}

/// Anything [`is_mature`] can classify: a known rating, or a raw id straight
/// from a payload (which may be missing altogether).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingRef<'a> {
    Rating(ContentRating),
    Id(&'a str),
    Missing,
}
impl From<ContentRating> for RatingRef<'_> {
    fn from(rating: ContentRating) -> Self {
        Self::Rating(rating)
    }
}
impl From<&ContentRating> for RatingRef<'_> {
    fn from(rating: &ContentRating) -> Self {
        Self::Rating(*rating)
    }
}
impl<'a> From<&'a str> for RatingRef<'a> {
    fn from(id: &'a str) -> Self {
        Self::Id(id)
    }
}
impl<'a> From<&'a String> for RatingRef<'a> {
    fn from(id: &'a String) -> Self {
        Self::Id(id.as_str())
    }
}
impl<'a> From<Option<&'a str>> for RatingRef<'a> {
    fn from(id: Option<&'a str>) -> Self {
        id.map_or(Self::Missing, Self::Id)
    }
}

/// Returns whether a rating (or raw rating id) counts as mature content.
///
/// Ids that are not in the catalog, and missing ids, are treated as mature.
/// This fail-safe is intentional: never relax it to `false`.
///
/// # Examples
///
/// ```
/// use mdx_normalize::models::{ContentRating, is_mature};
/// assert!(!is_mature("safe"));
/// assert!(is_mature("erotica"));
/// assert!(is_mature("unknown-id"));
/// assert!(!is_mature(ContentRating::Suggestive));
/// ```
pub fn is_mature<'a>(rating: impl Into<RatingRef<'a>>) -> bool {
    match rating.into() {
        RatingRef::Rating(rating) => rating.is_mature(),
        RatingRef::Id(id) => match ContentRating::from_id(id) {
            Some(rating) => rating.is_mature(),
            None => {
                tracing::debug!(rating = id, "Unrecognised content rating; classifying as mature");
                true
            },
        },
        RatingRef::Missing => {
            tracing::debug!("Content rating missing; classifying as mature");
            true
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("safe", false)]
    #[case("suggestive", false)]
    #[case("erotica", true)]
    #[case("pornographic", true)]
    #[case("unknown-id", true)]
    #[case("", true)]
    #[case("Safe", true)]
    #[case(" safe", true)]
    fn test_is_mature_by_id(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(is_mature(id), expected);
    }

    #[test]
    fn test_is_mature_by_rating_uses_flag() {
        for rating in ContentRating::ALL {
            assert_eq!(is_mature(rating), rating.is_mature());
            assert_eq!(is_mature(&rating), rating.is_mature());
        }
    }

    #[test]
    fn test_is_mature_missing_is_mature() {
        assert!(is_mature(None::<&str>));
        assert!(!is_mature(Some("safe")));
    }

    #[test]
    fn test_catalog_order_and_names() {
        let ids: Vec<_> = ContentRating::ALL.iter().map(ContentRating::id).collect();
        assert_eq!(ids, ["safe", "suggestive", "erotica", "pornographic"]);
        assert_eq!(ContentRating::Pornographic.display_name(), "Pornographic/Hentai");
        assert_eq!(ContentRating::Safe.to_string(), "Safe");
    }

    #[test]
    fn test_parse_unknown_rating_fails() {
        assert_eq!("erotica".parse::<ContentRating>().unwrap(), ContentRating::Erotica);
        let err = "gore".parse::<ContentRating>().unwrap_err();
        assert_eq!(&*err, &ErrorKind::UnknownRating("gore".to_string()));
    }
}
