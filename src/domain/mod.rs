//! Domain primitives for the trivia service.
//!
//! Identifiers use the newtype pattern so a category id can never be passed
//! where a question id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed number of questions returned per page.
pub const QUESTIONS_PER_PAGE: u64 = 10;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the underlying i32 value.
            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

id_newtype!(
    /// Unique identifier of a trivia question, assigned by the database.
    QuestionId
);

id_newtype!(
    /// Unique identifier of a category.
    CategoryId
);

/// One-based page number taken from the `page` query parameter.
///
/// Anything that does not parse as an integer falls back to the first page.
/// Pages below 1 are representable but never contain any rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map_or(Self::FIRST, Self)
    }

    #[must_use]
    pub const fn number(&self) -> i64 {
        self.0
    }

    /// Zero-based page index for the SQL paginator, `None` when the page
    /// lies before the first row.
    #[must_use]
    pub fn index(&self) -> Option<u64> {
        u64::try_from(self.0).ok()?.checked_sub(1)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Category filter requested by a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Id 0: draw from every category.
    All,
    Only(CategoryId),
}

impl QuizCategory {
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Only(CategoryId::new(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_and_convert() {
        let id = QuestionId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(CategoryId::from(7)), 7);
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&QuestionId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: CategoryId = serde_json::from_str("3").unwrap();
        assert_eq!(back, CategoryId::new(3));
    }

    #[test]
    fn page_parse_falls_back_to_first() {
        assert_eq!(Page::parse(None), Page::FIRST);
        assert_eq!(Page::parse(Some("abc")), Page::FIRST);
        assert_eq!(Page::parse(Some("")), Page::FIRST);
        assert_eq!(Page::parse(Some("3")), Page::new(3));
        assert_eq!(Page::parse(Some("-2")), Page::new(-2));
    }

    #[test]
    fn page_index_is_zero_based() {
        assert_eq!(Page::FIRST.index(), Some(0));
        assert_eq!(Page::new(4).index(), Some(3));
        assert_eq!(Page::new(0).index(), None);
        assert_eq!(Page::new(-1).index(), None);
    }

    #[test]
    fn quiz_category_zero_means_all() {
        assert_eq!(QuizCategory::from_id(0), QuizCategory::All);
        assert_eq!(
            QuizCategory::from_id(2),
            QuizCategory::Only(CategoryId::new(2))
        );
    }
}
