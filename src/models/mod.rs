//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod catalog;
pub mod dates;
pub mod genre;
pub mod user;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

// Re-export commonly used types
pub use author::{Author, AuthorView};
pub use book::{Book, BookView};
pub use book_instance::{BookInstance, BookInstanceStatus, BookInstanceView};
pub use genre::{Genre, GenreView};

/// Canonical path of a record: `/catalog/<kind>/<id>`
pub fn record_url(kind: &str, id: i32) -> String {
    format!("/catalog/{}/{}", kind, id)
}

/// Optional ISO date where `null`, a missing field and `""` all mean absent
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
