//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{book::BookSummary, record_url};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        record_url("genre", self.id)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenreView {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl From<&Genre> for GenreView {
    fn from(g: &Genre) -> Self {
        Self {
            id: g.id,
            name: g.name.clone(),
            url: g.url(),
        }
    }
}

impl From<Genre> for GenreView {
    fn from(g: Genre) -> Self {
        GenreView::from(&g)
    }
}

/// Genre detail screen: the genre and the books filed under it
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreDetail {
    pub genre: GenreView,
    pub books: Vec<BookSummary>,
}

/// Create / update genre form: current values (update only)
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreFormScreen {
    pub title: String,
    pub genre: Option<GenreView>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenreForm {
    #[serde(default)]
    #[validate(length(min = 3, max = 100, message = "Genre name must be 3-100 characters"))]
    pub name: String,
}

impl GenreForm {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let g = Genre {
            id: 3,
            name: "Fantasy".into(),
        };
        assert_eq!(g.url(), "/catalog/genre/3");
        assert_eq!(GenreView::from(g).url, "/catalog/genre/3");
    }

    #[test]
    fn test_name_length_bounds() {
        let check = |name: String| GenreForm { name }.normalized().validate().is_ok();

        assert!(!check(String::new()));
        assert!(!check("ab".into()));
        assert!(!check("  ab  ".into()));
        assert!(check("Sci".into()));
        assert!(check("Fantasy".into()));
        assert!(check("g".repeat(100)));
        assert!(!check("g".repeat(101)));
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, six bytes
        let form = GenreForm { name: "éèê".into() };
        assert!(form.validate().is_ok());
    }
}
