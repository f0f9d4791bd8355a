//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    author::AuthorRef,
    book_instance::BookInstanceView,
    genre::{Genre, GenreView},
    record_url,
};

/// Book row. Genres live in the `book_genres` join table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i32,
}

impl Book {
    pub fn url(&self) -> String {
        record_url("book", self.id)
    }
}

/// Book as shown in lists and on author/genre screens
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl From<Book> for BookSummary {
    fn from(b: Book) -> Self {
        Self {
            url: b.url(),
            id: b.id,
            title: b.title,
            summary: b.summary,
        }
    }
}

/// Entry of the book list: title plus its author
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookListEntry {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub author: AuthorRef,
}

/// Book with its references resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub url: String,
    pub author: AuthorRef,
    pub genre: Vec<GenreView>,
}

impl BookView {
    pub fn new(book: Book, author: AuthorRef, genres: &[Genre]) -> Self {
        Self {
            url: book.url(),
            id: book.id,
            title: book.title,
            summary: book.summary,
            isbn: book.isbn,
            author,
            genre: genres.iter().map(GenreView::from).collect(),
        }
    }
}

/// Book detail screen: the book and every copy of it
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetail {
    pub book: BookView,
    pub book_instances: Vec<BookInstanceView>,
}

/// Genre checkbox on the book form
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenreChoice {
    pub id: i32,
    pub name: String,
    pub checked: bool,
}

/// Create / update book form: current values (update only) and reference choices
#[derive(Debug, Serialize, ToSchema)]
pub struct BookFormScreen {
    pub title: String,
    pub book: Option<BookView>,
    pub authors: Vec<AuthorRef>,
    pub genres: Vec<GenreChoice>,
}

/// Create / update book submission (full replace, genre set included)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Author id
    #[validate(required(message = "Author must not be empty"))]
    pub author: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Summary must not be empty"))]
    pub summary: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
    /// Genre ids
    #[serde(default)]
    pub genre: Vec<i32>,
}

impl BookForm {
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.summary = self.summary.trim().to_string();
        self.isbn = self.isbn.trim().to_string();
        self.genre.sort_unstable();
        self.genre.dedup();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BookForm {
        BookForm {
            title: " Emma ".into(),
            author: Some(1),
            summary: "A novel about youthful hubris.".into(),
            isbn: "9780141439587".into(),
            genre: vec![4, 2, 4],
        }
    }

    #[test]
    fn test_url() {
        let book = Book {
            id: 12,
            title: "Emma".into(),
            summary: String::new(),
            isbn: String::new(),
            author_id: 1,
        };
        assert_eq!(book.url(), "/catalog/book/12");
        assert_eq!(BookSummary::from(book).url, "/catalog/book/12");
    }

    #[test]
    fn test_view_resolves_references() {
        let book = Book {
            id: 12,
            title: "Emma".into(),
            summary: "s".into(),
            isbn: "i".into(),
            author_id: 1,
        };
        let genres = vec![Genre {
            id: 2,
            name: "Romance".into(),
        }];
        let view = BookView::new(book, AuthorRef::new(1, "Austen", "Jane"), &genres);
        assert_eq!(view.author.name, "Austen, Jane");
        assert_eq!(view.author.url, "/catalog/author/1");
        assert_eq!(view.genre[0].url, "/catalog/genre/2");
    }

    #[test]
    fn test_normalized_collapses_duplicate_genres() {
        let f = form().normalized();
        assert_eq!(f.title, "Emma");
        assert_eq!(f.genre, vec![2, 4]);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let f = BookForm {
            title: "  ".into(),
            author: None,
            isbn: String::new(),
            ..form()
        }
        .normalized();
        let errors = f.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("isbn"));
        assert!(!fields.contains_key("summary"));
    }

    #[test]
    fn test_genre_is_optional() {
        let f: BookForm = serde_json::from_str(
            r#"{"title":"Emma","author":1,"summary":"s","isbn":"i"}"#,
        )
        .unwrap();
        assert!(f.genre.is_empty());
        assert!(f.validate().is_ok());
    }
}
