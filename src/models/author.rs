//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{book::BookSummary, dates, optional_date, record_url};

pub fn display_name(family_name: &str, first_name: &str) -> String {
    format!("{}, {}", family_name, first_name)
}

/// Full author record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// "family_name, first_name"
    pub fn name(&self) -> String {
        display_name(&self.family_name, &self.first_name)
    }

    pub fn url(&self) -> String {
        record_url("author", self.id)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        dates::iso_or_empty(self.date_of_birth)
    }

    pub fn date_of_death_formatted(&self) -> String {
        dates::iso_or_empty(self.date_of_death)
    }

    /// "<long birth> - <long death>", either side blank when unknown
    pub fn lifespan(&self) -> String {
        let birth = self.date_of_birth.map(dates::long).unwrap_or_default();
        let death = self.date_of_death.map(dates::long).unwrap_or_default();
        format!("{} - {}", birth, death)
    }

    /// Edit-form value. Unlike `date_of_birth_formatted`, an unknown date
    /// yields today's date rather than an empty string.
    pub fn date_of_birth_yyyy_mm_dd(&self) -> String {
        dates::iso_or_today(self.date_of_birth)
    }

    /// Edit-form value, same fallback as `date_of_birth_yyyy_mm_dd`.
    pub fn date_of_death_yyyy_mm_dd(&self) -> String {
        dates::iso_or_today(self.date_of_death)
    }
}

/// Author with its display fields resolved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorView {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub name: String,
    pub url: String,
    pub date_of_birth_formatted: String,
    pub date_of_death_formatted: String,
    pub lifespan: String,
    pub date_of_birth_yyyy_mm_dd: String,
    pub date_of_death_yyyy_mm_dd: String,
}

impl From<&Author> for AuthorView {
    fn from(a: &Author) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name.clone(),
            family_name: a.family_name.clone(),
            date_of_birth: a.date_of_birth,
            date_of_death: a.date_of_death,
            name: a.name(),
            url: a.url(),
            date_of_birth_formatted: a.date_of_birth_formatted(),
            date_of_death_formatted: a.date_of_death_formatted(),
            lifespan: a.lifespan(),
            date_of_birth_yyyy_mm_dd: a.date_of_birth_yyyy_mm_dd(),
            date_of_death_yyyy_mm_dd: a.date_of_death_yyyy_mm_dd(),
        }
    }
}

impl From<Author> for AuthorView {
    fn from(a: Author) -> Self {
        AuthorView::from(&a)
    }
}

/// Minimal reference used wherever an author is shown next to a book
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorRef {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl AuthorRef {
    pub fn new(id: i32, family_name: &str, first_name: &str) -> Self {
        Self {
            id,
            name: display_name(family_name, first_name),
            url: record_url("author", id),
        }
    }
}

impl From<&Author> for AuthorRef {
    fn from(a: &Author) -> Self {
        AuthorRef::new(a.id, &a.family_name, &a.first_name)
    }
}

/// Author detail screen: the author and all of their books
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorDetail {
    pub author: AuthorView,
    pub books: Vec<BookSummary>,
}

/// Create / update author form: current values (update only)
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorFormScreen {
    pub title: String,
    pub author: Option<AuthorView>,
}

/// Create / update author submission (full replace of mutable fields)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AuthorForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Family name must be 1-100 characters"))]
    pub family_name: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorForm {
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.family_name = self.family_name.trim().to_string();
        self
    }
}
