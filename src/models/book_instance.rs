//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
    Decode, Encode, FromRow, Postgres,
};
use utoipa::ToSchema;
use validator::Validate;

use super::{dates, optional_date, record_url};

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Available,
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookInstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookInstanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid book instance status: {}", s))
    }
}

// Stored as TEXT, constrained by a CHECK in the schema
impl sqlx::Type<Postgres> for BookInstanceStatus {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for BookInstanceStatus {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let s: &str = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookInstanceStatus {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: NaiveDate,
}

impl BookInstance {
    pub fn url(&self) -> String {
        record_url("bookinstance", self.id)
    }

    /// `Dec 16th, 1775`
    pub fn due_back_formatted(&self) -> String {
        dates::short(self.due_back)
    }

    pub fn due_back_yyyy_mm_dd(&self) -> String {
        dates::iso(self.due_back)
    }
}

/// Copy joined with the title of the book it belongs to
#[derive(Debug, Clone, FromRow)]
pub struct BookInstanceRow {
    #[sqlx(flatten)]
    pub instance: BookInstance,
    pub book_title: String,
}

/// Reference to the book a copy belongs to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookRef {
    pub id: i32,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookInstanceView {
    pub id: i32,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: NaiveDate,
    pub url: String,
    pub due_back_formatted: String,
    pub due_back_yyyy_mm_dd: String,
    pub book: BookRef,
}

impl From<BookInstanceRow> for BookInstanceView {
    fn from(row: BookInstanceRow) -> Self {
        let i = row.instance;
        Self {
            url: i.url(),
            due_back_formatted: i.due_back_formatted(),
            due_back_yyyy_mm_dd: i.due_back_yyyy_mm_dd(),
            book: BookRef {
                id: i.book_id,
                title: row.book_title,
                url: record_url("book", i.book_id),
            },
            id: i.id,
            imprint: i.imprint,
            status: i.status,
            due_back: i.due_back,
        }
    }
}

/// Create / update copy form: current values (update only) and choices
#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceFormScreen {
    pub title: String,
    pub book_instance: Option<BookInstanceView>,
    pub books: Vec<BookRef>,
    pub statuses: Vec<BookInstanceStatus>,
}

/// Create / update copy submission
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookInstanceForm {
    /// Book id
    #[validate(required(message = "Book must be specified"))]
    pub book: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Imprint must be specified"))]
    pub imprint: String,
    #[serde(default)]
    pub status: BookInstanceStatus,
    /// Defaults to today when omitted
    #[serde(default, deserialize_with = "optional_date")]
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceForm {
    pub fn normalized(mut self) -> Self {
        self.imprint = self.imprint.trim().to_string();
        self
    }

    pub fn due_back_or_today(&self) -> NaiveDate {
        self.due_back.unwrap_or_else(dates::today)
    }
}
