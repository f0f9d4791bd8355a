//! Catalog home page model

use serde::Serialize;
use utoipa::ToSchema;

/// Record counts shown on the catalog home page
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CatalogCounts {
    pub book_count: i64,
    pub book_instance_count: i64,
    pub book_instance_available_count: i64,
    pub author_count: i64,
    pub genre_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogIndex {
    pub title: String,
    pub data: CatalogCounts,
}
