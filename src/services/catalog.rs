//! Catalog home page service

use crate::{
    error::AppResult,
    models::{book_instance::BookInstanceStatus, catalog::CatalogCounts},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count every record type concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let r = &self.repository;
        let (books, instances, available, authors, genres) = tokio::try_join!(
            r.books.count(),
            r.book_instances.count(),
            r.book_instances.count_by_status(BookInstanceStatus::Available),
            r.authors.count(),
            r.genres.count(),
        )?;

        Ok(CatalogCounts {
            book_count: books,
            book_instance_count: instances,
            book_instance_available_count: available,
            author_count: authors,
            genre_count: genres,
        })
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
