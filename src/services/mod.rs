//! Business logic services

pub mod auth;
pub mod authors;
pub mod book_instances;
pub mod books;
pub mod catalog;
pub mod genres;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub authors: authors::AuthorsService,
    pub genres: genres::GenresService,
    pub books: books::BooksService,
    pub book_instances: book_instances::BookInstancesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            book_instances: book_instances::BookInstancesService::new(repository),
        }
    }
}
