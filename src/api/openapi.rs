//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, book_instances, books, catalog, genres, health};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Local Library Catalog API",
        version = "0.3.0",
        description = "Books, authors, genres and copies of the Local Library catalog"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Catalog
        catalog::index,
        // Books
        books::list_books,
        books::get_book,
        books::create_book_form,
        books::create_book,
        books::update_book_form,
        books::update_book,
        books::delete_book_form,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author_form,
        authors::create_author,
        authors::update_author_form,
        authors::update_author,
        authors::delete_author_form,
        authors::delete_author,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre_form,
        genres::create_genre,
        genres::update_genre_form,
        genres::update_genre,
        genres::delete_genre_form,
        genres::delete_genre,
        // Book instances
        book_instances::list_book_instances,
        book_instances::get_book_instance,
        book_instances::create_book_instance_form,
        book_instances::create_book_instance,
        book_instances::update_book_instance_form,
        book_instances::update_book_instance,
        book_instances::delete_book_instance_form,
        book_instances::delete_book_instance,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Catalog
            crate::models::catalog::CatalogIndex,
            crate::models::catalog::CatalogCounts,
            // Books
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::BookListEntry,
            crate::models::book::BookView,
            crate::models::book::BookDetail,
            crate::models::book::BookForm,
            crate::models::book::BookFormScreen,
            crate::models::book::GenreChoice,
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorView,
            crate::models::author::AuthorRef,
            crate::models::author::AuthorDetail,
            crate::models::author::AuthorForm,
            crate::models::author::AuthorFormScreen,
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::GenreView,
            crate::models::genre::GenreDetail,
            crate::models::genre::GenreForm,
            crate::models::genre::GenreFormScreen,
            // Book instances
            crate::models::book_instance::BookInstance,
            crate::models::book_instance::BookInstanceStatus,
            crate::models::book_instance::BookInstanceView,
            crate::models::book_instance::BookRef,
            crate::models::book_instance::BookInstanceForm,
            crate::models::book_instance::BookInstanceFormScreen,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Administrator authentication"),
        (name = "catalog", description = "Catalog home page"),
        (name = "books", description = "Book management"),
        (name = "authors", description = "Author management"),
        (name = "genres", description = "Genre management"),
        (name = "bookinstances", description = "Copy management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
