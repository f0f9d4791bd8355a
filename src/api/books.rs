//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{BookDetail, BookForm, BookFormScreen, BookListEntry, BookView},
};

use super::{AuthenticatedUser, FormJson};

/// List all books with their authors
#[utoipa::path(
    get,
    path = "/catalog/books",
    tag = "books",
    responses(
        (status = 200, description = "Books ordered by title", body = Vec<BookListEntry>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookListEntry>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book, its author, genres and copies
#[utoipa::path(
    get,
    path = "/catalog/book/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetail),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetail>> {
    let detail = state.services.books.detail(id).await?;
    Ok(Json(detail))
}

/// Empty book form with author and genre choices
#[utoipa::path(
    get,
    path = "/catalog/book/create",
    tag = "books",
    responses(
        (status = 200, description = "Create form", body = BookFormScreen)
    )
)]
pub async fn create_book_form(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookFormScreen>> {
    let screen = state.services.books.form_screen(None).await?;
    Ok(Json(screen))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/catalog/book/create",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = BookForm,
    responses(
        (status = 201, description = "Book created", body = BookView),
        (status = 400, description = "Invalid input or unknown author/genre"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    FormJson(form): FormJson<BookForm>,
) -> AppResult<(StatusCode, Json<BookView>)> {
    let book = state.services.books.create(form).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Book form pre-filled for editing, current genres checked
#[utoipa::path(
    get,
    path = "/catalog/book/{id}/update",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Update form", body = BookFormScreen),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookFormScreen>> {
    let screen = state.services.books.form_screen(Some(id)).await?;
    Ok(Json(screen))
}

/// Update a book
#[utoipa::path(
    post,
    path = "/catalog/book/{id}/update",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookForm,
    responses(
        (status = 200, description = "Book updated", body = BookView),
        (status = 400, description = "Invalid input or unknown author/genre"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
    FormJson(form): FormJson<BookForm>,
) -> AppResult<Json<BookView>> {
    let book = state.services.books.update(id, form).await?;
    Ok(Json(book))
}

/// Delete confirmation: the book and its remaining copies
#[utoipa::path(
    get,
    path = "/catalog/book/{id}/delete",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book and its copies", body = BookDetail),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDetail>> {
    let detail = state.services.books.detail(id).await?;
    Ok(Json(detail))
}

/// Delete a book without copies
#[utoipa::path(
    post,
    path = "/catalog/book/{id}/delete",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book still has copies")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
