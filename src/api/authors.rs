//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::author::{AuthorDetail, AuthorForm, AuthorFormScreen, AuthorView},
};

use super::{AuthenticatedUser, FormJson};

/// List all authors
#[utoipa::path(
    get,
    path = "/catalog/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors ordered by family name", body = Vec<AuthorView>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AuthorView>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Get an author and their books
#[utoipa::path(
    get,
    path = "/catalog/author/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDetail),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorDetail>> {
    let detail = state.services.authors.detail(id).await?;
    Ok(Json(detail))
}

/// Empty author form
#[utoipa::path(
    get,
    path = "/catalog/author/create",
    tag = "authors",
    responses(
        (status = 200, description = "Create form", body = AuthorFormScreen)
    )
)]
pub async fn create_author_form() -> Json<AuthorFormScreen> {
    Json(AuthorFormScreen {
        title: "Create Author".to_string(),
        author: None,
    })
}

/// Create an author
#[utoipa::path(
    post,
    path = "/catalog/author/create",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = AuthorForm,
    responses(
        (status = 201, description = "Author created", body = AuthorView),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    FormJson(form): FormJson<AuthorForm>,
) -> AppResult<(StatusCode, Json<AuthorView>)> {
    let author = state.services.authors.create(form).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Author form pre-filled for editing
#[utoipa::path(
    get,
    path = "/catalog/author/{id}/update",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Update form", body = AuthorFormScreen),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorFormScreen>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(AuthorFormScreen {
        title: "Update Author".to_string(),
        author: Some(author),
    }))
}

/// Update an author
#[utoipa::path(
    post,
    path = "/catalog/author/{id}/update",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorForm,
    responses(
        (status = 200, description = "Author updated", body = AuthorView),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
    FormJson(form): FormJson<AuthorForm>,
) -> AppResult<Json<AuthorView>> {
    let author = state.services.authors.update(id, form).await?;
    Ok(Json(author))
}

/// Delete confirmation: the author and the books that still reference them
#[utoipa::path(
    get,
    path = "/catalog/author/{id}/delete",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author and their books", body = AuthorDetail),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorDetail>> {
    let detail = state.services.authors.detail(id).await?;
    Ok(Json(detail))
}

/// Delete an author without books
#[utoipa::path(
    post,
    path = "/catalog/author/{id}/delete",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Author still has books")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
