//! Genre endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::genre::{GenreDetail, GenreForm, GenreFormScreen, GenreView},
};

use super::{AuthenticatedUser, FormJson};

/// List all genres
#[utoipa::path(
    get,
    path = "/catalog/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres ordered by name", body = Vec<GenreView>)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<Vec<GenreView>>> {
    let genres = state.services.genres.list().await?;
    Ok(Json(genres))
}

/// Get a genre and its books
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = GenreDetail),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GenreDetail>> {
    let detail = state.services.genres.detail(id).await?;
    Ok(Json(detail))
}

/// Empty genre form
#[utoipa::path(
    get,
    path = "/catalog/genre/create",
    tag = "genres",
    responses(
        (status = 200, description = "Create form", body = GenreFormScreen)
    )
)]
pub async fn create_genre_form() -> Json<GenreFormScreen> {
    Json(GenreFormScreen {
        title: "Create Genre".to_string(),
        genre: None,
    })
}

/// Create a genre. An existing genre with the same name is returned as-is.
#[utoipa::path(
    post,
    path = "/catalog/genre/create",
    tag = "genres",
    security(("bearer_auth" = [])),
    request_body = GenreForm,
    responses(
        (status = 201, description = "Genre created", body = GenreView),
        (status = 200, description = "Genre already existed", body = GenreView),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    FormJson(form): FormJson<GenreForm>,
) -> AppResult<(StatusCode, Json<GenreView>)> {
    let (genre, created) = state.services.genres.create(form).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(genre)))
}

/// Genre form pre-filled for editing
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/update",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Update form", body = GenreFormScreen),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GenreFormScreen>> {
    let genre = state.services.genres.get(id).await?;
    Ok(Json(GenreFormScreen {
        title: "Update Genre".to_string(),
        genre: Some(genre),
    }))
}

/// Update a genre
#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/update",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreForm,
    responses(
        (status = 200, description = "Genre updated", body = GenreView),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
    FormJson(form): FormJson<GenreForm>,
) -> AppResult<Json<GenreView>> {
    let genre = state.services.genres.update(id, form).await?;
    Ok(Json(genre))
}

/// Delete confirmation: the genre and the books that still use it
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/delete",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre and its books", body = GenreDetail),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GenreDetail>> {
    let detail = state.services.genres.detail(id).await?;
    Ok(Json(detail))
}

/// Delete a genre no book is filed under
#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/delete",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Genre still used by books")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
