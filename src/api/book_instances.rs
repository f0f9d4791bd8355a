//! Book instance (copy) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book_instance::{BookInstanceForm, BookInstanceFormScreen, BookInstanceView},
};

use super::{AuthenticatedUser, FormJson};

/// List all copies
#[utoipa::path(
    get,
    path = "/catalog/bookinstances",
    tag = "bookinstances",
    responses(
        (status = 200, description = "Copies ordered by due date", body = Vec<BookInstanceView>)
    )
)]
pub async fn list_book_instances(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookInstanceView>>> {
    let instances = state.services.book_instances.list().await?;
    Ok(Json(instances))
}

/// Get a copy
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book instance ID")),
    responses(
        (status = 200, description = "Copy details", body = BookInstanceView),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_book_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookInstanceView>> {
    let instance = state.services.book_instances.detail(id).await?;
    Ok(Json(instance))
}

/// Empty copy form with book and status choices
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/create",
    tag = "bookinstances",
    responses(
        (status = 200, description = "Create form", body = BookInstanceFormScreen)
    )
)]
pub async fn create_book_instance_form(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookInstanceFormScreen>> {
    let screen = state.services.book_instances.form_screen(None).await?;
    Ok(Json(screen))
}

/// Create a copy
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/create",
    tag = "bookinstances",
    security(("bearer_auth" = [])),
    request_body = BookInstanceForm,
    responses(
        (status = 201, description = "Copy created", body = BookInstanceView),
        (status = 400, description = "Invalid input or unknown book"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_book_instance(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    FormJson(form): FormJson<BookInstanceForm>,
) -> AppResult<(StatusCode, Json<BookInstanceView>)> {
    let instance = state.services.book_instances.create(form).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// Copy form pre-filled for editing
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/update",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book instance ID")),
    responses(
        (status = 200, description = "Update form", body = BookInstanceFormScreen),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_book_instance_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookInstanceFormScreen>> {
    let screen = state.services.book_instances.form_screen(Some(id)).await?;
    Ok(Json(screen))
}

/// Update a copy
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/update",
    tag = "bookinstances",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book instance ID")),
    request_body = BookInstanceForm,
    responses(
        (status = 200, description = "Copy updated", body = BookInstanceView),
        (status = 400, description = "Invalid input or unknown book"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn update_book_instance(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
    FormJson(form): FormJson<BookInstanceForm>,
) -> AppResult<Json<BookInstanceView>> {
    let instance = state.services.book_instances.update(id, form).await?;
    Ok(Json(instance))
}

/// Delete confirmation
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/delete",
    tag = "bookinstances",
    params(("id" = i32, Path, description = "Book instance ID")),
    responses(
        (status = 200, description = "Copy to delete", body = BookInstanceView),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_book_instance_form(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookInstanceView>> {
    let instance = state.services.book_instances.detail(id).await?;
    Ok(Json(instance))
}

/// Delete a copy
#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/delete",
    tag = "bookinstances",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book instance ID")),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_book_instance(
    State(state): State<crate::AppState>,
    _admin: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.book_instances.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
