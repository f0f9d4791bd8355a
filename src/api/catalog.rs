//! Catalog home page

use axum::{extract::State, Json};

use crate::{error::AppResult, models::catalog::CatalogIndex};

/// Record counts for the catalog home page
#[utoipa::path(
    get,
    path = "/catalog/",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog counts", body = CatalogIndex)
    )
)]
pub async fn index(State(state): State<crate::AppState>) -> AppResult<Json<CatalogIndex>> {
    let data = state.services.catalog.counts().await?;
    Ok(Json(CatalogIndex {
        title: "Local Library Home".to_string(),
        data,
    }))
}
