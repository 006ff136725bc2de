//! Handlers for category listing and per-category question listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use trivia_core::categories::CategoryMap;
use trivia_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.service.list_categories().await?;

    Ok(Json(DataResponse {
        data: CategoriesPayload { categories },
    }))
}

/// GET /api/v1/categories/{id}/questions?page=N
///
/// One page of the category's questions, labelled with the category name.
pub async fn list_category_questions(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .service
        .questions_by_category(category_id, params.page)
        .await?;

    Ok(Json(DataResponse { data: page }))
}
