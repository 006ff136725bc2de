//! Handlers for question listing, search, creation and deletion.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use trivia_core::models::QuestionDraft;
use trivia_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub deleted: DbId,
}

/// GET /api/v1/questions?page=N
///
/// Ten questions per page ordered by id, plus the category mapping.
pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = state.service.list_questions(params.page).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/questions/{id}
pub async fn get_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = state.service.get_question(question_id).await?;

    Ok(Json(DataResponse { data: question }))
}

/// POST /api/v1/questions
///
/// Requires `question`, `answer`, `difficulty` and `category`.
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<QuestionDraft>,
) -> AppResult<impl IntoResponse> {
    let question = state.service.create_question(draft).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// DELETE /api/v1/questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.service.delete_question(question_id).await?;

    Ok(Json(DataResponse {
        data: DeletedPayload { deleted },
    }))
}

/// POST /api/v1/questions/search?page=N
///
/// Case-insensitive substring search over question text.
pub async fn search_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .service
        .search_questions(body.search_term.as_deref(), params.page)
        .await?;

    tracing::debug!(
        total = page.total_questions,
        returned = page.questions.len(),
        "Question search completed",
    );

    Ok(Json(DataResponse { data: page }))
}
