//! Quiz play handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use trivia_core::models::{Question, QuizDraft};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// `question` is `null` once every question in the category has been asked.
#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub question: Option<Question>,
}

/// POST /api/v1/quizzes
///
/// Body: `{"previous_questions": [ids], "quiz_category": {"type": ..., "id": ...}}`.
pub async fn next_question(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<QuizDraft>,
) -> AppResult<impl IntoResponse> {
    let mut rng = StdRng::from_os_rng();
    let question = state.service.next_quiz_question(draft, &mut rng).await?;

    Ok(Json(DataResponse {
        data: QuizPayload { question },
    }))
}
