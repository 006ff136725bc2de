use axum::routing::{get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /                  -> list_questions
/// POST   /                  -> create_question
/// POST   /search            -> search_questions
/// GET    /{id}              -> get_question
/// DELETE /{id}              -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/search", post(questions::search_questions))
        .route(
            "/{id}",
            get(questions::get_question).delete(questions::delete_question),
        )
}
