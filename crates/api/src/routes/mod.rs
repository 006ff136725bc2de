pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list categories (GET)
/// /categories/{id}/questions                       questions in a category (GET)
///
/// /questions                                       list (GET), create (POST)
/// /questions/search                                substring search (POST)
/// /questions/{id}                                  get (GET), delete (DELETE)
///
/// /quizzes                                         next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/questions", questions::router())
        .nest("/quizzes", quizzes::router())
}
