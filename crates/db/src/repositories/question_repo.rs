//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::models::NewQuestion;
use trivia_core::types::DbId;

use crate::models::question::QuestionRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, difficulty, category";

/// Provides CRUD and filtered listing for questions. Listings are id-ordered.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List every question.
    pub async fn list(pool: &PgPool) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, QuestionRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List questions in one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List questions whose text contains `term`, ignoring case.
    ///
    /// `%`, `_` and `\` in `term` are escaped so they match literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(term));
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Find a question by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<QuestionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.difficulty)
            .bind(input.category)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a question by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters using `\` as the escape character.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_terms_are_unchanged() {
        assert_eq!(escape_like("title"), "title");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
