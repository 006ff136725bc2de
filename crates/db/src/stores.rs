//! PostgreSQL implementations of the core store traits.
//!
//! Thin adapters over [`QuestionRepo`] and [`CategoryRepo`]; the only logic
//! here is converting rows into core records and `sqlx::Error` into
//! [`StoreError`].

use async_trait::async_trait;
use trivia_core::models::{Category, NewQuestion, Question};
use trivia_core::store::{CategoryStore, QuestionStore, StoreError};
use trivia_core::types::DbId;

use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// Classify a sqlx error for the core.
fn store_error(err: sqlx::Error) -> StoreError {
    tracing::warn!(error = %err, "Database query failed");
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_) => StoreError::Corrupt(err.to_string()),
        other => StoreError::Backend(other.to_string()),
    }
}

fn into_records<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

/// Question store backed by the `questions` table.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: DbPool,
}

impl PgQuestionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::list(&self.pool)
            .await
            .map(into_records)
            .map_err(store_error)
    }

    async fn filter_by_category(&self, category_id: DbId) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::list_by_category(&self.pool, category_id)
            .await
            .map(into_records)
            .map_err(store_error)
    }

    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::search(&self.pool, term)
            .await
            .map(into_records)
            .map_err(store_error)
    }

    async fn insert(&self, input: &NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::create(&self.pool, input)
            .await
            .map(Question::from)
            .map_err(store_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        QuestionRepo::delete(&self.pool, id)
            .await
            .map_err(store_error)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        QuestionRepo::find_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Question::from))
            .map_err(store_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}

/// Category store backed by the `categories` table.
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: DbPool,
}

impl PgCategoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::list(&self.pool)
            .await
            .map(into_records)
            .map_err(store_error)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        CategoryRepo::find_by_id(&self.pool, id)
            .await
            .map(|row| row.map(Category::from))
            .map_err(store_error)
    }
}
