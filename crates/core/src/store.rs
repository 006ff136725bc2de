//! Collaborator contracts for question and category storage.
//!
//! The façade only talks to these traits. `trivia-db` implements them over
//! PostgreSQL and [`crate::memory`] implements them in process.

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question};
use crate::types::DbId;

/// Failure reported by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or rejected the operation.
    #[error("Store backend error: {0}")]
    Backend(String),

    /// The backend returned data the store could not interpret.
    #[error("Corrupt store data: {0}")]
    Corrupt(String),
}

/// Ordered, filterable, mutable question storage.
///
/// Every listing method returns questions in ascending id order.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Question>, StoreError>;

    async fn filter_by_category(&self, category_id: DbId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Insert a question and return it with its assigned id.
    async fn insert(&self, input: &NewQuestion) -> Result<Question, StoreError>;

    /// Delete by id. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<Question>, StoreError>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Read-only category lookup.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ascending by id.
    async fn all(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError>;
}
