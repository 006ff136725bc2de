//! In-process implementations of the store traits.
//!
//! Backs the `memory` store backend and the test suites. Ids are assigned
//! from a monotonically increasing counter and never reused after delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Category, NewQuestion, Question};
use crate::search::matches_term;
use crate::seed;
use crate::store::{CategoryStore, QuestionStore, StoreError};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

struct QuestionTable {
    rows: BTreeMap<DbId, Question>,
    next_id: DbId,
}

/// Question store held in a `BTreeMap`, so iteration is already id-ordered.
pub struct InMemoryQuestionStore {
    table: RwLock<QuestionTable>,
}

impl InMemoryQuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let rows = questions.into_iter().map(|q| (q.id, q)).collect();
        Self {
            table: RwLock::new(QuestionTable { rows, next_id }),
        }
    }

    /// A store preloaded with the stock dataset.
    pub fn seeded() -> Self {
        Self::new(seed::questions())
    }

    async fn select<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let table = self.table.read().await;
        table.rows.values().filter(|q| predicate(q)).cloned().collect()
    }
}

impl Default for InMemoryQuestionStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.select(|_| true).await)
    }

    async fn filter_by_category(&self, category_id: DbId) -> Result<Vec<Question>, StoreError> {
        Ok(self.select(|q| q.category == category_id).await)
    }

    async fn filter_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self.select(|q| matches_term(&q.question, term)).await)
    }

    async fn insert(&self, input: &NewQuestion) -> Result<Question, StoreError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let question = Question {
            id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            category: input.category,
            difficulty: input.difficulty,
        };
        table.rows.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Question>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Fixed category set, ordered by id.
pub struct InMemoryCategoryStore {
    rows: BTreeMap<DbId, Category>,
}

impl InMemoryCategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            rows: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::categories())
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        Ok(self.rows.get(&id).cloned())
    }
}
