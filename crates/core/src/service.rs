//! Query façade over the question and category stores.
//!
//! Each method is one logical request. This is the only layer that decides
//! between success, [`CoreError::NoResults`]/[`CoreError::NotFound`],
//! [`CoreError::Validation`] and [`CoreError::Unprocessable`]; the filters,
//! paginator and selector it composes never fail.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::categories::{format_categories, CategoryMap};
use crate::error::CoreError;
use crate::models::{CategorySelector, Question, QuestionDraft, QuizDraft};
use crate::pagination::paginate;
use crate::quiz::select_quiz_question;
use crate::search::{by_category, search};
use crate::store::{CategoryStore, QuestionStore};
use crate::types::DbId;

/// One page of questions plus the listing context clients render with it.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the filtered set before pagination.
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

/// Request-level composition of stores, filters, paginator and quiz selector.
///
/// Cheap to clone; stores are shared behind `Arc`.
#[derive(Clone)]
pub struct TriviaService {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl TriviaService {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Probe the question store.
    pub async fn ping(&self) -> Result<(), CoreError> {
        Ok(self.questions.ping().await?)
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Every category as an id → label mapping.
    pub async fn list_categories(&self) -> Result<CategoryMap, CoreError> {
        let categories = format_categories(&self.categories.all().await?);
        if categories.is_empty() {
            return Err(CoreError::NoResults("no categories available".into()));
        }
        Ok(categories)
    }

    /// Page `page` of all questions ordered by id, with the category mapping.
    pub async fn list_questions(&self, page: Option<u32>) -> Result<QuestionPage, CoreError> {
        let mut all = self.questions.all().await?;
        all.sort_by_key(|q| q.id);

        let slice = paginate(&all, page);
        if slice.is_empty() {
            return Err(CoreError::NoResults(format!(
                "no questions on page {}",
                page.unwrap_or(1)
            )));
        }

        let categories = format_categories(&self.categories.all().await?);

        Ok(QuestionPage {
            questions: slice.to_vec(),
            total_questions: all.len(),
            categories: Some(categories),
            current_category: None,
        })
    }

    /// Page `page` of questions whose text contains `term`, ignoring case.
    ///
    /// A missing term is a validation error; an empty term matches everything.
    pub async fn search_questions(
        &self,
        term: Option<&str>,
        page: Option<u32>,
    ) -> Result<QuestionPage, CoreError> {
        let term =
            term.ok_or_else(|| CoreError::Validation("missing required field: searchTerm".into()))?;

        let hits = search(&self.questions.filter_by_substring(term).await?, term);
        let slice = paginate(&hits, page);
        if slice.is_empty() {
            return Err(CoreError::NoResults(format!("no questions match '{term}'")));
        }

        Ok(QuestionPage {
            questions: slice.to_vec(),
            total_questions: hits.len(),
            categories: None,
            current_category: None,
        })
    }

    /// Page `page` of questions in `category_id`, labelled with the category.
    pub async fn questions_by_category(
        &self,
        category_id: DbId,
        page: Option<u32>,
    ) -> Result<QuestionPage, CoreError> {
        let matching = by_category(
            &self.questions.filter_by_category(category_id).await?,
            category_id,
        );
        let slice = paginate(&matching, page);
        if slice.is_empty() {
            return Err(CoreError::NoResults(format!(
                "no questions in category {category_id}"
            )));
        }

        let category = self
            .categories
            .get_by_id(category_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            })?;

        Ok(QuestionPage {
            questions: slice.to_vec(),
            total_questions: matching.len(),
            categories: None,
            current_category: Some(category.label),
        })
    }

    // -----------------------------------------------------------------------
    // Single questions
    // -----------------------------------------------------------------------

    pub async fn get_question(&self, id: DbId) -> Result<Question, CoreError> {
        self.questions
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Question",
                id,
            })
    }

    /// Insert a question once every field is present.
    ///
    /// The category reference is not checked here; a store that enforces it
    /// reports the violation as a store error.
    pub async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CoreError> {
        let input = draft.validate()?;
        let created = self.questions.insert(&input).await?;
        tracing::info!(
            question_id = created.id,
            category = created.category,
            "Question created",
        );
        Ok(created)
    }

    /// Delete a question, returning its id.
    pub async fn delete_question(&self, id: DbId) -> Result<DbId, CoreError> {
        if !self.questions.delete_by_id(id).await? {
            return Err(CoreError::NotFound {
                entity: "Question",
                id,
            });
        }
        tracing::info!(question_id = id, "Question deleted");
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Quiz
    // -----------------------------------------------------------------------

    /// Pick a random question from the requested category that is not in
    /// `previous_questions`.
    ///
    /// An empty category is [`CoreError::NoResults`]. Having asked every
    /// question already is not an error and yields `Ok(None)`.
    pub async fn next_quiz_question<R: Rng + Send>(
        &self,
        draft: QuizDraft,
        rng: &mut R,
    ) -> Result<Option<Question>, CoreError> {
        let previous = draft.previous_questions.ok_or_else(|| {
            CoreError::Validation("missing required field: previous_questions".into())
        })?;
        let selector = draft
            .quiz_category
            .ok_or_else(|| CoreError::Validation("missing required field: quiz_category".into()))?
            .resolve()?;

        let candidates = match selector {
            CategorySelector::All => {
                let mut all = self.questions.all().await?;
                all.sort_by_key(|q| q.id);
                all
            }
            CategorySelector::Category(id) => {
                by_category(&self.questions.filter_by_category(id).await?, id)
            }
        };

        if candidates.is_empty() {
            return Err(CoreError::NoResults(
                "no questions available for the selected quiz category".into(),
            ));
        }

        let asked: HashSet<DbId> = previous.into_iter().collect();
        let picked = select_quiz_question(&candidates, &asked, rng).cloned();

        match &picked {
            Some(q) => {
                tracing::debug!(question_id = q.id, asked = asked.len(), "Quiz question selected")
            }
            None => tracing::debug!(asked = asked.len(), "Quiz exhausted"),
        }

        Ok(picked)
    }
}
