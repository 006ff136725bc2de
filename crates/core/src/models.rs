//! Trivia domain records and the loosely-typed request drafts the façade
//! validates.
//!
//! Drafts carry every field as `Option` so that a missing field reaches the
//! façade as data and is classified there as a validation failure, instead
//! of being rejected earlier by a deserializer with its own error shape.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A trivia question as stored by the question store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: DbId,
    /// The question text. Search matches against this field.
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// A question category. Serialized as `{id, type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    pub label: String,
}

/// Fields for a question insert. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// Unvalidated body of a create-question request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

impl QuestionDraft {
    /// Check that every required field is present. Values are passed
    /// through as given; the store is the authority on what it accepts.
    pub fn validate(self) -> Result<NewQuestion, CoreError> {
        let question = self.question.ok_or_else(|| missing_field("question"))?;
        let answer = self.answer.ok_or_else(|| missing_field("answer"))?;
        let category = self
            .category
            .ok_or_else(|| missing_field("category"))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| missing_field("difficulty"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Unvalidated body of a quiz request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizDraft {
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: Option<QuizCategoryDraft>,
}

/// The `quiz_category` object sent by quiz clients.
///
/// `id` is kept as raw JSON because clients send it either as a number or as
/// a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryDraft {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<serde_json::Value>,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(DbId),
}

impl QuizCategoryDraft {
    /// Resolve the selector. `type` of `all`/`click` or an id of `0` select
    /// every category.
    pub fn resolve(&self) -> Result<CategorySelector, CoreError> {
        let kind_is_all = self
            .kind
            .as_deref()
            .map(|k| k.eq_ignore_ascii_case("all") || k.eq_ignore_ascii_case("click"))
            .unwrap_or(false);

        let id = match &self.id {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Number(n)) => Some(n.as_i64().ok_or_else(|| {
                CoreError::Validation(format!("quiz_category.id must be an integer, got {n}"))
            })?),
            Some(serde_json::Value::String(s)) => Some(s.trim().parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("quiz_category.id must be numeric, got '{s}'"))
            })?),
            Some(other) => {
                return Err(CoreError::Validation(format!(
                    "quiz_category.id must be a number or numeric string, got {other}"
                )))
            }
        };

        match (kind_is_all, id) {
            (true, _) | (false, Some(0)) => Ok(CategorySelector::All),
            (false, Some(id)) => Ok(CategorySelector::Category(id)),
            (false, None) => Err(missing_field("quiz_category.id")),
        }
    }
}

fn missing_field(field: &str) -> CoreError {
    CoreError::Validation(format!("missing required field: {field}"))
}
