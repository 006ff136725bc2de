//! Category row model.

use sqlx::FromRow;
use trivia_core::models::Category;
use trivia_core::types::DbId;

/// A row from the `categories` table. The `type` column is selected as `label`.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub label: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            label: row.label,
        }
    }
}
