use crate::store::StoreError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A query produced zero results after filtering and pagination.
    #[error("No results: {0}")]
    NoResults(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The collaborator store failed in a way the request cannot recover from.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Unprocessable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_become_unprocessable() {
        let err: CoreError = StoreError::Backend("connection reset".into()).into();
        assert!(matches!(err, CoreError::Unprocessable(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            entity: "Question",
            id: 100,
        };
        assert_eq!(err.to_string(), "Entity not found: Question with id 100");
    }
}
