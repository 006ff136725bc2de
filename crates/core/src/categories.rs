//! Category id → label mapping, the shape listing responses expose.

use std::collections::BTreeMap;

use crate::models::Category;
use crate::types::DbId;

/// Categories keyed by id. Ordered so JSON output is stable.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Build the id → label mapping. A later duplicate id overwrites an earlier one.
pub fn format_categories(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: DbId, label: &str) -> Category {
        Category {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(format_categories(&[]).is_empty());
    }

    #[test]
    fn one_entry_per_distinct_id() {
        let map = format_categories(&[cat(1, "Science"), cat(2, "Art"), cat(3, "Geography")]);
        assert_eq!(map.len(), 3);
        assert_eq!(map[&2], "Art");
    }

    #[test]
    fn later_duplicate_wins() {
        let map = format_categories(&[cat(1, "Science"), cat(1, "Physics")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&1], "Physics");
    }

    #[test]
    fn serializes_with_string_keys() {
        let map = format_categories(&[cat(1, "Science")]);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::json!({"1": "Science"})
        );
    }
}
