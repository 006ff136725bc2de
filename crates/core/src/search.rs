//! Question filters: case-insensitive substring search and category match.
//!
//! Both are pure and keep the relative order of their input, except that
//! [`by_category`] additionally guarantees ascending id order.

use crate::models::Question;
use crate::types::DbId;

/// Whether `term` occurs in `text`, ignoring case.
///
/// Simple per-character lowercase mapping only; no trimming or Unicode
/// normalization. The empty term matches everything.
pub fn matches_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term`, in input order.
pub fn search(records: &[Question], term: &str) -> Vec<Question> {
    records
        .iter()
        .filter(|q| matches_term(&q.question, term))
        .cloned()
        .collect()
}

/// Questions in category `category_id`, ascending by id.
pub fn by_category(records: &[Question], category_id: DbId) -> Vec<Question> {
    let mut selected: Vec<Question> = records
        .iter()
        .filter(|q| q.category == category_id)
        .cloned()
        .collect();
    selected.sort_by_key(|q| q.id);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: DbId, text: &str, category: DbId) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: String::new(),
            category,
            difficulty: 1,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            q(5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
            q(6, "What was the title of the 1990 fantasy directed by Tim Burton?", 5),
            q(9, "What boxer's original name is Cassius Clay?", 4),
            q(2, "What movie earned Tom Hanks his third straight Oscar nomination?", 5),
        ]
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample();
        let upper = search(&records, "TITLE");
        let lower = search(&records, "title");
        assert_eq!(upper, lower);
        assert_eq!(upper.iter().map(|q| q.id).collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn search_keeps_input_order() {
        let records = sample();
        let hits = search(&records, "what");
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![6, 9, 2]);
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(search(&sample(), "").len(), 4);
        assert!(matches_term("anything", ""));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(search(&sample(), "sings").len(), 1);
        assert!(search(&sample(), "sings ").is_empty());
    }

    #[test]
    fn search_selects_exactly_what_matches_term_accepts() {
        let records = sample();
        for term in ["WHAT", "tim", "", "?", "zzz"] {
            let expected: Vec<DbId> = records
                .iter()
                .filter(|q| matches_term(&q.question, term))
                .map(|q| q.id)
                .collect();
            let hits: Vec<DbId> = search(&records, term).iter().map(|q| q.id).collect();
            assert_eq!(hits, expected, "term {term:?}");
        }
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search(&sample(), "something that can't be found").is_empty());
    }

    #[test]
    fn by_category_sorts_by_id() {
        let hits = by_category(&sample(), 5);
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 6]);
    }

    #[test]
    fn by_category_unknown_is_empty() {
        assert!(by_category(&sample(), 100).is_empty());
    }
}
