//! Fixed-size page slicing for question listings.

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Return page `page` (1-based) of `records`.
///
/// Pages past the end, and page `0`, are empty rather than an error; the
/// caller decides what emptiness means.
pub fn paginate<T>(records: &[T], page: Option<u32>) -> &[T] {
    let page = page.unwrap_or(DEFAULT_PAGE);
    if page == 0 {
        return &[];
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(records.len());
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn default_page_is_first() {
        let records = numbers(25);
        assert_eq!(paginate(&records, None), &records[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let records = numbers(25);
        assert_eq!(paginate(&records, Some(3)), &records[20..25]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let records = numbers(19);
        assert!(paginate(&records, Some(1000)).is_empty());
        assert!(paginate(&records, Some(u32::MAX)).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        assert!(paginate(&numbers(5), Some(0)).is_empty());
    }

    #[test]
    fn page_lengths_follow_formula() {
        for n in [0usize, 1, 9, 10, 11, 19, 20, 37] {
            let records = numbers(n);
            for p in 1..=5u32 {
                let skipped = (p as usize - 1) * QUESTIONS_PER_PAGE;
                let expected = n.saturating_sub(skipped).min(QUESTIONS_PER_PAGE);
                assert_eq!(paginate(&records, Some(p)).len(), expected, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn concatenated_pages_reproduce_input() {
        let records = numbers(37);
        let pages = records.len().div_ceil(QUESTIONS_PER_PAGE) as u32;
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|p| paginate(&records, Some(p)).iter().copied())
            .collect();
        assert_eq!(joined, records);
    }
}
