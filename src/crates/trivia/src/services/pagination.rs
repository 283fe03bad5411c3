//! Fixed-size page slicing for question listings

/// Questions per page; not configurable per request
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse the raw `page` query value, falling back to page 1
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1)
}

/// Take the `page`-th window of [`QUESTIONS_PER_PAGE`] items (1-based)
///
/// Page 0 and pages past the end yield an empty vector.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, page: u32) -> Vec<T> {
    let Some(index) = (page as usize).checked_sub(1) else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(index.saturating_mul(QUESTIONS_PER_PAGE))
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = paginate(1..=25, 1);
        assert_eq!(page, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_sizes() {
        let total = 25;
        let pages = (total + QUESTIONS_PER_PAGE - 1) / QUESTIONS_PER_PAGE;
        for p in 1..=pages as u32 {
            let expected = QUESTIONS_PER_PAGE.min(total - (p as usize - 1) * QUESTIONS_PER_PAGE);
            assert_eq!(paginate(0..total, p).len(), expected);
        }
    }

    #[test]
    fn test_last_partial_page() {
        assert_eq!(paginate(1..=25, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        assert!(paginate(1..=25, 4).is_empty());
        assert!(paginate(1..=25, 1500).is_empty());
        assert!(paginate(1..=25, u32::MAX).is_empty());
    }

    #[test]
    fn test_page_zero_is_empty() {
        assert!(paginate(1..=25, 0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(paginate(Vec::<i32>::new(), 1).is_empty());
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some("0")), 0);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(Some("-1")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }
}
