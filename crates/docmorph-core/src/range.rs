//! Page-range expression parsing
//!
//! An expression is a comma-separated list of 1-based page numbers and
//! inclusive `low-high` ranges, e.g. `"5, 1-3"`.

use crate::error::PageRangeError;

/// Parse a page-range expression into an ordered list of page numbers.
///
/// Tokens expand in the order they appear, so `"5,1-3"` yields
/// `[5, 1, 2, 3]`. Duplicates are kept: each occurrence selects the page
/// again. A descending range like `"4-2"` expands to nothing rather than
/// reversing or erroring.
///
/// Any malformed token fails the whole parse; a partially parsed list is
/// never returned.
pub fn parse_page_range(expression: &str) -> Result<Vec<u32>, PageRangeError> {
    if expression.trim().is_empty() {
        return Err(PageRangeError::EmptyExpression);
    }

    let mut pages = Vec::new();

    for token in expression.split(',') {
        let token = token.trim();

        let mut parts = token.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            // Single page like "5"
            (Some(single), None, None) => {
                let page: u32 = single
                    .parse()
                    .map_err(|_| PageRangeError::InvalidToken(token.to_string()))?;
                pages.push(page);
            }
            // Range like "1-3"
            (Some(low), Some(high), None) => {
                let low: u32 = low
                    .trim()
                    .parse()
                    .map_err(|_| PageRangeError::InvalidToken(token.to_string()))?;
                let high: u32 = high
                    .trim()
                    .parse()
                    .map_err(|_| PageRangeError::InvalidToken(token.to_string()))?;
                // low > high yields an empty iterator, on purpose
                pages.extend(low..=high);
            }
            // More than one '-', e.g. "1-2-3"
            _ => return Err(PageRangeError::InvalidToken(token.to_string())),
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_single_page() {
        assert_eq!(parse_page_range("3").unwrap(), vec![3]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_page_range("1-3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_preserves_token_order() {
        assert_eq!(parse_page_range("5,1-3").unwrap(), vec![5, 1, 2, 3]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_page_range("2,2,1-2").unwrap(), vec![2, 2, 1, 2]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_page_range(" 1 - 3 , 5 ").unwrap(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_parse_empty_expression_fails() {
        assert_eq!(
            parse_page_range("").unwrap_err(),
            PageRangeError::EmptyExpression
        );
        assert_eq!(
            parse_page_range("   ").unwrap_err(),
            PageRangeError::EmptyExpression
        );
    }

    #[test]
    fn test_parse_non_numeric_fails() {
        assert!(matches!(
            parse_page_range("a-2").unwrap_err(),
            PageRangeError::InvalidToken(_)
        ));
        assert!(matches!(
            parse_page_range("x").unwrap_err(),
            PageRangeError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_parse_double_dash_fails() {
        assert!(matches!(
            parse_page_range("1-2-3").unwrap_err(),
            PageRangeError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_parse_empty_token_fails() {
        assert!(matches!(
            parse_page_range("1,,3").unwrap_err(),
            PageRangeError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_parse_descending_range_is_empty() {
        assert_eq!(parse_page_range("4-2").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_never_returns_partial_list() {
        // The bad token comes last; earlier tokens must not leak out
        assert!(parse_page_range("1-3,oops").is_err());
    }
}
