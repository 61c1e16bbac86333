use serde::Serialize;

use crate::domain::errors::{DomainError, DomainResult};

/// Validated pagination parameters
///
/// Construction is the only gate: a request with a negative offset or a
/// non-positive limit is rejected here, before any query executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// Creates a page request
    ///
    /// # Returns
    /// * `Err(DomainError::NegativeOffset)` - If `offset < 0`
    /// * `Err(DomainError::NonPositiveLimit)` - If `limit <= 0`
    pub fn new(offset: i64, limit: i64) -> DomainResult<Self> {
        if offset < 0 {
            return Err(DomainError::NegativeOffset(offset));
        }
        if limit <= 0 {
            return Err(DomainError::NonPositiveLimit(limit));
        }

        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

/// One page of query results
///
/// `total_count` is optional: the executor may already know the total from
/// the page itself and skip the count query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: i64,
    pub limit: i64,
    pub total_count: Option<i64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: Option<i64>) -> Self {
        Self {
            items,
            offset: request.offset(),
            limit: request.limit(),
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_page_request() {
        let request = PageRequest::new(3, 10).expect("valid request");

        assert_eq!(request.offset(), 3);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn zero_offset_is_valid() {
        assert!(PageRequest::new(0, 1).is_ok());
    }

    #[test]
    fn negative_offset_is_rejected() {
        assert_eq!(
            PageRequest::new(-1, 10),
            Err(DomainError::NegativeOffset(-1))
        );
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert_eq!(PageRequest::new(0, 0), Err(DomainError::NonPositiveLimit(0)));
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert_eq!(
            PageRequest::new(0, -5),
            Err(DomainError::NonPositiveLimit(-5))
        );
    }

    #[test]
    fn page_carries_request_bounds() {
        let request = PageRequest::new(1, 3).expect("valid request");
        let page = Page::new(vec!["a", "b"], request, Some(5));

        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
        assert_eq!(page.offset, 1);
        assert_eq!(page.limit, 3);
        assert_eq!(page.total_count, Some(5));
    }
}
