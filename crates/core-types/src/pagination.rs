use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Which page of a collection to request.
///
/// `current` is 1-based. The data access port treats this as opaque
/// pass-through configuration; only the REST adapter translates it into a
/// `_start`/`_end` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub page_size: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Creates a pagination. Page numbers below 1 are clamped to 1; a zero
    /// page size is rejected.
    pub fn new(current: u32, page_size: u32) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidInput(
                "page_size".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            current: current.max(1),
            page_size,
        })
    }

    /// The zero-based index of the first record on this page.
    pub fn start(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// The exclusive end index of this page.
    pub fn end(&self) -> u64 {
        u64::from(self.current) * u64::from(self.page_size)
    }

    /// Number of pages needed to show `total` records. Never less than one,
    /// so an empty collection still has a page to show.
    pub fn page_count(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn with_page(self, current: u32) -> Self {
        Self {
            current: current.max(1),
            ..self
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a collection, as returned by the data access port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records in the order the store returned them.
    pub data: Vec<T>,
    /// Size of the whole collection, not just this page.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64) -> Self {
        Self { data, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_for_first_and_third_page() {
        let first = Pagination::new(1, 10).unwrap();
        assert_eq!((first.start(), first.end()), (0, 10));

        let third = Pagination::new(3, 25).unwrap();
        assert_eq!((third.start(), third.end()), (50, 75));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            Pagination::new(1, 0),
            Err(CoreError::InvalidInput(field, _)) if field == "page_size"
        ));
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let pagination = Pagination::new(0, 5).unwrap();
        assert_eq!(pagination.current, 1);
        assert_eq!(pagination.with_page(0).current, 1);
    }

    #[test]
    fn page_count_rounds_up_and_never_drops_below_one() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
    }
}
