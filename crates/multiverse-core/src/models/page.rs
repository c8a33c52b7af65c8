//! Pagination envelope

use serde::{Deserialize, Serialize};

/// Number of records per page in list mode
pub const PAGE_SIZE: usize = 20;

/// Metadata describing a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records matching the filter
    pub count: usize,
    /// Number of pages for `count` records
    pub pages: usize,
    /// Link to the following page, empty on the last page
    #[serde(default)]
    pub next: String,
    /// Link to the preceding page, empty on the first page
    #[serde(default)]
    pub prev: String,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// Number of pages needed for `count` records
pub fn page_count(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(20), 1);
        assert_eq!(page_count(21), 2);
        assert_eq!(page_count(40), 2);
        assert_eq!(page_count(54), 3);
    }
}
