//! Sliding page-number window.
//!
//! Given a zero-based page index, the number of pages and the desired window
//! width, [`sliding_window`] picks the contiguous run of page numbers to show
//! in a pager. The window is centered on the current page and slides inward
//! when it hits either end of the page sequence.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Smallest range size accepted while there are records to paginate.
pub const MIN_RANGE_SIZE: u32 = 3;

/// Computed pager geometry. All page numbers are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationGeometry {
    /// Visible page numbers, ascending and inclusive of both bounds
    pub pages: Vec<u32>,
    pub range_start_page: u32,
    pub range_end_page: u32,
    pub includes_first_page: bool,
    pub includes_last_page: bool,
}

impl PaginationGeometry {
    /// Geometry of an empty result set: page 0 is the only page.
    pub fn empty() -> Self {
        Self {
            pages: vec![0],
            range_start_page: 0,
            range_end_page: 0,
            includes_first_page: true,
            includes_last_page: true,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Compute the visible page window.
///
/// With no records the window is always `[0]`. Otherwise `range_size` must
/// be at least [`MIN_RANGE_SIZE`] and `page_index` must address an existing
/// page, or an [`AppError::Configuration`] is returned.
///
/// The window holds `min(range_size, total_pages)` pages. For even range
/// sizes the current page sits left of center, leaving the extra slot on the
/// trailing side. Near either end the short side is refilled from the other
/// side until the window is full or both ends are pinned.
pub fn sliding_window(
    page_index: u32,
    total_pages: u32,
    total_records: u64,
    range_size: u32,
) -> AppResult<PaginationGeometry> {
    if total_records == 0 {
        return Ok(PaginationGeometry::empty());
    }

    if range_size < MIN_RANGE_SIZE {
        return Err(AppError::configuration(
            "range_size",
            format!("range size {range_size} is too small, at least {MIN_RANGE_SIZE} pages are required"),
        ));
    }

    let range = i64::from(range_size);
    let current = i64::from(page_index);
    let last_page = i64::from(total_pages) - 1;

    let half_range = if range % 2 != 0 {
        (range - 1) / 2
    } else {
        range / 2
    };
    let leading = range - 1 - half_range;

    let mut start = (current - leading).max(0);
    let mut end = (current + half_range).min(last_page);

    if start < 0 {
        return Err(AppError::configuration(
            "range_start_page",
            format!("window start {start} is negative"),
        ));
    }
    if start > end {
        return Err(AppError::configuration(
            "range_end_page",
            format!(
                "window end {end} is before window start {start} (page index {page_index}, total pages {total_pages})"
            ),
        ));
    }

    let width = |start: i64, end: i64| end - start + 1;

    while width(start, end) < range && (start > 0 || end < last_page) {
        while width(start, end) < range && start > 0 {
            start -= 1;
        }
        while width(start, end) < range && end < last_page {
            end += 1;
        }
    }

    // both bounds are within 0..total_pages at this point
    let start = u32::try_from(start).map_err(anyhow::Error::from)?;
    let end = u32::try_from(end).map_err(anyhow::Error::from)?;

    tracing::debug!(
        page_index,
        total_pages,
        range_size,
        start,
        end,
        "computed pagination window"
    );

    Ok(PaginationGeometry {
        pages: (start..=end).collect(),
        range_start_page: start,
        range_end_page: end,
        includes_first_page: start == 0,
        includes_last_page: i64::from(end) == last_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered() {
        let geometry = sliding_window(5, 10, 100, 5).unwrap();
        assert_eq!(geometry.pages, vec![3, 4, 5, 6, 7]);
        assert_eq!(geometry.range_start_page, 3);
        assert_eq!(geometry.range_end_page, 7);
        assert!(!geometry.includes_first_page);
        assert!(!geometry.includes_last_page);
    }

    #[test]
    fn test_window_clamped_at_first_page() {
        let geometry = sliding_window(2, 10, 100, 5).unwrap();
        assert_eq!(geometry.pages, vec![0, 1, 2, 3, 4]);
        assert!(geometry.includes_first_page);
        assert!(!geometry.includes_last_page);
    }

    #[test]
    fn test_window_clamped_at_last_page() {
        let geometry = sliding_window(8, 10, 100, 5).unwrap();
        assert_eq!(geometry.pages, vec![5, 6, 7, 8, 9]);
        assert_eq!(geometry.range_start_page, 5);
        assert_eq!(geometry.range_end_page, 9);
        assert!(!geometry.includes_first_page);
        assert!(geometry.includes_last_page);
    }

    #[test]
    fn test_window_on_first_page() {
        let geometry = sliding_window(0, 10, 100, 5).unwrap();
        assert_eq!(geometry.pages, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_window_on_last_page() {
        let geometry = sliding_window(9, 10, 100, 5).unwrap();
        assert_eq!(geometry.pages, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_no_records_gives_single_page() {
        let geometry = sliding_window(0, 0, 0, 0).unwrap();
        assert_eq!(geometry, PaginationGeometry::empty());

        // other inputs are ignored without records
        let geometry = sliding_window(42, 3, 0, 1).unwrap();
        assert_eq!(geometry.pages, vec![0]);
        assert!(geometry.includes_first_page && geometry.includes_last_page);
    }

    #[test]
    fn test_range_too_small() {
        for range_size in 0..MIN_RANGE_SIZE {
            let result = sliding_window(0, 10, 100, range_size);
            assert!(matches!(result, Err(AppError::Configuration { .. })));
        }
    }

    #[test]
    fn test_fewer_pages_than_range() {
        let geometry = sliding_window(1, 3, 25, 7).unwrap();
        assert_eq!(geometry.pages, vec![0, 1, 2]);
        assert!(geometry.includes_first_page);
        assert!(geometry.includes_last_page);
    }

    #[test]
    fn test_single_page() {
        let geometry = sliding_window(0, 1, 4, 5).unwrap();
        assert_eq!(geometry.pages, vec![0]);
        assert!(geometry.includes_first_page);
        assert!(geometry.includes_last_page);
    }

    #[test]
    fn test_even_range_extra_slot_trails() {
        let geometry = sliding_window(5, 10, 100, 4).unwrap();
        assert_eq!(geometry.pages, vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_even_range_at_edges() {
        assert_eq!(sliding_window(0, 10, 100, 4).unwrap().pages, vec![0, 1, 2, 3]);
        assert_eq!(sliding_window(9, 10, 100, 4).unwrap().pages, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_page_index_past_last_page_fails() {
        let result = sliding_window(20, 10, 100, 5);
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[test]
    fn test_records_without_pages_fails() {
        let result = sliding_window(0, 0, 10, 5);
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }
}
