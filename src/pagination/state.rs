//! Pagination state of a single paginated view.
//!
//! A [`PaginationState`] is filled in two passes: once with the requested
//! configuration (page index, page size, range size, sort) and once with the
//! result counts reported by the data source (records on the page, total
//! records, total pages). The pager geometry is derived from both on first
//! read and memoized until any input changes.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AppResult;
use crate::pagination::sort::{SortDirection, SortSpec};
use crate::pagination::window::{PaginationGeometry, sliding_window};

/// Candidate page sizes offered to the user by default.
pub const DEFAULT_PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    page_sizes: Vec<u32>,
    page_index: u32,
    page_size: u32,
    range_size: u32,

    page_records: u32,
    total_records: u64,
    total_pages: u32,

    sort: SortSpec,
    sql_sort: SortSpec,
    sql_search_string: Option<String>,
    sql_filter: BTreeMap<String, String>,

    /// Empty until first read after the last mutation
    #[serde(skip)]
    geometry: OnceCell<PaginationGeometry>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            page_index: 0,
            page_size: 0,
            range_size: 0,
            page_records: 0,
            total_records: 0,
            total_pages: 0,
            sort: SortSpec::new(),
            sql_sort: SortSpec::new(),
            sql_search_string: None,
            sql_filter: BTreeMap::new(),
            geometry: OnceCell::new(),
        }
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------

    /// Page sizes the user can pick from (e.g. 10, 20, 50, 100)
    pub fn page_sizes(&self) -> &[u32] {
        &self.page_sizes
    }

    pub fn set_page_sizes(&mut self, page_sizes: Vec<u32>) -> &mut Self {
        self.page_sizes = page_sizes;
        self.invalidate()
    }

    /// Zero-based index of the displayed page
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn set_page_index(&mut self, page_index: u32) -> &mut Self {
        self.page_index = page_index;
        self.invalidate()
    }

    /// Items per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: u32) -> &mut Self {
        self.page_size = page_size;
        self.invalidate()
    }

    /// Number of page links visible in the pager. Odd values keep the
    /// current page exactly centered.
    pub fn range_size(&self) -> u32 {
        self.range_size
    }

    pub fn set_range_size(&mut self, range_size: u32) -> &mut Self {
        self.range_size = range_size;
        self.invalidate()
    }

    // ------------------------------------------------------------------
    // data source results
    // ------------------------------------------------------------------

    pub fn page_records(&self) -> u32 {
        self.page_records
    }

    pub fn set_page_records(&mut self, page_records: u32) -> &mut Self {
        self.page_records = page_records;
        self.invalidate()
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn set_total_records(&mut self, total_records: u64) -> &mut Self {
        self.total_records = total_records;
        self.invalidate()
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn set_total_pages(&mut self, total_pages: u32) -> &mut Self {
        self.total_pages = total_pages;
        self.invalidate()
    }

    // ------------------------------------------------------------------
    // ui sort
    // ------------------------------------------------------------------

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec) -> &mut Self {
        self.sort = sort;
        self.invalidate()
    }

    pub fn add_sort(&mut self, field: &str, direction: &str) -> &mut Self {
        self.sort.add(field, direction);
        self.invalidate()
    }

    pub fn update_sort(&mut self, old_field: &str, new_field: &str, new_direction: &str) -> &mut Self {
        self.sort.update(old_field, new_field, new_direction);
        self.invalidate()
    }

    pub fn remove_sort(&mut self, field: &str) -> &mut Self {
        self.sort.remove(field);
        self.invalidate()
    }

    pub fn reset_sort(&mut self) -> &mut Self {
        self.sort.clear();
        self.invalidate()
    }

    /// Sort in its persisted string form, e.g. `name.asc---id.desc`
    pub fn sort_as_string(&self) -> String {
        self.sort.to_string()
    }

    /// Replace the sort from its persisted string form.
    pub fn set_sort_from_string(&mut self, sort: &str) -> &mut Self {
        self.sort = SortSpec::from_sort_string(sort);
        self.invalidate()
    }

    // ------------------------------------------------------------------
    // data source sort, search and filter
    // ------------------------------------------------------------------

    pub fn sql_sort(&self) -> &SortSpec {
        &self.sql_sort
    }

    pub fn sql_sort_direction(&self, field: &str) -> Option<SortDirection> {
        self.sql_sort.direction(field)
    }

    pub fn add_sql_sort(&mut self, field: &str, direction: &str) -> &mut Self {
        self.sql_sort.add(field, direction);
        self.invalidate()
    }

    pub fn remove_sql_sort(&mut self, field: &str) -> &mut Self {
        self.sql_sort.remove(field);
        self.invalidate()
    }

    pub fn reset_sql_sort(&mut self) -> &mut Self {
        self.sql_sort.clear();
        self.invalidate()
    }

    pub fn sql_search_string(&self) -> Option<&str> {
        self.sql_search_string.as_deref()
    }

    pub fn set_sql_search_string(&mut self, search: Option<String>) -> &mut Self {
        self.sql_search_string = search;
        self.invalidate()
    }

    pub fn sql_filter(&self) -> &BTreeMap<String, String> {
        &self.sql_filter
    }

    pub fn set_sql_filter(&mut self, filter: BTreeMap<String, String>) -> &mut Self {
        self.sql_filter = filter;
        self.invalidate()
    }

    // ------------------------------------------------------------------
    // geometry
    // ------------------------------------------------------------------

    /// Drop the memoized geometry so the next read recomputes it.
    pub fn reset_pagination_geometry(&mut self) -> &mut Self {
        self.invalidate()
    }

    /// Whether the geometry has been computed for the current inputs.
    pub fn is_geometry_computed(&self) -> bool {
        self.geometry.get().is_some()
    }

    /// Pager geometry for the current inputs, computed at most once.
    pub fn geometry(&self) -> AppResult<&PaginationGeometry> {
        if let Some(geometry) = self.geometry.get() {
            return Ok(geometry);
        }

        let computed = sliding_window(
            self.page_index,
            self.total_pages,
            self.total_records,
            self.range_size,
        )?;

        Ok(self.geometry.get_or_init(|| computed))
    }

    pub fn pages(&self) -> AppResult<&[u32]> {
        Ok(self.geometry()?.pages.as_slice())
    }

    pub fn range_start_page(&self) -> AppResult<u32> {
        Ok(self.geometry()?.range_start_page)
    }

    pub fn range_end_page(&self) -> AppResult<u32> {
        Ok(self.geometry()?.range_end_page)
    }

    pub fn includes_first_page(&self) -> AppResult<bool> {
        Ok(self.geometry()?.includes_first_page)
    }

    pub fn includes_last_page(&self) -> AppResult<bool> {
        Ok(self.geometry()?.includes_last_page)
    }

    fn invalidate(&mut self) -> &mut Self {
        self.geometry.take();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn state(total_records: u64, total_pages: u32, page_index: u32, range_size: u32) -> PaginationState {
        let mut state = PaginationState::new();
        state
            .set_total_records(total_records)
            .set_total_pages(total_pages)
            .set_page_index(page_index)
            .set_page_size(10)
            .set_range_size(range_size);
        state
    }

    #[test]
    fn test_defaults() {
        let state = PaginationState::new();
        assert_eq!(state.page_sizes(), &[10, 20, 50, 100]);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), 0);
        assert_eq!(state.range_size(), 0);
        assert_eq!(state.total_records(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.sort().is_empty());
        assert!(!state.is_geometry_computed());
    }

    #[test]
    fn test_default_geometry_is_single_page() {
        let state = PaginationState::new();
        assert_eq!(state.pages().unwrap(), &[0]);
        assert_eq!(state.range_start_page().unwrap(), 0);
        assert_eq!(state.range_end_page().unwrap(), 0);
        assert!(state.includes_first_page().unwrap());
        assert!(state.includes_last_page().unwrap());
    }

    #[test]
    fn test_geometry_middle() {
        let state = state(100, 10, 5, 5);
        assert_eq!(state.pages().unwrap().len(), 5);
        assert_eq!(state.range_start_page().unwrap(), 3);
        assert_eq!(state.range_end_page().unwrap(), 7);
        assert!(!state.includes_first_page().unwrap());
        assert!(!state.includes_last_page().unwrap());
    }

    #[test]
    fn test_geometry_first() {
        let state = state(100, 10, 2, 5);
        assert_eq!(state.range_start_page().unwrap(), 0);
        assert_eq!(state.range_end_page().unwrap(), 4);
        assert!(state.includes_first_page().unwrap());
        assert!(!state.includes_last_page().unwrap());
    }

    #[test]
    fn test_geometry_last() {
        let state = state(100, 10, 8, 5);
        assert_eq!(state.range_start_page().unwrap(), 5);
        assert_eq!(state.range_end_page().unwrap(), 9);
        assert!(!state.includes_first_page().unwrap());
        assert!(state.includes_last_page().unwrap());
    }

    #[test]
    fn test_geometry_is_memoized() {
        let state = state(100, 10, 5, 5);
        let first = state.geometry().unwrap() as *const PaginationGeometry;
        let second = state.geometry().unwrap() as *const PaginationGeometry;
        assert_eq!(first, second);
        assert!(state.is_geometry_computed());
    }

    #[test]
    fn test_setter_invalidates_geometry() {
        let mut state = PaginationState::new();
        assert_eq!(state.pages().unwrap(), &[0]);

        // no explicit reset needed after mutating inputs
        state
            .set_total_records(100)
            .set_total_pages(10)
            .set_page_index(5)
            .set_range_size(5);
        assert!(!state.is_geometry_computed());
        assert_eq!(state.pages().unwrap(), &[3, 4, 5, 6, 7]);

        state.set_page_index(9);
        assert_eq!(state.pages().unwrap(), &[5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_explicit_reset() {
        let mut state = state(100, 10, 5, 5);
        state.geometry().unwrap();
        state.reset_pagination_geometry();
        assert!(!state.is_geometry_computed());
        assert_eq!(state.pages().unwrap(), &[3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_range_size_too_small() {
        let state = state(100, 10, 5, 2);
        let result = state.pages();
        assert!(matches!(result, Err(AppError::Configuration { .. })));
        assert!(!state.is_geometry_computed());
    }

    #[test]
    fn test_failed_computation_recovers_after_fix() {
        let mut state = state(100, 10, 5, 1);
        assert!(state.geometry().is_err());
        state.set_range_size(3);
        assert_eq!(state.pages().unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn test_sort_round_trip() {
        let mut state = PaginationState::new();
        state.add_sort("test_field", "asc");
        assert_eq!(state.sort().direction("test_field"), Some(SortDirection::Asc));
        assert_eq!(state.sort_as_string(), "test_field.asc");

        state.set_sort_from_string("my_field_1.asc---other_field_2.desc");
        state.add_sort("third", "none_X");
        assert_eq!(state.sort().len(), 3);
        assert_eq!(state.sort().direction("my_field_1"), Some(SortDirection::Asc));
        assert_eq!(state.sort().direction("other_field_2"), Some(SortDirection::Desc));
        assert_eq!(state.sort().direction("third"), Some(SortDirection::None));

        state.remove_sort("other_field_2");
        assert_eq!(state.sort().len(), 2);
        assert_eq!(state.sort().direction("third"), Some(SortDirection::None));
    }

    #[test]
    fn test_update_and_reset_sort() {
        let mut state = PaginationState::new();
        state.add_sort("a", "asc").add_sort("b", "desc");
        state.update_sort("a", "alpha", "desc");
        assert_eq!(state.sort_as_string(), "alpha.desc---b.desc");
        state.reset_sort();
        assert_eq!(state.sort_as_string(), "");
    }

    #[test]
    fn test_sql_sort_is_independent() {
        let mut state = PaginationState::new();
        state.add_sort("name", "asc");
        state.add_sql_sort("u.name", "desc");
        assert_eq!(state.sql_sort_direction("u.name"), Some(SortDirection::Desc));
        assert_eq!(state.sql_sort_direction("name"), None);

        state.remove_sql_sort("u.name");
        assert!(state.sql_sort().is_empty());
        assert_eq!(state.sort().len(), 1);

        state.add_sql_sort("u.id", "asc").reset_sql_sort();
        assert!(state.sql_sort().is_empty());
    }

    #[test]
    fn test_search_and_filter() {
        let mut state = PaginationState::new();
        let mut filter = BTreeMap::new();
        filter.insert("status".to_string(), "active".to_string());
        state
            .set_sql_search_string(Some("smith".to_string()))
            .set_sql_filter(filter);
        assert_eq!(state.sql_search_string(), Some("smith"));
        assert_eq!(state.sql_filter().get("status").map(String::as_str), Some("active"));
    }

    #[test]
    fn test_serialized_view_skips_geometry() {
        let state = state(100, 10, 5, 5);
        state.geometry().unwrap();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["pageIndex"], 5);
        assert_eq!(value["totalRecords"], 100);
        assert_eq!(value["pageSizes"], serde_json::json!([10, 20, 50, 100]));
        assert!(value.get("geometry").is_none());
    }
}
