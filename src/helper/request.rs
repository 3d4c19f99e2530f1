//! Pagination values already extracted from an incoming request.

use serde::Deserialize;

/// Raw, unvalidated pagination parameters.
///
/// Numbers stay signed so out-of-range input can be corrected instead of
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationRequest {
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub pagesize: Option<i64>,

    #[serde(default)]
    pub rangesize: Option<i64>,

    /// Primary sort parameter (`field.dir---field.dir`)
    #[serde(default)]
    pub sort: Option<String>,

    /// Sort carried by a filter form, used when `sort` is absent
    #[serde(default)]
    pub filter_sort: Option<String>,

    /// Set when a filter or search was just executed
    #[serde(default)]
    pub search_executed: bool,
}

impl PaginationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.pagesize = Some(page_size);
        self
    }

    pub fn with_range_size(mut self, range_size: i64) -> Self {
        self.rangesize = Some(range_size);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_filter_sort(mut self, sort: impl Into<String>) -> Self {
        self.filter_sort = Some(sort.into());
        self
    }

    pub fn with_search_executed(mut self) -> Self {
        self.search_executed = true;
        self
    }

    /// The sort string to apply, if the request carries a non-blank one.
    pub fn effective_sort(&self) -> Option<&str> {
        [self.sort.as_deref(), self.filter_sort.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|sort| !sort.is_empty())
    }
}
