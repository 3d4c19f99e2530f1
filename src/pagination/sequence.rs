//! The items of the current page plus a simple one-based pager.
//!
//! Unlike [`crate::pagination::sliding_window`], the window here is derived
//! from the record count and page size alone and uses one-based page numbers.
//! The two windows clamp differently at the edges and are kept separate.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::render::{Renderable, Renderer};

/// View data projected by a [`PaginationSequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceView {
    pub first: u64,
    pub last: u64,
    pub current: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u64>,
    pub page_size: u32,
    pub page_count: u64,
    pub total_count: u64,
    pub pages_in_range: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page_in_range: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page_in_range: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_item_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_item_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_item_number: Option<i64>,
}

/// Number of pages needed for `total_records`; a page size of 0 means
/// everything fits on one page.
pub fn page_count(total_records: u64, page_size: u32) -> u64 {
    if page_size > 0 {
        total_records.div_ceil(u64::from(page_size))
    } else {
        1
    }
}

/// One-based page numbers around `current`, at most `range` wide and
/// clamped to `1..=page_count`.
pub fn linear_window(current: u64, page_count: u64, range: u64) -> Vec<u64> {
    let range = range.min(page_count);
    if range == 0 {
        return Vec::new();
    }

    let current = i128::from(current);
    let page_count = i128::from(page_count);
    let range = i128::from(range);
    let mut delta = (range + 1) / 2;

    let (first, last) = if current - delta > page_count - range {
        (page_count - range + 1, page_count)
    } else {
        if current - delta < 0 {
            delta = current;
        }
        let offset = current - delta;
        (offset + 1, offset + range)
    };

    // first >= 1 and last <= u64::MAX in both branches
    (first..=last).map(|page| page as u64).collect()
}

/// The current page of items and the data needed to page through the rest.
pub struct PaginationSequence<T> {
    items: Option<Vec<T>>,
    current_page: u32,
    page_size: u32,
    range_size: u32,
    total_records: u64,
    renderer: Option<Arc<dyn Renderer>>,
}

impl<T> PaginationSequence<T> {
    /// A sequence without attached items.
    pub fn new(total_records: u64) -> Self {
        Self {
            items: None,
            current_page: 1,
            page_size: 0,
            range_size: 0,
            total_records,
            renderer: None,
        }
    }

    pub fn with_items(items: Vec<T>, total_records: u64) -> Self {
        let mut sequence = Self::new(total_records);
        sequence.items = Some(items);
        sequence
    }

    /// One-based number of the displayed page
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: u32) -> &mut Self {
        self.current_page = page;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: u32) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Number of pages in the sliding view
    pub fn range_size(&self) -> u32 {
        self.range_size
    }

    /// Negative ranges are taken by absolute value.
    pub fn set_range_size(&mut self, range: i64) -> &mut Self {
        self.range_size = u32::try_from(range.unsigned_abs()).unwrap_or(u32::MAX);
        self
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn set_total_records(&mut self, total_records: u64) -> &mut Self {
        self.total_records = total_records;
        self
    }

    pub fn set_items(&mut self, items: Vec<T>) -> &mut Self {
        self.items = Some(items);
        self
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.renderer = Some(renderer);
        self
    }

    /// Items of the current page; empty when none are attached
    pub fn items(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }

    /// Number of items on the current page (not the total record count)
    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    pub fn page_count(&self) -> u64 {
        page_count(self.total_records, self.page_size)
    }

    /// Project the pager view data.
    pub fn view(&self) -> SequenceView {
        let page_count = self.page_count();
        let current = u64::from(self.current_page);
        let pages = linear_window(current, page_count, u64::from(self.range_size));

        let (first_item_number, current_item_count, last_item_number) = if self.has_items() {
            let page_size = i64::from(self.page_size);
            let first = (i64::from(self.current_page) - 1) * page_size + 1;
            let count = if current < page_count {
                page_size
            } else {
                i64::try_from(self.total_records).unwrap_or(i64::MAX) - (first - 1)
            };
            (Some(first), Some(count), Some(first - 1 + count))
        } else {
            (None, None, None)
        };

        SequenceView {
            first: 1,
            last: page_count,
            current,
            previous: (current > 1).then(|| current - 1),
            next: (current < page_count).then(|| current + 1),
            page_size: self.page_size,
            page_count,
            total_count: self.total_records,
            first_page_in_range: pages.first().copied(),
            last_page_in_range: pages.last().copied(),
            pages_in_range: pages,
            first_item_number,
            current_item_count,
            last_item_number,
        }
    }
}

impl PaginationSequence<Value> {
    /// Attach items given as JSON. Arrays are taken as-is, objects by their
    /// values; any other JSON value is rejected.
    pub fn set_json_items(&mut self, items: Value) -> AppResult<&mut Self> {
        let items = match items {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
            other => {
                return Err(AppError::value(format!(
                    "items must be an array or object, got {}",
                    json_type_name(&other)
                )));
            }
        };
        self.items = Some(items);
        Ok(self)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T> Renderable for PaginationSequence<T> {
    fn view_data(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self.view())?)
    }

    fn renderer(&self) -> Option<&dyn Renderer> {
        self.renderer.as_deref()
    }
}

impl<T> fmt::Display for PaginationSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T> Index<usize> for PaginationSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items()[index]
    }
}

impl<'a, T> IntoIterator for &'a PaginationSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for PaginationSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationSequence")
            .field("items", &self.items)
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("range_size", &self.range_size)
            .field("total_records", &self.total_records)
            .field("has_renderer", &self.renderer.is_some())
            .finish()
    }
}
