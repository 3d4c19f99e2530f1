//! Record counter view ("showing 11-20 of 57").

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::pagination::PaginationState;
use crate::render::{Renderable, Renderer};

/// Exposes the full pagination state, including its geometry, to a template.
pub struct Counter {
    state: PaginationState,
    renderer: Option<Arc<dyn Renderer>>,
}

impl Counter {
    pub fn new(state: PaginationState) -> Self {
        Self {
            state,
            renderer: None,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn set_state(&mut self, state: PaginationState) -> &mut Self {
        self.state = state;
        self
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.renderer = Some(renderer);
        self
    }
}

impl Renderable for Counter {
    fn view_data(&self) -> AppResult<Value> {
        let mut view = serde_json::to_value(&self.state)?;
        let geometry = serde_json::to_value(self.state.geometry()?)?;

        match (view.as_object_mut(), geometry) {
            (Some(view), Value::Object(geometry)) => view.extend(geometry),
            _ => return Err(AppError::value("pagination state must serialize to an object")),
        }

        Ok(view)
    }

    fn renderer(&self) -> Option<&dyn Renderer> {
        self.renderer.as_deref()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn counter(range_size: u32) -> Counter {
        let mut state = PaginationState::new();
        state
            .set_page_index(3)
            .set_page_size(10)
            .set_range_size(range_size)
            .set_page_records(10)
            .set_total_records(57)
            .set_total_pages(6);
        Counter::new(state)
    }

    #[test]
    fn test_view_data_contains_counts_and_geometry() {
        let view = counter(3).view_data().unwrap();
        assert_eq!(view["pageRecords"], 10);
        assert_eq!(view["totalRecords"], 57);
        assert_eq!(view["totalPages"], 6);
        assert_eq!(view["pages"], json!([2, 3, 4]));
        assert_eq!(view["rangeStartPage"], 2);
        assert_eq!(view["includesLastPage"], false);
    }

    #[test]
    fn test_invalid_geometry_degrades_to_text() {
        let mut counter = counter(1);
        counter.set_renderer(Arc::new(|_: &Value| -> anyhow::Result<String> {
            Ok("rendered".to_string())
        }));
        assert!(counter.to_string().starts_with("Configuration error for range_size"));
    }

    #[test]
    fn test_render() {
        let mut counter = counter(3);
        counter.set_renderer(Arc::new(|view: &Value| -> anyhow::Result<String> {
            Ok(format!("{} records", view["totalRecords"]))
        }));
        assert_eq!(counter.to_string(), "57 records");
    }
}
