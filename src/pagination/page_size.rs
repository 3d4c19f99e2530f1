//! Page size selector view.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::pagination::state::DEFAULT_PAGE_SIZES;
use crate::render::{Renderable, Renderer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeView {
    pub page_sizes: Vec<u32>,
    pub current_size: u32,
}

/// Lets the user pick how many items a page shows.
pub struct PageSizeSelector {
    sizes: Vec<u32>,
    current_size: u32,
    renderer: Option<Arc<dyn Renderer>>,
}

impl Default for PageSizeSelector {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_PAGE_SIZES.to_vec(),
            current_size: 0,
            renderer: None,
        }
    }
}

impl PageSizeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn set_sizes(&mut self, sizes: Vec<u32>) -> &mut Self {
        self.sizes = sizes;
        self
    }

    pub fn current_size(&self) -> u32 {
        self.current_size
    }

    pub fn set_current_size(&mut self, size: u32) -> &mut Self {
        self.current_size = size;
        self
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn view(&self) -> PageSizeView {
        PageSizeView {
            page_sizes: self.sizes.clone(),
            current_size: self.current_size,
        }
    }
}

impl Renderable for PageSizeSelector {
    fn view_data(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self.view())?)
    }

    fn renderer(&self) -> Option<&dyn Renderer> {
        self.renderer.as_deref()
    }
}

impl fmt::Display for PageSizeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let selector = PageSizeSelector::new();
        assert_eq!(selector.sizes(), &[10, 20, 50, 100]);
        assert_eq!(selector.current_size(), 0);
    }

    #[test]
    fn test_view_data() {
        let mut selector = PageSizeSelector::new();
        selector.set_sizes(vec![5, 25]).set_current_size(25);
        assert_eq!(
            selector.view_data().unwrap(),
            json!({"pageSizes": [5, 25], "currentSize": 25})
        );
    }

    #[test]
    fn test_render() {
        let mut selector = PageSizeSelector::new();
        assert_eq!(selector.to_string(), crate::render::MISSING_RENDERER_MESSAGE);

        selector
            .set_current_size(20)
            .set_renderer(Arc::new(|view: &Value| -> anyhow::Result<String> {
                Ok(format!("show {}", view["currentSize"]))
            }));
        assert_eq!(selector.to_string(), "show 20");
    }
}
