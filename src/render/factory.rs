//! Builders that wire pagination containers to a template engine.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::settings::PaginationSettings;
use crate::pagination::{Counter, PageSizeSelector, PaginationSequence, PaginationState};
use crate::render::{TemplateEngine, TemplateRenderer};

pub const DEFAULT_PAGINATOR_TEMPLATE: &str = "pagination/sliding.html";
pub const DEFAULT_PAGESIZER_TEMPLATE: &str = "pagination/pagesize.html";
pub const DEFAULT_COUNTER_TEMPLATE: &str = "pagination/counter.html";

/// Builds [`PaginationSequence`]s rendered through the paginator template.
pub struct PaginationRenderer {
    engine: Arc<dyn TemplateEngine>,
    template: String,
}

impl PaginationRenderer {
    pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
        Self {
            engine,
            template: DEFAULT_PAGINATOR_TEMPLATE.to_string(),
        }
    }

    pub fn from_settings(engine: Arc<dyn TemplateEngine>, settings: &PaginationSettings) -> Self {
        Self {
            engine,
            template: settings.paginator.template.clone(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Override the template on the fly.
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    /// Wrap the items of the current page together with the state's counts.
    ///
    /// The state's zero-based page index becomes the sequence's one-based
    /// current page.
    pub fn pagination<T>(
        &self,
        items: Vec<T>,
        state: &PaginationState,
        additional: Option<Map<String, Value>>,
    ) -> PaginationSequence<T> {
        let mut sequence = PaginationSequence::with_items(items, state.total_records());
        sequence
            .set_current_page(state.page_index().saturating_add(1))
            .set_range_size(i64::from(state.range_size()))
            .set_page_size(state.page_size())
            .set_renderer(Arc::new(TemplateRenderer::new(
                Arc::clone(&self.engine),
                self.template.clone(),
                additional,
            )));
        sequence
    }
}

/// Builds [`PageSizeSelector`]s rendered through the page size template.
pub struct PageSizeSelectorRenderer {
    engine: Arc<dyn TemplateEngine>,
    template: String,
}

impl PageSizeSelectorRenderer {
    pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
        Self {
            engine,
            template: DEFAULT_PAGESIZER_TEMPLATE.to_string(),
        }
    }

    pub fn from_settings(engine: Arc<dyn TemplateEngine>, settings: &PaginationSettings) -> Self {
        Self {
            engine,
            template: settings.pagesizer.template.clone(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    pub fn page_size_selector(
        &self,
        state: &PaginationState,
        additional: Option<Map<String, Value>>,
    ) -> PageSizeSelector {
        let mut selector = PageSizeSelector::new();
        selector
            .set_sizes(state.page_sizes().to_vec())
            .set_current_size(state.page_size())
            .set_renderer(Arc::new(TemplateRenderer::new(
                Arc::clone(&self.engine),
                self.template.clone(),
                additional,
            )));
        selector
    }
}

/// Builds [`Counter`]s rendered through the counter template.
pub struct CounterRenderer {
    engine: Arc<dyn TemplateEngine>,
    template: String,
}

impl CounterRenderer {
    pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
        Self {
            engine,
            template: DEFAULT_COUNTER_TEMPLATE.to_string(),
        }
    }

    pub fn from_settings(engine: Arc<dyn TemplateEngine>, settings: &PaginationSettings) -> Self {
        Self {
            engine,
            template: settings.counter.template.clone(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = template.into();
        self
    }

    pub fn counter(&self, state: &PaginationState, additional: Option<Map<String, Value>>) -> Counter {
        let mut counter = Counter::new(state.clone());
        counter.set_renderer(Arc::new(TemplateRenderer::new(
            Arc::clone(&self.engine),
            self.template.clone(),
            additional,
        )));
        counter
    }
}
