//! Rendering of pagination view data.
//!
//! The pagination containers never depend on a templating technology. They
//! project their state into a JSON view-data mapping and hand it to a
//! [`Renderer`]. Rendering never fails the caller: a missing renderer yields
//! [`MISSING_RENDERER_MESSAGE`], and any failure yields its error text in
//! place of the control.

mod factory;

pub use factory::{
    CounterRenderer, DEFAULT_COUNTER_TEMPLATE, DEFAULT_PAGESIZER_TEMPLATE, DEFAULT_PAGINATOR_TEMPLATE,
    PageSizeSelectorRenderer, PaginationRenderer,
};

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Output used when no renderer is attached.
pub const MISSING_RENDERER_MESSAGE: &str = "add a renderer in order to render a template";

/// Key under which the view data is exposed to templates.
pub const VIEW_DATA_KEY: &str = "pagination";

/// Turns a view-data mapping into markup.
pub trait Renderer: Send + Sync {
    fn render(&self, view: &Value) -> anyhow::Result<String>;
}

impl<F> Renderer for F
where
    F: Fn(&Value) -> anyhow::Result<String> + Send + Sync,
{
    fn render(&self, view: &Value) -> anyhow::Result<String> {
        self(view)
    }
}

/// Anything that can project itself into view data and carries an optional
/// renderer.
pub trait Renderable {
    fn view_data(&self) -> AppResult<Value>;

    fn renderer(&self) -> Option<&dyn Renderer>;

    /// Render through the attached renderer, degrading to text on failure.
    fn render(&self) -> String {
        render_or_degrade(self.renderer(), self.view_data())
    }
}

/// Render `view`, propagating failures as [`AppError::Render`].
pub fn try_render(renderer: &dyn Renderer, view: &Value) -> AppResult<String> {
    renderer
        .render(view)
        .map_err(|source| AppError::Render { source })
}

/// Render `view` and convert every failure into displayable text.
pub fn render_or_degrade(renderer: Option<&dyn Renderer>, view: AppResult<Value>) -> String {
    let Some(renderer) = renderer else {
        return MISSING_RENDERER_MESSAGE.to_string();
    };

    let result = view.and_then(|view| try_render(renderer, &view));

    match result {
        Ok(output) => output,
        Err(AppError::Render { source }) => {
            tracing::warn!(error = %source, "pagination renderer failed");
            source.to_string()
        }
        Err(err) => {
            tracing::warn!(error = %err, "pagination view data unavailable");
            err.to_string()
        }
    }
}

/// A template engine the host application plugs in.
pub trait TemplateEngine: Send + Sync {
    fn render_template(&self, template: &str, context: &Value) -> anyhow::Result<String>;
}

/// [`Renderer`] backed by a named template.
///
/// The template context is `{"pagination": <view data>}` merged with the
/// additional data; additional keys take precedence.
pub struct TemplateRenderer {
    engine: Arc<dyn TemplateEngine>,
    template: String,
    additional: Map<String, Value>,
}

impl TemplateRenderer {
    pub fn new(
        engine: Arc<dyn TemplateEngine>,
        template: impl Into<String>,
        additional: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            engine,
            template: template.into(),
            additional: additional.unwrap_or_default(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    fn context(&self, view: &Value) -> Value {
        let mut context = Map::new();
        context.insert(VIEW_DATA_KEY.to_string(), view.clone());
        for (key, value) in &self.additional {
            context.insert(key.clone(), value.clone());
        }
        Value::Object(context)
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, view: &Value) -> anyhow::Result<String> {
        self.engine.render_template(&self.template, &self.context(view))
    }
}
