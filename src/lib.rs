//! Pagination helper library
//!
//! Sliding page windows, sort management, linear page sequences and
//! renderer-agnostic pagination views.

pub mod cli;
pub mod config;
pub mod error;
pub mod helper;
pub mod logger;
pub mod pagination;
pub mod registry;
pub mod render;

pub use error::{AppError, AppResult};
pub use helper::{PaginationHelper, PaginationRequest};
pub use pagination::{
    Counter, PageSizeSelector, PaginationGeometry, PaginationSequence, PaginationState, SortDirection, SortSpec,
};
pub use registry::{MemoryRegistry, Registry, RegistryValue};
pub use render::{Renderable, Renderer, TemplateEngine, TemplateRenderer};
