//! Request-driven construction of pagination state.

pub mod pagination;
pub mod request;

pub use pagination::PaginationHelper;
pub use request::PaginationRequest;
