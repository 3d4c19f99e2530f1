//! Pagination state, page windows and view-data containers.

pub mod counter;
pub mod page_size;
pub mod sequence;
pub mod sort;
pub mod state;
pub mod window;


pub use counter::Counter;
pub use page_size::{PageSizeSelector, PageSizeView};
pub use sequence::{PaginationSequence, SequenceView, linear_window, page_count};
pub use sort::{SortDirection, SortEntry, SortSpec};
pub use state::{DEFAULT_PAGE_SIZES, PaginationState};
pub use window::{MIN_RANGE_SIZE, PaginationGeometry, sliding_window};
