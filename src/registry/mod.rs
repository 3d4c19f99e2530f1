//! Persistence of last-used pagination values per user.

pub mod memory;
pub mod traits;

pub use memory::MemoryRegistry;
pub use traits::{Registry, RegistryValue};
