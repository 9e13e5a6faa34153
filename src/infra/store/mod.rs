//! Task store backends.

pub mod memory;

pub use memory::InMemoryTaskStore;
