//! Infrastructure adapters for the external task store.

pub mod store;

pub use store::InMemoryTaskStore;
