//! Infrastructure layer - adapters for the domain repository traits

pub mod identity;
pub mod memory;
pub mod storage;

pub use identity::TokenIdentityProvider;
pub use memory::{InMemoryCatalog, InMemoryCategories, InMemoryOptions};
