//! Domain layer - business logic and services

pub mod permission;
pub mod records;
pub mod repository;
pub mod service;
pub mod taxonomy;
pub mod validation;

pub use permission::{AccessDenied, AccessTier, PermissionPolicy, Requirement};
pub use repository::{
    CategoryRepository, IdentityProvider, Options, OptionsRepository, StoreCatalog,
};
pub use service::Service;
