//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SmartSalesApi;
pub use error::{ErrorDetail, FieldErrors, SmartSalesError};
pub use model::{
    capabilities, roles, AppData, AppInfo, AppSettingsPatch, AppUpdateResult, BusinessType,
    Caller, Category, CategoryAttributes, CategoryChanges, CategoryOrderBy, CategoryQuery,
    InventoryRange, NewCategory, SortOrder, StoreProfile, UpdatedFields, WizardEntry,
    WizardInput, WizardRecord,
};
