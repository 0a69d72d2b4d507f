//! SmartSales Service Module
//!
//! Point-of-sale store backend: store settings, the onboarding wizard and
//! product categories, exposed over REST and as an in-process client.

// Public exports
pub mod contract;
pub use contract::{
    client::SmartSalesApi, error::SmartSalesError, AppData, Caller, Category, StoreProfile,
    WizardEntry, WizardRecord,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::SmartSalesModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
