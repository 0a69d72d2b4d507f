//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the SmartSales service.
//! NO HTTP - direct function calls for performance.

use super::{
    error::SmartSalesError,
    model::{
        AppData, AppSettingsPatch, AppUpdateResult, Caller, Category, CategoryChanges,
        CategoryQuery, NewCategory, WizardInput, WizardRecord,
    },
};
use async_trait::async_trait;

/// SmartSales service API for inter-module communication
#[async_trait]
pub trait SmartSalesApi: Send + Sync {
    // ===== App Settings =====

    /// Read the store profile and environment metadata
    async fn get_app_data(&self, caller: &Caller) -> Result<AppData, SmartSalesError>;

    /// Apply a partial settings update
    async fn update_app_data(
        &self,
        caller: &Caller,
        patch: AppSettingsPatch,
    ) -> Result<AppUpdateResult, SmartSalesError>;

    // ===== Wizard =====

    /// Record a new wizard entry and make it current
    async fn create_wizard_entry(
        &self,
        caller: &Caller,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError>;

    /// Get a logged entry by id, or the current entry
    async fn get_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
    ) -> Result<WizardRecord, SmartSalesError>;

    /// Merge supplied fields into a logged entry or the current entry
    async fn update_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError>;

    // ===== Categories =====

    /// List categories matching the filters
    async fn list_categories(
        &self,
        caller: &Caller,
        query: CategoryQuery,
    ) -> Result<Vec<Category>, SmartSalesError>;

    /// Get a category by id
    async fn get_category(&self, caller: &Caller, id: u64) -> Result<Category, SmartSalesError>;

    /// Create a category
    async fn create_category(
        &self,
        caller: &Caller,
        category: NewCategory,
    ) -> Result<Category, SmartSalesError>;

    /// Update a category
    async fn update_category(
        &self,
        caller: &Caller,
        id: u64,
        changes: CategoryChanges,
    ) -> Result<Category, SmartSalesError>;

    /// Delete a category, returning its id
    async fn delete_category(&self, caller: &Caller, id: u64) -> Result<u64, SmartSalesError>;
}
