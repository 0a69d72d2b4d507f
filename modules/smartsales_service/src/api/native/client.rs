//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    AppData, AppSettingsPatch, AppUpdateResult, Caller, Category, CategoryChanges, CategoryQuery,
    NewCategory, SmartSalesApi, SmartSalesError, WizardInput, WizardRecord,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service directly, without HTTP
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SmartSalesApi for NativeClient {
    async fn get_app_data(&self, caller: &Caller) -> Result<AppData, SmartSalesError> {
        self.service.get_app_data(caller).await
    }

    async fn update_app_data(
        &self,
        caller: &Caller,
        patch: AppSettingsPatch,
    ) -> Result<AppUpdateResult, SmartSalesError> {
        self.service.update_app_data(caller, patch).await
    }

    async fn create_wizard_entry(
        &self,
        caller: &Caller,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.service.create_wizard_entry(caller, input).await
    }

    async fn get_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.service.get_wizard_entry(caller, entry_id).await
    }

    async fn update_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.service.update_wizard_entry(caller, entry_id, input).await
    }

    async fn list_categories(
        &self,
        caller: &Caller,
        query: CategoryQuery,
    ) -> Result<Vec<Category>, SmartSalesError> {
        self.service.list_categories(caller, query).await
    }

    async fn get_category(&self, caller: &Caller, id: u64) -> Result<Category, SmartSalesError> {
        self.service.get_category(caller, id).await
    }

    async fn create_category(
        &self,
        caller: &Caller,
        category: NewCategory,
    ) -> Result<Category, SmartSalesError> {
        self.service.create_category(caller, category).await
    }

    async fn update_category(
        &self,
        caller: &Caller,
        id: u64,
        changes: CategoryChanges,
    ) -> Result<Category, SmartSalesError> {
        self.service.update_category(caller, id, changes).await
    }

    async fn delete_category(&self, caller: &Caller, id: u64) -> Result<u64, SmartSalesError> {
        self.service.delete_category(caller, id).await
    }
}
