//! Shared fixtures: in-memory stores, callers and failing adapters
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use smartsales_service::contract::{
    capabilities, roles, AppInfo, Caller, Category, CategoryAttributes, CategoryQuery,
    NewCategory,
};
use smartsales_service::domain::{CategoryRepository, OptionsRepository, Service};
use smartsales_service::infra::{InMemoryCatalog, InMemoryCategories, InMemoryOptions};
use std::sync::Arc;

pub fn admin() -> Caller {
    Caller::user("1", [roles::ADMINISTRATOR])
}

pub fn cashier() -> Caller {
    Caller::user("7", [roles::CASHIER])
}

/// POS role without store-management rights
pub fn shop_manager() -> Caller {
    Caller::user("8", [roles::SHOP_MANAGER])
}

/// Non-POS user who may still manage the catalog
pub fn store_manager() -> Caller {
    Caller::user("9", ["editor"]).with_capability(capabilities::MANAGE_STORE)
}

pub fn anonymous() -> Caller {
    Caller::anonymous()
}

pub fn app_info() -> AppInfo {
    AppInfo {
        plugin_name: "AI Smart Sales".to_string(),
        plugin_version: "1.2.0".to_string(),
        site_url: "https://shop.example.com".to_string(),
        site_language: "en-US".to_string(),
        platform_version: "6.5".to_string(),
    }
}

/// Service over in-memory stores, with handles kept for inspection
pub struct Harness {
    pub options: Arc<InMemoryOptions>,
    pub categories: Arc<InMemoryCategories>,
    pub catalog: Arc<InMemoryCatalog>,
    pub service: Service,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_options(InMemoryOptions::new())
    }

    pub fn with_options(options: InMemoryOptions) -> Self {
        let options = Arc::new(options);
        let categories = Arc::new(InMemoryCategories::new());
        let catalog = Arc::new(InMemoryCatalog::default());
        let service = Service::new(
            options.clone(),
            categories.clone(),
            catalog.clone(),
            app_info(),
            "Corner Shop",
        );
        Self {
            options,
            categories,
            catalog,
            service,
        }
    }

    pub fn option(&self, key: &str) -> Option<Value> {
        self.options.snapshot().get(key).cloned()
    }
}

/// Service whose stores fail every call with `reason`
pub fn failing_service(reason: &str) -> Service {
    let failing = Arc::new(FailingStore {
        reason: reason.to_string(),
    });
    Service::new(
        failing.clone(),
        failing,
        Arc::new(InMemoryCatalog::default()),
        app_info(),
        "Corner Shop",
    )
}

pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    fn fail<T>(&self) -> Result<T> {
        Err(anyhow!("{}", self.reason))
    }
}

#[async_trait]
impl OptionsRepository for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>> {
        self.fail()
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<()> {
        self.fail()
    }
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn list(&self, _query: &CategoryQuery) -> Result<Vec<Category>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: u64) -> Result<Option<Category>> {
        self.fail()
    }

    async fn insert(&self, _category: &NewCategory) -> Result<u64> {
        self.fail()
    }

    async fn update(&self, _id: u64, _attributes: &CategoryAttributes) -> Result<u64> {
        self.fail()
    }

    async fn delete(&self, _id: u64) -> Result<()> {
        self.fail()
    }
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        ..Default::default()
    }
}
