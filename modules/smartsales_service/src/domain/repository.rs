//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/memory.rs and infra/storage/repositories.rs

use crate::contract::{Caller, Category, CategoryAttributes, CategoryQuery, NewCategory};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Generic key-value option store
#[async_trait]
pub trait OptionsRepository: Send + Sync {
    /// Read a stored value
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Create or replace a value
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Repository for product categories (taxonomy terms)
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List categories matching the filters
    async fn list(&self, query: &CategoryQuery) -> Result<Vec<Category>>;

    /// Find a category by id
    async fn find_by_id(&self, id: u64) -> Result<Option<Category>>;

    /// Insert a category and return its id
    async fn insert(&self, category: &NewCategory) -> Result<u64>;

    /// Overwrite a category's attributes and return its id
    async fn update(&self, id: u64, attributes: &CategoryAttributes) -> Result<u64>;

    /// Delete a category, re-parenting its children
    async fn delete(&self, id: u64) -> Result<()>;
}

/// Read-only queries against the store catalog
#[async_trait]
pub trait StoreCatalog: Send + Sync {
    /// Number of published products
    async fn count_published_products(&self) -> Result<u64>;

    /// Whether at least one published outlet exists
    async fn has_published_outlet(&self) -> Result<bool>;
}

/// Resolves the caller behind a request credential
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `credential` is the bearer token, `None` when the request carried none
    async fn resolve(&self, credential: Option<&str>) -> Result<Caller>;
}

/// Typed facade over an [`OptionsRepository`] with explicit defaults
#[derive(Clone)]
pub struct Options {
    repo: Arc<dyn OptionsRepository>,
}

impl Options {
    pub fn new(repo: Arc<dyn OptionsRepository>) -> Self {
        Self { repo }
    }

    /// Decode a stored value, falling back to `default` when the key is absent
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        match self.repo.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("option '{}' has an unexpected shape", key)),
            None => Ok(default),
        }
    }

    /// Read a scalar option as text; numbers and booleans are rendered as text
    pub async fn get_text_or(&self, key: &str, default: &str) -> Result<String> {
        let text = match self.repo.get(key).await? {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s,
            Some(Value::Bool(b)) => if b { "1" } else { "" }.to_string(),
            Some(other) => other.to_string(),
        };
        Ok(text)
    }

    /// Encode and store a value
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("failed to encode option '{}'", key))?;
        self.repo.set(key, value).await
    }

    pub async fn set_text(&self, key: &str, value: &str) -> Result<()> {
        self.repo.set(key, Value::String(value.to_string())).await
    }
}
