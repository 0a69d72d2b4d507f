//! In-memory adapters
//!
//! Used by the server when no database is configured and by the tests.

use crate::contract::{Category, CategoryAttributes, CategoryQuery, NewCategory};
use crate::domain::repository::{CategoryRepository, OptionsRepository, StoreCatalog};
use crate::domain::taxonomy;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

// ===== Options =====

#[derive(Default)]
pub struct InMemoryOptions {
    values: RwLock<HashMap<String, Value>>,
}

impl InMemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without going through the async trait
    pub fn with_value(self, key: &str, value: Value) -> Self {
        self.values.write().insert(key.to_string(), value);
        self
    }

    /// Copy of every stored value
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.values.read().clone()
    }
}

#[async_trait]
impl OptionsRepository for InMemoryOptions {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

// ===== Categories =====

struct TermTable {
    next_id: u64,
    terms: BTreeMap<u64, Category>,
}

pub struct InMemoryCategories {
    table: RwLock<TermTable>,
}

impl Default for InMemoryCategories {
    fn default() -> Self {
        Self {
            table: RwLock::new(TermTable {
                next_id: 1,
                terms: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the usage count of a term, as product assignment would
    pub fn set_count(&self, id: u64, count: u64) -> Result<()> {
        let mut table = self.table.write();
        let term = table
            .terms
            .get_mut(&id)
            .ok_or_else(|| anyhow!("term {} does not exist", id))?;
        term.count = count;
        Ok(())
    }

    fn all(table: &TermTable) -> Vec<Category> {
        table.terms.values().cloned().collect()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self, query: &CategoryQuery) -> Result<Vec<Category>> {
        let terms = Self::all(&self.table.read());
        Ok(taxonomy::apply_query(terms, query))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Category>> {
        Ok(self.table.read().terms.get(&id).cloned())
    }

    async fn insert(&self, category: &NewCategory) -> Result<u64> {
        let mut table = self.table.write();
        let slug = taxonomy::prepare_insert(&Self::all(&table), category)?;

        let id = table.next_id;
        table.next_id += 1;
        table.terms.insert(
            id,
            Category {
                id,
                name: category.name.trim().to_string(),
                slug,
                description: category.description.clone(),
                parent: category.parent,
                count: 0,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: u64, attributes: &CategoryAttributes) -> Result<u64> {
        let mut table = self.table.write();
        let slug = taxonomy::prepare_update(&Self::all(&table), id, attributes)?;

        let term = table
            .terms
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Invalid term ID."))?;
        term.name = attributes.name.trim().to_string();
        term.description = attributes.description.clone();
        term.slug = slug;
        term.parent = attributes.parent;
        Ok(id)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self.table.write();
        let removed = table
            .terms
            .remove(&id)
            .ok_or_else(|| anyhow!("Invalid term ID."))?;

        for child in table.terms.values_mut().filter(|t| t.parent == id) {
            child.parent = removed.parent;
        }
        Ok(())
    }
}

// ===== Catalog =====

/// Fixed product and outlet counts
#[derive(Default)]
pub struct InMemoryCatalog {
    published_products: RwLock<u64>,
    published_outlets: RwLock<u64>,
}

impl InMemoryCatalog {
    pub fn new(published_products: u64, published_outlets: u64) -> Self {
        Self {
            published_products: RwLock::new(published_products),
            published_outlets: RwLock::new(published_outlets),
        }
    }

    pub fn set_published_products(&self, count: u64) {
        *self.published_products.write() = count;
    }

    pub fn set_published_outlets(&self, count: u64) {
        *self.published_outlets.write() = count;
    }
}

#[async_trait]
impl StoreCatalog for InMemoryCatalog {
    async fn count_published_products(&self) -> Result<u64> {
        Ok(*self.published_products.read())
    }

    async fn has_published_outlet(&self) -> Result<bool> {
        Ok(*self.published_outlets.read() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_reparents_children() {
        let repo = InMemoryCategories::new();
        let root = repo
            .insert(&NewCategory {
                name: "Food".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let middle = repo
            .insert(&NewCategory {
                name: "Snacks".to_string(),
                parent: root,
                ..Default::default()
            })
            .await
            .unwrap();
        let leaf = repo
            .insert(&NewCategory {
                name: "Crisps".to_string(),
                parent: middle,
                ..Default::default()
            })
            .await
            .unwrap();

        repo.delete(middle).await.unwrap();

        let leaf = repo.find_by_id(leaf).await.unwrap().unwrap();
        assert_eq!(leaf.parent, root);
        assert!(repo.find_by_id(middle).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryCategories::new();
        let first = repo
            .insert(&NewCategory {
                name: "One".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        repo.delete(first).await.unwrap();

        let second = repo
            .insert(&NewCategory {
                name: "Two".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_set_count_unknown_term_fails() {
        let repo = InMemoryCategories::new();
        assert!(repo.set_count(42, 1).is_err());
    }
}
