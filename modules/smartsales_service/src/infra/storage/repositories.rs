//! SeaORM repository implementations

use crate::contract::{
    Category, CategoryAttributes, CategoryOrderBy, CategoryQuery, NewCategory, SortOrder,
};
use crate::domain::repository::{CategoryRepository, OptionsRepository, StoreCatalog};
use crate::domain::taxonomy;
use anyhow::{bail, Result};
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, sea_query::OnConflict, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait,
    ConnectionTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use serde_json::Value;
use std::sync::Arc;

use super::entity::{option, post, term};
use super::mapper::to_i64;

/// Taxonomy holding product categories
pub const PRODUCT_CATEGORY_TAXONOMY: &str = "product_cat";

const PRODUCT_POST_TYPE: &str = "product";
const OUTLET_POST_TYPE: &str = "outlet";
const PUBLISHED: &str = "publish";

// ===== Options Repository =====

pub struct SeaOrmOptions {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOptions {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OptionsRepository for SeaOrmOptions {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let row = option::Entity::find_by_id(key.to_string())
            .one(&*self.db)
            .await?;
        Ok(row.map(|r| r.option_value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let active = option::ActiveModel {
            option_name: Set(key.to_string()),
            option_value: Set(value),
            updated_at: Set(chrono::Utc::now()),
        };

        option::Entity::insert(active)
            .on_conflict(
                OnConflict::column(option::Column::OptionName)
                    .update_columns([option::Column::OptionValue, option::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}

// ===== Category Repository =====

pub struct SeaOrmCategories {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategories {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Category>> {
        let rows = term::Entity::find()
            .filter(term::Column::Taxonomy.eq(PRODUCT_CATEGORY_TAXONOMY))
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn order_column(order_by: CategoryOrderBy) -> term::Column {
        match order_by {
            CategoryOrderBy::Id => term::Column::TermId,
            CategoryOrderBy::Name => term::Column::Name,
            CategoryOrderBy::Slug => term::Column::Slug,
            CategoryOrderBy::Description => term::Column::Description,
            CategoryOrderBy::Count => term::Column::Count,
            CategoryOrderBy::Parent => term::Column::Parent,
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategories {
    async fn list(&self, query: &CategoryQuery) -> Result<Vec<Category>> {
        let order = match query.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut select = term::Entity::find()
            .filter(term::Column::Taxonomy.eq(PRODUCT_CATEGORY_TAXONOMY));
        if query.hide_empty {
            select = select.filter(term::Column::Count.gt(0));
        }
        select = select
            .order_by(Self::order_column(query.order_by), order.clone())
            .order_by(term::Column::TermId, order);
        if let Some(limit) = query.limit {
            select = select.limit(limit as u64);
        }

        let rows = select.all(&*self.db).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Category>> {
        // Ids past the column range cannot be stored, so they are simply absent
        let Ok(term_id) = i64::try_from(id) else {
            return Ok(None);
        };
        let row = term::Entity::find_by_id(term_id)
            .filter(term::Column::Taxonomy.eq(PRODUCT_CATEGORY_TAXONOMY))
            .one(&*self.db)
            .await?;
        Ok(row.map(Category::from))
    }

    async fn insert(&self, category: &NewCategory) -> Result<u64> {
        let txn = self.db.begin().await?;
        let slug = taxonomy::prepare_insert(&Self::load_all(&txn).await?, category)?;

        let active = term::ActiveModel {
            term_id: NotSet,
            taxonomy: Set(PRODUCT_CATEGORY_TAXONOMY.to_string()),
            name: Set(category.name.trim().to_string()),
            slug: Set(slug),
            description: Set(category.description.clone()),
            parent: Set(to_i64(category.parent)?),
            count: Set(0),
        };
        let inserted = term::Entity::insert(active).exec(&txn).await?;
        txn.commit().await?;

        Ok(u64::try_from(inserted.last_insert_id)?)
    }

    async fn update(&self, id: u64, attributes: &CategoryAttributes) -> Result<u64> {
        let txn = self.db.begin().await?;
        let existing = Self::load_all(&txn).await?;
        if !existing.iter().any(|t| t.id == id) {
            bail!("Invalid term ID.");
        }
        let slug = taxonomy::prepare_update(&existing, id, attributes)?;

        let active = term::ActiveModel {
            term_id: Set(to_i64(id)?),
            taxonomy: NotSet,
            name: Set(attributes.name.trim().to_string()),
            slug: Set(slug),
            description: Set(attributes.description.clone()),
            parent: Set(to_i64(attributes.parent)?),
            count: NotSet,
        };
        term::Entity::update(active).exec(&txn).await?;
        txn.commit().await?;

        Ok(id)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let Ok(term_id) = i64::try_from(id) else {
            bail!("Invalid term ID.");
        };
        let txn = self.db.begin().await?;

        let Some(removed) = term::Entity::find_by_id(term_id)
            .filter(term::Column::Taxonomy.eq(PRODUCT_CATEGORY_TAXONOMY))
            .one(&txn)
            .await?
        else {
            bail!("Invalid term ID.");
        };

        term::Entity::update_many()
            .col_expr(term::Column::Parent, Expr::value(removed.parent))
            .filter(term::Column::Taxonomy.eq(PRODUCT_CATEGORY_TAXONOMY))
            .filter(term::Column::Parent.eq(term_id))
            .exec(&txn)
            .await?;
        term::Entity::delete_by_id(term_id).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}

// ===== Store Catalog =====

pub struct SeaOrmCatalog {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCatalog {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn published(post_type: &str) -> sea_orm::Select<post::Entity> {
        post::Entity::find()
            .filter(post::Column::PostType.eq(post_type))
            .filter(post::Column::PostStatus.eq(PUBLISHED))
    }
}

#[async_trait]
impl StoreCatalog for SeaOrmCatalog {
    async fn count_published_products(&self) -> Result<u64> {
        Ok(Self::published(PRODUCT_POST_TYPE).count(&*self.db).await?)
    }

    async fn has_published_outlet(&self) -> Result<bool> {
        let outlet = Self::published(OUTLET_POST_TYPE).one(&*self.db).await?;
        Ok(outlet.is_some())
    }
}
