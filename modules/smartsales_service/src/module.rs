//! Module assembly: adapters, domain service and route registration

use crate::api::native::NativeClient;
use crate::api::rest;
use crate::config::Config;
use crate::contract::{AppInfo, SmartSalesApi};
use crate::domain::{
    CategoryRepository, IdentityProvider, OptionsRepository, Service, StoreCatalog,
};
use crate::infra::storage::{
    migrations::Migrator, SeaOrmCatalog, SeaOrmCategories, SeaOrmOptions,
};
use crate::infra::{InMemoryCatalog, InMemoryCategories, InMemoryOptions, TokenIdentityProvider};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// SmartSales service module
pub struct SmartSalesModule {
    config: Config,
    service: Arc<Service>,
    identity: Arc<dyn IdentityProvider>,
}

impl SmartSalesModule {
    /// Build the module over explicit adapters
    pub fn new(
        config: Config,
        options: Arc<dyn OptionsRepository>,
        categories: Arc<dyn CategoryRepository>,
        catalog: Arc<dyn StoreCatalog>,
    ) -> Self {
        let info = AppInfo {
            plugin_name: config.plugin_name.clone(),
            plugin_version: config.plugin_version.clone(),
            site_url: config.site_url.clone(),
            site_language: config.site_language.clone(),
            platform_version: config.platform_version.clone(),
        };
        let service = Arc::new(Service::new(
            options,
            categories,
            catalog,
            info,
            config.site_name.clone(),
        ));
        let identity = Arc::new(TokenIdentityProvider::new(&config.auth.tokens));

        Self {
            config,
            service,
            identity,
        }
    }

    /// Module backed by process-local storage
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryOptions::new()),
            Arc::new(InMemoryCategories::new()),
            Arc::new(InMemoryCatalog::default()),
        )
    }

    /// Module backed by a database; pending migrations are applied first
    pub async fn connect(config: Config, db: Arc<DatabaseConnection>) -> Result<Self> {
        Self::migrate(&db).await?;

        Ok(Self::new(
            config,
            Arc::new(SeaOrmOptions::new(db.clone())),
            Arc::new(SeaOrmCategories::new(db.clone())),
            Arc::new(SeaOrmCatalog::new(db)),
        ))
    }

    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("SmartSales migrations completed");
        Ok(())
    }

    /// Replace the configured bearer-token identities
    pub fn with_identity_provider(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn SmartSalesApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!(prefix = %self.config.route_prefix, "Registering SmartSales REST routes");
        rest::register_routes(
            router,
            &self.config.route_prefix,
            self.service.clone(),
            self.identity.clone(),
        )
    }
}
