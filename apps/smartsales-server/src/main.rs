//! SmartSales server
//!
//! Hosts the SmartSales REST API on axum.

mod config;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use clap::Parser;
use config::{AppConfig, LogFormat};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use smartsales_service::SmartSalesModule;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "smartsales-server", version, about = "SmartSales POS API server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<Health> {
    Json(Health {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,smartsales_service=debug,smartsales_server=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn build_module(config: &AppConfig) -> anyhow::Result<SmartSalesModule> {
    let module_config = config.smartsales.clone();

    match &config.server.database_url {
        Some(url) => {
            let mut options = ConnectOptions::new(url.clone());
            options.sqlx_logging(false);
            let db = Database::connect(options)
                .await
                .with_context(|| format!("failed to connect to {}", url))?;
            tracing::info!("Connected to database");
            SmartSalesModule::connect(module_config, Arc::new(db)).await
        }
        None => {
            tracing::warn!("No database_url configured, using in-memory storage");
            Ok(SmartSalesModule::in_memory(module_config))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(config.server.log_format);

    let module = build_module(&config).await?;

    let router = Router::new().route("/health", get(health_check));
    let app = module
        .register_rest(router)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "SmartSales server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
