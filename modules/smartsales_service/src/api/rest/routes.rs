//! Route registration

use super::{auth, handlers, openapi::ApiDoc};
use crate::domain::{IdentityProvider, Service};
use axum::{middleware, routing::get, Extension, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// `"ai-smart-sales/v1/"` -> `"/ai-smart-sales/v1"`; empty for the root
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Register all REST routes under `prefix` plus `/openapi.json` at the root
pub fn register_routes(
    router: Router,
    prefix: &str,
    service: Arc<Service>,
    identity: Arc<dyn IdentityProvider>,
) -> Router {
    let api = Router::new()
        // App settings
        .route("/app", get(handlers::get_app).put(handlers::update_app))
        // Onboarding wizard
        .route(
            "/wizard",
            get(handlers::get_wizard)
                .post(handlers::create_wizard)
                .put(handlers::update_wizard),
        )
        // Product categories
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .layer(middleware::from_fn_with_state(identity, auth::resolve_caller))
        .layer(Extension(service));

    let prefix = normalize_prefix(prefix);
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router.route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
