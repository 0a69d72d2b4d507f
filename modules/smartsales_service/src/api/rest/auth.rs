//! Caller resolution middleware
//!
//! Reads the bearer token, resolves it through the [`IdentityProvider`] and
//! stores the resulting [`Caller`] as a request extension. Authorization
//! itself happens in the domain service.

use super::error::ApiError;
use crate::contract::{Caller, SmartSalesError};
use crate::domain::IdentityProvider;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Attach the resolved [`Caller`] to the request
pub async fn resolve_caller(
    State(identity): State<Arc<dyn IdentityProvider>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let caller = match identity.resolve(bearer_token(request.headers())).await {
        Ok(caller) => caller,
        Err(e) => {
            error!(error = %e, "Identity provider failed");
            return ApiError::from(SmartSalesError::adapter("Failed to resolve caller.", &e))
                .into_response();
        }
    };

    request.extensions_mut().insert::<Caller>(caller);
    next.run(request).await
}
