//! Bearer-token identity provider backed by configuration

use crate::config::TokenIdentity;
use crate::contract::Caller;
use crate::domain::repository::IdentityProvider;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Maps configured tokens to callers; unknown or missing tokens are anonymous
pub struct TokenIdentityProvider {
    callers: HashMap<String, Caller>,
}

impl TokenIdentityProvider {
    pub fn new(identities: &[TokenIdentity]) -> Self {
        let callers = identities
            .iter()
            .map(|identity| {
                let caller = identity.capabilities.iter().fold(
                    Caller::user(identity.user_id.clone(), identity.roles.iter().cloned()),
                    |caller, capability| caller.with_capability(capability.clone()),
                );
                (identity.token.clone(), caller)
            })
            .collect();
        Self { callers }
    }
}

#[async_trait]
impl IdentityProvider for TokenIdentityProvider {
    async fn resolve(&self, credential: Option<&str>) -> Result<Caller> {
        let caller = credential
            .and_then(|token| self.callers.get(token))
            .cloned()
            .unwrap_or_else(Caller::anonymous);

        if credential.is_some() && !caller.is_authenticated() {
            debug!("Unknown bearer token, treating request as anonymous");
        }
        Ok(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{capabilities, roles};

    fn provider() -> TokenIdentityProvider {
        TokenIdentityProvider::new(&[TokenIdentity {
            token: "secret".to_string(),
            user_id: "5".to_string(),
            roles: vec![roles::SHOP_MANAGER.to_string()],
            capabilities: vec![capabilities::MANAGE_STORE.to_string()],
        }])
    }

    #[tokio::test]
    async fn test_known_token_resolves_user() {
        let caller = provider().resolve(Some("secret")).await.unwrap();
        assert_eq!(caller.user_id.as_deref(), Some("5"));
        assert!(caller.has_role(roles::SHOP_MANAGER));
        assert!(caller.has_capability(capabilities::MANAGE_STORE));
    }

    #[tokio::test]
    async fn test_unknown_or_missing_token_is_anonymous() {
        let provider = provider();
        assert!(!provider.resolve(Some("wrong")).await.unwrap().is_authenticated());
        assert!(!provider.resolve(None).await.unwrap().is_authenticated());
    }
}
