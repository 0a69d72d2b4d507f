//! Role-based access policy
//!
//! Each operation belongs to an [`AccessTier`]; the policy maps tiers to the
//! roles or capabilities that satisfy them.

use crate::contract::{capabilities, roles, Caller};
use std::collections::HashMap;

/// Operation tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessTier {
    /// Reading settings, wizard and categories; all wizard writes
    Read,
    /// Updating app settings
    SettingsWrite,
    /// Creating, updating and deleting categories
    CatalogWrite,
}

/// What a caller must hold to pass a tier. Any single match is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement {
    pub any_role: Vec<String>,
    pub any_capability: Vec<String>,
}

impl Requirement {
    pub fn roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            any_role: roles.into_iter().map(Into::into).collect(),
            any_capability: Vec::new(),
        }
    }

    pub fn or_capability(mut self, capability: impl Into<String>) -> Self {
        self.any_capability.push(capability.into());
        self
    }

    fn is_satisfied_by(&self, caller: &Caller) -> bool {
        self.any_role.iter().any(|r| caller.has_role(r))
            || self.any_capability.iter().any(|c| caller.has_capability(c))
    }
}

/// Why access was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// 401
    NotAuthenticated,
    /// 403
    InsufficientPrivileges,
}

/// Tier -> requirement table
#[derive(Debug, Clone)]
pub struct PermissionPolicy {
    rules: HashMap<AccessTier, Requirement>,
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::empty()
            .with_rule(
                AccessTier::Read,
                Requirement::roles([
                    roles::ADMINISTRATOR,
                    roles::OUTLET_MANAGER,
                    roles::CASHIER,
                    roles::SHOP_MANAGER,
                ]),
            )
            .with_rule(
                AccessTier::SettingsWrite,
                Requirement::roles([roles::ADMINISTRATOR]),
            )
            .with_rule(
                AccessTier::CatalogWrite,
                Requirement::roles([roles::ADMINISTRATOR])
                    .or_capability(capabilities::MANAGE_STORE),
            )
    }
}

impl PermissionPolicy {
    /// Policy with no rules; every tier denies authenticated callers
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn with_rule(mut self, tier: AccessTier, requirement: Requirement) -> Self {
        self.rules.insert(tier, requirement);
        self
    }

    /// Check a caller against a tier
    pub fn authorize(&self, tier: AccessTier, caller: &Caller) -> Result<(), AccessDenied> {
        if !caller.is_authenticated() {
            return Err(AccessDenied::NotAuthenticated);
        }

        match self.rules.get(&tier) {
            Some(requirement) if requirement.is_satisfied_by(caller) => Ok(()),
            _ => Err(AccessDenied::InsufficientPrivileges),
        }
    }
}
