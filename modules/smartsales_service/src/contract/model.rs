//! Contract models for the SmartSales service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Role names recognised by the permission policy
pub mod roles {
    pub const ADMINISTRATOR: &str = "administrator";
    pub const OUTLET_MANAGER: &str = "aipos_outlet_manager";
    pub const CASHIER: &str = "aipos_cashier";
    pub const SHOP_MANAGER: &str = "aipos_shop_manager";
}

/// Capability names recognised by the permission policy
pub mod capabilities {
    pub const MANAGE_STORE: &str = "manage_woocommerce";
}

// ===== Caller =====

/// Identity of the caller as resolved by the host platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    /// User identifier, `None` when the request is anonymous
    pub user_id: Option<String>,
    /// Roles held by the user
    pub roles: BTreeSet<String>,
    /// Capabilities granted on top of the roles
    pub capabilities: BTreeSet<String>,
}

impl Caller {
    /// Anonymous (not logged in) caller
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Authenticated caller holding the given roles
    pub fn user<I, S>(user_id: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: Some(user_id.into()),
            roles: roles.into_iter().map(Into::into).collect(),
            capabilities: BTreeSet::new(),
        }
    }

    /// Grant an extra capability
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}

// ===== Business profile enums =====

/// Kind of business, fixed set of 20 values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessType {
    #[default]
    Retail,
    Wholesale,
    Manufacturing,
    Service,
    Ecommerce,
    Dropshipping,
    Restaurant,
    Pharmacy,
    Grocery,
    Fashion,
    Electronics,
    Furniture,
    Automotive,
    Construction,
    Hospitality,
    Healthcare,
    Education,
    Consulting,
    RealEstate,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 20] = [
        Self::Retail,
        Self::Wholesale,
        Self::Manufacturing,
        Self::Service,
        Self::Ecommerce,
        Self::Dropshipping,
        Self::Restaurant,
        Self::Pharmacy,
        Self::Grocery,
        Self::Fashion,
        Self::Electronics,
        Self::Furniture,
        Self::Automotive,
        Self::Construction,
        Self::Hospitality,
        Self::Healthcare,
        Self::Education,
        Self::Consulting,
        Self::RealEstate,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
            Self::Manufacturing => "manufacturing",
            Self::Service => "service",
            Self::Ecommerce => "ecommerce",
            Self::Dropshipping => "dropshipping",
            Self::Restaurant => "restaurant",
            Self::Pharmacy => "pharmacy",
            Self::Grocery => "grocery",
            Self::Fashion => "fashion",
            Self::Electronics => "electronics",
            Self::Furniture => "furniture",
            Self::Automotive => "automotive",
            Self::Construction => "construction",
            Self::Hospitality => "hospitality",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Consulting => "consulting",
            Self::RealEstate => "real_estate",
            Self::Other => "other",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory size range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InventoryRange {
    #[default]
    Small,
    Medium,
    Large,
    Enterprise,
}

impl InventoryRange {
    pub const ALL: [InventoryRange; 4] = [Self::Small, Self::Medium, Self::Large, Self::Enterprise];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for InventoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== App settings =====

/// Store configuration and business profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub store_address: String,
    pub store_address_2: String,
    pub store_city: String,
    pub store_postcode: String,
    pub store_country: String,
    pub currency: String,
    pub email: String,
    pub site_name: String,
    pub business_type: BusinessType,
    pub inventory_range: InventoryRange,
    /// Number of published products
    pub inventory_size: u64,
    /// Stored flag OR at least one published outlet
    pub has_outlet: bool,
    pub additional_notes: String,
}

/// Static plugin and environment metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub plugin_name: String,
    pub plugin_version: String,
    pub site_url: String,
    pub site_language: String,
    pub platform_version: String,
}

/// Result of `GET /app`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppData {
    pub profile: StoreProfile,
    pub info: AppInfo,
}

/// Partial update of the app settings.
///
/// Values are raw (unsanitized) text as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettingsPatch {
    pub store_address: Option<String>,
    pub store_address_2: Option<String>,
    pub store_city: Option<String>,
    pub store_postcode: Option<String>,
    pub store_country: Option<String>,
    pub currency: Option<String>,
    pub email: Option<String>,
    pub site_name: Option<String>,
    pub business_type: Option<String>,
    pub inventory_range: Option<String>,
    pub has_outlet: Option<String>,
    pub additional_notes: Option<String>,
}

/// Field name -> applied value
pub type UpdatedFields = BTreeMap<String, serde_json::Value>;

/// Outcome of a fully successful app settings update
#[derive(Debug, Clone, PartialEq)]
pub struct AppUpdateResult {
    pub updated_fields: UpdatedFields,
}

impl AppUpdateResult {
    pub fn updated_count(&self) -> usize {
        self.updated_fields.len()
    }
}

// ===== Wizard =====

/// Onboarding questionnaire entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardEntry {
    pub business_type: BusinessType,
    pub inventory_range: InventoryRange,
    pub has_outlet: bool,
    pub additional_notes: String,
    pub company_name: String,
    pub company_size: String,
    pub industry_sector: String,
    pub monthly_revenue: String,
    pub sales_channel: Vec<String>,
    pub target_market: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wizard fields supplied by the caller; `None` means "not supplied"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardInput {
    pub business_type: Option<String>,
    pub inventory_range: Option<String>,
    /// Raw truthy text ("yes", "1", "true", "on", ...)
    pub has_outlet: Option<String>,
    pub additional_notes: Option<String>,
    pub company_name: Option<String>,
    pub company_size: Option<String>,
    pub industry_sector: Option<String>,
    pub monthly_revenue: Option<String>,
    pub sales_channel: Option<Vec<String>>,
    pub target_market: Option<String>,
}

/// Wizard entry together with its log id (absent for the singleton)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardRecord {
    pub entry_id: Option<String>,
    pub entry: WizardEntry,
}

// ===== Categories =====

/// Product category (taxonomy term)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Parent category id, 0 for root
    pub parent: u64,
    /// Usage count, maintained by the store
    pub count: u64,
}

/// Attributes for creating a category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    /// Empty means "derive from the name"
    pub slug: String,
    pub parent: u64,
}

/// Partial update of a category; `None` keeps the stored value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub parent: Option<u64>,
}

/// Fully resolved attributes written on update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttributes {
    pub name: String,
    pub description: String,
    pub slug: String,
    pub parent: u64,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort key for category listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrderBy {
    Id,
    #[default]
    Name,
    Slug,
    Description,
    Count,
    Parent,
}

/// Filters for category listings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryQuery {
    pub hide_empty: bool,
    pub order: SortOrder,
    pub order_by: CategoryOrderBy,
    /// `None` returns all matches
    pub limit: Option<usize>,
}
