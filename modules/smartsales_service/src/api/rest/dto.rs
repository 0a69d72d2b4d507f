//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

// ===== App DTOs =====

/// Store profile and plugin metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppDataDto {
    #[schema(example = "123 Default St")]
    pub store_address: String,
    pub store_address_2: String,
    #[schema(example = "Default City")]
    pub store_city: String,
    #[schema(example = "00000")]
    pub store_postcode: String,
    /// ISO 3166-1 alpha-2 country code
    #[schema(example = "US")]
    pub store_country: String,
    /// ISO 4217 currency code
    #[schema(example = "USD")]
    pub currency: String,
    pub email: String,
    #[schema(example = "retail")]
    pub business_type: String,
    #[schema(example = "small")]
    pub inventory_range: String,
    /// Number of published products
    pub inventory_size: u64,
    pub has_outlet: bool,
    pub additional_notes: String,
    pub plugin_name: String,
    pub plugin_version: String,
    pub site_url: String,
    pub site_name: String,
    pub site_language: String,
    pub platform_version: String,
}

/// Partial app settings update; every field is optional
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AppUpdateRequest {
    #[schema(value_type = Option<String>)]
    pub store_address: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub store_address_2: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub store_city: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub store_postcode: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub store_country: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub currency: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub site_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub business_type: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub inventory_range: Option<Value>,
    /// `yes`/`no`, `true`/`false`, `1`/`0`, `on`/`off`
    #[schema(value_type = Option<String>)]
    pub has_outlet: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub additional_notes: Option<Value>,
}

/// Fields applied by an app settings update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppUpdateDto {
    #[schema(value_type = Object)]
    pub updated_fields: BTreeMap<String, Value>,
    pub updated_count: usize,
}

// ===== Wizard DTOs =====

/// Onboarding questionnaire entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WizardEntryDto {
    #[schema(example = "retail")]
    pub business_type: String,
    #[schema(example = "small")]
    pub inventory_range: String,
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

/// Entry together with its log id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WizardRecordDto {
    /// `null` when the current entry was addressed without an id
    #[schema(example = "wizard_3f2a9c0e8b7d4e6f9a1b2c3d4e5f6a7b")]
    pub entry_id: Option<String>,
    pub data: WizardEntryDto,
}

/// Wizard create/update body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WizardRequest {
    #[schema(value_type = Option<String>)]
    pub business_type: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub inventory_range: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub has_outlet: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub additional_notes: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub company_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub company_size: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub industry_sector: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub monthly_revenue: Option<Value>,
    /// List of channels; a single string is accepted as a one-element list
    #[schema(value_type = Option<Vec<String>>)]
    pub sales_channel: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub target_market: Option<Value>,
}

/// `entry_id` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardEntryParams {
    pub entry_id: Option<String>,
}

// ===== Category DTOs =====

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: u64,
    #[schema(example = "Beverages")]
    pub name: String,
    #[schema(example = "beverages")]
    pub slug: String,
    pub description: String,
    pub count: u64,
    /// Parent category id, 0 for root categories
    pub parent: u64,
}

/// Category create/update body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub slug: Option<Value>,
    #[schema(value_type = Option<u64>)]
    pub parent: Option<Value>,
}

/// Category list query parameters, parsed leniently
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCategoriesParams {
    pub hide_empty: Option<String>,
    pub order: Option<String>,
    pub orderby: Option<String>,
    pub limit: Option<String>,
}

/// Result of a category deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDeletedDto {
    pub category_id: u64,
}
