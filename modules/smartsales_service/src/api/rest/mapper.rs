//! Mapper implementations for converting between DTOs and contract models
//!
//! Request bodies are accepted loosely: strings, numbers and booleans are all
//! read as text, `null` counts as "not supplied", and arrays or objects in
//! scalar fields are ignored.

use super::dto::*;
use crate::contract::{
    self, AppSettingsPatch, CategoryChanges, CategoryOrderBy, CategoryQuery, NewCategory,
    SortOrder, WizardInput,
};
use crate::domain::records::scalar_text;
use crate::domain::validation::is_truthy;
use serde_json::Value;

fn text(value: Option<Value>) -> Option<String> {
    value.and_then(scalar_text)
}

fn id(value: Option<Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_list(value: Option<Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        other => scalar_text(other).map(|s| vec![s]),
    }
}

// ===== App conversions =====

impl From<contract::AppData> for AppDataDto {
    fn from(app: contract::AppData) -> Self {
        let profile = app.profile;
        Self {
            store_address: profile.store_address,
            store_address_2: profile.store_address_2,
            store_city: profile.store_city,
            store_postcode: profile.store_postcode,
            store_country: profile.store_country,
            currency: profile.currency,
            email: profile.email,
            business_type: profile.business_type.to_string(),
            inventory_range: profile.inventory_range.to_string(),
            inventory_size: profile.inventory_size,
            has_outlet: profile.has_outlet,
            additional_notes: profile.additional_notes,
            plugin_name: app.info.plugin_name,
            plugin_version: app.info.plugin_version,
            site_url: app.info.site_url,
            site_name: profile.site_name,
            site_language: app.info.site_language,
            platform_version: app.info.platform_version,
        }
    }
}

impl From<AppUpdateRequest> for AppSettingsPatch {
    fn from(req: AppUpdateRequest) -> Self {
        Self {
            store_address: text(req.store_address),
            store_address_2: text(req.store_address_2),
            store_city: text(req.store_city),
            store_postcode: text(req.store_postcode),
            store_country: text(req.store_country),
            currency: text(req.currency),
            email: text(req.email),
            site_name: text(req.site_name),
            business_type: text(req.business_type),
            inventory_range: text(req.inventory_range),
            has_outlet: text(req.has_outlet),
            additional_notes: text(req.additional_notes),
        }
    }
}

impl From<contract::AppUpdateResult> for AppUpdateDto {
    fn from(result: contract::AppUpdateResult) -> Self {
        let updated_count = result.updated_count();
        Self {
            updated_fields: result.updated_fields,
            updated_count,
        }
    }
}

// ===== Wizard conversions =====

impl From<WizardRequest> for WizardInput {
    fn from(req: WizardRequest) -> Self {
        Self {
            business_type: text(req.business_type),
            inventory_range: text(req.inventory_range),
            has_outlet: text(req.has_outlet),
            additional_notes: text(req.additional_notes),
            company_name: text(req.company_name),
            company_size: text(req.company_size),
            industry_sector: text(req.industry_sector),
            monthly_revenue: text(req.monthly_revenue),
            sales_channel: text_list(req.sales_channel),
            target_market: text(req.target_market),
        }
    }
}

impl From<contract::WizardEntry> for WizardEntryDto {
    fn from(entry: contract::WizardEntry) -> Self {
        Self {
            business_type: entry.business_type.to_string(),
            inventory_range: entry.inventory_range.to_string(),
            has_outlet: entry.has_outlet,
            additional_notes: entry.additional_notes,
            company_name: entry.company_name,
            company_size: entry.company_size,
            industry_sector: entry.industry_sector,
            monthly_revenue: entry.monthly_revenue,
            sales_channel: entry.sales_channel,
            target_market: entry.target_market,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

impl From<contract::WizardRecord> for WizardRecordDto {
    fn from(record: contract::WizardRecord) -> Self {
        Self {
            entry_id: record.entry_id,
            data: record.entry.into(),
        }
    }
}

// ===== Category conversions =====

impl From<contract::Category> for CategoryDto {
    fn from(category: contract::Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            count: category.count,
            parent: category.parent,
        }
    }
}

impl From<CategoryRequest> for NewCategory {
    fn from(req: CategoryRequest) -> Self {
        Self {
            name: text(req.name).unwrap_or_default(),
            description: text(req.description).unwrap_or_default(),
            slug: text(req.slug).unwrap_or_default(),
            parent: id(req.parent).unwrap_or(0),
        }
    }
}

impl From<CategoryRequest> for CategoryChanges {
    fn from(req: CategoryRequest) -> Self {
        Self {
            name: text(req.name),
            description: text(req.description),
            slug: text(req.slug),
            parent: id(req.parent),
        }
    }
}

impl From<ListCategoriesParams> for CategoryQuery {
    fn from(params: ListCategoriesParams) -> Self {
        let order = match params.order.as_deref().map(str::trim) {
            Some(o) if o.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        let order_by = match params
            .orderby
            .as_deref()
            .map(|o| o.trim().to_lowercase())
            .as_deref()
        {
            Some("id") | Some("term_id") => CategoryOrderBy::Id,
            Some("slug") => CategoryOrderBy::Slug,
            Some("description") => CategoryOrderBy::Description,
            Some("count") => CategoryOrderBy::Count,
            Some("parent") => CategoryOrderBy::Parent,
            _ => CategoryOrderBy::Name,
        };

        // 0 or anything unparseable means "no limit"
        let limit = params
            .limit
            .as_deref()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|&l| l > 0);

        Self {
            hide_empty: params.hide_empty.as_deref().is_some_and(is_truthy),
            order,
            order_by,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_are_read_as_text() {
        let req: AppUpdateRequest = serde_json::from_value(json!({
            "store_postcode": 12345,
            "has_outlet": true,
            "store_city": null,
            "currency": ["USD"],
            "unknown_field": "ignored"
        }))
        .unwrap();

        let patch = AppSettingsPatch::from(req);
        assert_eq!(patch.store_postcode.as_deref(), Some("12345"));
        assert_eq!(patch.has_outlet.as_deref(), Some("1"));
        assert_eq!(patch.store_city, None);
        assert_eq!(patch.currency, None);
    }

    #[test]
    fn test_sales_channel_accepts_single_string() {
        let req: WizardRequest =
            serde_json::from_value(json!({ "sales_channel": "online" })).unwrap();
        assert_eq!(
            WizardInput::from(req).sales_channel,
            Some(vec!["online".to_string()])
        );

        let req: WizardRequest =
            serde_json::from_value(json!({ "sales_channel": ["store", 7] })).unwrap();
        assert_eq!(
            WizardInput::from(req).sales_channel,
            Some(vec!["store".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn test_category_parent_accepts_numeric_text() {
        let req: CategoryRequest =
            serde_json::from_value(json!({ "name": "Tea", "parent": "4" })).unwrap();
        assert_eq!(NewCategory::from(req).parent, 4);

        let req: CategoryRequest = serde_json::from_value(json!({ "parent": -3 })).unwrap();
        assert_eq!(CategoryChanges::from(req).parent, None);
    }

    #[test]
    fn test_list_params() {
        let query = CategoryQuery::from(ListCategoriesParams::default());
        assert_eq!(query, CategoryQuery::default());

        let query = CategoryQuery::from(ListCategoriesParams {
            hide_empty: Some("1".to_string()),
            order: Some("desc".to_string()),
            orderby: Some("term_id".to_string()),
            limit: Some("5".to_string()),
        });
        assert!(query.hide_empty);
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.order_by, CategoryOrderBy::Id);
        assert_eq!(query.limit, Some(5));

        let query = CategoryQuery::from(ListCategoriesParams {
            limit: Some("0".to_string()),
            ..Default::default()
        });
        assert_eq!(query.limit, None);
    }
}
