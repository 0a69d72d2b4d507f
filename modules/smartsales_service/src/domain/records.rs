//! Persisted shape of wizard entries
//!
//! Entries live as JSON documents in the option store. Older data may carry
//! `has_outlet` as `"yes"`/`"no"`, enum values outside the current sets and
//! `YYYY-MM-DD HH:MM:SS` timestamps; decoding accepts all of them.

use crate::contract::{BusinessType, InventoryRange, WizardEntry};
use crate::domain::validation::is_truthy;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Legacy timestamp layout
const PLAIN_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Wizard entry as stored under `ai_wizard_data` and inside `ai_wizard_entries`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredWizardEntry {
    pub business_type: String,
    pub inventory_range: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_outlet: bool,
    pub additional_notes: String,
    pub company_name: String,
    pub company_size: String,
    pub industry_sector: String,
    pub monthly_revenue: String,
    #[serde(deserialize_with = "lenient_list")]
    pub sales_channel: Vec<String>,
    pub target_market: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entry log keyed by entry id
pub type StoredWizardLog = BTreeMap<String, StoredWizardEntry>;

impl From<&WizardEntry> for StoredWizardEntry {
    fn from(entry: &WizardEntry) -> Self {
        Self {
            business_type: entry.business_type.as_str().to_string(),
            inventory_range: entry.inventory_range.as_str().to_string(),
            has_outlet: entry.has_outlet,
            additional_notes: entry.additional_notes.clone(),
            company_name: entry.company_name.clone(),
            company_size: entry.company_size.clone(),
            industry_sector: entry.industry_sector.clone(),
            monthly_revenue: entry.monthly_revenue.clone(),
            sales_channel: entry.sales_channel.clone(),
            target_market: entry.target_market.clone(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

impl From<StoredWizardEntry> for WizardEntry {
    fn from(stored: StoredWizardEntry) -> Self {
        let business_type = match stored.business_type.as_str() {
            "" => BusinessType::default(),
            value => BusinessType::parse(value).unwrap_or_else(|| {
                warn!(value, "Unknown stored business type, using default");
                BusinessType::default()
            }),
        };
        let inventory_range = match stored.inventory_range.as_str() {
            "" => InventoryRange::default(),
            value => InventoryRange::parse(value).unwrap_or_else(|| {
                warn!(value, "Unknown stored inventory range, using default");
                InventoryRange::default()
            }),
        };

        Self {
            business_type,
            inventory_range,
            has_outlet: stored.has_outlet,
            additional_notes: stored.additional_notes,
            company_name: stored.company_name,
            company_size: stored.company_size,
            industry_sector: stored.industry_sector,
            monthly_revenue: stored.monthly_revenue,
            sales_channel: stored.sales_channel,
            target_market: stored.target_market,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => is_truthy(&s),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        Value::Null => Vec::new(),
        other => scalar_text(other).into_iter().collect(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_timestamp))
}

/// RFC 3339 or the legacy `YYYY-MM-DD HH:MM:SS` layout; empty text is unset
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(raw, PLAIN_TIMESTAMP) {
        Ok(naive) => Some(naive.and_utc()),
        Err(_) => {
            warn!(raw, "Unparseable stored timestamp, treating as unset");
            None
        }
    }
}

/// Text form of a JSON scalar; arrays, objects and null yield `None`
pub fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "1" } else { "" }.to_string()),
        _ => None,
    }
}
