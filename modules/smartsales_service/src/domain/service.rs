//! Domain service - business logic orchestration

use super::permission::{AccessDenied, AccessTier, PermissionPolicy};
use super::records::{StoredWizardEntry, StoredWizardLog};
use super::repository::{CategoryRepository, Options, OptionsRepository, StoreCatalog};
use super::validation::{
    humanize_field_name, is_truthy, is_valid_country, is_valid_currency, is_valid_email,
    sanitize_email, sanitize_text_field, sanitize_textarea_field, slugify,
};
use crate::contract::{
    AppData, AppInfo, AppSettingsPatch, AppUpdateResult, BusinessType, Caller, Category,
    CategoryAttributes, CategoryChanges, CategoryQuery, ErrorDetail, FieldErrors,
    InventoryRange, NewCategory, SmartSalesError, StoreProfile, UpdatedFields, WizardEntry,
    WizardInput, WizardRecord,
};
use chrono::Utc;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Option keys shared with the host store
pub mod keys {
    pub const STORE_ADDRESS: &str = "woocommerce_store_address";
    pub const STORE_ADDRESS_2: &str = "woocommerce_store_address_2";
    pub const STORE_CITY: &str = "woocommerce_store_city";
    pub const STORE_POSTCODE: &str = "woocommerce_store_postcode";
    pub const STORE_COUNTRY: &str = "woocommerce_default_country";
    pub const CURRENCY: &str = "woocommerce_currency";
    pub const ADMIN_EMAIL: &str = "admin_email";
    pub const SITE_NAME: &str = "blogname";
    pub const WIZARD_DATA: &str = "ai_wizard_data";
    pub const WIZARD_ENTRIES: &str = "ai_wizard_entries";
    pub const WIZARD_CURRENT_ENTRY: &str = "ai_wizard_current_entry";
}

const DEFAULT_STORE_ADDRESS: &str = "123 Default St";
const DEFAULT_STORE_CITY: &str = "Default City";
const DEFAULT_STORE_POSTCODE: &str = "00000";
const DEFAULT_STORE_COUNTRY: &str = "US";
const DEFAULT_CURRENCY: &str = "USD";

/// Wizard fields that must be non-empty on creation, in reporting order
const REQUIRED_WIZARD_FIELDS: [&str; 4] = [
    "business_type",
    "inventory_range",
    "company_name",
    "industry_sector",
];

const GENERIC_DENIAL: &str = "Sorry, you are not allowed to do that.";
const LOGIN_REQUIRED: &str = "You must be logged in to access this resource.";
const ADMIN_REQUIRED: &str = "You do not have permission to update app data. Administrator role required.";

/// Denial messages for one route group
#[derive(Clone, Copy)]
struct DenialMessages {
    unauthenticated: &'static str,
    forbidden: &'static str,
}

const GENERIC_DENIALS: DenialMessages = DenialMessages {
    unauthenticated: GENERIC_DENIAL,
    forbidden: GENERIC_DENIAL,
};

const SETTINGS_WRITE_DENIALS: DenialMessages = DenialMessages {
    unauthenticated: LOGIN_REQUIRED,
    forbidden: ADMIN_REQUIRED,
};

/// 404 returned for any category lookup miss
pub fn category_not_found(id: impl Display) -> SmartSalesError {
    SmartSalesError::NotFound {
        message: "Category not found.".to_string(),
        detail: ErrorDetail::field(
            "id",
            format!("The category with the ID '{}' does not exist.", id),
        ),
    }
}

fn entry_not_found() -> SmartSalesError {
    SmartSalesError::not_found("Entry not found")
}

/// Domain service for app settings, the onboarding wizard and categories
pub struct Service {
    options: Options,
    categories: Arc<dyn CategoryRepository>,
    catalog: Arc<dyn StoreCatalog>,
    policy: PermissionPolicy,
    info: AppInfo,
    default_site_name: String,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        options_repo: Arc<dyn OptionsRepository>,
        categories: Arc<dyn CategoryRepository>,
        catalog: Arc<dyn StoreCatalog>,
        info: AppInfo,
        default_site_name: impl Into<String>,
    ) -> Self {
        Self {
            options: Options::new(options_repo),
            categories,
            catalog,
            policy: PermissionPolicy::default(),
            info,
            default_site_name: default_site_name.into(),
        }
    }

    fn authorize(
        &self,
        tier: AccessTier,
        caller: &Caller,
        messages: DenialMessages,
    ) -> Result<(), SmartSalesError> {
        self.policy
            .authorize(tier, caller)
            .map_err(|denied| match denied {
                AccessDenied::NotAuthenticated => SmartSalesError::Unauthenticated {
                    message: messages.unauthenticated.to_string(),
                },
                AccessDenied::InsufficientPrivileges => SmartSalesError::Forbidden {
                    message: messages.forbidden.to_string(),
                },
            })
    }

    /// Access check for reads and wizard writes
    pub fn check_read(&self, caller: &Caller) -> Result<(), SmartSalesError> {
        self.authorize(AccessTier::Read, caller, GENERIC_DENIALS)
    }

    /// Access check for app settings updates
    pub fn check_settings_write(&self, caller: &Caller) -> Result<(), SmartSalesError> {
        self.authorize(AccessTier::SettingsWrite, caller, SETTINGS_WRITE_DENIALS)
    }

    /// Access check for category mutations
    pub fn check_catalog_write(&self, caller: &Caller) -> Result<(), SmartSalesError> {
        self.authorize(AccessTier::CatalogWrite, caller, GENERIC_DENIALS)
    }

    // ===== App Settings =====

    /// Assemble the store profile together with plugin metadata
    pub async fn get_app_data(&self, caller: &Caller) -> Result<AppData, SmartSalesError> {
        self.check_read(caller)?;
        debug!(user = ?caller.user_id, "Reading app data");

        self.load_app_data().await.map_err(|e| {
            error!(error = %e, "Failed to read app data");
            SmartSalesError::adapter("Failed to retrieve app data.", &e)
        })
    }

    async fn load_app_data(&self) -> anyhow::Result<AppData> {
        let opts = &self.options;
        let wizard = WizardEntry::from(self.load_wizard_singleton().await?);
        let inventory_size = self.catalog.count_published_products().await?;
        let outlet_exists = self.catalog.has_published_outlet().await?;

        let profile = StoreProfile {
            store_address: opts
                .get_text_or(keys::STORE_ADDRESS, DEFAULT_STORE_ADDRESS)
                .await?,
            store_address_2: opts.get_text_or(keys::STORE_ADDRESS_2, "").await?,
            store_city: opts.get_text_or(keys::STORE_CITY, DEFAULT_STORE_CITY).await?,
            store_postcode: opts
                .get_text_or(keys::STORE_POSTCODE, DEFAULT_STORE_POSTCODE)
                .await?,
            store_country: opts
                .get_text_or(keys::STORE_COUNTRY, DEFAULT_STORE_COUNTRY)
                .await?,
            currency: opts.get_text_or(keys::CURRENCY, DEFAULT_CURRENCY).await?,
            email: opts.get_text_or(keys::ADMIN_EMAIL, "").await?,
            site_name: opts
                .get_text_or(keys::SITE_NAME, &self.default_site_name)
                .await?,
            business_type: wizard.business_type,
            inventory_range: wizard.inventory_range,
            inventory_size,
            has_outlet: wizard.has_outlet || outlet_exists,
            additional_notes: wizard.additional_notes,
        };

        Ok(AppData {
            profile,
            info: self.info.clone(),
        })
    }

    /// Apply every valid field of the patch; invalid fields are reported, not fatal
    pub async fn update_app_data(
        &self,
        caller: &Caller,
        patch: AppSettingsPatch,
    ) -> Result<AppUpdateResult, SmartSalesError> {
        self.check_settings_write(caller)?;
        debug!(user = ?caller.user_id, "Updating app data");

        let (applied, errors) = self.apply_app_patch(patch).await.map_err(|e| {
            error!(error = %e, "Failed to write app data");
            SmartSalesError::adapter("Failed to update app data.", &e)
        })?;

        if !errors.is_empty() {
            info!(
                applied = applied.len(),
                rejected = errors.len(),
                "App data partially updated"
            );
            return Err(SmartSalesError::PartialUpdate {
                message: "Some fields could not be updated due to validation errors.".to_string(),
                applied,
                errors,
            });
        }

        if applied.is_empty() {
            return Err(SmartSalesError::validation(
                "No valid fields provided for update.",
            ));
        }

        info!(updated = applied.len(), "App data updated");
        Ok(AppUpdateResult {
            updated_fields: applied,
        })
    }

    async fn apply_app_patch(
        &self,
        patch: AppSettingsPatch,
    ) -> anyhow::Result<(UpdatedFields, FieldErrors)> {
        let mut applied = UpdatedFields::new();
        let mut errors = FieldErrors::new();

        let plain_fields = [
            ("store_address", keys::STORE_ADDRESS, patch.store_address),
            ("store_address_2", keys::STORE_ADDRESS_2, patch.store_address_2),
            ("store_city", keys::STORE_CITY, patch.store_city),
            ("store_postcode", keys::STORE_POSTCODE, patch.store_postcode),
            ("store_country", keys::STORE_COUNTRY, patch.store_country),
            ("currency", keys::CURRENCY, patch.currency),
            ("site_name", keys::SITE_NAME, patch.site_name),
        ];

        for (field, key, raw) in plain_fields {
            let Some(raw) = raw else { continue };
            let value = sanitize_text_field(&raw);

            let rejection = match field {
                "currency" if !is_valid_currency(&value) => {
                    Some(format!("Invalid currency code: {}", value))
                }
                "store_country" if !is_valid_country(&value) => {
                    Some(format!("Invalid country code: {}", value))
                }
                _ => None,
            };
            if let Some(message) = rejection {
                errors.insert(field.to_string(), message);
                continue;
            }

            self.options.set_text(key, &value).await?;
            applied.insert(field.to_string(), Value::String(value));
        }

        if let Some(raw) = patch.email {
            let email = sanitize_email(&raw);
            if is_valid_email(&email) {
                self.options.set_text(keys::ADMIN_EMAIL, &email).await?;
                applied.insert("email".to_string(), Value::String(email));
            } else {
                errors.insert(
                    "email".to_string(),
                    format!("Invalid email address: {}", email),
                );
            }
        }

        // Profile fields shared with the wizard singleton
        let mut wizard = self.load_wizard_singleton().await?;
        let mut wizard_changed = false;

        if let Some(raw) = patch.business_type {
            let value = sanitize_text_field(&raw);
            match BusinessType::parse(&value) {
                Some(business_type) => {
                    wizard.business_type = business_type.as_str().to_string();
                    applied.insert("business_type".to_string(), Value::String(value));
                    wizard_changed = true;
                }
                None => {
                    errors.insert(
                        "business_type".to_string(),
                        format!("Invalid business type: {}", value),
                    );
                }
            }
        }

        if let Some(raw) = patch.inventory_range {
            let value = sanitize_text_field(&raw);
            match InventoryRange::parse(&value) {
                Some(range) => {
                    wizard.inventory_range = range.as_str().to_string();
                    applied.insert("inventory_range".to_string(), Value::String(value));
                    wizard_changed = true;
                }
                None => {
                    errors.insert(
                        "inventory_range".to_string(),
                        format!("Invalid inventory range: {}", value),
                    );
                }
            }
        }

        if let Some(raw) = patch.has_outlet {
            let has_outlet = is_truthy(&raw);
            wizard.has_outlet = has_outlet;
            applied.insert("has_outlet".to_string(), Value::Bool(has_outlet));
            wizard_changed = true;
        }

        if let Some(raw) = patch.additional_notes {
            let notes = sanitize_textarea_field(&raw);
            wizard.additional_notes = notes.clone();
            applied.insert("additional_notes".to_string(), Value::String(notes));
            wizard_changed = true;
        }

        if wizard_changed {
            self.options.set(keys::WIZARD_DATA, &wizard).await?;
        }

        Ok((applied, errors))
    }

    // ===== Wizard =====

    async fn load_wizard_singleton(&self) -> anyhow::Result<StoredWizardEntry> {
        self.options
            .get_or(keys::WIZARD_DATA, StoredWizardEntry::default())
            .await
    }

    async fn load_wizard_log(&self) -> anyhow::Result<StoredWizardLog> {
        self.options
            .get_or(keys::WIZARD_ENTRIES, StoredWizardLog::new())
            .await
    }

    /// Validate a complete questionnaire, log it and make it current
    pub async fn create_wizard_entry(
        &self,
        caller: &Caller,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.check_read(caller)?;
        debug!(user = ?caller.user_id, "Creating wizard entry");

        let draft = SanitizedWizard::from_input(input);

        let missing: Vec<String> = REQUIRED_WIZARD_FIELDS
            .iter()
            .filter(|field| draft.is_blank(field))
            .map(|field| humanize_field_name(field))
            .collect();
        if !missing.is_empty() {
            return Err(SmartSalesError::validation(format!(
                "Required fields missing: {}",
                missing.join(", ")
            )));
        }

        let business_type = draft.business_type()?.unwrap_or_default();
        let inventory_range = draft.inventory_range()?.unwrap_or_default();

        let entry = WizardEntry {
            business_type,
            inventory_range,
            has_outlet: draft.has_outlet.unwrap_or(false),
            additional_notes: draft.additional_notes.unwrap_or_default(),
            company_name: draft.company_name.unwrap_or_default(),
            company_size: draft.company_size.unwrap_or_default(),
            industry_sector: draft.industry_sector.unwrap_or_default(),
            monthly_revenue: draft.monthly_revenue.unwrap_or_default(),
            sales_channel: draft.sales_channel.unwrap_or_default(),
            target_market: draft.target_market.unwrap_or_default(),
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        let entry_id = format!("wizard_{}", Uuid::new_v4().simple());

        self.store_new_wizard_entry(&entry_id, &entry)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save wizard entry");
                SmartSalesError::adapter("Failed to save wizard data.", &e)
            })?;

        info!(entry_id = %entry_id, "Wizard entry created");
        Ok(WizardRecord {
            entry_id: Some(entry_id),
            entry,
        })
    }

    async fn store_new_wizard_entry(&self, entry_id: &str, entry: &WizardEntry) -> anyhow::Result<()> {
        let stored = StoredWizardEntry::from(entry);

        let mut log = self.load_wizard_log().await?;
        log.insert(entry_id.to_string(), stored.clone());
        self.options.set(keys::WIZARD_ENTRIES, &log).await?;
        self.options.set(keys::WIZARD_DATA, &stored).await?;
        self.options
            .set_text(keys::WIZARD_CURRENT_ENTRY, entry_id)
            .await
    }

    /// Logged entry by id, or the current singleton (defaults when never set)
    pub async fn get_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.check_read(caller)?;
        debug!(user = ?caller.user_id, entry_id, "Reading wizard entry");

        let read_failed = |e: anyhow::Error| {
            error!(error = %e, "Failed to read wizard data");
            SmartSalesError::adapter("Failed to retrieve wizard data.", &e)
        };

        match entry_id {
            Some(id) => {
                let mut log = self.load_wizard_log().await.map_err(read_failed)?;
                let stored = log.remove(id).ok_or_else(entry_not_found)?;
                Ok(WizardRecord {
                    entry_id: Some(id.to_string()),
                    entry: stored.into(),
                })
            }
            None => {
                let stored = self.load_wizard_singleton().await.map_err(read_failed)?;
                Ok(WizardRecord {
                    entry_id: None,
                    entry: stored.into(),
                })
            }
        }
    }

    /// Merge the supplied fields into a logged entry or the singleton
    pub async fn update_wizard_entry(
        &self,
        caller: &Caller,
        entry_id: Option<&str>,
        input: WizardInput,
    ) -> Result<WizardRecord, SmartSalesError> {
        self.check_read(caller)?;
        debug!(user = ?caller.user_id, entry_id, "Updating wizard entry");

        let write_failed = |e: anyhow::Error| {
            error!(error = %e, "Failed to update wizard data");
            SmartSalesError::adapter("Failed to update wizard data.", &e)
        };

        let draft = SanitizedWizard::from_input(input);
        let business_type = draft.business_type()?;
        let inventory_range = draft.inventory_range()?;

        let (mut log, existing) = match entry_id {
            Some(id) => {
                let log = self.load_wizard_log().await.map_err(write_failed)?;
                let existing = log.get(id).cloned().ok_or_else(entry_not_found)?;
                (Some(log), existing)
            }
            None => (None, self.load_wizard_singleton().await.map_err(write_failed)?),
        };

        let previous = WizardEntry::from(existing);
        let mut updated = previous.clone();
        if let Some(business_type) = business_type {
            updated.business_type = business_type;
        }
        if let Some(inventory_range) = inventory_range {
            updated.inventory_range = inventory_range;
        }
        draft.merge_into(&mut updated);
        updated.updated_at = Some(Utc::now());

        let stored = StoredWizardEntry::from(&updated);
        match (entry_id, log.as_mut()) {
            (Some(id), Some(log)) => {
                log.insert(id.to_string(), stored.clone());
                self.options
                    .set(keys::WIZARD_ENTRIES, &*log)
                    .await
                    .map_err(write_failed)?;

                if self
                    .is_current_entry(id, &previous)
                    .await
                    .map_err(write_failed)?
                {
                    debug!(entry_id = id, "Mirroring current entry into singleton");
                    self.options
                        .set(keys::WIZARD_DATA, &stored)
                        .await
                        .map_err(write_failed)?;
                }
            }
            _ => {
                self.options
                    .set(keys::WIZARD_DATA, &stored)
                    .await
                    .map_err(write_failed)?;
            }
        }

        info!(entry_id, "Wizard entry updated");
        Ok(WizardRecord {
            entry_id: entry_id.map(str::to_string),
            entry: updated,
        })
    }

    /// The explicit marker decides; without one, matching `created_at` does
    async fn is_current_entry(&self, entry_id: &str, entry: &WizardEntry) -> anyhow::Result<bool> {
        let marker = self
            .options
            .get_text_or(keys::WIZARD_CURRENT_ENTRY, "")
            .await?;
        if !marker.is_empty() {
            return Ok(marker == entry_id);
        }

        let singleton = self.load_wizard_singleton().await?;
        Ok(entry.created_at.is_some() && singleton.created_at == entry.created_at)
    }

    // ===== Categories =====

    /// List categories; an empty result is reported as not found
    pub async fn list_categories(
        &self,
        caller: &Caller,
        query: CategoryQuery,
    ) -> Result<Vec<Category>, SmartSalesError> {
        self.check_read(caller)?;
        debug!(?query, "Listing categories");

        let categories = self.categories.list(&query).await.map_err(|e| {
            error!(error = %e, "Failed to list categories");
            SmartSalesError::adapter("Failed to retrieve categories.", &e)
        })?;

        if categories.is_empty() {
            return Err(SmartSalesError::NotFound {
                message: "No categories found.".to_string(),
                detail: ErrorDetail::field(
                    "categories",
                    "No categories match the specified criteria.",
                ),
            });
        }

        Ok(categories)
    }

    pub async fn get_category(&self, caller: &Caller, id: u64) -> Result<Category, SmartSalesError> {
        self.check_read(caller)?;
        debug!(id, "Reading category");

        self.find_category(id, "Failed to retrieve category.")
            .await?
            .ok_or_else(|| category_not_found(id))
    }

    async fn find_category(
        &self,
        id: u64,
        failure: &str,
    ) -> Result<Option<Category>, SmartSalesError> {
        self.categories.find_by_id(id).await.map_err(|e| {
            error!(id, error = %e, "Failed to load category");
            SmartSalesError::adapter(failure, &e)
        })
    }

    /// Create a category and return it as stored
    pub async fn create_category(
        &self,
        caller: &Caller,
        category: NewCategory,
    ) -> Result<Category, SmartSalesError> {
        self.check_catalog_write(caller)?;

        let name = sanitize_text_field(&category.name);
        if name.is_empty() {
            let mut fields = FieldErrors::new();
            fields.insert("name".to_string(), "name is required.".to_string());
            return Err(SmartSalesError::invalid_fields(
                "Missing required fields: name",
                fields,
            ));
        }

        let category = NewCategory {
            name,
            description: sanitize_textarea_field(&category.description),
            slug: slugify(&category.slug),
            parent: category.parent,
        };
        debug!(name = %category.name, parent = category.parent, "Creating category");

        const FAILURE: &str = "Failed to create category.";
        let id = self.categories.insert(&category).await.map_err(|e| {
            error!(error = %e, "Failed to insert category");
            SmartSalesError::adapter(FAILURE, &e)
        })?;

        let created = self.find_category(id, FAILURE).await?.ok_or_else(|| {
            SmartSalesError::adapter(FAILURE, &anyhow::anyhow!("category {} missing after insert", id))
        })?;

        info!(id, slug = %created.slug, "Category created");
        Ok(created)
    }

    /// Merge the changes over the stored category and return the result
    pub async fn update_category(
        &self,
        caller: &Caller,
        id: u64,
        changes: CategoryChanges,
    ) -> Result<Category, SmartSalesError> {
        self.check_catalog_write(caller)?;
        debug!(id, "Updating category");

        const FAILURE: &str = "Failed to update category.";
        let current = self
            .find_category(id, FAILURE)
            .await?
            .ok_or_else(|| category_not_found(id))?;

        let attributes = CategoryAttributes {
            name: changes
                .name
                .map(|name| sanitize_text_field(&name))
                .unwrap_or(current.name),
            description: changes
                .description
                .map(|description| sanitize_textarea_field(&description))
                .unwrap_or(current.description),
            slug: changes
                .slug
                .map(|slug| slugify(&slug))
                .unwrap_or(current.slug),
            parent: changes.parent.unwrap_or(current.parent),
        };

        let updated_id = self.categories.update(id, &attributes).await.map_err(|e| {
            error!(id, error = %e, "Failed to update category");
            SmartSalesError::adapter(FAILURE, &e)
        })?;

        let updated = self.find_category(updated_id, FAILURE).await?.ok_or_else(|| {
            SmartSalesError::adapter(
                FAILURE,
                &anyhow::anyhow!("category {} missing after update", updated_id),
            )
        })?;

        info!(id, "Category updated");
        Ok(updated)
    }

    /// Delete a category; its children move up to its parent
    pub async fn delete_category(&self, caller: &Caller, id: u64) -> Result<u64, SmartSalesError> {
        self.check_catalog_write(caller)?;
        debug!(id, "Deleting category");

        const FAILURE: &str = "Failed to delete category.";
        if self.find_category(id, FAILURE).await?.is_none() {
            return Err(category_not_found(id));
        }

        self.categories.delete(id).await.map_err(|e| {
            error!(id, error = %e, "Failed to delete category");
            SmartSalesError::adapter(FAILURE, &e)
        })?;

        info!(id, "Category deleted");
        Ok(id)
    }
}

/// Wizard input after sanitization; `None` still means "not supplied"
struct SanitizedWizard {
    business_type: Option<String>,
    inventory_range: Option<String>,
    has_outlet: Option<bool>,
    additional_notes: Option<String>,
    company_name: Option<String>,
    company_size: Option<String>,
    industry_sector: Option<String>,
    monthly_revenue: Option<String>,
    sales_channel: Option<Vec<String>>,
    target_market: Option<String>,
}

impl SanitizedWizard {
    fn from_input(input: WizardInput) -> Self {
        let text = |value: Option<String>| value.map(|v| sanitize_text_field(&v));
        Self {
            business_type: text(input.business_type),
            inventory_range: text(input.inventory_range),
            has_outlet: input.has_outlet.map(|v| is_truthy(&v)),
            additional_notes: input
                .additional_notes
                .map(|v| sanitize_textarea_field(&v)),
            company_name: text(input.company_name),
            company_size: text(input.company_size),
            industry_sector: text(input.industry_sector),
            monthly_revenue: text(input.monthly_revenue),
            sales_channel: input.sales_channel.map(|channels| {
                channels
                    .iter()
                    .map(|channel| sanitize_text_field(channel))
                    .collect()
            }),
            target_market: text(input.target_market),
        }
    }

    fn is_blank(&self, field: &str) -> bool {
        let value = match field {
            "business_type" => &self.business_type,
            "inventory_range" => &self.inventory_range,
            "company_name" => &self.company_name,
            "industry_sector" => &self.industry_sector,
            _ => return false,
        };
        value.as_deref().is_none_or(str::is_empty)
    }

    fn business_type(&self) -> Result<Option<BusinessType>, SmartSalesError> {
        self.business_type
            .as_deref()
            .map(|value| {
                BusinessType::parse(value)
                    .ok_or_else(|| SmartSalesError::validation("Invalid business type provided"))
            })
            .transpose()
    }

    fn inventory_range(&self) -> Result<Option<InventoryRange>, SmartSalesError> {
        self.inventory_range
            .as_deref()
            .map(|value| {
                InventoryRange::parse(value)
                    .ok_or_else(|| SmartSalesError::validation("Invalid inventory range provided"))
            })
            .transpose()
    }

    /// Overwrite the non-enum fields that were supplied
    fn merge_into(self, entry: &mut WizardEntry) {
        if let Some(has_outlet) = self.has_outlet {
            entry.has_outlet = has_outlet;
        }
        if let Some(notes) = self.additional_notes {
            entry.additional_notes = notes;
        }
        if let Some(name) = self.company_name {
            entry.company_name = name;
        }
        if let Some(size) = self.company_size {
            entry.company_size = size;
        }
        if let Some(sector) = self.industry_sector {
            entry.industry_sector = sector;
        }
        if let Some(revenue) = self.monthly_revenue {
            entry.monthly_revenue = revenue;
        }
        if let Some(channels) = self.sales_channel {
            entry.sales_channel = channels;
        }
        if let Some(market) = self.target_market {
            entry.target_market = market;
        }
    }
}
