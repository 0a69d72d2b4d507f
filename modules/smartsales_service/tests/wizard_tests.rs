//! Integration tests for the onboarding wizard
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{admin, anonymous, cashier, failing_service, Harness};
use serde_json::json;
use smartsales_service::contract::{
    BusinessType, ErrorDetail, InventoryRange, SmartSalesError, WizardInput,
};
use smartsales_service::domain::service::keys;
use smartsales_service::infra::InMemoryOptions;

fn complete_input() -> WizardInput {
    WizardInput {
        business_type: Some("restaurant".to_string()),
        inventory_range: Some("medium".to_string()),
        has_outlet: Some("yes".to_string()),
        additional_notes: Some("Rooftop seating".to_string()),
        company_name: Some("Blue Lotus".to_string()),
        company_size: Some("11-50".to_string()),
        industry_sector: Some("Food & Beverage".to_string()),
        monthly_revenue: Some("10k-50k".to_string()),
        sales_channel: Some(vec!["in_store".to_string(), "delivery".to_string()]),
        target_market: Some("Local".to_string()),
    }
}

fn validation_message(err: SmartSalesError) -> String {
    match err {
        SmartSalesError::Validation {
            message,
            detail: ErrorDetail::Message(detail),
        } => {
            assert_eq!(message, detail);
            message
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_logs_entry_and_makes_it_current() {
    let harness = Harness::new();

    let record = harness
        .service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap();

    let entry_id = record.entry_id.clone().unwrap();
    assert!(entry_id.starts_with("wizard_"));
    assert_eq!(record.entry.business_type, BusinessType::Restaurant);
    assert_eq!(record.entry.inventory_range, InventoryRange::Medium);
    assert!(record.entry.has_outlet);
    assert_eq!(record.entry.sales_channel, vec!["in_store", "delivery"]);
    assert!(record.entry.created_at.is_some());
    assert!(record.entry.updated_at.is_none());

    let log = harness.option(keys::WIZARD_ENTRIES).unwrap();
    assert_eq!(log[&entry_id]["company_name"], "Blue Lotus");
    assert_eq!(log[&entry_id]["industry_sector"], "Food & Beverage");
    assert_eq!(
        harness.option(keys::WIZARD_CURRENT_ENTRY),
        Some(json!(entry_id))
    );

    // Singleton and log entry read back identically
    let current = harness
        .service
        .get_wizard_entry(&cashier(), None)
        .await
        .unwrap();
    let logged = harness
        .service
        .get_wizard_entry(&cashier(), Some(&entry_id))
        .await
        .unwrap();
    assert_eq!(current.entry, record.entry);
    assert_eq!(logged.entry, record.entry);
    assert_eq!(current.entry_id, None);
    assert_eq!(logged.entry_id, Some(entry_id));
}

#[tokio::test]
async fn test_entry_ids_are_unique() {
    let harness = Harness::new();

    let first = harness
        .service
        .create_wizard_entry(&admin(), complete_input())
        .await
        .unwrap();
    let second = harness
        .service
        .create_wizard_entry(&admin(), complete_input())
        .await
        .unwrap();

    assert_ne!(first.entry_id, second.entry_id);
    let log = harness.option(keys::WIZARD_ENTRIES).unwrap();
    assert_eq!(log.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_required_fields_write_nothing() {
    let harness = Harness::new();

    let err = harness
        .service
        .create_wizard_entry(
            &cashier(),
            WizardInput {
                business_type: Some("retail".to_string()),
                inventory_range: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(
        validation_message(err),
        "Required fields missing: Inventory range, Company name, Industry sector"
    );
    assert!(harness.options.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_rejects_unknown_enum_values() {
    let harness = Harness::new();

    let err = harness
        .service
        .create_wizard_entry(
            &cashier(),
            WizardInput {
                business_type: Some("Retail".to_string()),
                ..complete_input()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "Invalid business type provided");

    let err = harness
        .service
        .create_wizard_entry(
            &cashier(),
            WizardInput {
                inventory_range: Some("huge".to_string()),
                ..complete_input()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "Invalid inventory range provided");
    assert!(harness.options.snapshot().is_empty());
}

#[tokio::test]
async fn test_get_without_data_returns_defaults() {
    let harness = Harness::new();

    let record = harness
        .service
        .get_wizard_entry(&cashier(), None)
        .await
        .unwrap();
    assert_eq!(record.entry_id, None);
    assert_eq!(record.entry.business_type, BusinessType::Retail);
    assert_eq!(record.entry.inventory_range, InventoryRange::Small);
    assert!(!record.entry.has_outlet);
    assert!(record.entry.sales_channel.is_empty());
    assert!(record.entry.created_at.is_none());
}

#[tokio::test]
async fn test_unknown_entry_is_not_found() {
    let harness = Harness::new();

    let err = harness
        .service
        .get_wizard_entry(&cashier(), Some("wizard_missing"))
        .await
        .unwrap_err();
    assert_eq!(err, SmartSalesError::not_found("Entry not found"));

    let err = harness
        .service
        .update_wizard_entry(&cashier(), Some("wizard_missing"), WizardInput::default())
        .await
        .unwrap_err();
    assert_eq!(err, SmartSalesError::not_found("Entry not found"));
}

#[tokio::test]
async fn test_notes_only_update_keeps_other_fields() {
    let harness = Harness::new();
    let created = harness
        .service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap();
    let entry_id = created.entry_id.clone().unwrap();

    let updated = harness
        .service
        .update_wizard_entry(
            &cashier(),
            Some(&entry_id),
            WizardInput {
                additional_notes: Some("Now with <em>breakfast</em>".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.entry.additional_notes, "Now with breakfast");
    assert_eq!(updated.entry.business_type, created.entry.business_type);
    assert_eq!(updated.entry.company_name, "Blue Lotus");
    assert_eq!(updated.entry.sales_channel, created.entry.sales_channel);
    assert_eq!(updated.entry.created_at, created.entry.created_at);
    assert!(updated.entry.updated_at.is_some());

    let reread = harness
        .service
        .get_wizard_entry(&cashier(), Some(&entry_id))
        .await
        .unwrap();
    assert_eq!(reread.entry, updated.entry);
}

#[tokio::test]
async fn test_update_rejects_unknown_enum_before_writing() {
    let harness = Harness::new();
    harness
        .service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap();
    let before = harness.options.snapshot();

    let err = harness
        .service
        .update_wizard_entry(
            &cashier(),
            None,
            WizardInput {
                inventory_range: Some("infinite".to_string()),
                company_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(validation_message(err), "Invalid inventory range provided");
    assert_eq!(harness.options.snapshot(), before);
}

#[tokio::test]
async fn test_updating_current_entry_mirrors_into_singleton() {
    let harness = Harness::new();
    let older = harness
        .service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap();
    let current = harness
        .service
        .create_wizard_entry(
            &cashier(),
            WizardInput {
                company_name: Some("Green Leaf".to_string()),
                ..complete_input()
            },
        )
        .await
        .unwrap();

    // Older entry: log changes, singleton does not
    harness
        .service
        .update_wizard_entry(
            &cashier(),
            older.entry_id.as_deref(),
            WizardInput {
                company_size: Some("1-10".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let singleton = harness.option(keys::WIZARD_DATA).unwrap();
    assert_eq!(singleton["company_name"], "Green Leaf");
    assert_eq!(singleton["company_size"], "11-50");

    // Current entry: both change
    harness
        .service
        .update_wizard_entry(
            &cashier(),
            current.entry_id.as_deref(),
            WizardInput {
                business_type: Some("grocery".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let singleton = harness.option(keys::WIZARD_DATA).unwrap();
    assert_eq!(singleton["business_type"], "grocery");
    assert_eq!(singleton["company_name"], "Green Leaf");
}

#[tokio::test]
async fn test_legacy_entries_match_singleton_by_created_at() {
    let options = InMemoryOptions::new()
        .with_value(
            keys::WIZARD_ENTRIES,
            json!({
                "wizard_legacy_a": {
                    "business_type": "retail",
                    "company_name": "Old Shop",
                    "has_outlet": "no",
                    "created_at": "2024-01-05 10:00:00"
                },
                "wizard_legacy_b": {
                    "business_type": "fashion",
                    "company_name": "Boutique",
                    "has_outlet": "yes",
                    "created_at": "2024-03-09 16:30:00"
                }
            }),
        )
        .with_value(
            keys::WIZARD_DATA,
            json!({
                "business_type": "fashion",
                "company_name": "Boutique",
                "has_outlet": "yes",
                "created_at": "2024-03-09 16:30:00"
            }),
        );
    let harness = Harness::with_options(options);

    let legacy = harness
        .service
        .get_wizard_entry(&admin(), Some("wizard_legacy_b"))
        .await
        .unwrap();
    assert!(legacy.entry.has_outlet);
    assert_eq!(legacy.entry.business_type, BusinessType::Fashion);

    harness
        .service
        .update_wizard_entry(
            &admin(),
            Some("wizard_legacy_a"),
            WizardInput {
                target_market: Some("Tourists".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let singleton = harness.option(keys::WIZARD_DATA).unwrap();
    assert_eq!(singleton["company_name"], "Boutique");
    assert!(singleton.get("target_market").is_none());

    harness
        .service
        .update_wizard_entry(
            &admin(),
            Some("wizard_legacy_b"),
            WizardInput {
                target_market: Some("Students".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let singleton = harness.option(keys::WIZARD_DATA).unwrap();
    assert_eq!(singleton["target_market"], "Students");
    assert_eq!(singleton["company_name"], "Boutique");
}

#[tokio::test]
async fn test_singleton_update_leaves_log_untouched() {
    let harness = Harness::new();
    let created = harness
        .service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap();
    let entry_id = created.entry_id.unwrap();

    let updated = harness
        .service
        .update_wizard_entry(
            &cashier(),
            None,
            WizardInput {
                has_outlet: Some("off".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.entry_id, None);
    assert!(!updated.entry.has_outlet);

    let logged = harness
        .service
        .get_wizard_entry(&cashier(), Some(&entry_id))
        .await
        .unwrap();
    assert!(logged.entry.has_outlet);
}

#[tokio::test]
async fn test_wizard_requires_pos_role() {
    let harness = Harness::new();

    let err = harness
        .service
        .create_wizard_entry(&anonymous(), complete_input())
        .await
        .unwrap_err();
    assert!(matches!(err, SmartSalesError::Unauthenticated { .. }));

    let customer = smartsales_service::Caller::user("12", ["customer"]);
    let err = harness
        .service
        .get_wizard_entry(&customer, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SmartSalesError::Forbidden { .. }));
    assert!(harness.options.snapshot().is_empty());
}

#[tokio::test]
async fn test_store_failure_on_create() {
    let service = failing_service("read-only replica");

    let err = service
        .create_wizard_entry(&cashier(), complete_input())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SmartSalesError::Adapter {
            message: "Failed to save wizard data.".to_string(),
            reason: "read-only replica".to_string(),
        }
    );
}
