//! Integration tests for app settings read/update
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{admin, anonymous, cashier, failing_service, shop_manager, Harness};
use serde_json::json;
use smartsales_service::contract::{
    AppSettingsPatch, BusinessType, ErrorDetail, InventoryRange, SmartSalesError,
};
use smartsales_service::domain::service::keys;
use smartsales_service::infra::InMemoryOptions;

fn patch() -> AppSettingsPatch {
    AppSettingsPatch::default()
}

#[tokio::test]
async fn test_get_app_data_uses_defaults_on_fresh_store() {
    let harness = Harness::new();

    let app = harness.service.get_app_data(&cashier()).await.unwrap();
    let profile = app.profile;
    assert_eq!(profile.store_address, "123 Default St");
    assert_eq!(profile.store_address_2, "");
    assert_eq!(profile.store_city, "Default City");
    assert_eq!(profile.store_postcode, "00000");
    assert_eq!(profile.store_country, "US");
    assert_eq!(profile.currency, "USD");
    assert_eq!(profile.site_name, "Corner Shop");
    assert_eq!(profile.business_type, BusinessType::Retail);
    assert_eq!(profile.inventory_range, InventoryRange::Small);
    assert_eq!(profile.inventory_size, 0);
    assert!(!profile.has_outlet);
    assert_eq!(profile.additional_notes, "");

    assert_eq!(app.info.plugin_name, "AI Smart Sales");
    assert_eq!(app.info.site_url, "https://shop.example.com");
}

#[tokio::test]
async fn test_get_app_data_reads_stored_options() {
    let options = InMemoryOptions::new()
        .with_value(keys::STORE_CITY, json!("Dhaka"))
        .with_value(keys::STORE_POSTCODE, json!(1207))
        .with_value(keys::CURRENCY, json!("BDT"))
        .with_value(
            keys::WIZARD_DATA,
            json!({
                "business_type": "pharmacy",
                "inventory_range": "large",
                "has_outlet": "no",
                "additional_notes": "Two counters"
            }),
        );
    let harness = Harness::with_options(options);
    harness.catalog.set_published_products(42);

    let profile = harness.service.get_app_data(&admin()).await.unwrap().profile;
    assert_eq!(profile.store_city, "Dhaka");
    assert_eq!(profile.store_postcode, "1207");
    assert_eq!(profile.currency, "BDT");
    assert_eq!(profile.business_type, BusinessType::Pharmacy);
    assert_eq!(profile.inventory_range, InventoryRange::Large);
    assert_eq!(profile.inventory_size, 42);
    assert_eq!(profile.additional_notes, "Two counters");
}

#[tokio::test]
async fn test_has_outlet_is_flag_or_published_outlet() {
    // Neither source set
    let harness = Harness::new();
    let profile = harness.service.get_app_data(&admin()).await.unwrap().profile;
    assert!(!profile.has_outlet);

    // Published outlet alone is enough
    harness.catalog.set_published_outlets(1);
    let profile = harness.service.get_app_data(&admin()).await.unwrap().profile;
    assert!(profile.has_outlet);

    // Stored flag alone is enough
    let options =
        InMemoryOptions::new().with_value(keys::WIZARD_DATA, json!({ "has_outlet": true }));
    let harness = Harness::with_options(options);
    let profile = harness.service.get_app_data(&admin()).await.unwrap().profile;
    assert!(profile.has_outlet);
}

#[tokio::test]
async fn test_get_app_data_requires_pos_role() {
    let harness = Harness::new();

    let err = harness.service.get_app_data(&anonymous()).await.unwrap_err();
    assert!(matches!(err, SmartSalesError::Unauthenticated { .. }));

    let editor = smartsales_service::Caller::user("3", ["editor"]);
    let err = harness.service.get_app_data(&editor).await.unwrap_err();
    assert_eq!(
        err,
        SmartSalesError::Forbidden {
            message: "Sorry, you are not allowed to do that.".to_string()
        }
    );
}

#[tokio::test]
async fn test_update_applies_valid_fields() {
    let harness = Harness::new();

    let result = harness
        .service
        .update_app_data(
            &admin(),
            AppSettingsPatch {
                store_city: Some("  <b>Chittagong</b> ".to_string()),
                currency: Some("eur".to_string()),
                store_country: Some("DE".to_string()),
                email: Some(" owner@shop.example.com ".to_string()),
                site_name: Some("Harbour Mart".to_string()),
                ..patch()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.updated_count(), 5);
    assert_eq!(result.updated_fields["store_city"], json!("Chittagong"));
    assert_eq!(result.updated_fields["email"], json!("owner@shop.example.com"));

    assert_eq!(harness.option(keys::STORE_CITY), Some(json!("Chittagong")));
    assert_eq!(harness.option(keys::CURRENCY), Some(json!("eur")));
    assert_eq!(harness.option(keys::SITE_NAME), Some(json!("Harbour Mart")));

    let profile = harness.service.get_app_data(&admin()).await.unwrap().profile;
    assert_eq!(profile.site_name, "Harbour Mart");
    assert_eq!(profile.email, "owner@shop.example.com");
}

#[tokio::test]
async fn test_invalid_currency_is_rejected_while_other_fields_apply() {
    let harness = Harness::new();

    let err = harness
        .service
        .update_app_data(
            &admin(),
            AppSettingsPatch {
                currency: Some("XYZ".to_string()),
                store_city: Some("Dhaka".to_string()),
                ..patch()
            },
        )
        .await
        .unwrap_err();

    let (message, applied, errors) = match err {
        SmartSalesError::PartialUpdate {
            message,
            applied,
            errors,
        } => (message, applied, errors),
        other => panic!("expected a partial update, got {other:?}"),
    };
    assert_eq!(
        message,
        "Some fields could not be updated due to validation errors."
    );
    assert_eq!(errors["currency"], "Invalid currency code: XYZ");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied["store_city"], json!("Dhaka"));

    assert_eq!(harness.option(keys::STORE_CITY), Some(json!("Dhaka")));
    assert_eq!(harness.option(keys::CURRENCY), None);
}

#[tokio::test]
async fn test_each_invalid_field_is_reported() {
    let harness = Harness::new();

    let err = harness
        .service
        .update_app_data(
            &admin(),
            AppSettingsPatch {
                store_country: Some("ZZ".to_string()),
                email: Some("not-an-email".to_string()),
                business_type: Some("spaceport".to_string()),
                inventory_range: Some("galactic".to_string()),
                ..patch()
            },
        )
        .await
        .unwrap_err();

    let (applied, errors) = match err {
        SmartSalesError::PartialUpdate {
            applied, errors, ..
        } => (applied, errors),
        other => panic!("expected a partial update, got {other:?}"),
    };
    assert!(applied.is_empty());
    assert_eq!(errors["store_country"], "Invalid country code: ZZ");
    assert_eq!(errors["email"], "Invalid email address: not-an-email");
    assert_eq!(errors["business_type"], "Invalid business type: spaceport");
    assert_eq!(errors["inventory_range"], "Invalid inventory range: galactic");
    assert!(harness.options.snapshot().is_empty());
}

#[tokio::test]
async fn test_update_without_fields_is_rejected() {
    let harness = Harness::new();

    let err = harness
        .service
        .update_app_data(&admin(), patch())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SmartSalesError::Validation {
            message: "No valid fields provided for update.".to_string(),
            detail: ErrorDetail::Message("No valid fields provided for update.".to_string()),
        }
    );
}

#[tokio::test]
async fn test_profile_fields_merge_into_wizard_singleton() {
    let options = InMemoryOptions::new().with_value(
        keys::WIZARD_DATA,
        json!({ "company_name": "Acme", "business_type": "retail" }),
    );
    let harness = Harness::with_options(options);

    let result = harness
        .service
        .update_app_data(
            &admin(),
            AppSettingsPatch {
                business_type: Some("grocery".to_string()),
                has_outlet: Some("yes".to_string()),
                additional_notes: Some("Open late\nClosed Sundays".to_string()),
                ..patch()
            },
        )
        .await
        .unwrap();
    assert_eq!(result.updated_fields["has_outlet"], json!(true));

    let stored = harness.option(keys::WIZARD_DATA).unwrap();
    assert_eq!(stored["business_type"], "grocery");
    assert_eq!(stored["has_outlet"], true);
    assert_eq!(stored["additional_notes"], "Open late\nClosed Sundays");
    assert_eq!(stored["company_name"], "Acme");

    let profile = harness.service.get_app_data(&cashier()).await.unwrap().profile;
    assert_eq!(profile.business_type, BusinessType::Grocery);
    assert!(profile.has_outlet);
}

#[tokio::test]
async fn test_update_requires_administrator() {
    let harness = Harness::new();
    let city = AppSettingsPatch {
        store_city: Some("Dhaka".to_string()),
        ..patch()
    };

    let err = harness
        .service
        .update_app_data(&anonymous(), city.clone())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SmartSalesError::Unauthenticated {
            message: "You must be logged in to access this resource.".to_string()
        }
    );

    for caller in [cashier(), shop_manager()] {
        let err = harness
            .service
            .update_app_data(&caller, city.clone())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SmartSalesError::Forbidden {
                message:
                    "You do not have permission to update app data. Administrator role required."
                        .to_string()
            }
        );
    }
    assert!(harness.options.snapshot().is_empty());
}

#[tokio::test]
async fn test_store_failure_is_reported_with_reason() {
    let service = failing_service("connection reset");

    let err = service.get_app_data(&admin()).await.unwrap_err();
    assert_eq!(
        err,
        SmartSalesError::Adapter {
            message: "Failed to retrieve app data.".to_string(),
            reason: "connection reset".to_string(),
        }
    );
}
