//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::*;
use super::error::{respond, ApiError, ApiResult};
use crate::contract::{
    AppSettingsPatch, Caller, CategoryChanges, CategoryQuery, NewCategory, SmartSalesError,
    WizardInput,
};
use crate::domain::service::category_not_found;
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

/// Path ids that are not valid category ids can never match a category
fn category_id(
    raw: &str,
    check_access: impl FnOnce() -> Result<(), SmartSalesError>,
) -> Result<u64, ApiError> {
    match raw.trim().parse() {
        Ok(id) => Ok(id),
        Err(_) => {
            check_access()?;
            Err(category_not_found(raw).into())
        }
    }
}

/// Unwrap an extractor result; access denials take precedence over request errors
fn or_denial<T, R: Into<ApiError>>(
    extracted: Result<T, R>,
    check_access: impl FnOnce() -> Result<(), SmartSalesError>,
) -> Result<T, ApiError> {
    match extracted {
        Ok(value) => Ok(value),
        Err(rejection) => {
            check_access()?;
            Err(rejection.into())
        }
    }
}

fn body_or_denial<T>(
    body: Result<Json<T>, JsonRejection>,
    check_access: impl FnOnce() -> Result<(), SmartSalesError>,
) -> Result<T, ApiError> {
    or_denial(body.map(|Json(value)| value), check_access)
}

fn query_or_denial<T>(
    params: Result<Query<T>, QueryRejection>,
    check_access: impl FnOnce() -> Result<(), SmartSalesError>,
) -> Result<T, ApiError> {
    or_denial(params.map(|Query(value)| value), check_access)
}

/// Blank `entry_id` is the same as no `entry_id`
fn entry_id(params: &WizardEntryParams) -> Option<&str> {
    params
        .entry_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

// ===== App Handlers =====

pub async fn get_app(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
) -> ApiResult<AppDataDto> {
    let app = service.get_app_data(&caller).await?;
    respond(StatusCode::OK, "App data retrieved successfully.", app.into())
}

pub async fn update_app(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<AppUpdateRequest>, JsonRejection>,
) -> ApiResult<AppUpdateDto> {
    let req = body_or_denial(body, || service.check_settings_write(&caller))?;
    let patch = AppSettingsPatch::from(req);

    let result = service.update_app_data(&caller, patch).await?;
    respond(StatusCode::OK, "App data updated successfully.", result.into())
}

// ===== Wizard Handlers =====

pub async fn create_wizard(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<WizardRequest>, JsonRejection>,
) -> ApiResult<WizardRecordDto> {
    let req = body_or_denial(body, || service.check_read(&caller))?;
    let record = service
        .create_wizard_entry(&caller, WizardInput::from(req))
        .await?;
    respond(
        StatusCode::OK,
        "Business information saved successfully",
        record.into(),
    )
}

pub async fn get_wizard(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    params: Result<Query<WizardEntryParams>, QueryRejection>,
) -> ApiResult<WizardEntryDto> {
    let params = query_or_denial(params, || service.check_read(&caller))?;
    let record = service.get_wizard_entry(&caller, entry_id(&params)).await?;
    respond(
        StatusCode::OK,
        "Wizard data retrieved successfully",
        record.entry.into(),
    )
}

pub async fn update_wizard(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    params: Result<Query<WizardEntryParams>, QueryRejection>,
    body: Result<Json<WizardRequest>, JsonRejection>,
) -> ApiResult<WizardRecordDto> {
    let params = query_or_denial(params, || service.check_read(&caller))?;
    let req = body_or_denial(body, || service.check_read(&caller))?;
    let record = service
        .update_wizard_entry(&caller, entry_id(&params), WizardInput::from(req))
        .await?;
    respond(
        StatusCode::OK,
        "Wizard data updated successfully",
        record.into(),
    )
}

// ===== Category Handlers =====

pub async fn list_categories(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    params: Result<Query<ListCategoriesParams>, QueryRejection>,
) -> ApiResult<Vec<CategoryDto>> {
    let params = query_or_denial(params, || service.check_read(&caller))?;
    let categories = service
        .list_categories(&caller, CategoryQuery::from(params))
        .await?;
    respond(
        StatusCode::OK,
        "Categories retrieved successfully.",
        categories.into_iter().map(CategoryDto::from).collect(),
    )
}

pub async fn get_category(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    Path(raw_id): Path<String>,
) -> ApiResult<CategoryDto> {
    let id = category_id(&raw_id, || service.check_read(&caller))?;
    let category = service.get_category(&caller, id).await?;
    respond(
        StatusCode::OK,
        "Category retrieved successfully.",
        category.into(),
    )
}

pub async fn create_category(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<CategoryDto> {
    let req = body_or_denial(body, || service.check_catalog_write(&caller))?;
    let category = service
        .create_category(&caller, NewCategory::from(req))
        .await?;
    respond(
        StatusCode::CREATED,
        "Category created successfully.",
        category.into(),
    )
}

pub async fn update_category(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    Path(raw_id): Path<String>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<CategoryDto> {
    let req = body_or_denial(body, || service.check_catalog_write(&caller))?;
    let id = category_id(&raw_id, || service.check_catalog_write(&caller))?;
    let category = service
        .update_category(&caller, id, CategoryChanges::from(req))
        .await?;
    respond(
        StatusCode::OK,
        "Category updated successfully.",
        category.into(),
    )
}

pub async fn delete_category(
    Extension(service): Extension<Arc<Service>>,
    Extension(caller): Extension<Caller>,
    Path(raw_id): Path<String>,
) -> ApiResult<CategoryDeletedDto> {
    let id = category_id(&raw_id, || service.check_catalog_write(&caller))?;
    let deleted = service.delete_category(&caller, id).await?;
    respond(
        StatusCode::OK,
        "Category deleted successfully.",
        CategoryDeletedDto {
            category_id: deleted,
        },
    )
}
