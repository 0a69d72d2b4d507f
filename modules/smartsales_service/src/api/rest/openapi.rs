//! OpenAPI document for the REST DTOs

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartSales API",
        description = "Store settings, onboarding wizard and product categories"
    ),
    components(schemas(
        AppDataDto,
        AppUpdateRequest,
        AppUpdateDto,
        WizardEntryDto,
        WizardRecordDto,
        WizardRequest,
        CategoryDto,
        CategoryRequest,
        CategoryDeletedDto,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_dto_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];
        for name in ["AppDataDto", "WizardRecordDto", "CategoryDto", "CategoryRequest"] {
            assert!(schemas.get(name).is_some(), "missing schema {}", name);
        }
    }
}
