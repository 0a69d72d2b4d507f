//! Response envelope and HTTP error mapping
//!
//! Every response body is `{ success, message, data, error? }`.

use super::dto::AppUpdateDto;
use crate::contract::{ErrorDetail, SmartSalesError};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

/// Uniform response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

/// Successful response: status plus enveloped data
pub type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;

pub fn respond<T: Serialize>(status: StatusCode, message: &str, data: T) -> ApiResult<T> {
    Ok((status, Json(Envelope::ok(message, data))))
}

/// Error detail as it appears under `error`
fn detail_json(detail: ErrorDetail) -> Value {
    match detail {
        ErrorDetail::Fields(fields) => json!(fields),
        ErrorDetail::Message(message) => json!({ "error": message }),
    }
}

/// Failure response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Envelope<Value>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>, error: Value) -> Self {
        Self {
            status,
            body: Envelope {
                success: false,
                message: message.into(),
                data: None,
                error: Some(error),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<SmartSalesError> for ApiError {
    fn from(error: SmartSalesError) -> Self {
        match error {
            SmartSalesError::Validation { message, detail } => {
                Self::new(StatusCode::BAD_REQUEST, message, detail_json(detail))
            }
            SmartSalesError::PartialUpdate {
                message,
                applied,
                errors,
            } => {
                let summary = AppUpdateDto {
                    updated_count: applied.len(),
                    updated_fields: applied,
                };
                let mut err = Self::new(StatusCode::BAD_REQUEST, message, json!(errors));
                err.body.data = serde_json::to_value(summary).ok();
                err
            }
            SmartSalesError::Unauthenticated { message } => {
                let detail = json!({ "error": message });
                Self::new(StatusCode::UNAUTHORIZED, message, detail)
            }
            SmartSalesError::Forbidden { message } => {
                let detail = json!({ "error": message });
                Self::new(StatusCode::FORBIDDEN, message, detail)
            }
            SmartSalesError::NotFound { message, detail } => {
                Self::new(StatusCode::NOT_FOUND, message, detail_json(detail))
            }
            SmartSalesError::Adapter { message, reason } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                json!({ "error": reason }),
            ),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid request body.",
            json!({ "error": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid query parameters.",
            json!({ "error": rejection.body_text() }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
