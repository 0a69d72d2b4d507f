//! Contract error types for the SmartSales service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::UpdatedFields;
use std::collections::BTreeMap;

/// Field name -> human readable message
pub type FieldErrors = BTreeMap<String, String>;

/// Structured error detail carried by every error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// Per-field messages
    Fields(FieldErrors),
    /// Single message without field attribution
    Message(String),
}

impl ErrorDetail {
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(name.into(), message.into());
        Self::Fields(fields)
    }
}

/// SmartSales domain errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmartSalesError {
    /// Bad or missing input; nothing was written
    #[error("Validation error: {message}")]
    Validation { message: String, detail: ErrorDetail },

    /// Some fields were rejected while others were applied
    #[error("Partial update: {message}")]
    PartialUpdate {
        message: String,
        applied: UpdatedFields,
        errors: FieldErrors,
    },

    /// Caller is not logged in
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    /// Caller lacks the required role or capability
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Referenced entity is absent
    #[error("Not found: {message}")]
    NotFound { message: String, detail: ErrorDetail },

    /// Underlying store failure; `reason` is the store's own message
    #[error("{message}: {reason}")]
    Adapter { message: String, reason: String },
}

impl SmartSalesError {
    /// Validation error whose detail repeats the message
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            detail: ErrorDetail::Message(message.clone()),
            message,
        }
    }

    pub fn invalid_fields(message: impl Into<String>, fields: FieldErrors) -> Self {
        Self::Validation {
            message: message.into(),
            detail: ErrorDetail::Fields(fields),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::NotFound {
            detail: ErrorDetail::Message(message.clone()),
            message,
        }
    }

    pub fn adapter(message: impl Into<String>, error: &anyhow::Error) -> Self {
        Self::Adapter {
            message: message.into(),
            reason: error.to_string(),
        }
    }
}
