//! Request validation.
//!
//! Field validators check one untyped JSON value each, input validators
//! compose them over a whole request body, and the identifier validator
//! handles the `{id}` path segment. All of them report problems as
//! [`FieldError`]s and never short-circuit across fields.

pub mod fields;
pub mod id;
pub mod input;

use serde::{Deserialize, Serialize};

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Response body for every validation failure: `{ "errorsMessages": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub errors_messages: Vec<FieldError>,
}

impl From<Vec<FieldError>> for ErrorEnvelope {
    fn from(errors_messages: Vec<FieldError>) -> Self {
        Self { errors_messages }
    }
}
