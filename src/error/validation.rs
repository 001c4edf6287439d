use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A mutation rejected before any write occurred.
///
/// Every variant leaves the persisted state untouched; callers surface the
/// message to the user and retry with corrected input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field for a recurring-record append is missing or empty.
    #[error("Field '{field}' is required for a {category} record")]
    MissingField {
        /// The recurring category being appended to.
        category: &'static str,
        /// The empty or absent required field.
        field: &'static str,
    },
    /// A delete index is at or beyond the end of the category list.
    #[error("No {category} record at index {index} (list has {len} entries)")]
    IndexOutOfBounds {
        /// The recurring category being deleted from.
        category: &'static str,
        /// The 0-based index supplied by the caller.
        index: usize,
        /// Current length of the list.
        len: usize,
    },
    /// The category keeps an immutable audit trail and defines no delete.
    #[error("Records in {category} cannot be deleted")]
    DeleteNotSupported {
        /// The recurring category the delete addressed.
        category: &'static str,
    },
    /// A single-file upload was submitted without a file reference.
    #[error("Upload for {kind} requires at least one file reference")]
    EmptyUploadBatch {
        /// The upload slot the empty batch addressed.
        kind: &'static str,
    },
    /// A manufactured unit was submitted with an empty serial number or UIN.
    #[error("Manufactured units require a non-empty {field}")]
    EmptyUnitField {
        /// Which unit field was empty.
        field: &'static str,
    },
    /// A sales-order status field holds a value outside its closed vocabulary.
    #[error("Value {value:?} is not valid for order field '{field}'")]
    UnknownStatus {
        /// The order status field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
