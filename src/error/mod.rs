//! Error types for the fleetcert server.
//!
//! Domain-specific error enums (validation, configuration) are aggregated into
//! a single [`Error`] type via `thiserror`'s `#[from]`, and every variant maps
//! to an HTTP response through `IntoResponse`. Mutation paths fail before any
//! write occurs, so a returned error never leaves a partially updated drone
//! aggregate behind.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub use config::ConfigError;
pub use validation::ValidationError;

/// Main error type for the fleetcert server.
///
/// # Error categories
/// - Validation errors (rejected checklist mutations) - 400
/// - Missing referenced entities - 404
/// - Stale-version aggregate writes - 409
/// - Configuration and database errors - 500
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A checklist or roster mutation was rejected before any write.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced entity does not exist.
    #[error("{0} ID {1} not found")]
    NotFound(&'static str, i32),
    /// An aggregate write was based on a stale version token.
    ///
    /// Another writer updated the drone between this caller's read and write;
    /// the caller must re-fetch the snapshot and retry from current state.
    #[error("Drone ID {drone_id} changed since version {expected_version} was read")]
    Conflict {
        /// The drone whose aggregate write was rejected.
        drone_id: i32,
        /// The version token the caller supplied.
        expected_version: i32,
    },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(resource, id) => {
                tracing::debug!(resource = %resource, id = %id, "not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            Self::Conflict {
                drone_id,
                expected_version,
            } => {
                tracing::debug!(
                    drone_id = %drone_id,
                    expected_version = %expected_version,
                    "rejected stale aggregate write"
                );

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "The drone was modified by someone else, please reload and try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
