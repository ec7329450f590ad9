//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod roster;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, roster::RosterError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `RosterError` handle their own response mapping, while the remaining variants map
/// to server-side failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Roster domain error (validation, missing records, claim invariants, conflicts).
    ///
    /// Delegates to `RosterError::into_response()`.
    #[error(transparent)]
    RosterErr(#[from] RosterError),

    /// Persistence failure from SeaORM.
    ///
    /// Results in 503 Service Unavailable with error details logged server-side.
    /// Unique constraint violations never land here, see `From<DbErr>`.
    #[error("Storage unavailable: {0}")]
    Unavailable(DbErr),

    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from `DbErr` to `AppError`.
///
/// A unique constraint violation means a concurrent writer got there first (a second
/// vote for the same pair, a second seat for the same participant), so it becomes a
/// retryable `RosterError::Conflict`. Every other database error is `Unavailable`.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(reason)) => {
                tracing::warn!("Unique constraint violation: {}", reason);
                RosterError::Conflict(reason).into()
            }
            _ => AppError::Unavailable(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `AuthErr` and `RosterErr`, delegated to their own `into_response()`
/// - 503 Service Unavailable - For `Unavailable`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::RosterErr(err) => err.into_response(),
            Self::Unavailable(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new(
                        "Storage is temporarily unavailable, please retry",
                        "unavailable",
                    )),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError(msg).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error", "internal")),
        )
            .into_response()
    }
}
