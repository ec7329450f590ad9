use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no participant identity header.
    ///
    /// The authenticating proxy in front of the service did not forward an identity.
    /// Results in a 401 Unauthorized response.
    #[error("Request carries no participant identity")]
    MissingIdentity,

    /// The identity header is present but is not a participant id.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Malformed participant identity: {0}")]
    InvalidIdentity(String),

    /// The identity header names a participant that does not exist.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Participant {0} not found in database")]
    UnknownParticipant(i32),

    /// The participant is known but may not perform the operation.
    ///
    /// The message describes the denied operation and is only logged.
    /// Results in a 403 Forbidden response.
    #[error("Participant {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing, malformed or unknown identities
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::InvalidIdentity(_) | Self::UnknownParticipant(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required", "unauthorized")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "You are not allowed to perform this action",
                    "forbidden",
                )),
            )
                .into_response(),
        }
    }
}
