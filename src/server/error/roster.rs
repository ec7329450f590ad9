use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors raised by the event store, voting, choice and roster services.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    /// Malformed or inconsistent input.
    ///
    /// Results in 400 Bad Request naming the offending field.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Unknown event, flight, slot, choice, module or participant.
    ///
    /// Results in 404 Not Found.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Mutation attempted on a soft-deleted event.
    ///
    /// Results in 409 Conflict.
    #[error("Event {0} is deleted")]
    EventDeleted(i32),

    /// The slot already has an occupant.
    ///
    /// Results in 409 Conflict.
    #[error("Slot {0} is already taken")]
    SlotTaken(i32),

    /// The participant already holds another slot in the same event.
    ///
    /// Results in 409 Conflict.
    #[error("Participant {participant} already holds slot {slot} in event {event}")]
    AlreadyAssigned {
        participant: i32,
        event: i32,
        slot: i32,
    },

    /// A concurrent write changed the aggregate first; the same call may be retried.
    ///
    /// Results in 409 Conflict.
    #[error("Concurrent modification: {0}")]
    Conflict(String),
}

impl RosterError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// Machine readable error kind sent alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NotFound { .. } => "not_found",
            Self::EventDeleted(_) => "event_deleted",
            Self::SlotTaken(_) => "slot_taken",
            Self::AlreadyAssigned { .. } => "already_assigned",
            Self::Conflict(_) => "conflict",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::EventDeleted(_)
            | Self::SlotTaken(_)
            | Self::AlreadyAssigned { .. }
            | Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

/// Converts roster errors into HTTP responses.
///
/// Concurrent modifications are logged at warn level; the other variants are
/// expected client errors and only reach the debug log.
impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        match &self {
            Self::Conflict(reason) => tracing::warn!("Rejected concurrent write: {}", reason),
            err => tracing::debug!("{}", err),
        }

        let status = self.status();
        let body = ErrorDto::new(self.to_string(), self.kind());

        (status, Json(body)).into_response()
    }
}
