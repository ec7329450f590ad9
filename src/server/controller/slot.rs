use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{AssignSlotDto, SlotDto},
    },
    server::{
        error::{roster::RosterError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::flight::SlotAssignee,
        service::roster::RosterService,
        state::AppState,
    },
};

/// Tag for grouping slot endpoints in OpenAPI documentation
pub static SLOT_TAG: &str = "slot";

/// Claim an empty slot for the requesting participant.
///
/// A participant holds at most one slot per event.
///
/// # Returns
/// - `200 OK` - The slot, now occupied
/// - `403 Forbidden` - Participant may not take part
/// - `404 Not Found` - Slot not found
/// - `409 Conflict` - Slot taken, participant already seated, event deleted or
///   concurrent roster change
#[utoipa::path(
    post,
    path = "/api/slots/{slot_id}/claim",
    tag = SLOT_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    responses(
        (status = 200, description = "Slot claimed", body = SlotDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 403, description = "Participant may not take part", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Slot taken or participant already seated", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn claim_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let slot = RosterService::new(&state.db)
        .claim_slot(&actor, slot_id)
        .await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

/// Release a slot. Releasing an empty slot succeeds without change.
///
/// # Access Control
/// - The occupant or an administrator
#[utoipa::path(
    post,
    path = "/api/slots/{slot_id}/release",
    tag = SLOT_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    responses(
        (status = 200, description = "Slot released", body = SlotDto),
        (status = 403, description = "Participant does not hold this slot", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent roster change", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn release_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let slot = RosterService::new(&state.db)
        .release_slot(&actor, slot_id)
        .await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

/// Put a participant or a guest into a slot.
///
/// The body names exactly one of `user_id` (registered participant) or `username`
/// (guest). Any current occupant is replaced.
///
/// # Access Control
/// - `Admin` - Only administrators
#[utoipa::path(
    put,
    path = "/api/admin/slots/{slot_id}",
    tag = SLOT_TAG,
    params(
        ("slot_id" = i32, Path, description = "Slot ID")
    ),
    request_body = AssignSlotDto,
    responses(
        (status = 200, description = "Slot assigned", body = SlotDto),
        (status = 400, description = "Invalid assignment", body = ErrorDto),
        (status = 403, description = "Participant is not an administrator", body = ErrorDto),
        (status = 404, description = "Slot or participant not found", body = ErrorDto),
        (status = 409, description = "Participant already seated or event deleted", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn assign_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot_id): Path<i32>,
    Json(payload): Json<AssignSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let assignee = SlotAssignee::from_dto(payload).ok_or_else(|| {
        RosterError::validation("user_id", "exactly one of user_id or username is required")
    })?;

    let roster_service = RosterService::new(&state.db);
    let slot = match assignee {
        SlotAssignee::Participant(user_id) => {
            roster_service
                .reassign_slot(&actor, slot_id, user_id)
                .await?
        }
        SlotAssignee::Guest(username) => {
            roster_service
                .assign_guest(&actor, slot_id, username)
                .await?
        }
    };

    Ok((StatusCode::OK, Json(slot.into_dto())))
}
