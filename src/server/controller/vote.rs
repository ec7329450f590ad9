use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vote::{CastVoteDto, VoteDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::vote::CastVoteParams,
        service::vote::VoteService, state::AppState,
    },
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Record the requesting participant's attendance intent.
///
/// Replaces any earlier vote of the same participant for the event.
///
/// # Access Control
/// - Participants eligible for the event (registration open, restrictions and
///   simulators satisfied); administrators bypass restrictions and simulators
///
/// # Returns
/// - `200 OK` - The stored vote
/// - `400 Bad Request` - Comment too long
/// - `403 Forbidden` - Participant may not take part
/// - `404 Not Found` - Event not found
/// - `409 Conflict` - Event is deleted or a concurrent vote won
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/vote",
    tag = VOTE_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = CastVoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = VoteDto),
        (status = 400, description = "Invalid vote", body = ErrorDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 403, description = "Participant may not take part", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent vote", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Json(payload): Json<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CastVoteParams::from_dto(event_id, payload);
    let vote = VoteService::new(&state.db).cast_vote(&actor, params).await?;

    Ok((StatusCode::OK, Json(vote.into_dto())))
}
