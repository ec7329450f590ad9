use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{DefineFlightDto, FlightDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::flight::DefineFlightParams,
        service::roster::RosterService, state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Define a flight with a fixed number of empty slots.
///
/// # Access Control
/// - Event owner or administrator
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/flights",
    tag = FLIGHT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = DefineFlightDto,
    responses(
        (status = 201, description = "Flight defined", body = FlightDto),
        (status = 400, description = "Invalid flight", body = ErrorDto),
        (status = 403, description = "Participant may not edit this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent roster change", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn define_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Json(payload): Json<DefineFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = DefineFlightParams::from_dto(event_id, payload);
    let flight = RosterService::new(&state.db)
        .define_flight(&actor, params)
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Delete a flight, releasing every occupant.
///
/// # Access Control
/// - Event owner or administrator
#[utoipa::path(
    delete,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 403, description = "Participant may not edit this event", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent roster change", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    RosterService::new(&state.db)
        .delete_flight(&actor, flight_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
