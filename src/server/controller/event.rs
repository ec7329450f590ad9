use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventType;
use sea_orm::ActiveEnum;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDetailDto, EventDto, EventSpecDto, PaginatedEventsDto},
    },
    server::{
        error::{roster::RosterError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::event::{EventFilter, EventSpecParams},
        service::{detail::EventDetailService, event::EventService},
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

fn default_per_page() -> u64 {
    20
}

/// Listing filters shared by the participant and administrator views.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventListQuery {
    /// Keep events ending at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Keep events starting at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Category code
    pub event_type: Option<i32>,
    pub sim_dcs: Option<bool>,
    pub sim_bms: Option<bool>,
    /// List deleted instead of active events (administrator view only)
    #[serde(default)]
    pub deleted: bool,
    /// Zero-based page number
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl EventListQuery {
    /// Converts the query to a filter, clamping `per_page` to `1..=max_page_size`.
    fn into_filter(self, max_page_size: u64) -> Result<EventFilter, RosterError> {
        let event_type = self
            .event_type
            .map(|code| {
                EventType::try_from_value(&code).map_err(|_| {
                    RosterError::validation("event_type", format!("unknown category {}", code))
                })
            })
            .transpose()?;

        Ok(EventFilter {
            from: self.from,
            to: self.to,
            search: self.search.filter(|s| !s.trim().is_empty()),
            event_type,
            sim_dcs: self.sim_dcs,
            sim_bms: self.sim_bms,
            deleted: Some(self.deleted),
            page: self.page,
            per_page: self.per_page.clamp(1, max_page_size.max(1)),
        })
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CopyQuery {
    /// Copy flights with fresh empty slots; defaults to the server configuration
    pub with_flights: Option<bool>,
}

/// List events.
///
/// Returns a page of active events matching the filters, ordered by start date.
/// Deleted events are never included in this view.
///
/// # Access Control
/// - Any known participant
///
/// # Returns
/// - `200 OK` - Page of events
/// - `400 Bad Request` - Unknown category code
/// - `401 Unauthorized` - No usable identity
/// - `503 Service Unavailable` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventListQuery),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let mut filter = query.into_filter(state.max_page_size)?;
    filter.deleted = Some(false);

    let events = EventService::new(&state.db).list(&actor, filter).await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// List events, administrator view.
///
/// Same filters as the participant listing plus the `deleted` toggle.
///
/// # Access Control
/// - `Admin` - Only administrators
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    params(EventListQuery),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 403, description = "Participant is not an administrator", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn list_admin_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let filter = query.into_filter(state.max_page_size)?;
    let events = EventService::new(&state.db).list(&actor, filter).await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Create an event owned by the requesting participant.
///
/// # Access Control
/// - `Member` - Members and administrators
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Invalid event data
/// - `403 Forbidden` - Participant is not a member
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventSpecDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 403, description = "Participant is not a member", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EventSpecDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member])
        .await?;

    let params = EventSpecParams::from_dto(payload);
    let event = EventService::new(&state.db).create(&actor, params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Get the complete view of one event.
///
/// Includes modules, votes with a per-intent summary, module choices and the flight
/// roster with resolved occupants. Deleted events are visible to administrators only.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDetailDto),
        (status = 401, description = "No usable identity", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let detail = EventDetailService::new(&state.db)
        .get_event_detail(&actor, event_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Replace the attributes and module references of an event.
///
/// # Access Control
/// - Event owner or administrator
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = EventSpecDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 403, description = "Participant may not edit this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event is deleted", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Json(payload): Json<EventSpecDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = EventSpecParams::from_dto(payload);
    let event = EventService::new(&state.db)
        .update(&actor, event_id, params)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Soft-delete an event. Deleting an already deleted event succeeds.
///
/// # Access Control
/// - Event owner or administrator
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Participant may not delete this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    EventService::new(&state.db)
        .soft_delete(&actor, event_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Restore a soft-deleted event. Restoring an active event returns it unchanged.
///
/// # Access Control
/// - `Admin` - Only administrators
#[utoipa::path(
    patch,
    path = "/api/admin/events/{event_id}/restore",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event restored", body = EventDto),
        (status = 403, description = "Participant is not an administrator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn restore_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .restore(&actor, event_id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Copy an event to a new one owned by the requesting participant.
///
/// Votes, choices and slot occupants are never copied. Flights are copied with empty
/// slots when `with_flights` is true, or when it is absent and the server is
/// configured to copy them.
///
/// # Access Control
/// - `Member` - Members and administrators
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/copy",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        CopyQuery
    ),
    responses(
        (status = 201, description = "Event copied", body = EventDto),
        (status = 403, description = "Participant is not a member", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event is deleted", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn copy_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Query(query): Query<CopyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Member])
        .await?;

    let copy_flights = query.with_flights.unwrap_or(state.clone_copies_flights);
    let event = EventService::new(&state.db)
        .clone_event(&actor, event_id, copy_flights)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}
