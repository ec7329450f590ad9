use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        choice::{AddChoiceDto, ChoiceDto, UpdateChoiceDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::choice::{AddChoiceParams, UpdateChoiceParams},
        service::choice::ChoiceService,
        state::AppState,
    },
};

/// Tag for grouping module choice endpoints in OpenAPI documentation
pub static CHOICE_TAG: &str = "choice";

/// Declare a module the requesting participant would like to fly.
///
/// Choosing a module already chosen for the event updates that choice.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/choices",
    tag = CHOICE_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = AddChoiceDto,
    responses(
        (status = 201, description = "Choice recorded", body = ChoiceDto),
        (status = 400, description = "Invalid choice", body = ErrorDto),
        (status = 403, description = "Participant may not take part", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent change", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn add_choice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    Json(payload): Json<AddChoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = AddChoiceParams::from_dto(event_id, payload);
    let choice = ChoiceService::new(&state.db).add(&actor, params).await?;

    Ok((StatusCode::CREATED, Json(choice.into_dto())))
}

/// Change a module choice. Omitted fields keep their value.
///
/// # Access Control
/// - The participant who made the choice, or an administrator
#[utoipa::path(
    put,
    path = "/api/choices/{choice_id}",
    tag = CHOICE_TAG,
    params(
        ("choice_id" = i32, Path, description = "Choice ID")
    ),
    request_body = UpdateChoiceDto,
    responses(
        (status = 200, description = "Choice updated", body = ChoiceDto),
        (status = 400, description = "Invalid choice", body = ErrorDto),
        (status = 403, description = "Participant may not edit this choice", body = ErrorDto),
        (status = 404, description = "Choice not found", body = ErrorDto),
        (status = 409, description = "Event deleted or concurrent change", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_choice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(choice_id): Path<i32>,
    Json(payload): Json<UpdateChoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = UpdateChoiceParams::from_dto(choice_id, payload);
    let choice = ChoiceService::new(&state.db).update(&actor, params).await?;

    Ok((StatusCode::OK, Json(choice.into_dto())))
}

/// Withdraw a module choice.
///
/// # Access Control
/// - The participant who made the choice, or an administrator
#[utoipa::path(
    delete,
    path = "/api/choices/{choice_id}",
    tag = CHOICE_TAG,
    params(
        ("choice_id" = i32, Path, description = "Choice ID")
    ),
    responses(
        (status = 204, description = "Choice deleted"),
        (status = 403, description = "Participant may not delete this choice", body = ErrorDto),
        (status = 404, description = "Choice not found", body = ErrorDto),
        (status = 409, description = "Event deleted", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_choice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(choice_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    ChoiceService::new(&state.db)
        .delete(&actor, choice_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
