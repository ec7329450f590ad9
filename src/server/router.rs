use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{choice, event, flight, slot, vote},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rosterboard API", description = "Event roster and attendance engine"),
    tags(
        (name = "event", description = "Event store"),
        (name = "vote", description = "Attendance votes"),
        (name = "choice", description = "Module choices"),
        (name = "flight", description = "Flights"),
        (name = "slot", description = "Flight slots"),
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(event::list_events, event::create_event))
        .routes(routes!(event::list_admin_events))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::restore_event))
        .routes(routes!(event::copy_event))
        .routes(routes!(vote::cast_vote))
        .routes(routes!(choice::add_choice))
        .routes(routes!(choice::update_choice, choice::delete_choice))
        .routes(routes!(flight::define_flight))
        .routes(routes!(flight::delete_flight))
        .routes(routes!(slot::claim_slot))
        .routes(routes!(slot::release_slot))
        .routes(routes!(slot::assign_slot))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
