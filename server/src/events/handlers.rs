//! Event HTTP Handlers

use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::auth::AuthUser;
use crate::membership::resolve_tier;

use super::access::{all_events, events_for_tier, mark_accessible};
use super::types::{EventResponse, EventsPageResponse};

/// Events page: every event with a lock overlay for the requester's tier.
///
/// GET /api/events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, body = EventsPageResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
)]
#[tracing::instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<EventsPageResponse> {
    let tier = resolve_tier(&state.directory, &auth_user.id).await;

    let (accessible, all) = tokio::join!(
        events_for_tier(&state.events, tier),
        all_events(&state.events)
    );

    Json(EventsPageResponse::new(tier, mark_accessible(all, &accessible)))
}

/// Events the requester's tier unlocks, soonest first.
///
/// GET /api/events/accessible
#[utoipa::path(
    get,
    path = "/api/events/accessible",
    tag = "events",
    responses(
        (status = 200, body = Vec<EventResponse>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
)]
#[tracing::instrument(skip(state))]
pub async fn list_accessible_events(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<Vec<EventResponse>> {
    let tier = resolve_tier(&state.directory, &auth_user.id).await;
    let events = events_for_tier(&state.events, tier).await;

    Json(events.into_iter().map(EventResponse::from).collect())
}
