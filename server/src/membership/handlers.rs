//! Membership HTTP Handlers

use axum::extract::State;
use axum::Json;
use showcase_common::TierInfo;

use crate::api::AppState;
use crate::auth::AuthUser;
use crate::events::{all_events, events_for_tier};

use super::error::MembershipError;
use super::service::{change_tier, membership_stats, resolve_profile};
use super::types::{MembershipOverview, TierInfoResponse, UpdateTierRequest, UpdateTierResponse};

/// Change the requester's own tier.
///
/// POST /api/update-tier
#[utoipa::path(
    post,
    path = "/api/update-tier",
    tag = "membership",
    request_body = UpdateTierRequest,
    responses(
        (status = 200, body = UpdateTierResponse),
        (status = 400, description = "Tier is not one of the four membership tiers"),
        (status = 401, description = "Missing token or targeting another user"),
        (status = 500, description = "Identity provider update failed"),
    ),
    security(("bearer_auth" = [])),
)]
#[tracing::instrument(skip(state))]
pub async fn update_tier(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<UpdateTierRequest>,
) -> Result<Json<UpdateTierResponse>, MembershipError> {
    let tier = change_tier(&state.directory, &auth_user.id, &request).await?;

    Ok(Json(UpdateTierResponse {
        success: true,
        tier,
    }))
}

/// Membership dashboard for the requester.
///
/// GET /api/me/membership
#[utoipa::path(
    get,
    path = "/api/me/membership",
    tag = "membership",
    responses(
        (status = 200, body = MembershipOverview),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
)]
#[tracing::instrument(skip(state))]
pub async fn get_membership(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<MembershipOverview> {
    let profile = resolve_profile(&state.directory, &auth_user.id).await;
    let tier = profile.tier;

    let (accessible, all) = tokio::join!(
        events_for_tier(&state.events, tier),
        all_events(&state.events)
    );

    Json(MembershipOverview {
        user_id: profile.id.clone(),
        display_name: profile.display_name().to_string(),
        current: TierInfoResponse::from(tier.info()),
        stats: membership_stats(tier, accessible.len(), all.len()),
        catalog: list_catalog(),
    })
}

/// Tier catalog.
///
/// GET /api/tiers
#[utoipa::path(
    get,
    path = "/api/tiers",
    tag = "membership",
    responses((status = 200, body = Vec<TierInfoResponse>)),
)]
pub async fn list_tiers() -> Json<Vec<TierInfoResponse>> {
    Json(list_catalog())
}

fn list_catalog() -> Vec<TierInfoResponse> {
    TierInfo::catalog()
        .into_iter()
        .map(TierInfoResponse::from)
        .collect()
}
