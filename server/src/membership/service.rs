//! Membership Rules
//!
//! Tier resolution for requests and the self-service tier change rules.

use showcase_common::Tier;
use tracing::{info, warn};

use super::directory::{MemberProfile, MembershipDirectory};
use super::error::MembershipError;
use super::types::{MembershipStats, UpdateTierRequest};

/// Profile for `user_id`, or a free-tier placeholder if the directory fails.
pub async fn resolve_profile<D: MembershipDirectory>(directory: &D, user_id: &str) -> MemberProfile {
    match directory.fetch_profile(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Error fetching user, defaulting to free tier");
            MemberProfile {
                id: user_id.to_string(),
                first_name: None,
                tier: Tier::Free,
            }
        }
    }
}

/// Requester's current tier; free when unknown or unavailable.
pub async fn resolve_tier<D: MembershipDirectory>(directory: &D, user_id: &str) -> Tier {
    resolve_profile(directory, user_id).await.tier
}

/// Validate a tier change by `acting_user_id`.
///
/// Identity is checked before the requested value. Anything other than one
/// of the four lowercase tier names, including non-strings, is invalid.
pub fn authorize_tier_change(
    acting_user_id: &str,
    request: &UpdateTierRequest,
) -> Result<Tier, MembershipError> {
    if request.user_id.as_deref() != Some(acting_user_id) {
        return Err(MembershipError::Unauthorized);
    }

    request
        .tier
        .as_str()
        .and_then(|tier| tier.parse::<Tier>().ok())
        .ok_or_else(|| MembershipError::InvalidTier(request.requested_tier()))
}

/// Apply a validated tier change at the identity provider.
pub async fn change_tier<D: MembershipDirectory>(
    directory: &D,
    acting_user_id: &str,
    request: &UpdateTierRequest,
) -> Result<Tier, MembershipError> {
    let tier = match authorize_tier_change(acting_user_id, request) {
        Ok(tier) => tier,
        Err(e) => {
            warn!(
                user_id = %acting_user_id,
                target_user_id = ?request.user_id,
                requested = %request.requested_tier(),
                error = %e,
                "Rejected tier change"
            );
            return Err(e);
        }
    };

    directory.set_tier(acting_user_id, tier).await?;
    info!(user_id = %acting_user_id, tier = %tier, "Updated user tier");

    Ok(tier)
}

/// Event counts for a holder of `tier`.
pub fn membership_stats(tier: Tier, accessible: usize, total: usize) -> MembershipStats {
    MembershipStats {
        accessible_events: accessible,
        locked_events: total.saturating_sub(accessible),
        upgrades_available: tier.upgrades_available(),
    }
}
