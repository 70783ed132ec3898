//! Membership Request/Response Types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use showcase_common::{Tier, TierInfo};

// ============================================================================
// API Request Types
// ============================================================================

/// Tier change request.
///
/// Both fields are taken loosely so a missing user or a non-string tier
/// surfaces as `unauthorized` / `invalid_tier` instead of a body rejection.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateTierRequest {
    /// Must equal the authenticated user's ID.
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "gold")]
    pub tier: Value,
}

impl UpdateTierRequest {
    /// Requested tier as sent, for logs and error messages.
    pub fn requested_tier(&self) -> String {
        match &self.tier {
            Value::String(tier) => tier.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTierResponse {
    pub success: bool,
    #[schema(value_type = String, example = "gold")]
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TierInfoResponse {
    #[schema(value_type = String, example = "gold")]
    pub tier: Tier,
    pub rank: u8,
    pub label: String,
    pub price: String,
    pub description: String,
    pub access_summary: String,
    pub benefits: Vec<String>,
}

impl From<&TierInfo> for TierInfoResponse {
    fn from(info: &TierInfo) -> Self {
        Self {
            tier: info.tier,
            rank: info.tier.rank(),
            label: info.label.to_string(),
            price: info.price.to_string(),
            description: info.description.to_string(),
            access_summary: info.access_summary.to_string(),
            benefits: info.benefits.iter().map(|b| (*b).to_string()).collect(),
        }
    }
}

/// Event counts for the requester's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct MembershipStats {
    pub accessible_events: usize,
    pub locked_events: usize,
    pub upgrades_available: u8,
}

/// Membership dashboard.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MembershipOverview {
    pub user_id: String,
    pub display_name: String,
    pub current: TierInfoResponse,
    pub stats: MembershipStats,
    /// Every tier, ascending, for upgrade selection.
    pub catalog: Vec<TierInfoResponse>,
}
