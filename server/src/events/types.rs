//! Event Response Types

use chrono::{DateTime, Utc};
use serde::Serialize;
use showcase_common::{Tier, TierInfo};
use uuid::Uuid;

use crate::db::Event;

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub image_url: String,
    #[schema(value_type = String, example = "gold")]
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            image_url: event.image_url,
            tier: event.tier,
            created_at: event.created_at,
        }
    }
}

/// An event with its lock state for the requester.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EventCard {
    #[serde(flatten)]
    pub event: EventResponse,
    /// False when the event's tier is above the requester's.
    pub accessible: bool,
}

impl EventCard {
    #[must_use]
    pub fn new(event: Event, accessible: bool) -> Self {
        Self {
            event: event.into(),
            accessible,
        }
    }
}

/// Events page: every event, marked accessible or locked.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventsPageResponse {
    #[schema(value_type = String, example = "silver")]
    pub tier: Tier,
    /// Capitalized tier name.
    pub tier_label: String,
    /// What the requester's tier unlocks.
    pub access_summary: String,
    pub events: Vec<EventCard>,
    /// True unless the requester already holds the top tier.
    pub upgrade_available: bool,
}

impl EventsPageResponse {
    #[must_use]
    pub fn new(tier: Tier, events: Vec<EventCard>) -> Self {
        let info: &TierInfo = tier.info();
        Self {
            tier,
            tier_label: info.label.to_string(),
            access_summary: info.access_summary.to_string(),
            events,
            upgrade_available: tier.next().is_some(),
        }
    }
}
