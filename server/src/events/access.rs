//! Access Filter
//!
//! Computes which events a requester may see from their tier. Data-access
//! failures are logged and degrade to an empty listing so views keep
//! rendering when the database is unavailable.

use std::collections::HashSet;

use showcase_common::Tier;
use tracing::error;
use uuid::Uuid;

use super::store::EventStore;
use super::types::EventCard;
use crate::db::Event;

/// Events visible to a holder of `tier`, soonest first.
///
/// Returns an empty list if the store fails.
#[tracing::instrument(skip(store))]
pub async fn events_for_tier<S: EventStore>(store: &S, tier: Tier) -> Vec<Event> {
    let accessible = tier.accessible_tiers();

    match store.events_in_tiers(&accessible).await {
        Ok(events) => events,
        Err(e) => {
            error!(tier = %tier, error = %e, "Error fetching events for tier");
            Vec::new()
        }
    }
}

/// Every event, by tier rank then soonest first.
///
/// Returns an empty list if the store fails.
#[tracing::instrument(skip(store))]
pub async fn all_events<S: EventStore>(store: &S) -> Vec<Event> {
    match store.all_events().await {
        Ok(events) => events,
        Err(e) => {
            error!(error = %e, "Error fetching all events");
            Vec::new()
        }
    }
}

/// Pair each of `all` with whether it appears in `accessible`.
pub fn mark_accessible(all: Vec<Event>, accessible: &[Event]) -> Vec<EventCard> {
    let unlocked: HashSet<Uuid> = accessible.iter().map(|event| event.id).collect();

    all.into_iter()
        .map(|event| {
            let accessible = unlocked.contains(&event.id);
            EventCard::new(event, accessible)
        })
        .collect()
}
