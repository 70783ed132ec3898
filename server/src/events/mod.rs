//! Tier-Gated Events
//!
//! Event listings filtered by the requester's membership tier.

pub mod access;
pub mod handlers;
pub mod store;
pub mod types;

use axum::routing::get;
use axum::Router;

use crate::api::AppState;

pub use access::{all_events, events_for_tier, mark_accessible};
pub use store::{EventStore, PgEventStore};

/// Create event routes.
///
/// Mounted at `/api/events` in the main router (auth required).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_events))
        .route("/accessible", get(handlers::list_accessible_events))
}
