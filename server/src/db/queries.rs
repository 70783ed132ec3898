//! Database Queries
//!
//! Runtime queries (no compile-time `DATABASE_URL` required).
//!
//! All query functions include error context logging to aid debugging.

use showcase_common::Tier;
use sqlx::PgPool;
use tracing::error;

use super::models::{Event, NewEvent};

/// Log and return a database error with context.
macro_rules! db_error {
    ($query:expr) => {
        |e| {
            error!(query = $query, error = %e, "Database query failed");
            e
        }
    };
    ($query:expr, $($field:tt)*) => {
        |e| {
            error!(query = $query, $($field)*, error = %e, "Database query failed");
            e
        }
    };
}

// ============================================================================
// Event Queries
// ============================================================================

/// List events owned by any of `tiers`, soonest first.
pub async fn list_events_in_tiers(pool: &PgPool, tiers: &[Tier]) -> sqlx::Result<Vec<Event>> {
    if tiers.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, Event>(
        r"
        SELECT id, title, description, event_date, image_url, tier, created_at
        FROM events
        WHERE tier = ANY($1)
        ORDER BY event_date ASC, id ASC
        ",
    )
    .bind(tiers)
    .fetch_all(pool)
    .await
    .map_err(db_error!("list_events_in_tiers", tier_count = tiers.len()))
}

/// List every event by tier rank, then soonest first.
pub async fn list_all_events(pool: &PgPool) -> sqlx::Result<Vec<Event>> {
    sqlx::query_as::<_, Event>(
        r"
        SELECT id, title, description, event_date, image_url, tier, created_at
        FROM events
        ORDER BY tier ASC, event_date ASC, id ASC
        ",
    )
    .fetch_all(pool)
    .await
    .map_err(db_error!("list_all_events"))
}

/// Insert an event (administrative seeding).
pub async fn insert_event(pool: &PgPool, event: &NewEvent<'_>) -> sqlx::Result<Event> {
    sqlx::query_as::<_, Event>(
        r"
        INSERT INTO events (title, description, event_date, image_url, tier)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, event_date, image_url, tier, created_at
        ",
    )
    .bind(event.title)
    .bind(event.description)
    .bind(event.event_date)
    .bind(event.image_url)
    .bind(event.tier)
    .fetch_one(pool)
    .await
    .map_err(db_error!("insert_event", title = %event.title))
}
