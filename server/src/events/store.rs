//! Event Store
//!
//! Read-only access to the `events` table.

use std::future::Future;

use showcase_common::Tier;
use sqlx::PgPool;

use crate::db::{self, Event};

/// Read-only event source used by the access filter.
pub trait EventStore: Send + Sync {
    /// Events owned by any of `tiers`, ascending by `event_date`.
    fn events_in_tiers(&self, tiers: &[Tier])
        -> impl Future<Output = sqlx::Result<Vec<Event>>> + Send;

    /// Every event, ascending by tier rank then `event_date`.
    fn all_events(&self) -> impl Future<Output = sqlx::Result<Vec<Event>>> + Send;
}

/// `PostgreSQL`-backed event store.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl EventStore for PgEventStore {
    async fn events_in_tiers(&self, tiers: &[Tier]) -> sqlx::Result<Vec<Event>> {
        db::list_events_in_tiers(&self.pool, tiers).await
    }

    async fn all_events(&self) -> sqlx::Result<Vec<Event>> {
        db::list_all_events(&self.pool).await
    }
}
