//! Database Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use showcase_common::Tier;
use sqlx::FromRow;
use uuid::Uuid;

/// Showcase event.
///
/// Created by administrative action outside this service; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub image_url: String,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting an event.
#[derive(Debug, Clone)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub event_date: DateTime<Utc>,
    pub image_url: &'a str,
    pub tier: Tier,
}
