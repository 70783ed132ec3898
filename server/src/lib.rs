//! Showcase Server
//!
//! Tier-gated event showcase backend. Requesters authenticate with an external
//! identity provider; their membership tier decides which events unlock.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod events;
pub mod membership;
pub mod observability;
