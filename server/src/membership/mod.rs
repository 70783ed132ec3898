//! Membership
//!
//! Member tiers as recorded by the identity provider: resolution for
//! requests, self-service tier changes, and the tier catalog.

pub mod directory;
pub mod error;
pub mod handlers;
pub mod service;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::api::AppState;

pub use directory::{DirectoryError, HttpDirectory, MemberProfile, MembershipDirectory};
pub use error::MembershipError;
pub use service::{resolve_profile, resolve_tier};

/// Authenticated membership routes, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me/membership", get(handlers::get_membership))
        .route("/update-tier", post(handlers::update_tier))
}
