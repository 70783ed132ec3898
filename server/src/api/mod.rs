//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    auth::{self, jwt::TokenVerifier},
    events::{self, PgEventStore},
    membership::{self, HttpDirectory},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider token verifier
    pub verifier: Arc<TokenVerifier>,
    /// Event reads for the access filter
    pub events: PgEventStore,
    /// Identity provider user directory
    pub directory: HttpDirectory,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(db: PgPool, verifier: TokenVerifier, directory: HttpDirectory) -> Self {
        Self {
            events: PgEventStore::new(db),
            verifier: Arc::new(verifier),
            directory,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Protected routes that require authentication
    let protected_routes = Router::new()
        .nest("/api/events", events::router())
        .nest("/api", membership::router())
        .layer(from_fn_with_state(state.clone(), auth::require_auth));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Public tier catalog
        .route("/api/tiers", get(membership::handlers::list_tiers))
        // API documentation
        .route("/api/openapi.json", get(openapi_json))
        .merge(protected_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Package version
    version: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `OpenAPI` document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Showcase API", description = "Tier-gated event listings"),
    paths(
        events::handlers::list_events,
        events::handlers::list_accessible_events,
        membership::handlers::get_membership,
        membership::handlers::update_tier,
        membership::handlers::list_tiers,
    ),
    components(schemas(auth::ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "events", description = "Tier-gated event listings"),
        (name = "membership", description = "Membership tiers"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
