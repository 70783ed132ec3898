//! Membership Error Types

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::directory::DirectoryError;

#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    /// Acting identity does not match the targeted user.
    #[error("Unauthorized")]
    Unauthorized,

    /// Requested value is not one of the four tiers.
    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    #[error("Identity provider error: {0}")]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for MembershipError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "You can only change your own tier",
            ),
            Self::InvalidTier(_) => (
                StatusCode::BAD_REQUEST,
                "invalid_tier",
                "Tier must be one of: free, silver, gold, platinum",
            ),
            Self::Directory(err) => {
                tracing::error!("Error updating user tier: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "update_failed",
                    "Failed to update tier",
                )
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": code, "message": message })),
        )
            .into_response()
    }
}
