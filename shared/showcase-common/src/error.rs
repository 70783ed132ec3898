//! Common Error Types

use thiserror::Error;

/// Errors raised by the shared domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Value is not one of the four membership tiers.
    #[error("Invalid tier: {0:?}")]
    InvalidTier(String),
}

/// Result alias for common operations.
pub type Result<T> = std::result::Result<T, Error>;
