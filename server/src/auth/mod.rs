//! Authentication
//!
//! Verifies bearer tokens issued by the external identity provider. This
//! service never issues tokens itself.

mod error;
pub mod jwt;
mod middleware;

pub use error::{AuthError, AuthResult, ErrorResponse};
pub use middleware::{require_auth, AuthUser};
