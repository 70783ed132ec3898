//! Showcase Common Library
//!
//! Membership tier hierarchy and the static tier catalog shared by the
//! showcase server and its tooling.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
