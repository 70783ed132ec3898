//! Shared Types

mod catalog;
mod tier;

pub use catalog::TierInfo;
pub use tier::Tier;
