//! Membership Tier Hierarchy
//!
//! A fixed total order over the four membership levels. Each tier maps to an
//! integer rank (free = 0 .. platinum = 3); a requester may see any event
//! whose tier rank is at or below their own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Membership tier.
///
/// Variant order is rank order, so the derived `Ord` compares by privilege.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(
    feature = "sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "tier_type", rename_all = "lowercase")
)]
pub enum Tier {
    /// Community access.
    #[default]
    Free,
    /// Advanced workshops and masterclasses.
    Silver,
    /// Summits and premium workshops.
    Gold,
    /// Full access, including VIP forums.
    Platinum,
}

impl Tier {
    /// Every tier, in ascending rank order.
    pub const ALL: [Self; 4] = [Self::Free, Self::Silver, Self::Gold, Self::Platinum];

    /// Highest rank in the hierarchy.
    pub const MAX_RANK: u8 = 3;

    /// Integer rank of this tier.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Silver => 1,
            Self::Gold => 2,
            Self::Platinum => 3,
        }
    }

    /// Tier with the given rank, if any.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Free),
            1 => Some(Self::Silver),
            2 => Some(Self::Gold),
            3 => Some(Self::Platinum),
            _ => None,
        }
    }

    /// All tiers with rank <= `ceiling`, ascending.
    ///
    /// Always contains [`Tier::Free`]. Ceilings past the top rank yield every tier.
    #[must_use]
    pub fn up_to_rank(ceiling: u8) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|tier| tier.rank() <= ceiling)
            .collect()
    }

    /// Tiers whose events a holder of `self` may see.
    #[must_use]
    pub fn accessible_tiers(self) -> Vec<Self> {
        Self::up_to_rank(self.rank())
    }

    /// Whether a holder of `self` may see an event owned by `event_tier`.
    #[must_use]
    pub const fn can_access(self, event_tier: Self) -> bool {
        event_tier.rank() <= self.rank()
    }

    /// Next tier up, or `None` at the top.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Number of tiers above this one.
    #[must_use]
    pub const fn upgrades_available(self) -> u8 {
        Self::MAX_RANK - self.rank()
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Normalize a tier claim from the identity provider.
    ///
    /// Surrounding whitespace and ASCII case are ignored. Missing or unknown
    /// values fall back to [`Tier::Free`].
    #[must_use]
    pub fn from_claim(claim: Option<&str>) -> Self {
        claim
            .map(str::trim)
            .and_then(|value| {
                Self::ALL
                    .into_iter()
                    .find(|tier| tier.as_str().eq_ignore_ascii_case(value))
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the four exact lowercase names are accepted.
impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| Error::InvalidTier(s.to_string()))
    }
}
