//! Tier Catalog
//!
//! Static presentation data for each membership tier.

use super::tier::Tier;

/// Display information for a membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    /// Tier this entry describes.
    pub tier: Tier,
    /// Capitalized name (e.g. "Gold").
    pub label: &'static str,
    /// Price label.
    pub price: &'static str,
    /// Short pitch.
    pub description: &'static str,
    /// One-line summary of which events the tier unlocks.
    pub access_summary: &'static str,
    /// Benefits included with the tier.
    pub benefits: &'static [&'static str],
}

const FREE: TierInfo = TierInfo {
    tier: Tier::Free,
    label: "Free",
    price: "$0",
    description: "Perfect for getting started",
    access_summary: "Access to community events and introductory workshops",
    benefits: &[
        "Access to community events",
        "Basic workshops and meetups",
        "Email support",
        "Community forum access",
    ],
};

const SILVER: TierInfo = TierInfo {
    tier: Tier::Silver,
    label: "Silver",
    price: "$29/mo",
    description: "Great for regular attendees",
    access_summary: "Access to Free events plus advanced workshops and masterclasses",
    benefits: &[
        "All Free tier benefits",
        "Advanced workshops and masterclasses",
        "Priority email support",
        "Monthly expert Q&A sessions",
        "Recording access for 30 days",
    ],
};

const GOLD: TierInfo = TierInfo {
    tier: Tier::Gold,
    label: "Gold",
    price: "$79/mo",
    description: "Ideal for professionals",
    access_summary: "Access to Free, Silver events plus exclusive summits and premium workshops",
    benefits: &[
        "All Silver tier benefits",
        "Exclusive summits and conferences",
        "Premium workshops with industry leaders",
        "Direct support chat",
        "Lifetime recording access",
        "Networking events",
    ],
};

const PLATINUM: TierInfo = TierInfo {
    tier: Tier::Platinum,
    label: "Platinum",
    price: "$199/mo",
    description: "Ultimate VIP experience",
    access_summary: "Full access to all events including VIP forums and executive gatherings",
    benefits: &[
        "All Gold tier benefits",
        "VIP executive forums",
        "One-on-one mentorship sessions",
        "Early access to all events",
        "Private networking dinners",
        "Concierge support",
    ],
};

impl Tier {
    /// Catalog entry for this tier.
    #[must_use]
    pub const fn info(self) -> &'static TierInfo {
        match self {
            Self::Free => &FREE,
            Self::Silver => &SILVER,
            Self::Gold => &GOLD,
            Self::Platinum => &PLATINUM,
        }
    }
}

impl TierInfo {
    /// Every catalog entry, in ascending rank order.
    #[must_use]
    pub fn catalog() -> [&'static Self; 4] {
        Tier::ALL.map(Tier::info)
    }
}
