//! Membership tiers and progress between them.

use serde::{Deserialize, Serialize};

/// Membership tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    /// Entry tier.
    #[default]
    Green,
    /// Middle tier.
    Gold,
    /// Top tier.
    Platinum,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 3] = [Self::Green, Self::Gold, Self::Platinum];

    /// Minimum Star balance for the tier.
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Green => 0,
            Self::Gold => 300,
            Self::Platinum => 600,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }

    /// Perks members of the tier receive.
    #[must_use]
    pub const fn benefits(self) -> &'static [&'static str] {
        match self {
            Self::Green => &["Free birthday drink", "Free refill on brewed coffee"],
            Self::Gold => &[
                "All Green benefits",
                "Monthly Double Star Day",
                "Free drink every 150 stars",
            ],
            Self::Platinum => &[
                "All Gold benefits",
                "Free drink customizations",
                "Priority customer service",
            ],
        }
    }

    /// Highest tier whose threshold the balance reaches.
    #[must_use]
    pub fn for_points(points: u64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|tier| points >= tier.threshold())
            .unwrap_or_default()
    }

    /// Tier above this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Green => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Position of a Star balance between tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierProgress {
    /// Tier the balance reaches.
    pub current: Tier,
    /// Tier above `current`, if any.
    pub next: Option<Tier>,
    /// Percent of the way from `current` to `next`, in `0.0..=100.0`.
    pub percent: f64,
    /// Stars still needed to reach `next`.
    pub points_to_next: u64,
}

impl TierProgress {
    /// Progress of a Star balance.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_points(points: u64) -> Self {
        let current = Tier::for_points(points);
        let Some(next) = current.next() else {
            return Self {
                current,
                next: None,
                percent: 100.0,
                points_to_next: 0,
            };
        };

        let span = next.threshold() - current.threshold();
        let earned = points - current.threshold();
        let percent = (earned as f64 / span as f64 * 100.0).clamp(0.0, 100.0);

        Self {
            current,
            next: Some(next),
            percent,
            points_to_next: next.threshold() - points,
        }
    }
}
