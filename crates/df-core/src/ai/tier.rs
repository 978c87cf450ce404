//! Combatant tiers and their fixed behavior traits

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Combat-strength classification; immutable for a combatant's lifetime
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[repr(u8)]
pub enum Tier {
    #[default]
    Basic = 0,
    Elite = 1,
    MiniBoss = 2,
    Boss = 3,
}

/// Fixed per-tier behavior switches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierTraits {
    /// Health ratios that open a new phase when crossed, highest first
    pub phase_thresholds: &'static [f32],

    /// Tier announces itself with an entrance pattern on turn 1
    pub opening_move: bool,

    /// Health ratio at or below which the tier enrages
    pub enrage_threshold: Option<f32>,
}

impl Tier {
    pub fn traits(self) -> TierTraits {
        match self {
            Tier::Basic => TierTraits {
                phase_thresholds: &[],
                opening_move: false,
                enrage_threshold: None,
            },
            Tier::Elite => TierTraits {
                phase_thresholds: &[],
                opening_move: false,
                enrage_threshold: Some(0.25),
            },
            Tier::MiniBoss => TierTraits {
                phase_thresholds: &[0.50],
                opening_move: true,
                enrage_threshold: Some(0.20),
            },
            Tier::Boss => TierTraits {
                phase_thresholds: &[0.70, 0.30],
                opening_move: true,
                enrage_threshold: Some(0.25),
            },
        }
    }

    /// Parse a tier from content data; unrecognized names behave as Basic
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "unknown tier name, treating as Basic");
            Tier::Basic
        })
    }

    /// Phase implied by a health ratio: how many thresholds it has crossed
    pub fn phase_for_ratio(self, ratio: f32) -> u32 {
        self.traits()
            .phase_thresholds
            .iter()
            .filter(|&&threshold| ratio <= threshold)
            .count() as u32
    }
}
