//! Combat-facing data the engine reads each turn
//!
//! The combat resolver owns real combatant records; the AI engine only
//! sees per-turn snapshots and never mutates them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Status ailments a pattern can inflict
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum StatusKind {
    Poison = 0,
    Bleed = 1,
    Burn = 2,
    Curse = 3,
    Seal = 4,
    Stun = 5,
    Weaken = 6,
    Shield = 7,
    Regen = 8,
}

/// A status payload carried by a pattern
///
/// The engine only counts these when scoring; the combat resolver applies
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,

    /// Turns the effect persists once applied
    pub duration: u8,

    /// Strength of the per-turn tick or modifier
    pub potency: i8,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, duration: u8, potency: i8) -> Self {
        Self {
            kind,
            duration,
            potency,
        }
    }
}

/// Per-turn snapshot of one combatant, supplied by the combat loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    /// Display name, used only for log lines
    pub name: String,

    pub hp: i32,
    pub hp_max: i32,

    /// Current defense value (base + bonuses)
    pub defense: i32,

    /// Number of status effects currently active on this combatant
    pub active_statuses: u32,
}

impl CombatantView {
    pub fn new(name: impl Into<String>, hp: i32, hp_max: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            hp_max,
            defense,
            active_statuses: 0,
        }
    }

    pub fn with_statuses(mut self, active: u32) -> Self {
        self.active_statuses = active;
        self
    }

    /// Current health as a 0.0..=1.0 fraction of max
    pub fn health_ratio(&self) -> f32 {
        if self.hp_max <= 0 {
            return 1.0;
        }
        (self.hp as f32 / self.hp_max as f32).clamp(0.0, 1.0)
    }

    /// A snapshot is usable when the combatant can have health at all
    pub fn is_valid(&self) -> bool {
        self.hp_max > 0
    }
}
