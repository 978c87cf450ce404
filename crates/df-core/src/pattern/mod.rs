//! Combat patterns
//!
//! A pattern is one catalog-defined combat action: intent tags, numeric
//! bonuses, and optional status payloads. The engine treats patterns as
//! immutable values it may read but never edits.

mod catalog;
mod search;

pub use catalog::{MemoryCatalog, PatternCatalog, builtin_fallback, eligible_patterns};
pub use search::{CaseFoldMatcher, SubstringMatcher, TagMatcher, find_by_tags, find_strongest};

use serde::{Deserialize, Serialize};

use crate::combat::{StatusEffect, StatusKind};

/// Unique identifier for a pattern within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternId(pub u32);

/// A catalog-defined combat action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: PatternId,

    /// Display name shown by the intent UI
    pub name: String,

    /// Flavor text; participates in tag search alongside `tags`
    pub description: String,

    /// Free-text intent keywords ("attack", "curse", "entrance", ...)
    pub tags: Vec<String>,

    pub attack_bonus: i32,
    pub defense_bonus: i32,

    /// Flat damage added on top of the attack result
    pub bonus_damage: i32,

    pub status_effects: Vec<StatusEffect>,

    /// Attack resolves against 0 defense
    pub ignore_defense: bool,

    /// Number of hits the attack resolves as
    pub attack_count: u8,

    /// Resolver ordering hint; not used by decision logic
    pub priority: i8,
}

impl Pattern {
    /// Create a pattern with neutral numbers; chain the helpers below to
    /// fill it in
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PatternId(id),
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            attack_bonus: 0,
            defense_bonus: 0,
            bonus_damage: 0,
            status_effects: Vec::new(),
            ignore_defense: false,
            attack_count: 1,
            priority: 0,
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn tagged<const N: usize>(mut self, tags: [&str; N]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    pub fn attack(mut self, bonus: i32) -> Self {
        self.attack_bonus = bonus;
        self
    }

    pub fn defense(mut self, bonus: i32) -> Self {
        self.defense_bonus = bonus;
        self
    }

    pub fn bonus_damage(mut self, amount: i32) -> Self {
        self.bonus_damage = amount;
        self
    }

    pub fn status(mut self, kind: StatusKind, duration: u8, potency: i8) -> Self {
        self.status_effects
            .push(StatusEffect::new(kind, duration, potency));
        self
    }

    pub fn piercing(mut self) -> Self {
        self.ignore_defense = true;
        self
    }

    pub fn hits(mut self, count: u8) -> Self {
        self.attack_count = count;
        self
    }

    pub fn priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let p = Pattern::new(1, "Claw Swipe");
        assert_eq!(p.attack_count, 1);
        assert!(!p.ignore_defense);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Pattern::new(3, "Venom Dart")
            .tagged(["poison", "status"])
            .attack(1)
            .status(StatusKind::Poison, 3, 2);

        let json = serde_json::to_string(&p).unwrap();
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
