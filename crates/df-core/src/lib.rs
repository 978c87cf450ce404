//! df-core: Monster AI decision engine for Deckfall
//!
//! This crate contains the turn-based decision logic that picks a combat
//! pattern for every non-player combatant: tiered strategy tables,
//! health-driven phase transitions, a one-way enrage escalation, and
//! personality post-processing. It is pure logic with no I/O so a fixed
//! RNG seed reproduces every decision of an encounter.
//!
//! Pattern storage, damage resolution, and intent rendering are host
//! concerns; the engine consumes a [`pattern::PatternCatalog`] and
//! per-turn [`combat::CombatantView`] snapshots, and produces patterns.

pub mod ai;
pub mod combat;
pub mod pattern;

mod error;
mod rng;

pub use error::AiError;
pub use rng::GameRng;
