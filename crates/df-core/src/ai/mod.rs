//! Monster AI decision engine
//!
//! Once per combat turn, [`EncounterAi::decide_action`] runs one agent
//! through special-condition checks (phase transition, opening move,
//! enrage), tier strategy dispatch, and personality post-processing, then
//! caches the chosen pattern for intent display.

mod agent;
mod context;
mod encounter;
mod personality;
mod selector;
mod state;
mod strategy;
mod tier;

pub use agent::MonsterAgent;
pub use context::AiContext;
pub use encounter::EncounterAi;
pub use personality::{BehaviorProfile, Personality, apply_personality};
pub use selector::IntentSelector;
pub use state::{AgentId, AgentState};
pub use tier::{Tier, TierTraits};
