//! Engine error types
//!
//! Decision entry points return `Option<Pattern>` (`None` = skip turn);
//! these errors describe why a decision could not be produced and are
//! logged at the call site rather than propagated to the combat loop.

use thiserror::Error;

use crate::ai::AgentId;

/// Reasons the engine refuses to produce a decision
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// A combatant snapshot is unusable (dead-on-arrival or malformed)
    #[error("invalid combatant `{name}`: non-positive max hp ({hp_max})")]
    InvalidCombatant { name: String, hp_max: i32 },

    /// Decision requested for an agent that never entered combat
    #[error("agent {0:?} has no combat state (missing on_combat_start?)")]
    UnknownAgent(AgentId),
}
