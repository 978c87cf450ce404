//! Per-agent mutable decision state

use serde::{Deserialize, Serialize};

use crate::ai::personality::{BehaviorProfile, Personality};

/// Unique identifier for an agent within an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Mutable record owned by exactly one [`super::MonsterAgent`]
///
/// `phase`, `enraged`, and `opening_move_used` only ever move forward
/// within a combat; the lifecycle hooks create and destroy the whole
/// record rather than rewinding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Decisions taken so far; decision N sees turn_count == N
    pub turn_count: u32,

    /// Health-threshold stage, 0 = pre-transition
    pub phase: u32,

    pub enraged: bool,

    pub opening_move_used: bool,

    /// Numeric disposition; escalated in place by enrage
    pub profile: BehaviorProfile,

    /// Opponent hp seen last turn, for damage tracking
    pub last_opponent_hp: Option<i32>,

    /// Opponent lost hp since the previous decision (not yet decisional)
    pub opponent_damaged: bool,
}

impl AgentState {
    pub fn new(personality: Personality) -> Self {
        Self {
            turn_count: 0,
            phase: 0,
            enraged: false,
            opening_move_used: false,
            profile: BehaviorProfile::for_personality(personality),
            last_opponent_hp: None,
            opponent_damaged: false,
        }
    }

    /// Raise the phase; returns true when this is a new transition.
    /// Lower values are ignored so healing never rewinds a phase.
    pub fn enter_phase(&mut self, phase: u32) -> bool {
        if phase > self.phase {
            self.phase = phase;
            true
        } else {
            false
        }
    }

    /// One-way enrage; returns true only on the first trigger
    pub fn enrage(&mut self) -> bool {
        if self.enraged {
            return false;
        }
        self.enraged = true;
        self.profile.enrage();
        true
    }
}
