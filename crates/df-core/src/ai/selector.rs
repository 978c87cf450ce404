//! Intent selection bookkeeping
//!
//! The selector owns the per-agent turn-count table and the intent cache
//! the UI reads. Both are keyed by agent identity; entries must be
//! removed at combat end so they never outlive their encounter.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::ai::context::AiContext;
use crate::ai::state::{AgentId, AgentState};
use crate::ai::strategy;
use crate::ai::tier::Tier;
use crate::combat::CombatantView;
use crate::pattern::Pattern;

/// Turn accounting and intent caching for every agent in an encounter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentSelector {
    turn_counts: HashMap<AgentId, u32>,
    intent_cache: HashMap<AgentId, Pattern>,
}

impl IntentSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance and return the agent's turn counter
    ///
    /// Called at the top of the decision pipeline so every rule in this
    /// turn, including short-circuit checks, sees "this is turn N".
    pub fn begin_turn(&mut self, id: AgentId) -> u32 {
        let count = self.turn_counts.entry(id).or_insert(0);
        *count += 1;
        *count
    }

    /// Turns taken so far (0 before the first decision)
    pub fn turn_count(&self, id: AgentId) -> u32 {
        self.turn_counts.get(&id).copied().unwrap_or(0)
    }

    /// Run the tier strategy table over the candidate patterns
    ///
    /// An empty candidate list is the degraded terminal case: warn and
    /// return `None` (the combat loop skips the turn).
    pub fn select(
        &mut self,
        tier: Tier,
        state: &AgentState,
        me: &CombatantView,
        foe: &CombatantView,
        patterns: &[Pattern],
        ctx: &mut AiContext<'_>,
    ) -> Option<Pattern> {
        if patterns.is_empty() {
            tracing::warn!(%tier, agent = %me.name, "no available patterns, skipping turn");
            return None;
        }

        let picked = strategy::select_for_tier(tier, state, me, foe, patterns, ctx);

        if let Some(ref pattern) = picked {
            tracing::debug!(
                %tier,
                agent = %me.name,
                turn = state.turn_count,
                pattern = %pattern.name,
                "tier strategy selected pattern"
            );
        }

        picked
    }

    /// Record the agent's final decision for intent display
    pub fn cache_intent(&mut self, id: AgentId, pattern: Pattern) {
        self.intent_cache.insert(id, pattern);
    }

    /// Drop a stale intent (used when a decision yields nothing)
    pub fn clear_intent(&mut self, id: AgentId) {
        self.intent_cache.remove(&id);
    }

    /// Most recent decision, until the next call or cleanup
    pub fn cached_intent(&self, id: AgentId) -> Option<&Pattern> {
        self.intent_cache.get(&id)
    }

    /// Remove one agent's turn counter and cached intent
    pub fn cleanup_agent(&mut self, id: AgentId) {
        self.turn_counts.remove(&id);
        self.intent_cache.remove(&id);
    }

    /// Remove every agent's bookkeeping (encounter teardown)
    pub fn cleanup_all(&mut self) {
        self.turn_counts.clear();
        self.intent_cache.clear();
    }
}
