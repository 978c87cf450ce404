//! Encounter-scoped agent registry
//!
//! One `EncounterAi` value lives for one combat. The combat loop drives
//! it through the lifecycle hooks: agents enter on combat start, decide
//! once per turn, and are torn down with their cached intents on combat
//! end. Nothing here is global; two encounters never share state.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::ai::agent::MonsterAgent;
use crate::ai::context::AiContext;
use crate::ai::personality::Personality;
use crate::ai::selector::IntentSelector;
use crate::ai::state::AgentId;
use crate::ai::tier::Tier;
use crate::combat::CombatantView;
use crate::error::AiError;
use crate::pattern::Pattern;

/// All monster AI state for one combat encounter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterAi {
    agents: HashMap<AgentId, MonsterAgent>,
    selector: IntentSelector,
}

impl EncounterAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle hook: a monster enters combat
    ///
    /// Re-entering replaces any stale agent under the same id, resetting
    /// turn count, phase, enrage, and opening-move tracking.
    pub fn on_combat_start(
        &mut self,
        id: AgentId,
        species: &str,
        tier: Tier,
        personality: Personality,
    ) {
        tracing::debug!(?id, species, %tier, %personality, "agent entering combat");
        self.selector.cleanup_agent(id);
        self.agents
            .insert(id, MonsterAgent::new(id, species, tier, personality));
    }

    /// Lifecycle hook: a monster leaves combat (death or retreat)
    pub fn on_combat_end(&mut self, id: AgentId) {
        self.agents.remove(&id);
        self.selector.cleanup_agent(id);
    }

    /// Tear down every agent and cached intent (encounter over)
    pub fn cleanup_all(&mut self) {
        self.agents.clear();
        self.selector.cleanup_all();
    }

    /// Decide this turn's pattern for one agent
    pub fn decide_action(
        &mut self,
        id: AgentId,
        me: &CombatantView,
        foe: &CombatantView,
        ctx: &mut AiContext<'_>,
    ) -> Option<Pattern> {
        let Some(agent) = self.agents.get_mut(&id) else {
            tracing::warn!(err = %AiError::UnknownAgent(id), "refusing to decide");
            return None;
        };
        agent.decide_action(&mut self.selector, me, foe, ctx)
    }

    /// Read-only intent lookup for the UI
    pub fn cached_intent(&self, id: AgentId) -> Option<&Pattern> {
        self.selector.cached_intent(id)
    }

    pub fn agent(&self, id: AgentId) -> Option<&MonsterAgent> {
        self.agents.get(&id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut MonsterAgent> {
        self.agents.get_mut(&id)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}
