//! Per-combatant decision pipeline
//!
//! A [`MonsterAgent`] runs the same strict order every turn: turn
//! bookkeeping, phase transition, opening move, enrage threshold, enrage
//! proc, tier strategy, personality post-processing, intent caching.
//! Special-condition checks that find no matching pattern fall through
//! to the next step instead of ending the turn.

use serde::{Deserialize, Serialize};

use crate::ai::context::AiContext;
use crate::ai::personality::{BehaviorProfile, Personality, apply_personality};
use crate::ai::selector::IntentSelector;
use crate::ai::state::{AgentId, AgentState};
use crate::ai::tier::Tier;
use crate::combat::CombatantView;
use crate::error::AiError;
use crate::pattern::{Pattern, eligible_patterns, find_by_tags};

/// Chance per turn that an enraged agent lashes out with a rage pattern
const ENRAGE_PROC_PERCENT: u32 = 30;

/// One monster's decision-making facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterAgent {
    pub id: AgentId,

    /// Catalog lookup key for species-specific patterns
    pub species: String,

    pub tier: Tier,

    personality: Personality,

    pub state: AgentState,
}

impl MonsterAgent {
    pub fn new(id: AgentId, species: impl Into<String>, tier: Tier, personality: Personality) -> Self {
        Self {
            id,
            species: species.into(),
            tier,
            personality,
            state: AgentState::new(personality),
        }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Swap the personality (difficulty tuning hook)
    ///
    /// The behavior profile is re-derived; an already-enraged agent keeps
    /// its escalated numbers.
    pub fn set_personality(&mut self, personality: Personality) {
        self.personality = personality;
        self.state.profile = BehaviorProfile::for_personality(personality);
        if self.state.enraged {
            self.state.profile.enrage();
        }
    }

    /// Synchronous health hook from the combat loop
    ///
    /// Lets the enrage threshold trigger on the hit itself rather than
    /// waiting for the agent's next decision.
    pub fn on_health_changed(&mut self, _old_hp: i32, new_hp: i32, hp_max: i32) {
        let Some(threshold) = self.tier.traits().enrage_threshold else {
            return;
        };
        if hp_max <= 0 || self.state.enraged {
            return;
        }
        let ratio = (new_hp as f32 / hp_max as f32).clamp(0.0, 1.0);
        if ratio <= threshold && self.state.enrage() {
            tracing::debug!(agent = ?self.id, species = %self.species, "enraged on damage");
        }
    }

    /// Synchronous turn hook from the combat loop
    pub fn on_turn_start(&mut self) {
        self.state.opponent_damaged = false;
    }

    /// Pick this turn's pattern; `None` means skip the turn
    pub fn decide_action(
        &mut self,
        selector: &mut IntentSelector,
        me: &CombatantView,
        foe: &CombatantView,
        ctx: &mut AiContext<'_>,
    ) -> Option<Pattern> {
        if !me.is_valid() || !foe.is_valid() {
            let bad = if me.is_valid() { foe } else { me };
            let err = AiError::InvalidCombatant {
                name: bad.name.clone(),
                hp_max: bad.hp_max,
            };
            tracing::warn!(agent = ?self.id, %err, "refusing to decide");
            selector.clear_intent(self.id);
            return None;
        }

        // 1. Turn bookkeeping and derived state
        let turn = selector.begin_turn(self.id);
        self.state.turn_count = turn;
        let my_ratio = me.health_ratio();
        self.state.opponent_damaged = self
            .state
            .last_opponent_hp
            .is_some_and(|prev| foe.hp < prev);
        self.state.last_opponent_hp = Some(foe.hp);

        let traits = self.tier.traits();
        let patterns = eligible_patterns(ctx.catalog, &self.species, self.tier);

        // 2. Phase transition
        if !traits.phase_thresholds.is_empty() {
            let reached = self.tier.phase_for_ratio(my_ratio);
            if self.state.enter_phase(reached) {
                tracing::debug!(
                    agent = ?self.id,
                    species = %self.species,
                    phase = self.state.phase,
                    "entered new phase"
                );
                if let Some(p) =
                    find_by_tags(ctx.matcher, &patterns, &["phase", "transition", "change"], ctx.rng)
                {
                    return self.finish(selector, p.clone());
                }
            }
        }

        // 3. Opening move
        if traits.opening_move && turn == 1 && !self.state.opening_move_used {
            self.state.opening_move_used = true;
            if let Some(p) = find_by_tags(ctx.matcher, &patterns, &["entrance", "opening"], ctx.rng)
            {
                return self.finish(selector, p.clone());
            }
        }

        // 4. Enrage threshold
        if let Some(threshold) = traits.enrage_threshold {
            if !self.state.enraged && my_ratio <= threshold && self.state.enrage() {
                tracing::debug!(agent = ?self.id, species = %self.species, "enraged");
            }
        }

        // 5. Enrage proc
        if self.state.enraged && ctx.rng.percent(ENRAGE_PROC_PERCENT) {
            if let Some(p) = find_by_tags(ctx.matcher, &patterns, &["rage", "fury", "despair"], ctx.rng)
            {
                return self.finish(selector, p.clone());
            }
        }

        // 6. Tier strategy
        let Some(selected) = selector.select(self.tier, &self.state, me, foe, &patterns, ctx)
        else {
            selector.clear_intent(self.id);
            return None;
        };

        // 7. Personality post-processing
        let modified = apply_personality(self.personality, selected, &patterns, me, foe, ctx);

        // 8. Cache and return
        self.finish(selector, modified)
    }

    fn finish(&self, selector: &mut IntentSelector, pattern: Pattern) -> Option<Pattern> {
        selector.cache_intent(self.id, pattern.clone());
        Some(pattern)
    }
}
