//! Monster personalities
//!
//! A personality never picks the action; it post-processes the pattern
//! the tier strategy chose, nudging the agent toward its behavioral
//! archetype. It also seeds the numeric behavior profile that enrage
//! escalates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ai::AiContext;
use crate::combat::CombatantView;
use crate::pattern::{Pattern, find_by_tags};

/// Chance a Chaotic agent discards the chosen pattern for a random one
const CHAOTIC_SWAP_PERCENT: u32 = 20;

/// Behavioral archetype applied after tier selection
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
pub enum Personality {
    /// No post-processing
    #[default]
    Balanced = 0,

    /// Trades defensive picks for attacks while healthy
    Aggressive = 1,

    /// Trades attacks for protection once wounded
    Defensive = 2,

    /// Opens with ailments before committing to damage
    Strategic = 3,

    /// Occasionally ignores the strategy table entirely
    Chaotic = 4,
}

/// Numeric disposition derived from personality
///
/// Hosts may read these for difficulty tuning; enrage overwrites them
/// regardless of personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorProfile {
    /// Bias toward damage-dealing picks (-100 to 100)
    pub aggression: i8,

    /// Bias toward self-preservation (-100 to 100)
    pub caution: i8,
}

impl BehaviorProfile {
    /// Create the profile for a given personality
    pub fn for_personality(personality: Personality) -> Self {
        match personality {
            Personality::Balanced => Self {
                aggression: 0,
                caution: 0,
            },
            Personality::Aggressive => Self {
                aggression: 70,
                caution: -40,
            },
            Personality::Defensive => Self {
                aggression: -30,
                caution: 60,
            },
            Personality::Strategic => Self {
                aggression: 20,
                caution: 30,
            },
            Personality::Chaotic => Self {
                aggression: 10,
                caution: -10,
            },
        }
    }

    /// Enrage escalation: maximum aggression, minimum caution
    pub fn enrage(&mut self) {
        self.aggression = 100;
        self.caution = -100;
    }
}

/// Post-process a tier-selected pattern
///
/// Returns the input or a substitute from `candidates`; the input is
/// never mutated and every failed substitution keeps the original.
pub fn apply_personality(
    personality: Personality,
    chosen: Pattern,
    candidates: &[Pattern],
    me: &CombatantView,
    foe: &CombatantView,
    ctx: &mut AiContext<'_>,
) -> Pattern {
    let matcher = ctx.matcher;

    let substitute = match personality {
        Personality::Balanced => None,

        Personality::Aggressive => {
            if matcher.matches(&chosen, "defend") && me.health_ratio() > 0.20 {
                find_by_tags(matcher, candidates, &["attack", "strike"], ctx.rng)
            } else {
                None
            }
        }

        Personality::Defensive => {
            if me.health_ratio() < 0.50 && matcher.matches(&chosen, "attack") {
                find_by_tags(matcher, candidates, &["defend", "protect", "heal"], ctx.rng)
            } else {
                None
            }
        }

        Personality::Strategic => {
            if foe.active_statuses == 0 && matcher.matches(&chosen, "attack") {
                find_by_tags(
                    matcher,
                    candidates,
                    &["status", "curse", "poison", "seal"],
                    ctx.rng,
                )
            } else {
                None
            }
        }

        Personality::Chaotic => {
            if candidates.len() > 1 && ctx.rng.percent(CHAOTIC_SWAP_PERCENT) {
                let others: Vec<&Pattern> =
                    candidates.iter().filter(|p| p.id != chosen.id).collect();
                others
                    .get(ctx.rng.rn2(others.len() as u32) as usize)
                    .copied()
            } else {
                None
            }
        }
    };

    match substitute {
        Some(replacement) => {
            tracing::debug!(
                %personality,
                original = %chosen.name,
                replacement = %replacement.name,
                "personality substituted pattern"
            );
            replacement.clone()
        }
        None => chosen,
    }
}
