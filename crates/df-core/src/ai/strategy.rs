//! Tier strategy tables
//!
//! One stateless decision tree per tier, evaluated top to bottom: the
//! first branch whose condition holds picks a tag set or a strongest
//! lookup. A branch whose lookup finds nothing degrades to the uniform
//! random fallback at the bottom of the table.

use crate::ai::context::AiContext;
use crate::ai::state::AgentState;
use crate::ai::tier::Tier;
use crate::combat::CombatantView;
use crate::pattern::{Pattern, find_by_tags, find_strongest};

/// Dispatch to the tier's decision tree
pub(crate) fn select_for_tier(
    tier: Tier,
    state: &AgentState,
    me: &CombatantView,
    foe: &CombatantView,
    patterns: &[Pattern],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    match tier {
        Tier::Basic => select_basic(me, patterns, ctx),
        Tier::Elite => select_elite(state, foe, patterns, ctx),
        Tier::MiniBoss => select_miniboss(state, me, patterns, ctx),
        Tier::Boss => select_boss(state, me, patterns, ctx),
    }
}

fn select_basic(
    me: &CombatantView,
    patterns: &[Pattern],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    if me.health_ratio() < 0.30 {
        if let Some(p) = try_tags(patterns, &["defend", "heal", "cure"], ctx) {
            return Some(p);
        }
    } else if ctx.rng.percent(70) {
        if let Some(p) = try_tags(patterns, &["attack", "strike", "damage"], ctx) {
            return Some(p);
        }
    }

    uniform(patterns, ctx)
}

fn select_elite(
    state: &AgentState,
    foe: &CombatantView,
    patterns: &[Pattern],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    if state.turn_count % 4 == 0 {
        if let Some(p) = try_tags(patterns, &["special", "buff", "status"], ctx) {
            return Some(p);
        }
    } else if foe.health_ratio() < 0.40 {
        if let Some(p) = strongest_attack(patterns, ctx) {
            return Some(p);
        }
    } else if foe.defense > 5 {
        if let Some(p) = try_tags(patterns, &["curse", "poison", "bleed", "seal"], ctx) {
            return Some(p);
        }
    } else {
        let roll = ctx.rng.rn2(100);
        let tags: &[&str] = if roll < 60 {
            &["attack", "strike"]
        } else if roll < 80 {
            &["defend", "protect"]
        } else {
            &["status", "curse", "poison"]
        };
        if let Some(p) = try_tags(patterns, tags, ctx) {
            return Some(p);
        }
    }

    uniform(patterns, ctx)
}

fn select_miniboss(
    state: &AgentState,
    me: &CombatantView,
    patterns: &[Pattern],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    if state.turn_count == 1 {
        if let Some(p) = try_tags(patterns, &["entrance", "opening", "special"], ctx) {
            return Some(p);
        }
    } else if state.turn_count % 3 == 0 {
        if let Some(p) = strongest_attack(patterns, ctx) {
            return Some(p);
        }
    } else {
        let ratio = me.health_ratio();
        let picked = if ratio < 0.30 {
            try_tags(patterns, &["defend", "heal", "protect"], ctx)
        } else if ratio < 0.60 {
            if ctx.rng.percent(50) {
                try_tags(patterns, &["attack"], ctx)
            } else {
                try_tags(patterns, &["status"], ctx)
            }
        } else {
            try_tags(patterns, &["attack", "strike"], ctx)
        };
        if let Some(p) = picked {
            return Some(p);
        }
    }

    uniform(patterns, ctx)
}

fn select_boss(
    state: &AgentState,
    me: &CombatantView,
    patterns: &[Pattern],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    // The entrance is expected on turn 1 but not guaranteed by content;
    // without one the boss drops straight into its phase logic.
    if state.turn_count == 1 {
        if let Some(p) = try_tags(patterns, &["entrance", "opening"], ctx) {
            return Some(p);
        }
    }

    let ratio = me.health_ratio();
    let picked = if ratio > 0.70 {
        if state.turn_count % 5 == 0 {
            try_tags(patterns, &["special", "buff"], ctx)
        } else if ctx.rng.percent(70) {
            try_tags(patterns, &["curse", "poison", "seal"], ctx)
        } else {
            try_tags(patterns, &["attack"], ctx)
        }
    } else if ratio >= 0.30 {
        if state.turn_count % 3 == 0 {
            strongest_attack(patterns, ctx)
        } else {
            let roll = ctx.rng.rn2(100);
            if roll < 60 {
                try_tags(patterns, &["attack", "strike"], ctx)
            } else if roll < 85 {
                try_tags(patterns, &["status", "curse"], ctx)
            } else {
                try_tags(patterns, &["defend", "protect"], ctx)
            }
        }
    } else if state.turn_count % 2 == 0 || ctx.rng.percent(80) {
        strongest_attack(patterns, ctx)
    } else {
        try_tags(patterns, &["special", "rage", "despair"], ctx)
    };

    if let Some(p) = picked {
        return Some(p);
    }

    uniform(patterns, ctx)
}

/// Tag lookup that reports the degradation when nothing matches
fn try_tags(
    patterns: &[Pattern],
    tags: &[&str],
    ctx: &mut AiContext<'_>,
) -> Option<Pattern> {
    match find_by_tags(ctx.matcher, patterns, tags, ctx.rng) {
        Some(p) => Some(p.clone()),
        None => {
            tracing::warn!(?tags, "tag lookup missed, degrading");
            None
        }
    }
}

/// Strongest attack-tagged pattern, reporting the degradation on a miss
fn strongest_attack(patterns: &[Pattern], ctx: &mut AiContext<'_>) -> Option<Pattern> {
    match find_strongest(ctx.matcher, patterns, true) {
        Some(p) => Some(p.clone()),
        None => {
            tracing::warn!("no attack-tagged pattern for strongest lookup, degrading");
            None
        }
    }
}

/// Bottom of every table: uniform random over the candidates
fn uniform(patterns: &[Pattern], ctx: &mut AiContext<'_>) -> Option<Pattern> {
    let picked = ctx.rng.choose(patterns).cloned();
    if picked.is_none() {
        tracing::warn!("no patterns available for uniform fallback");
    }
    picked
}
