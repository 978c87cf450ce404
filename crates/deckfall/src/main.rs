//! Deckfall encounter simulator
//!
//! Runs one seeded monster-versus-adventurer combat and prints the AI's
//! chosen intent each turn. Useful for eyeballing tier behavior and for
//! replaying a combat from a seed.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use df_core::GameRng;
use df_core::ai::{AgentId, AiContext, EncounterAi, Personality, Tier};
use df_core::combat::CombatantView;
use df_core::pattern::Pattern;
use df_data::standard_catalog;

#[derive(Debug, Parser)]
#[command(name = "deckfall", about = "Deckfall encounter simulator")]
struct Args {
    /// RNG seed; the same seed replays the same combat
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Monster tier: Basic, Elite, MiniBoss, or Boss
    #[arg(long, default_value = "Boss")]
    tier: String,

    /// Monster personality: Balanced, Aggressive, Defensive, Strategic,
    /// or Chaotic
    #[arg(long, default_value = "Balanced")]
    personality: String,

    /// Species name for catalog lookup (try "hollow queen")
    #[arg(long, default_value = "hollow queen")]
    species: String,

    /// Stop after this many turns if nobody falls
    #[arg(long, default_value_t = 30)]
    max_turns: u32,
}

/// Mutable combat-side record for the toy resolver
struct Fighter {
    name: &'static str,
    hp: i32,
    hp_max: i32,
    defense: i32,
    statuses: u32,
}

impl Fighter {
    fn view(&self, name_override: &str) -> CombatantView {
        let mut view = CombatantView::new(name_override, self.hp, self.hp_max, self.defense);
        view.active_statuses = self.statuses;
        view
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let tier = Tier::from_name(&args.tier);
    let personality = args.personality.parse::<Personality>().unwrap_or_else(|_| {
        tracing::warn!(name = %args.personality, "unknown personality, using Balanced");
        Personality::Balanced
    });

    let catalog = standard_catalog();
    let mut rng = GameRng::new(args.seed);
    let mut encounter = EncounterAi::new();
    let monster_id = AgentId(1);
    encounter.on_combat_start(monster_id, &args.species, tier, personality);

    tracing::info!(seed = args.seed, %tier, %personality, species = %args.species, "combat begins");

    let mut monster = Fighter {
        name: "monster",
        hp: 120,
        hp_max: 120,
        defense: 2,
        statuses: 0,
    };
    let mut hero = Fighter {
        name: "adventurer",
        hp: 90,
        hp_max: 90,
        defense: 3,
        statuses: 0,
    };

    for turn in 1..=args.max_turns {
        // Monster decides and acts
        let me = monster.view(&args.species);
        let foe = hero.view(hero.name);
        let mut ctx = AiContext::new(&catalog, &mut rng);
        let Some(pattern) = encounter.decide_action(monster_id, &me, &foe, &mut ctx) else {
            tracing::info!(turn, "the monster hesitates");
            continue;
        };
        tracing::info!(turn, intent = %pattern.name, tags = ?pattern.tags, "monster intent");
        resolve(&pattern, &mut hero);
        monster.defense = 2 + pattern.defense_bonus;

        if hero.hp <= 0 {
            tracing::info!(turn, "the adventurer falls");
            break;
        }

        // Adventurer answers with a plain blow
        let old_hp = monster.hp;
        let swing = rng.dice(2, 6) as i32 + 4 - monster.defense.min(4);
        monster.hp -= swing.max(1);
        if let Some(agent) = encounter.agent_mut(monster_id) {
            agent.on_health_changed(old_hp, monster.hp, monster.hp_max);
        }
        tracing::info!(turn, damage = swing.max(1), monster_hp = monster.hp, "adventurer swings");

        if monster.hp <= 0 {
            tracing::info!(turn, "the monster is destroyed");
            break;
        }

        if hero.statuses > 0 && turn % 3 == 0 {
            hero.statuses -= 1;
        }
    }

    encounter.on_combat_end(monster_id);
    tracing::info!("combat over");
}

/// Apply a pattern's numbers to the target; deliberately simple
fn resolve(pattern: &Pattern, target: &mut Fighter) {
    let mut dealt = 0;
    if pattern.attack_bonus > 0 {
        let per_hit = if pattern.ignore_defense {
            pattern.attack_bonus
        } else {
            (pattern.attack_bonus - target.defense).max(1)
        };
        dealt = per_hit * pattern.attack_count as i32 + pattern.bonus_damage;
        target.hp -= dealt;
    }
    target.statuses += pattern.status_effects.len() as u32;

    if dealt > 0 {
        tracing::debug!(pattern = %pattern.name, dealt, target = target.name, "pattern resolved");
    }
}
