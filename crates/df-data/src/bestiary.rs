//! Tier and species pattern sets
//!
//! Tag words are lowercase and match what the strategy tables search
//! for; descriptions stay free of tag words so substring search stays
//! tag-driven.

use df_core::ai::Tier;
use df_core::combat::StatusKind;
use df_core::pattern::{MemoryCatalog, Pattern};

fn basic_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(101, "Bite")
            .describe("a quick snap of the jaws")
            .tagged(["attack"])
            .attack(2),
        Pattern::new(102, "Claw Swipe")
            .describe("raking talons")
            .tagged(["attack", "strike"])
            .attack(3),
        Pattern::new(103, "Cower")
            .describe("curls up behind its forelimbs")
            .tagged(["defend"])
            .defense(3),
        Pattern::new(104, "Lick Wounds")
            .describe("tends to its hurts")
            .tagged(["heal"])
            .defense(1),
        Pattern::new(105, "Frenzied Gnashing")
            .describe("wild, artless biting")
            .tagged(["attack", "damage"])
            .attack(1)
            .hits(2),
    ]
}

fn elite_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(201, "Twin Slash")
            .describe("two crossing blade arcs")
            .tagged(["attack", "strike"])
            .attack(3)
            .hits(2),
        Pattern::new(202, "Crushing Blow")
            .describe("an overhead swing with full weight behind it")
            .tagged(["attack"])
            .attack(5)
            .bonus_damage(2),
        Pattern::new(203, "Shield Wall")
            .describe("plants its shield and braces")
            .tagged(["defend", "protect"])
            .defense(5),
        Pattern::new(204, "War Banner")
            .describe("raises a tattered standard")
            .tagged(["special", "buff"])
            .defense(2),
        Pattern::new(205, "Venom Dart")
            .describe("a coated needle from a hidden sheath")
            .tagged(["status", "poison"])
            .attack(1)
            .status(StatusKind::Poison, 3, 2),
        Pattern::new(206, "Hex of Thorns")
            .describe("a muttered malediction")
            .tagged(["curse", "status"])
            .status(StatusKind::Curse, 4, 1),
        Pattern::new(207, "Serrated Edge")
            .describe("a dragging cut that will not close")
            .tagged(["attack", "bleed"])
            .attack(2)
            .status(StatusKind::Bleed, 3, 2),
        Pattern::new(208, "Berserk Howl")
            .describe("a throat-tearing scream")
            .tagged(["rage", "fury"])
            .attack(4)
            .piercing(),
    ]
}

fn miniboss_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(301, "Horn Call")
            .describe("a braying note that shakes the walls")
            .tagged(["entrance", "opening", "special"])
            .defense(2),
        Pattern::new(302, "Shifting Stance")
            .describe("its whole bearing turns colder")
            .tagged(["phase", "transition", "change"])
            .defense(3),
        Pattern::new(303, "Rending Claws")
            .describe("long talons splay wide")
            .tagged(["attack", "strike"])
            .attack(4),
        Pattern::new(304, "Bulwark")
            .describe("hunkers down into living stone")
            .tagged(["defend", "protect"])
            .defense(6),
        Pattern::new(305, "Mend Flesh")
            .describe("torn hide knits itself")
            .tagged(["heal", "defend"])
            .defense(2),
        Pattern::new(306, "Plague Breath")
            .describe("a gout of grave-stench")
            .tagged(["status", "poison"])
            .attack(2)
            .status(StatusKind::Poison, 3, 2),
        Pattern::new(307, "Goring Rush")
            .describe("lowers its head and charges")
            .tagged(["attack"])
            .attack(5)
            .bonus_damage(3),
        Pattern::new(308, "Blood Froth")
            .describe("spittle flies from a working jaw")
            .tagged(["rage", "fury"])
            .attack(4)
            .hits(2),
    ]
}

fn boss_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(401, "Dread Overture")
            .describe("the torches gutter as it unfolds")
            .tagged(["entrance", "opening"])
            .defense(2),
        Pattern::new(402, "Veil of Ruin")
            .describe("its shape blurs and reforms, larger")
            .tagged(["phase", "transition", "change"])
            .defense(4),
        Pattern::new(403, "Creeping Rot")
            .describe("blackness spreads along the floor")
            .tagged(["curse", "poison"])
            .attack(1)
            .status(StatusKind::Poison, 4, 2),
        Pattern::new(404, "Soul Seal")
            .describe("an iron sigil closes in the air")
            .tagged(["seal", "curse"])
            .status(StatusKind::Seal, 2, 1)
            .status(StatusKind::Curse, 3, 1),
        Pattern::new(405, "Cataclysm")
            .describe("the ceiling answers its raised fist")
            .tagged(["attack", "strike"])
            .attack(7)
            .bonus_damage(4),
        Pattern::new(406, "Iron Aegis")
            .describe("plates of shadow lock together")
            .tagged(["defend", "protect"])
            .defense(7),
        Pattern::new(407, "Dark Benediction")
            .describe("it blesses itself in a dead tongue")
            .tagged(["special", "buff"])
            .defense(3)
            .status(StatusKind::Shield, 2, 2),
        Pattern::new(408, "Despair Unbound")
            .describe("hope simply leaves the room")
            .tagged(["special", "rage", "despair"])
            .attack(5)
            .piercing()
            .status(StatusKind::Weaken, 3, 2),
        Pattern::new(409, "Blood Frenzy")
            .describe("it stops caring what it breaks")
            .tagged(["rage", "fury"])
            .attack(6)
            .hits(2),
    ]
}

/// Species-specific set for the vanguard elite
fn marrow_knight_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(511, "Bonebrand Slash")
            .describe("a femur-sword, notched and humming")
            .tagged(["attack", "strike"])
            .attack(4),
        Pattern::new(512, "Grave Oath")
            .describe("it reaffirms the vow that keeps it standing")
            .tagged(["special", "buff"])
            .defense(3),
        Pattern::new(513, "Marrow Leech")
            .describe("hooked barbs drink deep")
            .tagged(["attack", "bleed"])
            .attack(2)
            .status(StatusKind::Bleed, 3, 2),
        Pattern::new(514, "Sepulcher Guard")
            .describe("it plants itself like a headstone")
            .tagged(["defend", "protect"])
            .defense(6),
        Pattern::new(515, "Last Oathfire")
            .describe("sockets flare with borrowed light")
            .tagged(["rage", "fury"])
            .attack(5)
            .piercing(),
    ]
}

/// Species-specific set for the final boss
fn hollow_queen_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(501, "Court of Silence")
            .describe("her retinue of shades bows low")
            .tagged(["entrance", "opening"])
            .defense(3),
        Pattern::new(502, "Second Crown")
            .describe("a new diadem of bone grows in")
            .tagged(["phase", "transition", "change"])
            .defense(5),
        Pattern::new(503, "Gravebloom")
            .describe("pale flowers burst from the stones")
            .tagged(["curse", "poison", "seal"])
            .attack(2)
            .status(StatusKind::Curse, 4, 2),
        Pattern::new(504, "Scepter Fall")
            .describe("her scepter comes down like a verdict")
            .tagged(["attack", "strike"])
            .attack(8)
            .bonus_damage(5),
        Pattern::new(505, "Pale Court")
            .describe("shades crowd between her and harm")
            .tagged(["defend", "protect"])
            .defense(8),
        Pattern::new(506, "Winter Largesse")
            .describe("she grants herself a cold gift")
            .tagged(["special", "buff"])
            .defense(4)
            .status(StatusKind::Regen, 3, 2),
        Pattern::new(507, "Queen's Despair")
            .describe("her grief is a weapon now")
            .tagged(["rage", "despair"])
            .attack(7)
            .piercing(),
    ]
}

/// Build the full stock catalog: every tier set plus named species
pub fn standard_catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();

    for pattern in basic_patterns() {
        catalog.add_tier_pattern(Tier::Basic, pattern);
    }
    for pattern in elite_patterns() {
        catalog.add_tier_pattern(Tier::Elite, pattern);
    }
    for pattern in miniboss_patterns() {
        catalog.add_tier_pattern(Tier::MiniBoss, pattern);
    }
    for pattern in boss_patterns() {
        catalog.add_tier_pattern(Tier::Boss, pattern);
    }
    for pattern in marrow_knight_patterns() {
        catalog.add_species_pattern("marrow knight", pattern);
    }
    for pattern in hollow_queen_patterns() {
        catalog.add_species_pattern("hollow queen", pattern);
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_core::GameRng;
    use df_core::pattern::{PatternCatalog, SubstringMatcher, eligible_patterns, find_by_tags};

    #[test]
    fn test_catalog_is_populated() {
        let catalog = standard_catalog();
        assert!(!catalog.is_empty());
        for tier in [Tier::Basic, Tier::Elite, Tier::MiniBoss, Tier::Boss] {
            assert!(!catalog.patterns_for_tier(tier).is_empty());
        }
        assert!(!catalog.patterns_for("hollow queen").is_empty());
        assert!(!catalog.patterns_for("marrow knight").is_empty());
    }

    #[test]
    fn test_pattern_ids_are_unique() {
        let catalog = standard_catalog();
        let mut ids: Vec<u32> = catalog.all().iter().map(|p| p.id.0).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_every_special_branch_has_content() {
        let catalog = standard_catalog();
        let mut rng = GameRng::new(1);

        // Tiers with opening moves, phase transitions, or enrage must be
        // able to find those patterns
        for tier in [Tier::MiniBoss, Tier::Boss] {
            let patterns = catalog.patterns_for_tier(tier);
            assert!(
                find_by_tags(&SubstringMatcher, &patterns, &["entrance", "opening"], &mut rng)
                    .is_some()
            );
            assert!(
                find_by_tags(
                    &SubstringMatcher,
                    &patterns,
                    &["phase", "transition", "change"],
                    &mut rng
                )
                .is_some()
            );
        }
        for tier in [Tier::Elite, Tier::MiniBoss, Tier::Boss] {
            let patterns = catalog.patterns_for_tier(tier);
            assert!(
                find_by_tags(&SubstringMatcher, &patterns, &["rage", "fury", "despair"], &mut rng)
                    .is_some()
            );
        }
    }

    #[test]
    fn test_species_set_overrides_tier_set() {
        let catalog = standard_catalog();
        let found = eligible_patterns(&catalog, "hollow queen", Tier::Boss);
        assert!(found.iter().all(|p| p.id.0 >= 500));
    }

    #[test]
    fn test_descriptions_carry_no_stray_tag_words() {
        let keywords = [
            "attack", "strike", "damage", "defend", "protect", "heal", "cure", "special",
            "buff", "status", "curse", "poison", "bleed", "seal", "entrance", "opening",
            "phase", "transition", "change", "rage", "fury", "despair",
        ];
        for pattern in standard_catalog().all() {
            for keyword in keywords {
                assert!(
                    !pattern.description.contains(keyword),
                    "`{}` description leaks tag word `{keyword}`",
                    pattern.name
                );
            }
        }
    }
}
