//! Pattern catalog interface and the engine-side eligibility query
//!
//! The catalog is host-owned; the engine only needs stable, possibly-empty
//! query results. Whatever the catalog answers, [`eligible_patterns`]
//! guarantees the decision pipeline a non-empty candidate list so combat
//! can always proceed.

use hashbrown::HashMap;

use crate::ai::Tier;
use crate::pattern::Pattern;

/// Reserved ids for the hardcoded last-resort patterns
const FALLBACK_ATTACK_ID: u32 = u32::MAX - 1;
const FALLBACK_DEFEND_ID: u32 = u32::MAX;

/// Host-provided pattern storage
///
/// Implementations must return stable sequences: same query, same
/// contents, same order.
pub trait PatternCatalog {
    /// Patterns authored for one specific monster species
    fn patterns_for(&self, species: &str) -> Vec<Pattern>;

    /// Patterns shared by every monster of a tier
    fn patterns_for_tier(&self, tier: Tier) -> Vec<Pattern>;

    /// Every pattern in the catalog, in insertion order
    fn all(&self) -> Vec<Pattern>;
}

/// In-memory catalog keyed by species name and tier
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    library: Vec<Pattern>,
    by_species: HashMap<String, Vec<usize>>,
    by_tier: HashMap<Tier, Vec<usize>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern for one species
    pub fn add_species_pattern(&mut self, species: &str, pattern: Pattern) {
        let idx = self.store(pattern);
        self.by_species
            .entry(species.to_string())
            .or_default()
            .push(idx);
    }

    /// Register a pattern shared by a whole tier
    pub fn add_tier_pattern(&mut self, tier: Tier, pattern: Pattern) {
        let idx = self.store(pattern);
        self.by_tier.entry(tier).or_default().push(idx);
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    fn store(&mut self, pattern: Pattern) -> usize {
        self.library.push(pattern);
        self.library.len() - 1
    }

    fn gather(&self, indices: Option<&Vec<usize>>) -> Vec<Pattern> {
        indices
            .map(|ids| ids.iter().map(|&i| self.library[i].clone()).collect())
            .unwrap_or_default()
    }
}

impl PatternCatalog for MemoryCatalog {
    fn patterns_for(&self, species: &str) -> Vec<Pattern> {
        self.gather(self.by_species.get(species))
    }

    fn patterns_for_tier(&self, tier: Tier) -> Vec<Pattern> {
        self.gather(self.by_tier.get(&tier))
    }

    fn all(&self) -> Vec<Pattern> {
        self.library.clone()
    }
}

/// Minimal hardcoded pattern pair so a broken or empty catalog still
/// yields a playable turn
pub fn builtin_fallback() -> Vec<Pattern> {
    vec![
        Pattern::new(FALLBACK_ATTACK_ID, "Lunge")
            .tagged(["attack"])
            .attack(2),
        Pattern::new(FALLBACK_DEFEND_ID, "Brace")
            .tagged(["defend"])
            .defense(2),
    ]
}

/// Resolve the candidate list for one agent
///
/// Preference order: species-specific entries, then tier entries, then a
/// reduced generic subset (first 3 catalog-wide), then the builtin pair.
/// Each degradation step is logged; the result is never empty.
pub fn eligible_patterns(
    catalog: &dyn PatternCatalog,
    species: &str,
    tier: Tier,
) -> Vec<Pattern> {
    let specific = catalog.patterns_for(species);
    if !specific.is_empty() {
        return specific;
    }

    let tiered = catalog.patterns_for_tier(tier);
    if !tiered.is_empty() {
        return tiered;
    }

    let mut generic = catalog.all();
    if !generic.is_empty() {
        tracing::warn!(
            species,
            %tier,
            "no species or tier patterns; using reduced generic subset"
        );
        generic.truncate(3);
        return generic;
    }

    tracing::warn!(species, %tier, "catalog empty; using builtin fallback patterns");
    builtin_fallback()
}
