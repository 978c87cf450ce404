//! Per-call engine context
//!
//! Every decision call receives its collaborators explicitly: the pattern
//! catalog, the shared seeded RNG, and the tag matcher. There is no
//! global engine state, so tests and parallel hosts control everything a
//! decision can observe.

use crate::pattern::{PatternCatalog, SubstringMatcher, TagMatcher};
use crate::rng::GameRng;

static DEFAULT_MATCHER: SubstringMatcher = SubstringMatcher;

/// Borrowed collaborators for one decision call
pub struct AiContext<'a> {
    pub catalog: &'a dyn PatternCatalog,
    pub rng: &'a mut GameRng,
    pub matcher: &'a dyn TagMatcher,
}

impl<'a> AiContext<'a> {
    /// Context with the default case-sensitive substring matcher
    pub fn new(catalog: &'a dyn PatternCatalog, rng: &'a mut GameRng) -> Self {
        Self {
            catalog,
            rng,
            matcher: &DEFAULT_MATCHER,
        }
    }

    /// Context with a host-supplied matcher
    pub fn with_matcher(
        catalog: &'a dyn PatternCatalog,
        rng: &'a mut GameRng,
        matcher: &'a dyn TagMatcher,
    ) -> Self {
        Self {
            catalog,
            rng,
            matcher,
        }
    }
}
