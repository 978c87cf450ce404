//! Pattern lookup: keyword tag search and strongest-pattern scoring
//!
//! Tag search is substring-based over name, description, and tags. That
//! matches the catalog content as authored (lowercase tag words); matching
//! is case-sensitive by default and deliberately not normalized, since
//! tier content may rely on exact casing. Hosts that want stricter
//! matching plug in their own [`TagMatcher`].

use crate::pattern::Pattern;
use crate::rng::GameRng;

/// Pluggable keyword-to-pattern matching capability
pub trait TagMatcher {
    /// Does any text field of `pattern` carry `keyword`?
    fn matches(&self, pattern: &Pattern, keyword: &str) -> bool;
}

/// Default matcher: case-sensitive substring over name, description, tags
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TagMatcher for SubstringMatcher {
    fn matches(&self, pattern: &Pattern, keyword: &str) -> bool {
        pattern.name.contains(keyword)
            || pattern.description.contains(keyword)
            || pattern.tags.iter().any(|t| t.contains(keyword))
    }
}

/// Case-insensitive variant for catalogs with mixed-case content
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldMatcher;

impl TagMatcher for CaseFoldMatcher {
    fn matches(&self, pattern: &Pattern, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        pattern.name.to_lowercase().contains(&keyword)
            || pattern.description.to_lowercase().contains(&keyword)
            || pattern.tags.iter().any(|t| t.to_lowercase().contains(&keyword))
    }
}

/// Collect every pattern matching any keyword and pick one uniformly at
/// random
///
/// Returns `None` only when nothing matches.
pub fn find_by_tags<'a>(
    matcher: &dyn TagMatcher,
    patterns: &'a [Pattern],
    keywords: &[&str],
    rng: &mut GameRng,
) -> Option<&'a Pattern> {
    let matches: Vec<&Pattern> = patterns
        .iter()
        .filter(|p| keywords.iter().any(|k| matcher.matches(p, k)))
        .collect();

    if matches.is_empty() {
        tracing::debug!(?keywords, "no pattern matched tag set");
        return None;
    }

    let idx = rng.rn2(matches.len() as u32) as usize;
    Some(matches[idx])
}

/// Power score used by the strongest-pattern lookup
fn power_score(pattern: &Pattern) -> i32 {
    pattern.attack_bonus + pattern.defense_bonus + 2 * pattern.status_effects.len() as i32
}

/// Find the highest-scoring pattern
///
/// With `attack_only`, patterns not carrying an "attack" keyword are
/// skipped. Comparison is strictly-greater, so the first pattern at the
/// maximum score wins ties; callers rely on that being stable.
pub fn find_strongest<'a>(
    matcher: &dyn TagMatcher,
    patterns: &'a [Pattern],
    attack_only: bool,
) -> Option<&'a Pattern> {
    let mut best: Option<&Pattern> = None;
    let mut best_score = i32::MIN;

    for pattern in patterns {
        if attack_only && !matcher.matches(pattern, "attack") {
            continue;
        }
        let score = power_score(pattern);
        if score > best_score {
            best_score = score;
            best = Some(pattern);
        }
    }

    best
}
