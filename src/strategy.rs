//! Goal word resolution.
//!
//! A [`GoalStrategy`] decides which words of the right length are still
//! possible answers. [`FixedGoal`] commits to one random word up front;
//! [`AdversarialGoal`] never commits, and after every guess keeps whichever
//! family of words is largest.

use crate::debug_log;
use crate::pattern::render;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

pub trait GoalStrategy {
    fn name(&self) -> &'static str;

    /// Picks the initial candidate set from every dictionary word of the goal length.
    fn establish(&mut self, pool: Vec<String>) -> BTreeSet<String>;

    /// Returns the candidates that survive a guess. `guesses` already contains
    /// the new letter.
    fn narrow(&mut self, candidates: BTreeSet<String>, _guesses: &BTreeSet<char>) -> BTreeSet<String> {
        candidates
    }
}

/// Normal rules: one uniformly random word, fixed for the whole game.
#[derive(Debug)]
pub struct FixedGoal<R> {
    rng: R,
}

impl<R: Rng> FixedGoal<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FixedGoal<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> GoalStrategy for FixedGoal<R> {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn establish(&mut self, pool: Vec<String>) -> BTreeSet<String> {
        pool.choose(&mut self.rng).cloned().into_iter().collect()
    }
}

/// Devious rules: keep every word that is still consistent with the board and
/// let the player's guesses split them into families.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdversarialGoal;

impl GoalStrategy for AdversarialGoal {
    fn name(&self) -> &'static str {
        "devious"
    }

    fn establish(&mut self, pool: Vec<String>) -> BTreeSet<String> {
        pool.into_iter().collect()
    }

    fn narrow(&mut self, candidates: BTreeSet<String>, guesses: &BTreeSet<char>) -> BTreeSet<String> {
        let families = word_families(candidates, guesses);
        debug_log!("narrow() - {} families", families.len());
        match largest_family(families) {
            Some((pattern, family)) => {
                debug_log!("narrow() - keeping '{}' ({} words)", pattern, family.len());
                family
            }
            None => BTreeSet::new(),
        }
    }
}

/// Groups `candidates` by the pattern they would display for `guesses`.
#[must_use]
pub fn word_families(
    candidates: BTreeSet<String>,
    guesses: &BTreeSet<char>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut families: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for word in candidates {
        families.entry(render(&word, guesses)).or_default().insert(word);
    }
    families
}

/// The family with the most members. Ties go to the lexicographically
/// smallest pattern.
#[must_use]
pub fn largest_family(
    families: BTreeMap<String, BTreeSet<String>>,
) -> Option<(String, BTreeSet<String>)> {
    let mut best: Option<(String, BTreeSet<String>)> = None;
    for (pattern, family) in families {
        match &best {
            Some((_, kept)) if kept.len() >= family.len() => {}
            _ => best = Some((pattern, family)),
        }
    }
    best
}
