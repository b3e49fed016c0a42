//! Word bank derivation and shuffling
//!
//! The bank is the deduplicated union of every accepted link word, the theme
//! words, and the decoys. Its ordering carries no information: it is
//! shuffled when built and can be reshuffled at any time without affecting
//! correctness.

use super::PuzzleDefinition;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// The shuffled pool of candidate words shown to the player
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a freshly shuffled bank for a puzzle
    #[must_use]
    pub fn new(puzzle: &PuzzleDefinition) -> Self {
        let mut bank = Self {
            words: derive(puzzle),
        };
        bank.shuffle();
        bank
    }

    /// Current bank ordering
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Re-randomize the bank ordering
    ///
    /// A pure permutation: no word is added or removed.
    pub fn shuffle(&mut self) {
        self.words.shuffle(&mut rand::rng());
    }
}

/// Deduplicated union of link words, theme words, and decoys, first
/// occurrence kept
fn derive(puzzle: &PuzzleDefinition) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    let sources = puzzle
        .true_links()
        .filter_map(|key| puzzle.answer(key))
        .flat_map(|answer| answer.words().iter())
        .chain(puzzle.theme().words().iter())
        .chain(puzzle.decoys().iter());

    for word in sources {
        if seen.insert(word.clone()) {
            words.push(word.clone());
        }
    }

    words
}
