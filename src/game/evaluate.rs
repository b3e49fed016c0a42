//! Submission evaluation
//!
//! `evaluate` compares one `GuessState` against the answer key and produces
//! an immutable `EvaluationSnapshot`. It is a pure function: identical
//! inputs yield structurally identical snapshots and neither input is
//! mutated.

use crate::core::{LINK_COUNT, LinkKey, matcher};
use crate::game::GuessState;
use crate::puzzle::PuzzleDefinition;

/// Per-field correctness for one submission
///
/// Created once per submit and never modified afterwards; the bounded game
/// history holds snapshots for the progress display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSnapshot {
    link_words: [[bool; 2]; LINK_COUNT],
    link_descriptions: [bool; LINK_COUNT],
    theme_words: [bool; 2],
    theme_description: bool,
}

impl EvaluationSnapshot {
    /// Word-slot correctness for a candidate link
    #[inline]
    #[must_use]
    pub const fn link_words(&self, key: LinkKey) -> [bool; 2] {
        self.link_words[key.index()]
    }

    /// Description correctness for a candidate link
    #[inline]
    #[must_use]
    pub const fn link_description(&self, key: LinkKey) -> bool {
        self.link_descriptions[key.index()]
    }

    /// Both words and the description correct: the link renders as solved
    #[must_use]
    pub const fn link_complete(&self, key: LinkKey) -> bool {
        let words = self.link_words[key.index()];
        words[0] && words[1] && self.link_descriptions[key.index()]
    }

    /// Theme word-slot correctness
    #[inline]
    #[must_use]
    pub const fn theme_words(&self) -> [bool; 2] {
        self.theme_words
    }

    /// Theme description correctness
    #[inline]
    #[must_use]
    pub const fn theme_description(&self) -> bool {
        self.theme_description
    }

    /// Theme words and description all correct
    #[must_use]
    pub const fn theme_complete(&self) -> bool {
        self.theme_words[0] && self.theme_words[1] && self.theme_description
    }

    /// Whether this submission solves the whole puzzle: every true link
    /// complete and the theme complete
    #[must_use]
    pub fn solves(&self, puzzle: &PuzzleDefinition) -> bool {
        puzzle.true_links().all(|key| self.link_complete(key)) && self.theme_complete()
    }
}

/// Evaluate a submission against the answer key
///
/// Every candidate link is scored, not only the true ones; a candidate with
/// no answer always scores false, so text guessed into a non-link earns
/// nothing. Each word slot is checked independently against the link's
/// accepted-word set, so either accepted word may fill either slot. The
/// "no link" flag is not consulted, and empty fields are simply incorrect.
#[must_use]
pub fn evaluate(guess: &GuessState, puzzle: &PuzzleDefinition) -> EvaluationSnapshot {
    let mut link_words = [[false; 2]; LINK_COUNT];
    let mut link_descriptions = [false; LINK_COUNT];

    for &key in puzzle.candidates() {
        let Some(answer) = puzzle.answer(key) else {
            continue;
        };
        let entry = guess.link(key);
        let index = key.index();

        link_words[index] = [
            matcher::exact_match(entry.word(0), answer.words()),
            matcher::exact_match(entry.word(1), answer.words()),
        ];
        link_descriptions[index] = matcher::fuzzy_match(
            entry.description(),
            answer.descriptions(),
            matcher::FUZZY_THRESHOLD,
        );
    }

    let theme = puzzle.theme();
    let theme_words = [
        matcher::exact_match(guess.theme_word(0), theme.words()),
        matcher::exact_match(guess.theme_word(1), theme.words()),
    ];
    let theme_description = matcher::fuzzy_match(
        guess.theme_description(),
        theme.descriptions(),
        matcher::FUZZY_THRESHOLD,
    );

    EvaluationSnapshot {
        link_words,
        link_descriptions,
        theme_words,
        theme_description,
    }
}
