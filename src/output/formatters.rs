//! Formatting utilities for terminal output

use crate::game::{EvaluationSnapshot, STARTING_LIVES};
use crate::puzzle::{PuzzleDefinition, TRUE_LINK_COUNT};

/// Render lives as filled and empty hearts
#[must_use]
pub fn lives_meter(lives: usize) -> String {
    let filled = lives.min(STARTING_LIVES);
    format!("{}{}", "♥".repeat(filled), "♡".repeat(STARTING_LIVES - filled))
}

/// Mark for a single evaluated field
#[must_use]
pub const fn mark(correct: bool) -> &'static str {
    if correct { "✓" } else { "✗" }
}

/// One-line summary of a snapshot for the progress history
///
/// Counts complete true links, correct word slots across the true links,
/// and whether the theme was fully correct.
#[must_use]
pub fn snapshot_summary(puzzle: &PuzzleDefinition, snapshot: &EvaluationSnapshot) -> String {
    let complete = puzzle
        .true_links()
        .filter(|&key| snapshot.link_complete(key))
        .count();
    let words: usize = puzzle
        .true_links()
        .map(|key| {
            snapshot
                .link_words(key)
                .iter()
                .filter(|&&correct| correct)
                .count()
        })
        .sum();

    format!(
        "links {complete}/{TRUE_LINK_COUNT} • words {words}/{} • theme {}",
        2 * TRUE_LINK_COUNT,
        mark(snapshot.theme_complete())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GuessState, evaluate};
    use crate::puzzle::builtin;

    #[test]
    fn lives_meter_full() {
        assert_eq!(lives_meter(6), "♥♥♥♥♥♥");
    }

    #[test]
    fn lives_meter_partial() {
        assert_eq!(lives_meter(2), "♥♥♡♡♡♡");
    }

    #[test]
    fn lives_meter_empty() {
        assert_eq!(lives_meter(0), "♡♡♡♡♡♡");
    }

    #[test]
    fn lives_meter_clamps_overflow() {
        assert_eq!(lives_meter(9), "♥♥♥♥♥♥");
    }

    #[test]
    fn mark_symbols() {
        assert_eq!(mark(true), "✓");
        assert_eq!(mark(false), "✗");
    }

    #[test]
    fn summary_of_empty_submission() {
        let puzzle = builtin().unwrap();
        let snapshot = evaluate(&GuessState::new(), &puzzle);

        assert_eq!(
            snapshot_summary(&puzzle, &snapshot),
            "links 0/5 • words 0/10 • theme ✗"
        );
    }

    #[test]
    fn summary_counts_partial_progress() {
        let puzzle = builtin().unwrap();
        let mut guess = GuessState::new();

        let key = crate::core::LinkKey::new(0, 1).unwrap();
        guess.set_word(key, 0, "Braves");
        guess.set_word(key, 1, "Celtics");
        guess.set_description(key, "loves sports");

        let snapshot = evaluate(&guess, &puzzle);
        assert_eq!(
            snapshot_summary(&puzzle, &snapshot),
            "links 1/5 • words 2/10 • theme ✗"
        );
    }
}
