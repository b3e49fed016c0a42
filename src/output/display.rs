//! Display functions for the terminal adapter

use super::formatters::{lives_meter, snapshot_summary};
use crate::game::{EvaluationSnapshot, GameState, GameStatus, GuessState};
use crate::puzzle::{PuzzleDefinition, WordBank};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Render one input field, highlighted green when the latest snapshot marks
/// it correct
fn field(text: &str, correct: Option<bool>) -> String {
    let shown = if text.is_empty() { "_" } else { text };
    if correct == Some(true) {
        shown.green().bold().to_string()
    } else {
        shown.to_string()
    }
}

/// Print the candidate-link board with current input and, when available,
/// per-field correctness from the latest snapshot
pub fn print_board(
    puzzle: &PuzzleDefinition,
    guess: &GuessState,
    latest: Option<&EvaluationSnapshot>,
) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Candidate links".bold());
    println!("{}", "─".repeat(60).cyan());

    for (number, &key) in puzzle.candidates().iter().enumerate() {
        let entry = guess.link(key);
        let marker = if entry.no_link() {
            " [no link]".bright_black().to_string()
        } else {
            String::new()
        };
        println!("{:>2}. {}{}", number + 1, puzzle.link_label(key).bold(), marker);

        let words = latest.map(|snapshot| snapshot.link_words(key));
        println!(
            "    word 1: {}   word 2: {}",
            field(entry.word(0), words.map(|w| w[0])),
            field(entry.word(1), words.map(|w| w[1])),
        );
        println!(
            "    desc:   {}",
            field(
                entry.description(),
                latest.map(|snapshot| snapshot.link_description(key)),
            )
        );
    }
}

/// Print the theme inputs with correctness highlighting
pub fn print_theme(guess: &GuessState, latest: Option<&EvaluationSnapshot>) {
    println!("\n{}", "Overall theme".bold());

    let words = latest.map(EvaluationSnapshot::theme_words);
    println!(
        "    word 1: {}   word 2: {}",
        field(guess.theme_word(0), words.map(|w| w[0])),
        field(guess.theme_word(1), words.map(|w| w[1])),
    );
    println!(
        "    desc:   {}",
        field(
            guess.theme_description(),
            latest.map(EvaluationSnapshot::theme_description),
        )
    );
}

/// Print the word bank, striking through words already entered somewhere
pub fn print_bank(bank: &WordBank, used: &FxHashSet<String>) {
    println!("\n{}", "Word bank".bold());

    let rendered: Vec<String> = bank
        .words()
        .iter()
        .map(|word| {
            if used.contains(&word.to_lowercase()) {
                word.strikethrough().bright_black().to_string()
            } else {
                word.to_string()
            }
        })
        .collect();
    println!("  {}", rendered.join("  "));
}

/// Print the lives meter
pub fn print_lives(lives: usize) {
    println!("\nLives: {} ({lives} remaining)", lives_meter(lives).red());
}

/// Print the bounded submission history, newest first
pub fn print_history(puzzle: &PuzzleDefinition, game: &GameState) {
    if game.history().is_empty() {
        return;
    }

    println!("\n{}", "Progress (newest first)".bold());
    for (number, snapshot) in game.history().iter().enumerate() {
        println!("  {}. {}", number + 1, snapshot_summary(puzzle, snapshot));
    }
}

/// Print the endgame banner
pub fn print_endgame(status: GameStatus) {
    match status {
        GameStatus::Won => {
            println!("\n{}", "🎉  You win! Congratulations!  🎉".green().bold());
        }
        GameStatus::Lost => {
            println!(
                "\n{}",
                "💀  Game over! Better luck next time.  💀".red().bold()
            );
        }
        GameStatus::InProgress => {}
    }
}
