//! Answer key dump
//!
//! Prints the full answer key for a puzzle. Useful for authors checking a
//! definition, and for anyone who has given up.

use crate::puzzle::PuzzleDefinition;
use colored::Colorize;

/// Print the complete answer key for a puzzle
pub fn print_answers(puzzle: &PuzzleDefinition) {
    println!("\n{}", "Answer key (spoilers!)".yellow().bold());

    for key in puzzle.true_links() {
        let Some(answer) = puzzle.answer(key) else {
            continue;
        };
        println!("\n  {}", puzzle.link_label(key).bold());
        println!("    words:        {}", answer.words().join(", "));
        println!("    descriptions: {}", answer.descriptions().join("; "));
    }

    let theme = puzzle.theme();
    println!("\n  {}", "Overall theme".bold());
    println!("    words:        {}", theme.words().join(", "));
    println!("    descriptions: {}", theme.descriptions().join("; "));

    println!("\n  {}", "Decoys".bold());
    println!("    {}\n", puzzle.decoys().join(", "));
}
