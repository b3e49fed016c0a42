//! How-to-play instructions

use colored::Colorize;

/// Print the full game instructions
pub fn print_rules() {
    println!("\n{}", "How to Play".bold());
    println!();
    println!("Five items are shown with the 10 possible links (similarities)");
    println!("between pairs of them. Only 5 links are real. Identify the real");
    println!("links using clue words from the word bank, describe each one,");
    println!("then name the overall theme connecting all five items.");
    println!();
    println!("{}", "Additional info:".bold());
    println!("  - Every item has at least 1 and at most 3 links.");
    println!("  - Each correct link has exactly 2 clue words.");
    println!("  - Some words in the bank are not used.");
    println!("  - Theme descriptions are open-ended.");
    println!();
    println!("{}", "Example:".bold());
    println!("  - Items: Solar Panel & Coffee");
    println!("  - Clue words: Caffeine, Energy");
    println!("  - Link: Provides Energy");
    println!();
    println!("You have 6 lives. Every submission that does not fully solve the");
    println!("puzzle costs one life; run out and the game is lost.\n");
}
