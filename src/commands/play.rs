//! Interactive terminal play mode
//!
//! A command-driven session that collects guesses, submits them to the
//! engine, and renders the results. All game logic lives in the engine; this
//! loop only reads input and prints state.

use crate::core::LinkKey;
use crate::game::{GameState, GuessState};
use crate::output::display;
use crate::puzzle::{PuzzleDefinition, WordBank};
use std::io::{self, Write};

/// Run an interactive session for one puzzle
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(puzzle: &PuzzleDefinition) -> Result<(), String> {
    banner();
    print_help();

    let mut guess = GuessState::new();
    let mut game = GameState::new();
    let mut bank = WordBank::new(puzzle);

    display::print_board(puzzle, &guess, None);
    display::print_theme(&guess, None);
    display::print_bank(&bank, &guess.used_words());
    display::print_lives(game.lives());

    loop {
        let Some(line) = read_line("threadweb")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "help" | "h" | "?" => print_help(),
            "rules" => super::rules::print_rules(),
            "board" => {
                display::print_board(puzzle, &guess, game.latest());
                display::print_theme(&guess, game.latest());
            }
            "bank" => display::print_bank(&bank, &guess.used_words()),
            "shuffle" => {
                bank.shuffle();
                display::print_bank(&bank, &guess.used_words());
            }
            "lives" => display::print_lives(game.lives()),
            "word" | "w" => {
                let parsed = parse_link(puzzle, &mut parts)
                    .and_then(|key| parse_slot(&mut parts).map(|slot| (key, slot)));
                match parsed {
                    Ok((key, slot)) => {
                        if guess.link(key).no_link() {
                            println!(
                                "{} is marked \"no link\"; run `none` on it first.",
                                puzzle.link_label(key)
                            );
                        } else {
                            guess.set_word(key, slot, rest(parts));
                        }
                    }
                    Err(message) => println!("{message}"),
                }
            }
            "desc" | "d" => match parse_link(puzzle, &mut parts) {
                Ok(key) => {
                    if guess.link(key).no_link() {
                        println!(
                            "{} is marked \"no link\"; run `none` on it first.",
                            puzzle.link_label(key)
                        );
                    } else {
                        guess.set_description(key, rest(parts));
                    }
                }
                Err(message) => println!("{message}"),
            },
            "none" | "n" => match parse_link(puzzle, &mut parts) {
                Ok(key) => {
                    let marked = !guess.link(key).no_link();
                    guess.set_no_link(key, marked);
                    println!(
                        "{} marked as {}.",
                        puzzle.link_label(key),
                        if marked { "no link" } else { "possible link" }
                    );
                }
                Err(message) => println!("{message}"),
            },
            "theme" | "t" => match parse_slot(&mut parts) {
                Ok(slot) => guess.set_theme_word(slot, rest(parts)),
                Err(message) => println!("{message}"),
            },
            "themedesc" | "td" => guess.set_theme_description(rest(parts)),
            "submit" | "s" => match game.submit(&guess, puzzle) {
                Ok(_) => {
                    display::print_board(puzzle, &guess, game.latest());
                    display::print_theme(&guess, game.latest());
                    display::print_lives(game.lives());

                    if game.is_over() {
                        display::print_endgame(game.status());
                        display::print_history(puzzle, &game);
                        println!();
                        return Ok(());
                    }
                    println!("Not solved yet. Keep going!");
                }
                Err(error) => println!("{error}"),
            },
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            _ => println!("Unknown command: {command} (try `help`)"),
        }
    }
}

fn banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Threadweb - Link Deduction                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Five friends, ten possible links, five real ones. Find the real");
    println!("links, give each two clue words and a description, then name the");
    println!("overall theme. Type `rules` for the full instructions.\n");
}

fn print_help() {
    println!("Commands:");
    println!("  word <link> <1|2> <text>   set a clue word for a link");
    println!("  desc <link> <text>         set a link description");
    println!("  none <link>                toggle \"no link\" for a pair");
    println!("  theme <1|2> <text>         set a theme word");
    println!("  themedesc <text>           set the theme description");
    println!("  board, bank, shuffle, lives, rules");
    println!("  submit                     check your answers (costs a life unless solved)");
    println!("  quit\n");
}

/// Parse a 1-based link number into its candidate key
fn parse_link<'a>(
    puzzle: &PuzzleDefinition,
    parts: &mut impl Iterator<Item = &'a str>,
) -> Result<LinkKey, String> {
    let token = parts
        .next()
        .ok_or_else(|| "Missing link number (1-10); see `board`.".to_string())?;
    let number: usize = token
        .parse()
        .map_err(|_| format!("Not a link number: {token}"))?;

    puzzle
        .candidates()
        .get(number.wrapping_sub(1))
        .copied()
        .ok_or_else(|| format!("Link number out of range: {number}"))
}

/// Parse a word slot given as 1 or 2
fn parse_slot<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<usize, String> {
    let token = parts
        .next()
        .ok_or_else(|| "Missing word slot (1 or 2).".to_string())?;
    match token {
        "1" => Ok(0),
        "2" => Ok(1),
        _ => Err(format!("Word slot must be 1 or 2, got {token}")),
    }
}

/// Remaining tokens joined back into free text
fn rest<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Prompt and read one line; `None` on end of input
fn read_line(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
