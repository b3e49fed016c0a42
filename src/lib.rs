//! Threadweb Puzzle Engine
//!
//! Evaluation and game-progression engine for a link-deduction puzzle: five
//! entities, ten candidate pairwise links, five real ones. Clue words are
//! checked exactly (case-insensitive); free-text descriptions are checked
//! against the answer key with a bigram-similarity threshold. A session has
//! six lives and keeps the six most recent submission snapshots.
//!
//! # Quick Start
//!
//! ```rust
//! use threadweb::game::{GameState, GuessState};
//! use threadweb::puzzle;
//!
//! let puzzle = puzzle::builtin().unwrap();
//! let guess = GuessState::new();
//! let mut game = GameState::new();
//!
//! // An empty submission is simply wrong: it costs a life.
//! game.submit(&guess, &puzzle).unwrap();
//! assert_eq!(game.lives(), 5);
//! ```

// Core domain types
pub mod core;

// Puzzle definitions and the word bank
pub mod puzzle;

// Evaluation and game progression
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
