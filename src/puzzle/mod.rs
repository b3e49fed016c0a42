//! Puzzle definitions and the word bank
//!
//! The immutable answer key for a puzzle, load-time validation, the built-in
//! puzzle, and the shuffled word bank shown to the player.

mod bank;
mod builtin;
mod definition;

pub use bank::WordBank;
pub use builtin::builtin;
pub use definition::{
    DefinitionError, LinkAnswer, PuzzleDefinition, TRUE_LINK_COUNT, ThemeAnswer,
};
