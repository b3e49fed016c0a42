//! Evaluation and game progression
//!
//! The pure evaluator, the player-input value object, and the session state
//! machine that tracks lives, history, and win/loss.

mod evaluate;
mod guess;
mod state;

pub use evaluate::{EvaluationSnapshot, evaluate};
pub use guess::{GuessState, LinkGuess};
pub use state::{GameState, GameStatus, HISTORY_LIMIT, STARTING_LIVES, SubmitError};
