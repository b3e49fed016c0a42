//! Game progression state machine
//!
//! Tracks lives, the bounded submission history, and the terminal status.
//! The only transition is `submit`; once the game is won or lost, further
//! submissions are rejected without touching lives or history.

use super::{EvaluationSnapshot, GuessState, evaluate};
use crate::puzzle::PuzzleDefinition;
use std::fmt;

/// Lives at the start of a session
pub const STARTING_LIVES: usize = 6;

/// Most snapshots retained in the history, newest first
pub const HISTORY_LIMIT: usize = 6;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Error type for rejected submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The session already ended; nothing was evaluated or recorded.
    GameOver(GameStatus),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(status) => {
                write!(f, "game is already {status}; submission ignored")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// One game session: lives, history, and terminal status
#[derive(Debug, Clone)]
pub struct GameState {
    lives: usize,
    history: Vec<EvaluationSnapshot>,
    status: GameStatus,
}

impl GameState {
    /// A fresh session: full lives, empty history, in progress
    #[must_use]
    pub fn new() -> Self {
        Self {
            lives: STARTING_LIVES,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Evaluate a submission and advance the game
    ///
    /// A solving submission wins with lives unchanged. Anything else costs a
    /// life; at zero lives the game is lost. Returns the snapshot recorded
    /// for this submission.
    ///
    /// # Errors
    /// Returns `SubmitError::GameOver` when the game has already ended;
    /// lives and history are left untouched.
    pub fn submit(
        &mut self,
        guess: &GuessState,
        puzzle: &PuzzleDefinition,
    ) -> Result<&EvaluationSnapshot, SubmitError> {
        if self.is_over() {
            return Err(SubmitError::GameOver(self.status));
        }

        let snapshot = evaluate(guess, puzzle);
        let solved = snapshot.solves(puzzle);

        self.history.insert(0, snapshot);
        self.history.truncate(HISTORY_LIMIT);

        if solved {
            self.status = GameStatus::Won;
        } else {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.status = GameStatus::Lost;
            }
        }

        Ok(&self.history[0])
    }

    /// Remaining lives
    #[inline]
    #[must_use]
    pub const fn lives(&self) -> usize {
        self.lives
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Most recent snapshot, if any submission happened yet
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<&EvaluationSnapshot> {
        self.history.first()
    }

    /// Recorded snapshots, newest first, at most [`HISTORY_LIMIT`]
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[EvaluationSnapshot] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
