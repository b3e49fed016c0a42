//! Player input state
//!
//! `GuessState` is the single mutable value the presentation adapter edits
//! as the player types: two words, a description, and a "no link" flag per
//! candidate pair, plus the theme fields. The engine only ever reads it;
//! evaluation never writes back.

use crate::core::{LINK_COUNT, LinkKey};
use rustc_hash::FxHashSet;

/// Free-text input for one candidate link
#[derive(Debug, Clone, Default)]
pub struct LinkGuess {
    words: [String; 2],
    description: String,
    no_link: bool,
}

impl LinkGuess {
    /// The two entered clue words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; 2] {
        &self.words
    }

    /// The entered word in `slot` (0 or 1), empty string for an out-of-range
    /// slot
    #[inline]
    #[must_use]
    pub fn word(&self, slot: usize) -> &str {
        self.words.get(slot).map_or("", String::as_str)
    }

    /// The entered description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The "no link here" mark. A display affordance only: evaluation never
    /// consults it and it grants no correctness.
    #[inline]
    #[must_use]
    pub const fn no_link(&self) -> bool {
        self.no_link
    }
}

/// All current player input for one session
#[derive(Debug, Clone, Default)]
pub struct GuessState {
    links: [LinkGuess; LINK_COUNT],
    theme_words: [String; 2],
    theme_description: String,
}

impl GuessState {
    /// Fresh empty input for every candidate link and the theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for one candidate link
    #[inline]
    #[must_use]
    pub fn link(&self, key: LinkKey) -> &LinkGuess {
        &self.links[key.index()]
    }

    /// Set the clue word in `slot` (0 or 1) for a link; out-of-range slots
    /// are ignored
    pub fn set_word(&mut self, key: LinkKey, slot: usize, text: impl Into<String>) {
        if let Some(word) = self.links[key.index()].words.get_mut(slot) {
            *word = text.into();
        }
    }

    /// Set the description for a link
    pub fn set_description(&mut self, key: LinkKey, text: impl Into<String>) {
        self.links[key.index()].description = text.into();
    }

    /// Mark or unmark a pair as "no link"
    pub fn set_no_link(&mut self, key: LinkKey, marked: bool) {
        self.links[key.index()].no_link = marked;
    }

    /// The two entered theme words
    #[inline]
    #[must_use]
    pub const fn theme_words(&self) -> &[String; 2] {
        &self.theme_words
    }

    /// The entered theme word in `slot` (0 or 1)
    #[inline]
    #[must_use]
    pub fn theme_word(&self, slot: usize) -> &str {
        self.theme_words.get(slot).map_or("", String::as_str)
    }

    /// Set a theme word; out-of-range slots are ignored
    pub fn set_theme_word(&mut self, slot: usize, text: impl Into<String>) {
        if let Some(word) = self.theme_words.get_mut(slot) {
            *word = text.into();
        }
    }

    /// The entered theme description
    #[inline]
    #[must_use]
    pub fn theme_description(&self) -> &str {
        &self.theme_description
    }

    /// Set the theme description
    pub fn set_theme_description(&mut self, text: impl Into<String>) {
        self.theme_description = text.into();
    }

    /// Lowercased set of every word currently entered, link and theme slots
    /// alike, for word-bank strikethrough display
    #[must_use]
    pub fn used_words(&self) -> FxHashSet<String> {
        self.links
            .iter()
            .flat_map(|link| link.words.iter())
            .chain(self.theme_words.iter())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase())
            .collect()
    }
}
