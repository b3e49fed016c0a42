//! Puzzle definitions
//!
//! A `PuzzleDefinition` is the immutable answer key for one puzzle: the five
//! entities, the ordered candidate link sequence, the five true links with
//! their accepted words and descriptions, the theme, and the decoy words.
//! Definitions are validated when built; a malformed definition is a
//! configuration defect and is rejected before play starts rather than
//! silently mis-scoring.

use crate::core::{ENTITY_COUNT, LINK_COUNT, LinkKey, LinkKeyError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of true links a valid puzzle carries
pub const TRUE_LINK_COUNT: usize = 5;

/// Most true links any single entity may participate in
const MAX_DEGREE: usize = 3;

/// Accepted answers for one true link: exactly two clue words and at least
/// one description phrase
#[derive(Debug, Clone)]
pub struct LinkAnswer {
    words: [String; 2],
    descriptions: Vec<String>,
}

impl LinkAnswer {
    #[must_use]
    pub fn new(words: [&str; 2], descriptions: &[&str]) -> Self {
        Self {
            words: words.map(String::from),
            descriptions: descriptions.iter().map(|d| (*d).to_string()).collect(),
        }
    }

    /// The two accepted clue words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; 2] {
        &self.words
    }

    /// Accepted description phrases
    #[inline]
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

/// Accepted answers for the overall theme, shaped like a [`LinkAnswer`] but
/// scoped to the whole puzzle
#[derive(Debug, Clone)]
pub struct ThemeAnswer {
    words: [String; 2],
    descriptions: Vec<String>,
}

impl ThemeAnswer {
    #[must_use]
    pub fn new(words: [&str; 2], descriptions: &[&str]) -> Self {
        Self {
            words: words.map(String::from),
            descriptions: descriptions.iter().map(|d| (*d).to_string()).collect(),
        }
    }

    /// The two accepted theme words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; 2] {
        &self.words
    }

    /// Accepted theme description phrases
    #[inline]
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

/// Error type for malformed puzzle definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    EmptyEntityName(usize),
    DuplicateEntityName(String),
    TrueLinkCount(usize),
    DuplicateTrueLink(LinkKey),
    EmptyWord(LinkKey),
    NoDescriptions(LinkKey),
    BlankDescription(LinkKey),
    EmptyThemeWord,
    NoThemeDescriptions,
    Degree { entity: String, degree: usize },
    Key(LinkKeyError),
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntityName(index) => write!(f, "entity {index} has an empty name"),
            Self::DuplicateEntityName(name) => write!(f, "duplicate entity name: {name}"),
            Self::TrueLinkCount(count) => {
                write!(f, "expected {TRUE_LINK_COUNT} true links, got {count}")
            }
            Self::DuplicateTrueLink(key) => {
                write!(f, "duplicate true link {}-{}", key.lo(), key.hi())
            }
            Self::EmptyWord(key) => write!(
                f,
                "true link {}-{} has an empty accepted word",
                key.lo(),
                key.hi()
            ),
            Self::NoDescriptions(key) => write!(
                f,
                "true link {}-{} has no accepted descriptions",
                key.lo(),
                key.hi()
            ),
            Self::BlankDescription(key) => write!(
                f,
                "true link {}-{} has a blank accepted description",
                key.lo(),
                key.hi()
            ),
            Self::EmptyThemeWord => write!(f, "theme has an empty accepted word"),
            Self::NoThemeDescriptions => write!(f, "theme has no accepted descriptions"),
            Self::Degree { entity, degree } => write!(
                f,
                "entity {entity} is in {degree} true links, expected 1 to {MAX_DEGREE}"
            ),
            Self::Key(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for DefinitionError {}

impl From<LinkKeyError> for DefinitionError {
    fn from(error: LinkKeyError) -> Self {
        Self::Key(error)
    }
}

/// The immutable answer key for one puzzle
#[derive(Debug, Clone)]
pub struct PuzzleDefinition {
    entities: [String; ENTITY_COUNT],
    candidates: [LinkKey; LINK_COUNT],
    answers: FxHashMap<LinkKey, LinkAnswer>,
    theme: ThemeAnswer,
    decoys: Vec<String>,
}

impl PuzzleDefinition {
    /// Build and validate a puzzle definition
    ///
    /// # Errors
    /// Returns `DefinitionError` if:
    /// - any entity name is empty or duplicated (case-insensitive)
    /// - there are not exactly [`TRUE_LINK_COUNT`] distinct true links
    /// - a true link has an empty accepted word, no descriptions, or a
    ///   blank description
    /// - the theme has an empty word or no descriptions
    /// - any entity appears in fewer than 1 or more than 3 true links
    pub fn new(
        entities: [String; ENTITY_COUNT],
        links: Vec<(LinkKey, LinkAnswer)>,
        theme: ThemeAnswer,
        decoys: Vec<String>,
    ) -> Result<Self, DefinitionError> {
        for (index, name) in entities.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DefinitionError::EmptyEntityName(index));
            }
            if entities[..index]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(name))
            {
                return Err(DefinitionError::DuplicateEntityName(name.clone()));
            }
        }

        if links.len() != TRUE_LINK_COUNT {
            return Err(DefinitionError::TrueLinkCount(links.len()));
        }

        let mut answers = FxHashMap::default();
        for (key, answer) in links {
            if answer.words().iter().any(|word| word.trim().is_empty()) {
                return Err(DefinitionError::EmptyWord(key));
            }
            if answer.descriptions().is_empty() {
                return Err(DefinitionError::NoDescriptions(key));
            }
            if answer
                .descriptions()
                .iter()
                .any(|phrase| phrase.trim().is_empty())
            {
                return Err(DefinitionError::BlankDescription(key));
            }
            if answers.insert(key, answer).is_some() {
                return Err(DefinitionError::DuplicateTrueLink(key));
            }
        }

        if theme.words().iter().any(|word| word.trim().is_empty()) {
            return Err(DefinitionError::EmptyThemeWord);
        }
        if theme.descriptions().is_empty() {
            return Err(DefinitionError::NoThemeDescriptions);
        }

        for (index, name) in entities.iter().enumerate() {
            let degree = answers.keys().filter(|key| key.touches(index)).count();
            if degree == 0 || degree > MAX_DEGREE {
                return Err(DefinitionError::Degree {
                    entity: name.clone(),
                    degree,
                });
            }
        }

        Ok(Self {
            entities,
            candidates: LinkKey::candidates(),
            answers,
            theme,
            decoys,
        })
    }

    /// Entity names in display order
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Name of the entity at `index`
    ///
    /// # Panics
    /// Panics if `index >= ENTITY_COUNT`
    #[inline]
    #[must_use]
    pub fn entity_name(&self, index: usize) -> &str {
        &self.entities[index]
    }

    /// All candidate links in canonical display order
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &[LinkKey; LINK_COUNT] {
        &self.candidates
    }

    /// The true links, in candidate order
    pub fn true_links(&self) -> impl Iterator<Item = LinkKey> + '_ {
        self.candidates
            .iter()
            .copied()
            .filter(|key| self.answers.contains_key(key))
    }

    /// Whether `key` is one of the true links
    #[inline]
    #[must_use]
    pub fn is_true_link(&self, key: LinkKey) -> bool {
        self.answers.contains_key(&key)
    }

    /// Accepted answers for `key`, or `None` for a non-link
    #[inline]
    #[must_use]
    pub fn answer(&self, key: LinkKey) -> Option<&LinkAnswer> {
        self.answers.get(&key)
    }

    /// The overall theme answers
    #[inline]
    #[must_use]
    pub const fn theme(&self) -> &ThemeAnswer {
        &self.theme
    }

    /// Decoy words present only in the word bank
    #[inline]
    #[must_use]
    pub fn decoys(&self) -> &[String] {
        &self.decoys
    }

    /// Human-readable label for a candidate link, e.g. "Cole & Kenzie"
    #[must_use]
    pub fn link_label(&self, key: LinkKey) -> String {
        format!("{} & {}", self.entities[key.lo()], self.entities[key.hi()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; ENTITY_COUNT] {
        ["Ada", "Ben", "Cleo", "Dev", "Eve"].map(String::from)
    }

    fn answer() -> LinkAnswer {
        LinkAnswer::new(["Alpha", "Beta"], &["first letters"])
    }

    fn links_for(pairs: &[(usize, usize)]) -> Vec<(LinkKey, LinkAnswer)> {
        pairs
            .iter()
            .map(|&(a, b)| (LinkKey::new(a, b).unwrap(), answer()))
            .collect()
    }

    fn valid_pairs() -> Vec<(LinkKey, LinkAnswer)> {
        // Degrees: Ada 2, Ben 2, Cleo 3, Dev 2, Eve 1
        links_for(&[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)])
    }

    fn theme() -> ThemeAnswer {
        ThemeAnswer::new(["One", "Two"], &["counting up"])
    }

    #[test]
    fn valid_definition_builds() {
        let puzzle = PuzzleDefinition::new(names(), valid_pairs(), theme(), vec![]).unwrap();

        assert_eq!(puzzle.entities().len(), ENTITY_COUNT);
        assert_eq!(puzzle.true_links().count(), TRUE_LINK_COUNT);
        assert_eq!(puzzle.candidates().len(), LINK_COUNT);
    }

    #[test]
    fn true_links_follow_candidate_order() {
        let puzzle = PuzzleDefinition::new(names(), valid_pairs(), theme(), vec![]).unwrap();

        let ordered: Vec<usize> = puzzle.true_links().map(LinkKey::index).collect();
        let mut sorted = ordered.clone();
        sorted.sort_unstable();
        assert_eq!(ordered, sorted);
    }

    #[test]
    fn non_link_has_no_answer() {
        let puzzle = PuzzleDefinition::new(names(), valid_pairs(), theme(), vec![]).unwrap();

        let non_link = LinkKey::new(0, 4).unwrap();
        assert!(!puzzle.is_true_link(non_link));
        assert!(puzzle.answer(non_link).is_none());
    }

    #[test]
    fn link_label_uses_entity_names() {
        let puzzle = PuzzleDefinition::new(names(), valid_pairs(), theme(), vec![]).unwrap();

        let key = LinkKey::new(2, 0).unwrap();
        assert_eq!(puzzle.link_label(key), "Ada & Cleo");
    }

    #[test]
    fn empty_entity_name_rejected() {
        let mut entities = names();
        entities[3] = "  ".to_string();

        let result = PuzzleDefinition::new(entities, valid_pairs(), theme(), vec![]);
        assert_eq!(result.unwrap_err(), DefinitionError::EmptyEntityName(3));
    }

    #[test]
    fn duplicate_entity_name_rejected() {
        let mut entities = names();
        entities[4] = "ada".to_string();

        let result = PuzzleDefinition::new(entities, valid_pairs(), theme(), vec![]);
        assert!(matches!(result, Err(DefinitionError::DuplicateEntityName(_))));
    }

    #[test]
    fn wrong_true_link_count_rejected() {
        let links = links_for(&[(0, 1), (1, 2), (2, 3), (3, 4)]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert_eq!(result.unwrap_err(), DefinitionError::TrueLinkCount(4));
    }

    #[test]
    fn duplicate_true_link_rejected() {
        // (0,1) and (1,0) canonicalize to the same key.
        let links = links_for(&[(0, 1), (1, 0), (1, 2), (2, 3), (3, 4)]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(result, Err(DefinitionError::DuplicateTrueLink(_))));
    }

    #[test]
    fn empty_accepted_word_rejected() {
        let mut links = valid_pairs();
        links[2].1 = LinkAnswer::new(["Alpha", " "], &["first letters"]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(result, Err(DefinitionError::EmptyWord(_))));
    }

    #[test]
    fn missing_descriptions_rejected() {
        let mut links = valid_pairs();
        links[0].1 = LinkAnswer::new(["Alpha", "Beta"], &[]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(result, Err(DefinitionError::NoDescriptions(_))));
    }

    #[test]
    fn blank_description_rejected() {
        let mut links = valid_pairs();
        links[0].1 = LinkAnswer::new(["Alpha", "Beta"], &["first letters", ""]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(result, Err(DefinitionError::BlankDescription(_))));
    }

    #[test]
    fn empty_theme_word_rejected() {
        let bad_theme = ThemeAnswer::new(["One", ""], &["counting up"]);

        let result = PuzzleDefinition::new(names(), valid_pairs(), bad_theme, vec![]);
        assert_eq!(result.unwrap_err(), DefinitionError::EmptyThemeWord);
    }

    #[test]
    fn missing_theme_descriptions_rejected() {
        let bad_theme = ThemeAnswer::new(["One", "Two"], &[]);

        let result = PuzzleDefinition::new(names(), valid_pairs(), bad_theme, vec![]);
        assert_eq!(result.unwrap_err(), DefinitionError::NoThemeDescriptions);
    }

    #[test]
    fn isolated_entity_rejected() {
        // Eve appears in no true link.
        let links = links_for(&[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(
            result,
            Err(DefinitionError::Degree { degree: 0, .. })
        ));
    }

    #[test]
    fn overloaded_entity_rejected() {
        // Ada appears in four true links.
        let links = links_for(&[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)]);

        let result = PuzzleDefinition::new(names(), links, theme(), vec![]);
        assert!(matches!(
            result,
            Err(DefinitionError::Degree { degree: 4, .. })
        ));
    }
}
