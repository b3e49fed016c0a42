//! Free-text answer matching
//!
//! Descriptions are scored with a Dice coefficient over character bigrams:
//! both sides are stripped of all whitespace before comparison, so word
//! order alone does not change the score. Clue words use exact
//! case-insensitive comparison instead; short tokens are too ambiguous for
//! a fuzzy measure.

use rustc_hash::FxHashMap;

/// Similarity a description must strictly exceed to count as correct
///
/// This threshold is part of the answer key: changing it changes which
/// guesses the puzzle accepts.
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Bigram Dice similarity between two strings
///
/// Whitespace is stripped from both sides before comparison. Identical
/// strings score 1.0; if either side has fewer than two characters after
/// stripping, the score is 0.0. The result is
/// `2 * |shared bigrams| / (|bigrams(a)| + |bigrams(b)|)`, in `[0, 1]`.
///
/// # Examples
/// ```
/// use threadweb::core::matcher::similarity;
///
/// assert!((similarity("loves sports", "sports lover") - 0.8).abs() < 1e-9);
/// assert!((similarity("night", "night") - 1.0).abs() < f64::EPSILON);
/// assert!((similarity("", "anything")).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let b: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: FxHashMap<(char, char), u32> = FxHashMap::default();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    // Bigrams are a multiset: each occurrence on one side can match at most
    // one occurrence on the other.
    let mut shared = 0u32;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            shared += 1;
        }
    }

    f64::from(2 * shared) / (a.len() + b.len() - 2) as f64
}

/// True when `candidate` fuzzily matches any accepted phrase
///
/// Both sides are trimmed and lowercased, then scored with [`similarity`];
/// the best score must strictly exceed `threshold`. Empty or whitespace-only
/// input never matches and never errors.
#[must_use]
pub fn fuzzy_match<S: AsRef<str>>(candidate: &str, accepted: &[S], threshold: f64) -> bool {
    let candidate = candidate.trim().to_lowercase();
    accepted
        .iter()
        .any(|phrase| similarity(&phrase.as_ref().to_lowercase(), &candidate) > threshold)
}

/// True when `candidate` exactly matches any accepted word, ignoring case
/// and surrounding whitespace
#[must_use]
pub fn exact_match<S: AsRef<str>>(candidate: &str, accepted: &[S]) -> bool {
    let candidate = candidate.trim().to_lowercase();
    if candidate.is_empty() {
        return false;
    }
    accepted
        .iter()
        .any(|word| word.as_ref().trim().to_lowercase() == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert!((similarity("gamecocks", "gamecocks") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn whitespace_contributes_nothing() {
        // Stripped forms are identical, so the score is exactly 1.0.
        assert!((similarity("love s  sports", "loves sports") - 1.0).abs() < f64::EPSILON);
        assert!((similarity(" car guys ", "car guys") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_candidate_scores_zero_against_any_phrase() {
        assert!(similarity("", "sports lover").abs() < f64::EPSILON);
        assert!(similarity("   ", "sports lover").abs() < f64::EPSILON);
        assert!(similarity("x", "sports lover").abs() < f64::EPSILON);
    }

    #[test]
    fn reordered_words_score_high() {
        // "sportslover" and "lovessports" share 8 of their 20 bigrams.
        let score = similarity("sports lover", "loves sports");
        assert!((score - 0.8).abs() < 1e-9);
        assert!(score > FUZZY_THRESHOLD);
    }

    #[test]
    fn shared_prefix_scores_above_threshold() {
        // "westcoast" is a strict prefix of "westcoastraised".
        let score = similarity("west coast", "west coast raised");
        assert!(score > FUZZY_THRESHOLD);
    }

    #[test]
    fn unrelated_phrases_score_low() {
        let score = similarity("speaks german", "west coast raised");
        assert!(score < FUZZY_THRESHOLD);
    }

    #[test]
    fn duplicate_bigrams_count_once_per_occurrence() {
        // "aaaa" has three "aa" bigrams, "aa" has one; shared = 1.
        let score = similarity("aaaa", "aa");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_match_requires_strictly_above_threshold() {
        // "abcdef" vs "abcdxy" share exactly 3 of 10 bigrams: score 0.6.
        assert!((similarity("abcdef", "abcdxy") - 0.6).abs() < 1e-9);
        assert!(!fuzzy_match("abcdef", &["abcdxy"], FUZZY_THRESHOLD));
    }

    #[test]
    fn fuzzy_match_normalizes_case_and_trim() {
        let accepted = ["speak german", "german speakers"];
        assert!(fuzzy_match("  Speaks German ", &accepted, FUZZY_THRESHOLD));
    }

    #[test]
    fn fuzzy_match_takes_best_phrase() {
        let accepted = ["west coast raised", "car guys", "speak german"];
        assert!(fuzzy_match("car guy", &accepted, FUZZY_THRESHOLD));
        assert!(!fuzzy_match("plays chess", &accepted, FUZZY_THRESHOLD));
    }

    #[test]
    fn fuzzy_match_empty_inputs_never_match() {
        assert!(!fuzzy_match("", &["sports lover"], FUZZY_THRESHOLD));
        assert!(!fuzzy_match("   ", &["sports lover"], FUZZY_THRESHOLD));
        let none: [&str; 0] = [];
        assert!(!fuzzy_match("sports lover", &none, FUZZY_THRESHOLD));
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let accepted = ["Braves", "Celtics"];
        assert!(exact_match("braves", &accepted));
        assert!(exact_match(" Braves ", &accepted));
        assert!(exact_match("BRAVES", &accepted));
        assert!(exact_match("celtics", &accepted));
    }

    #[test]
    fn exact_match_rejects_near_misses() {
        let accepted = ["Braves", "Celtics"];
        assert!(!exact_match("Brave", &accepted));
        assert!(!exact_match("Braves!", &accepted));
        assert!(!exact_match("", &accepted));
        assert!(!exact_match("   ", &accepted));
    }

    #[test]
    fn exact_match_handles_multi_word_tokens() {
        let accepted = ["Clutch Kick", "Drag"];
        assert!(exact_match("clutch kick", &accepted));
        assert!(!exact_match("clutch", &accepted));
    }
}
