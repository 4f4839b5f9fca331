//! Fuzzy scoring of a typed prefix against country names.
//!
//! Each candidate is scored with the better of two Indel similarities:
//! - the best-aligned window of the candidate (query found anywhere inside it)
//! - the candidate's prefix of the same length as the query (query is the
//!   start of the candidate)
//!
//! Scores are in `0.0..=100.0`. An empty query scores 0 against everything,
//! so ranking with an empty query keeps the input order.

use rapidfuzz::fuzz;

/// Highest possible similarity score.
pub const MAX_SCORE: f64 = 100.0;

/// A candidate together with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: String,
    pub score: f64,
}

/// Ranks candidate names by similarity to typed text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score a single candidate against `query`.
    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        let query: Vec<char> = query.to_lowercase().chars().collect();
        if query.is_empty() {
            return 0.0;
        }
        let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
        let prefix_len = query.len().min(candidate.len());
        let prefix = ratio(&query, &candidate[..prefix_len]);
        partial_ratio(&query, &candidate).max(prefix)
    }

    /// Return every candidate, best match first.
    ///
    /// The sort is stable: equally scored candidates keep their input order.
    pub fn rank<I, S>(&self, query: &str, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rank_scored(query, candidates)
            .into_iter()
            .map(|scored| scored.candidate)
            .collect()
    }

    /// Like [`Self::rank`], keeping the scores for display or debugging.
    pub fn rank_scored<I, S>(&self, query: &str, candidates: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|c| ScoredCandidate {
                score: self.score(query, c.as_ref()),
                candidate: c.as_ref().to_string(),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

/// Case-sensitive whole-string similarity of `a` and `b`, 0..=100.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

/// Whole-string Indel similarity scaled to 0..=100.
fn ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    fuzz::ratio(a.iter().copied(), b.iter().copied()) * MAX_SCORE
}

/// Best [`ratio`] of the shorter string against every equally long window
/// of the longer one.
fn partial_ratio(a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0.0;
    }
    let mut best = 0.0_f64;
    for window in long.windows(short.len()) {
        best = best.max(ratio(short, window));
        if best >= MAX_SCORE {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_beats_partial_overlap() {
        let ranked = FuzzyMatcher::new().rank("Un", ["Uruguay", "United States", "United Kingdom"]);
        assert_eq!(ranked, vec!["United States", "United Kingdom", "Uruguay"]);
    }

    #[test]
    fn exact_match_scores_max() {
        let matcher = FuzzyMatcher::new();
        assert_eq!(matcher.score("France", "France"), MAX_SCORE);
        assert_eq!(matcher.score("france", "FRANCE"), MAX_SCORE);
    }

    #[test]
    fn substring_scores_max() {
        assert_eq!(FuzzyMatcher::new().score("land", "Finland"), MAX_SCORE);
    }

    #[test]
    fn empty_query_scores_zero_and_keeps_order() {
        let matcher = FuzzyMatcher::new();
        assert_eq!(matcher.score("", "Chad"), 0.0);
        let ranked = matcher.rank("", ["Peru", "Chad", "Oman"]);
        assert_eq!(ranked, vec!["Peru", "Chad", "Oman"]);
    }

    #[test]
    fn empty_candidate_scores_zero() {
        assert_eq!(FuzzyMatcher::new().score("Mali", ""), 0.0);
    }

    #[test]
    fn typo_still_ranks_intended_country_first() {
        let ranked = FuzzyMatcher::new().rank("frnace", ["Spain", "Finland", "France"]);
        assert_eq!(ranked[0], "France");
    }

    #[test]
    fn query_longer_than_candidate() {
        let matcher = FuzzyMatcher::new();
        let score = matcher.score("Chadian Republic", "Chad");
        assert_eq!(score, MAX_SCORE);
    }

    #[test]
    fn handles_multibyte_names() {
        let matcher = FuzzyMatcher::new();
        assert_eq!(matcher.score("côte", "Côte d'Ivoire"), MAX_SCORE);
        assert!(matcher.score("cur", "Curaçao") > 99.0);
    }

    #[test]
    fn similarity_is_case_sensitive() {
        assert_eq!(similarity("Italy", "Italy"), MAX_SCORE);
        assert!(similarity("Italy", "ITALY") < 50.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn rank_scored_is_descending() {
        let scored =
            FuzzyMatcher::new().rank_scored("ma", ["Peru", "Malta", "Oman", "Mali", "Chad"]);
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(scored[0].candidate, "Malta");
    }
}
