#![deny(unsafe_code)]

pub mod autocomplete;
pub mod score;

pub use autocomplete::AutocompleteController;
pub use score::{FuzzyMatcher, MAX_SCORE, ScoredCandidate, similarity};
