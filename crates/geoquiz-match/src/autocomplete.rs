//! Text-entry autocomplete with a cyclable ranked shortlist.
//!
//! The controller owns the typed text and a cursor over the ranked
//! suggestions. Cursor 0 is free text entry; cursor `i > 0` shows
//! `remaining_choices[i - 1]` and locks the entry until the user cycles back.

use std::collections::BTreeSet;

use crate::score::FuzzyMatcher;

#[derive(Debug, Clone, Default)]
pub struct AutocompleteController {
    matcher: FuzzyMatcher,
    /// Candidate pool in canonical (sorted) order.
    candidates: Vec<String>,
    typed_text: String,
    remaining_choices: Vec<String>,
    cursor: usize,
}

impl AutocompleteController {
    /// Create a controller offering `candidates`.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut controller = Self::default();
        controller.set_candidate_set(candidates);
        controller
    }

    /// Handle a keystroke that changed the entry text.
    ///
    /// Returns `false` without touching any state while a suggestion is shown.
    pub fn on_text_changed(&mut self, text: &str) -> bool {
        if self.is_locked() {
            tracing::trace!(text, "entry locked on a suggestion, ignoring text");
            return false;
        }
        self.typed_text = text.to_string();
        self.rerank();
        self.cursor = 0;
        true
    }

    /// Move the cursor by `step` (usually +1 for Tab, -1 for Shift-Tab).
    ///
    /// Returns the value displayed after the move.
    pub fn cycle(&mut self, step: isize) -> &str {
        let max = self.remaining_choices.len();
        self.cursor = self.cursor.saturating_add_signed(step).min(max);
        self.displayed()
    }

    /// The value currently shown in the entry.
    pub fn displayed(&self) -> &str {
        match self.cursor {
            0 => &self.typed_text,
            i => &self.remaining_choices[i - 1],
        }
    }

    /// The value to submit as a guess. Does not change any state.
    pub fn commit(&self) -> String {
        self.displayed().to_string()
    }

    /// True while a suggestion is shown and typing is ignored.
    pub fn is_locked(&self) -> bool {
        self.cursor > 0
    }

    /// Clear the entry and return to free text with every candidate visible.
    pub fn reset(&mut self) {
        self.typed_text.clear();
        self.cursor = 0;
        self.remaining_choices = self.candidates.clone();
    }

    /// Replace the candidate pool and re-rank against the current text.
    ///
    /// A cursor past the end of the new shortlist is pulled back onto it.
    pub fn set_candidate_set<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let pool: BTreeSet<String> = names.into_iter().collect();
        self.candidates = pool.into_iter().collect();
        self.rerank();
        self.cursor = self.cursor.min(self.remaining_choices.len());
        tracing::debug!(
            candidates = self.candidates.len(),
            "autocomplete candidate set replaced"
        );
    }

    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ranked shortlist, best first.
    pub fn remaining_choices(&self) -> &[String] {
        &self.remaining_choices
    }

    /// Candidate pool in canonical order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn contains(&self, name: &str) -> bool {
        self.candidates
            .binary_search_by(|c| c.as_str().cmp(name))
            .is_ok()
    }

    fn rerank(&mut self) {
        self.remaining_choices = self.matcher.rank(&self.typed_text, &self.candidates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(names: &[&str]) -> AutocompleteController {
        AutocompleteController::new(names.iter().map(|n| (*n).to_string()))
    }

    #[test]
    fn typing_ranks_best_match_first() {
        let mut ac = controller(&["Uruguay", "United Kingdom", "United States"]);
        assert!(ac.on_text_changed("Un"));
        assert_eq!(ac.remaining_choices()[2], "Uruguay");
        assert_eq!(ac.displayed(), "Un");
    }

    #[test]
    fn cycling_shows_suggestions_and_locks_entry() {
        let mut ac = controller(&["Chad", "Chile", "China"]);
        ac.on_text_changed("chi");
        assert_eq!(ac.cycle(1), "Chile");
        assert!(ac.is_locked());
        assert!(!ac.on_text_changed("chin"));
        assert_eq!(ac.typed_text(), "chi");
        assert_eq!(ac.cycle(-1), "chi");
        assert!(!ac.is_locked());
        assert!(ac.on_text_changed("chin"));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut ac = controller(&["Chad", "Chile"]);
        ac.cycle(-1);
        assert_eq!(ac.cursor(), 0);
        ac.cycle(5);
        assert_eq!(ac.cursor(), 2);
        ac.cycle(1);
        assert_eq!(ac.cursor(), 2);
    }

    #[test]
    fn commit_does_not_mutate() {
        let mut ac = controller(&["Peru"]);
        ac.on_text_changed("pe");
        ac.cycle(1);
        assert_eq!(ac.commit(), "Peru");
        assert_eq!(ac.commit(), "Peru");
        assert_eq!(ac.cursor(), 1);
    }

    #[test]
    fn reset_restores_free_text() {
        let mut ac = controller(&["Oman", "Chad"]);
        ac.on_text_changed("om");
        ac.cycle(1);
        ac.reset();
        assert_eq!(ac.cursor(), 0);
        assert_eq!(ac.typed_text(), "");
        assert_eq!(ac.remaining_choices(), ac.candidates());
    }

    #[test]
    fn candidate_set_replacement_reranks_and_clamps_cursor() {
        let mut ac = controller(&["France", "Finland", "Fiji"]);
        ac.on_text_changed("fi");
        ac.cycle(3);
        ac.set_candidate_set(vec!["Fiji".to_string()]);
        assert_eq!(ac.remaining_choices(), ["Fiji".to_string()]);
        assert_eq!(ac.cursor(), 1);
        assert_eq!(ac.displayed(), "Fiji");
        assert!(!ac.contains("France"));
    }
}
