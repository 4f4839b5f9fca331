//! Resolved outline/fill colours per country state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::CountryState;

/// Outline and fill colour for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStyle {
    pub outline: String,
    pub fill: String,
}

impl StateStyle {
    pub fn new(outline: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            outline: outline.into(),
            fill: fill.into(),
        }
    }
}

/// Colours for every state of a single country, with palette tokens
/// already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryStyle {
    states: BTreeMap<CountryState, StateStyle>,
}

impl CountryStyle {
    pub fn new(states: BTreeMap<CountryState, StateStyle>) -> Self {
        Self { states }
    }

    /// Returns the colours for `state`.
    ///
    /// Falls back to the `open` style, then to black-on-grey, so a partial
    /// style table never leaves a country unpainted.
    pub fn for_state(&self, state: CountryState) -> StateStyle {
        self.states
            .get(&state)
            .or_else(|| self.states.get(&CountryState::Open))
            .cloned()
            .unwrap_or_else(|| StateStyle::new("black", "grey"))
    }

    pub fn insert(&mut self, state: CountryState, style: StateStyle) {
        self.states.insert(state, style);
    }

    pub fn missing_states(&self) -> Vec<CountryState> {
        CountryState::ALL
            .into_iter()
            .filter(|state| !self.states.contains_key(state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_open_style() {
        let mut style = CountryStyle::default();
        style.insert(CountryState::Open, StateStyle::new("black", "#F5A573"));
        assert_eq!(
            style.for_state(CountryState::Guessed),
            StateStyle::new("black", "#F5A573")
        );
        assert_eq!(style.missing_states().len(), 5);
    }

    #[test]
    fn empty_style_paints_grey() {
        let style = CountryStyle::default();
        assert_eq!(
            style.for_state(CountryState::Selected),
            StateStyle::new("black", "grey")
        );
    }
}
