//! Per-country play state.
//!
//! Every country on the map is in exactly one of these states. Transitions
//! between them are checked by the session layer; this module only names the
//! states and the events that move a country between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// State of a single country during a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryState {
    /// Default state; the country can be selected and guessed.
    Open,
    /// The pointer is hovering over the country.
    Highlighted,
    /// Armed for a guess.
    Selected,
    /// A guess is pending verification.
    Guessed,
    /// Confirmed correct. Terminal for the session.
    Verified,
    /// Excluded from play. Set once at load time and never left.
    Disputed,
}

impl CountryState {
    /// All states, in declaration order.
    pub const ALL: [CountryState; 6] = [
        CountryState::Open,
        CountryState::Highlighted,
        CountryState::Selected,
        CountryState::Guessed,
        CountryState::Verified,
        CountryState::Disputed,
    ];

    /// Returns the lowercase state name used in style schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryState::Open => "open",
            CountryState::Highlighted => "highlighted",
            CountryState::Selected => "selected",
            CountryState::Guessed => "guessed",
            CountryState::Verified => "verified",
            CountryState::Disputed => "disputed",
        }
    }

    /// Returns true if no event can ever move a country out of this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CountryState::Verified | CountryState::Disputed)
    }

    /// Returns the state reached by applying `event`, or `None` when the
    /// event is not allowed from this state.
    pub fn next(self, event: StateEvent) -> Option<CountryState> {
        use CountryState::{Guessed, Highlighted, Open, Selected, Verified};

        match (self, event) {
            (Open, StateEvent::PointerEnter) => Some(Highlighted),
            (Highlighted, StateEvent::PointerLeave) => Some(Open),
            (Open | Highlighted, StateEvent::WeakSelect) => Some(Selected),
            (Selected, StateEvent::Deselect) => Some(Open),
            (Open | Highlighted | Guessed, StateEvent::StrongSelect) => Some(Selected),
            (Selected, StateEvent::MakeGuess) => Some(Guessed),
            (Guessed, StateEvent::VerifyCorrect) => Some(Verified),
            (Guessed, StateEvent::VerifyIncorrect) => Some(Open),
            _ => None,
        }
    }
}

impl fmt::Display for CountryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CountryState::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownState(s.to_string()))
    }
}

/// Events that drive a [`CountryState`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateEvent {
    PointerEnter,
    PointerLeave,
    /// Single click.
    WeakSelect,
    /// Another country took the selection.
    Deselect,
    /// Double click. Withdraws a pending guess.
    StrongSelect,
    MakeGuess,
    VerifyCorrect,
    VerifyIncorrect,
}

impl StateEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateEvent::PointerEnter => "pointer-enter",
            StateEvent::PointerLeave => "pointer-leave",
            StateEvent::WeakSelect => "weak-select",
            StateEvent::Deselect => "deselect",
            StateEvent::StrongSelect => "strong-select",
            StateEvent::MakeGuess => "make-guess",
            StateEvent::VerifyCorrect => "verify-correct",
            StateEvent::VerifyIncorrect => "verify-incorrect",
        }
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_names_case_insensitively() {
        assert_eq!("open".parse::<CountryState>().unwrap(), CountryState::Open);
        assert_eq!(
            " Verified ".parse::<CountryState>().unwrap(),
            CountryState::Verified
        );
        assert!("conquered".parse::<CountryState>().is_err());
    }

    #[test]
    fn terminal_states_accept_no_events() {
        let events = [
            StateEvent::PointerEnter,
            StateEvent::PointerLeave,
            StateEvent::WeakSelect,
            StateEvent::Deselect,
            StateEvent::StrongSelect,
            StateEvent::MakeGuess,
            StateEvent::VerifyCorrect,
            StateEvent::VerifyIncorrect,
        ];
        for state in [CountryState::Verified, CountryState::Disputed] {
            assert!(state.is_terminal());
            for event in events {
                assert_eq!(state.next(event), None, "{state} accepted {event}");
            }
        }
    }

    #[test]
    fn strong_select_withdraws_guess() {
        assert_eq!(
            CountryState::Guessed.next(StateEvent::StrongSelect),
            Some(CountryState::Selected)
        );
        assert_eq!(CountryState::Guessed.next(StateEvent::WeakSelect), None);
    }

    #[test]
    fn hover_is_only_valid_on_open_countries() {
        assert_eq!(
            CountryState::Open.next(StateEvent::PointerEnter),
            Some(CountryState::Highlighted)
        );
        assert_eq!(CountryState::Selected.next(StateEvent::PointerEnter), None);
        assert_eq!(CountryState::Open.next(StateEvent::PointerLeave), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&CountryState::Highlighted).unwrap();
        assert_eq!(json, "\"highlighted\"");
    }
}
