//! Single entry point for UI events.
//!
//! The render layer reports pointer events keyed by country name and the
//! text entry reports keystrokes; both arrive here as a [`MapEvent`] instead
//! of per-shape callbacks.

use crate::render::Renderer;
use crate::session::{MapSession, SessionError, VerifyReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    PointerEnter(String),
    PointerLeave(String),
    /// Single click on a country.
    Click(String),
    /// Double click on a country.
    DoubleClick(String),
    /// The entry text changed.
    TextChanged(String),
    /// Tab (+1) or Shift-Tab (-1) through the suggestions.
    Cycle(isize),
    /// Enter, or a suggestion picked: guess the displayed value.
    Submit,
    /// Verify button.
    Verify,
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Unchanged,
    Changed,
    Verified(VerifyReport),
}

impl From<bool> for EventOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            EventOutcome::Changed
        } else {
            EventOutcome::Unchanged
        }
    }
}

impl<R: Renderer> MapSession<R> {
    /// Route one UI event to the matching session operation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownCountry`] when a pointer event names a
    /// country that is not on the map.
    pub fn dispatch(&mut self, event: MapEvent) -> Result<EventOutcome, SessionError> {
        tracing::trace!(?event, "dispatch");
        let outcome = match event {
            MapEvent::PointerEnter(name) => self.highlight(&name)?.into(),
            MapEvent::PointerLeave(name) => self.unhighlight(&name)?.into(),
            MapEvent::Click(name) => self.select_weak(&name)?.into(),
            MapEvent::DoubleClick(name) => self.select_strong(&name)?.into(),
            MapEvent::TextChanged(text) => self.autocomplete_mut().on_text_changed(&text).into(),
            MapEvent::Cycle(step) => {
                let before = self.autocomplete().cursor();
                self.autocomplete_mut().cycle(step);
                (before != self.autocomplete().cursor()).into()
            }
            MapEvent::Submit => {
                let guess = self.autocomplete().commit();
                self.make_guess(&guess).into()
            }
            MapEvent::Verify => EventOutcome::Verified(self.verify_all()),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use geoquiz_model::{CountrySchema, CountryState};

    use super::*;
    use crate::render::NoopRenderer;
    use crate::session::CountrySetup;

    fn session() -> MapSession {
        let setups = ["Chad", "Chile", "China"].iter().enumerate().map(|(i, n)| {
            CountrySetup::from(CountrySchema::new(*n, Vec::new(), i as u32, false, "C1").unwrap())
        });
        MapSession::new(setups, NoopRenderer).unwrap()
    }

    #[test]
    fn submit_guesses_the_displayed_suggestion() {
        let mut session = session();
        session.dispatch(MapEvent::Click("China".to_string())).unwrap();
        session
            .dispatch(MapEvent::TextChanged("chi".to_string()))
            .unwrap();
        session.dispatch(MapEvent::Cycle(1)).unwrap();
        session.dispatch(MapEvent::Cycle(1)).unwrap();
        assert_eq!(session.autocomplete().displayed(), "China");
        assert_eq!(
            session.dispatch(MapEvent::Submit).unwrap(),
            EventOutcome::Changed
        );
        assert_eq!(session.guess_for("China"), Some("China"));
        assert_eq!(session.autocomplete().typed_text(), "");
        assert!(!session.autocomplete().contains("China"));
    }

    #[test]
    fn cycle_past_end_is_unchanged() {
        let mut session = session();
        assert_eq!(
            session.dispatch(MapEvent::Cycle(-1)).unwrap(),
            EventOutcome::Unchanged
        );
    }

    #[test]
    fn pointer_events_drive_highlight() {
        let mut session = session();
        session
            .dispatch(MapEvent::PointerEnter("Chad".to_string()))
            .unwrap();
        assert_eq!(
            session.country("Chad").unwrap().state(),
            CountryState::Highlighted
        );
        session
            .dispatch(MapEvent::PointerLeave("Chad".to_string()))
            .unwrap();
        assert_eq!(session.country("Chad").unwrap().state(), CountryState::Open);
    }

    #[test]
    fn verify_event_reports() {
        let mut session = session();
        session.dispatch(MapEvent::Click("Chad".to_string())).unwrap();
        session
            .dispatch(MapEvent::TextChanged("Chad".to_string()))
            .unwrap();
        session.dispatch(MapEvent::Submit).unwrap();
        let EventOutcome::Verified(report) = session.dispatch(MapEvent::Verify).unwrap() else {
            panic!("expected a verify report");
        };
        assert_eq!(report.correct, vec!["Chad".to_string()]);
    }

    #[test]
    fn unknown_country_event_is_rejected() {
        let mut session = session();
        assert!(session
            .dispatch(MapEvent::DoubleClick("Atlantis".to_string()))
            .is_err());
    }
}
