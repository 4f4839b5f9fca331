//! Live per-country record.

use geoquiz_model::{CountryState, CountryStyle, Geometry, StateEvent, StateStyle};
use thiserror::Error;

use crate::render::Renderer;

/// A transition that the state table does not allow.
///
/// The session treats these as UI timing artifacts (a stale hover leave after
/// a click, for example) and drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{country}: {event} is not allowed from {from}")]
    Invalid {
        country: String,
        from: CountryState,
        event: StateEvent,
    },
}

/// A country on the map.
///
/// Owned by the session for its whole lifetime. Only the session changes its
/// state, and every change goes through [`Country::apply_state`] so the
/// renderer sees each transition.
#[derive(Debug, Clone)]
pub struct Country {
    name: String,
    shape: Geometry,
    state: CountryState,
    style: CountryStyle,
}

impl Country {
    pub(crate) fn new(name: String, shape: Geometry, style: CountryStyle, disputed: bool) -> Self {
        let state = if disputed {
            CountryState::Disputed
        } else {
            CountryState::Open
        };
        Self {
            name,
            shape,
            state,
            style,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Geometry {
        &self.shape
    }

    pub fn state(&self) -> CountryState {
        self.state
    }

    /// Colours for the current state.
    pub fn current_style(&self) -> StateStyle {
        self.style.for_state(self.state)
    }

    pub fn style(&self) -> &CountryStyle {
        &self.style
    }

    /// Apply `event`, restyling through `renderer` on success.
    pub(crate) fn apply_state<R>(
        &mut self,
        event: StateEvent,
        renderer: &mut R,
    ) -> Result<CountryState, TransitionError>
    where
        R: Renderer + ?Sized,
    {
        let next = self.state.next(event).ok_or_else(|| TransitionError::Invalid {
            country: self.name.clone(),
            from: self.state,
            event,
        })?;
        tracing::trace!(country = %self.name, from = %self.state, to = %next, %event, "transition");
        self.state = next;
        renderer.restyle(self);
        Ok(next)
    }
}
