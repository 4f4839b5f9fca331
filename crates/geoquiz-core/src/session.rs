//! Quiz session: selection, guesses, verification and scoring.
//!
//! The session owns every [`Country`] and the [`AutocompleteController`]. It
//! keeps the cross-country invariants:
//! - at most one country is selected and at most one is highlighted
//! - a typed guess is withdrawn from the autocomplete pool until released
//! - disputed countries never change state and never count towards progress

use std::collections::{BTreeMap, BTreeSet};

use geoquiz_match::AutocompleteController;
use geoquiz_model::{CountrySchema, CountryState, CountryStyle, Geometry, StateEvent};
use thiserror::Error;

use crate::country::Country;
use crate::render::{NoopRenderer, Renderer};

/// Errors that indicate a caller or data bug rather than a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("country listed twice: {0}")]
    DuplicateCountry(String),
}

/// Everything needed to place one country on the map.
#[derive(Debug, Clone)]
pub struct CountrySetup {
    pub schema: CountrySchema,
    pub style: CountryStyle,
    pub shape: Geometry,
}

impl From<CountrySchema> for CountrySetup {
    fn from(schema: CountrySchema) -> Self {
        Self {
            schema,
            style: CountryStyle::default(),
            shape: Geometry::default(),
        }
    }
}

/// Countries guessed so far out of the playable total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Verified plus pending guesses.
    pub done: usize,
    /// Non-disputed countries.
    pub total: usize,
}

/// Outcome of [`MapSession::verify_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Countries whose guess was accepted.
    pub correct: Vec<String>,
    /// `(country, rejected guess)` pairs.
    pub incorrect: Vec<(String, String)>,
    /// Change applied to the score.
    pub score_delta: i64,
    /// Every playable country is now verified.
    pub complete: bool,
}

impl VerifyReport {
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.incorrect.is_empty()
    }
}

#[derive(Debug)]
pub struct MapSession<R = NoopRenderer> {
    /// Countries in draw order.
    countries: Vec<Country>,
    schemas: Vec<CountrySchema>,
    index: BTreeMap<String, usize>,
    /// Names of non-disputed countries.
    valid_names: BTreeSet<String>,
    selected: Option<String>,
    highlighted: Option<String>,
    guesses: BTreeMap<String, String>,
    correct: BTreeSet<String>,
    /// Texts consumed by verified guesses.
    spent: BTreeSet<String>,
    pool: BTreeSet<String>,
    autocomplete: AutocompleteController,
    score: i64,
    renderer: R,
}

impl<R: Renderer> MapSession<R> {
    /// Build a session and draw every country, largest first.
    pub fn new<I>(setups: I, mut renderer: R) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = CountrySetup>,
    {
        let mut setups: Vec<CountrySetup> = setups.into_iter().collect();
        setups.sort_by_key(|setup| setup.schema.order);

        let mut countries = Vec::with_capacity(setups.len());
        let mut schemas = Vec::with_capacity(setups.len());
        let mut index = BTreeMap::new();
        let mut valid_names = BTreeSet::new();
        for setup in setups {
            let name = setup.schema.name.clone();
            if index.insert(name.clone(), countries.len()).is_some() {
                return Err(SessionError::DuplicateCountry(name));
            }
            if !setup.schema.disputed {
                valid_names.insert(name.clone());
            }
            countries.push(Country::new(
                name,
                setup.shape,
                setup.style,
                setup.schema.disputed,
            ));
            schemas.push(setup.schema);
        }
        for country in &countries {
            renderer.draw(country);
        }

        let pool = valid_names.clone();
        let autocomplete = AutocompleteController::new(pool.iter().cloned());
        tracing::info!(
            countries = countries.len(),
            playable = valid_names.len(),
            "quiz session started"
        );
        Ok(Self {
            countries,
            schemas,
            index,
            valid_names,
            selected: None,
            highlighted: None,
            guesses: BTreeMap::new(),
            correct: BTreeSet::new(),
            spent: BTreeSet::new(),
            pool,
            autocomplete,
            score: 0,
            renderer,
        })
    }

    /// Pointer entered `name`.
    ///
    /// Any previously highlighted country is released first. Countries that
    /// are not `open` become the hover target without changing state.
    pub fn highlight(&mut self, name: &str) -> Result<bool, SessionError> {
        let idx = self.index_of(name)?;
        if self.countries[idx].state() == CountryState::Disputed
            || self.highlighted.as_deref() == Some(name)
        {
            return Ok(false);
        }
        if let Some(previous) = self.highlighted.take() {
            self.leave(&previous);
        }
        self.highlighted = Some(name.to_string());
        Ok(self.transition(idx, StateEvent::PointerEnter))
    }

    /// Pointer left `name`.
    pub fn unhighlight(&mut self, name: &str) -> Result<bool, SessionError> {
        let idx = self.index_of(name)?;
        if self.highlighted.as_deref() == Some(name) {
            self.highlighted = None;
        }
        if self.countries[idx].state() != CountryState::Highlighted {
            return Ok(false);
        }
        Ok(self.transition(idx, StateEvent::PointerLeave))
    }

    /// Single click: select an open country, releasing any other selection.
    pub fn select_weak(&mut self, name: &str) -> Result<bool, SessionError> {
        self.select(name, StateEvent::WeakSelect)
    }

    /// Double click: select a country, withdrawing its pending guess first.
    ///
    /// The withdrawn text goes back into the autocomplete pool.
    pub fn select_strong(&mut self, name: &str) -> Result<bool, SessionError> {
        self.select(name, StateEvent::StrongSelect)
    }

    /// Record `text` as the guess for the selected country.
    ///
    /// Returns `false` without side effects when nothing is selected or the
    /// text is blank.
    pub fn make_guess(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            tracing::debug!("ignoring blank guess");
            return false;
        }
        let Some(name) = self.selected.clone() else {
            tracing::debug!(guess = text, "ignoring guess with no selection");
            return false;
        };
        let Some(&idx) = self.index.get(&name) else {
            return false;
        };
        if !self.transition(idx, StateEvent::MakeGuess) {
            return false;
        }
        self.selected = None;
        self.guesses.insert(name.clone(), text.to_string());
        self.pool.remove(text);
        self.sync_candidates();
        self.autocomplete.reset();
        let progress = self.progress();
        tracing::info!(
            country = %name,
            guess = text,
            done = progress.done,
            total = progress.total,
            "guess recorded"
        );
        true
    }

    /// Check every pending guess against the accepted names.
    ///
    /// Correct guesses verify their country; wrong ones reopen it and release
    /// the text back to the pool when it is a real, unused country name.
    /// Calling this with nothing pending changes nothing.
    pub fn verify_all(&mut self) -> VerifyReport {
        let pending = std::mem::take(&mut self.guesses);
        if pending.is_empty() {
            return VerifyReport {
                complete: self.is_complete(),
                ..VerifyReport::default()
            };
        }

        let mut report = VerifyReport::default();
        let mut rejected = Vec::new();
        for (name, guess) in pending {
            let Some(&idx) = self.index.get(&name) else {
                continue;
            };
            if self.schemas[idx].accepts(&guess) {
                self.transition(idx, StateEvent::VerifyCorrect);
                self.correct.insert(name.clone());
                self.pool.remove(&name);
                self.spent.insert(guess);
                report.correct.push(name);
            } else {
                self.transition(idx, StateEvent::VerifyIncorrect);
                rejected.push((name, guess));
            }
        }
        for (_, guess) in &rejected {
            self.release(guess);
        }
        self.sync_candidates();
        report.incorrect = rejected;

        let correct = i64::try_from(report.correct.len()).unwrap_or(i64::MAX);
        let incorrect = i64::try_from(report.incorrect.len()).unwrap_or(i64::MAX);
        report.score_delta = correct - incorrect;
        self.score += report.score_delta;
        report.complete = self.is_complete();
        tracing::info!(
            correct = report.correct.len(),
            incorrect = report.incorrect.len(),
            score = self.score,
            "You got {} correct and {} incorrect",
            report.correct.len(),
            report.incorrect.len()
        );
        if report.complete {
            tracing::info!(score = self.score, "every country verified");
        }
        report
    }

    pub fn country(&self, name: &str) -> Result<&Country, SessionError> {
        self.index_of(name).map(|idx| &self.countries[idx])
    }

    pub fn schema(&self, name: &str) -> Result<&CountrySchema, SessionError> {
        self.index_of(name).map(|idx| &self.schemas[idx])
    }

    /// Countries in draw order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected.as_deref().and_then(|name| self.lookup(name))
    }

    pub fn highlighted(&self) -> Option<&Country> {
        self.highlighted.as_deref().and_then(|name| self.lookup(name))
    }

    /// Pending (unverified) guess for `name`.
    pub fn guess_for(&self, name: &str) -> Option<&str> {
        self.guesses.get(name).map(String::as_str)
    }

    pub fn guesses(&self) -> &BTreeMap<String, String> {
        &self.guesses
    }

    pub fn correct(&self) -> &BTreeSet<String> {
        &self.correct
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn progress(&self) -> Progress {
        Progress {
            done: self.correct.len() + self.guesses.len(),
            total: self.valid_names.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.valid_names.is_empty() && self.correct.len() == self.valid_names.len()
    }

    /// Names currently offered by autocomplete.
    pub fn candidates(&self) -> &BTreeSet<String> {
        &self.pool
    }

    pub fn autocomplete(&self) -> &AutocompleteController {
        &self.autocomplete
    }

    pub(crate) fn autocomplete_mut(&mut self) -> &mut AutocompleteController {
        &mut self.autocomplete
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn select(&mut self, name: &str, event: StateEvent) -> Result<bool, SessionError> {
        let idx = self.index_of(name)?;
        let state = self.countries[idx].state();
        if self.selected.as_deref() == Some(name) {
            return Ok(false);
        }
        if state.next(event).is_none() {
            tracing::debug!(country = name, %state, %event, "selection ignored");
            return Ok(false);
        }
        if let Some(previous) = self.selected.take()
            && let Some(&prev_idx) = self.index.get(&previous)
        {
            self.transition(prev_idx, StateEvent::Deselect);
        }
        if state == CountryState::Guessed
            && let Some(withdrawn) = self.guesses.remove(name)
        {
            tracing::info!(country = name, guess = %withdrawn, "guess withdrawn");
            self.release(&withdrawn);
            self.sync_candidates();
        }
        let changed = self.transition(idx, event);
        if changed {
            self.selected = Some(name.to_string());
        }
        Ok(changed)
    }

    fn leave(&mut self, name: &str) {
        if let Some(&idx) = self.index.get(name)
            && self.countries[idx].state() == CountryState::Highlighted
        {
            self.transition(idx, StateEvent::PointerLeave);
        }
    }

    /// Return `text` to the pool if it names a playable country that no
    /// pending or verified guess is using.
    fn release(&mut self, text: &str) {
        let in_use = self.spent.contains(text)
            || self.correct.contains(text)
            || self.guesses.values().any(|g| g == text);
        if self.valid_names.contains(text) && !in_use {
            self.pool.insert(text.to_string());
        }
    }

    fn sync_candidates(&mut self) {
        self.autocomplete.set_candidate_set(self.pool.iter().cloned());
    }

    fn transition(&mut self, idx: usize, event: StateEvent) -> bool {
        match self.countries[idx].apply_state(event, &mut self.renderer) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "transition dropped");
                false
            }
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, SessionError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| SessionError::UnknownCountry(name.to_string()))
    }

    fn lookup(&self, name: &str) -> Option<&Country> {
        self.index.get(name).map(|&idx| &self.countries[idx])
    }
}
