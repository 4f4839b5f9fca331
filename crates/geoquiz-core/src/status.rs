//! Status line text, computed on demand from the session.

use crate::render::Renderer;
use crate::session::MapSession;

pub const MAKE_SELECTION: &str = "Make selection";
pub const GUESS_COUNTRY: &str = "Guess country";

/// Text for the instruction, progress, score and hover labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub instruction: String,
    pub progress: String,
    pub score: String,
    /// Pending guess of the hovered country, if any.
    pub hover: String,
}

impl<R: Renderer> MapSession<R> {
    pub fn status(&self) -> StatusView {
        let instruction = if self.selected().is_some() {
            GUESS_COUNTRY
        } else {
            MAKE_SELECTION
        };
        let progress = self.progress();
        let hover = self
            .highlighted()
            .and_then(|country| self.guess_for(country.name()))
            .unwrap_or_default();
        StatusView {
            instruction: instruction.to_string(),
            progress: format!("Progress: {}/{}", progress.done, progress.total),
            score: format!("Score: {}", self.score()),
            hover: hover.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use geoquiz_model::CountrySchema;

    use super::*;
    use crate::render::NoopRenderer;
    use crate::session::CountrySetup;

    #[test]
    fn reflects_selection_guesses_and_hover() {
        let setups = vec![
            CountrySetup::from(CountrySchema::new("Peru", Vec::new(), 1, false, "C1").unwrap()),
            CountrySetup::from(CountrySchema::new("Chad", Vec::new(), 2, false, "C2").unwrap()),
            CountrySetup::from(CountrySchema::new("Kashmir", Vec::new(), 3, true, "C3").unwrap()),
        ];
        let mut session = MapSession::new(setups, NoopRenderer).unwrap();
        assert_eq!(session.status().instruction, MAKE_SELECTION);
        assert_eq!(session.status().progress, "Progress: 0/2");

        session.select_weak("Peru").unwrap();
        assert_eq!(session.status().instruction, GUESS_COUNTRY);

        session.make_guess("Chad");
        session.highlight("Peru").unwrap();
        let status = session.status();
        assert_eq!(status.instruction, MAKE_SELECTION);
        assert_eq!(status.progress, "Progress: 1/2");
        assert_eq!(status.hover, "Chad");

        session.verify_all();
        assert_eq!(session.status().score, "Score: -1");
        assert_eq!(session.status().hover, "");
    }
}
