//! Style schema: per-state colours with palette tokens.
//!
//! ```json
//! {
//!   "country_style": {
//!     "open": {"outline": "black", "fill": "CCANDIDATE"},
//!     "guessed": {"outline": "grey", "fill": "CSHADOW"}
//!   },
//!   "colour_codes": {
//!     "CCANDIDATE": {"C1": "#F5A573", "C2": "#E4CD88"},
//!     "CSHADOW": {"C1": "#231810", "C2": "#221F15"}
//!   }
//! }
//! ```
//!
//! A style value starting with a token such as `CCANDIDATE` is replaced by
//! the colour listed for the country's palette key. Other values (`black`,
//! `#006994`) are used as-is.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use geoquiz_model::{CountryState, CountryStyle, StateStyle};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

static COLOUR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(C[A-Z]+)").expect("colour token pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSchema {
    /// State name → outline/fill, possibly holding colour tokens.
    pub country_style: BTreeMap<String, StateStyle>,
    /// Colour token → palette key → colour.
    #[serde(default)]
    pub colour_codes: BTreeMap<String, BTreeMap<String, String>>,
}

impl StyleSchema {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| SchemaError::io(path, e))?;
        let schema: Self = serde_json::from_slice(&bytes).map_err(|source| SchemaError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        schema.validate()?;
        tracing::debug!(
            path = %path.display(),
            tokens = schema.colour_codes.len(),
            "loaded style schema"
        );
        Ok(schema)
    }

    /// Check that every state is styled and every state name is known.
    pub fn validate(&self) -> Result<()> {
        for state in self.country_style.keys() {
            state
                .parse::<CountryState>()
                .map_err(|_| SchemaError::UnknownState {
                    state: state.clone(),
                })?;
        }
        for state in CountryState::ALL {
            if !self.country_style.contains_key(state.as_str()) {
                return Err(SchemaError::MissingState { state });
            }
        }
        Ok(())
    }

    /// Resolve the colours for one palette key.
    pub fn for_palette(&self, key: &str) -> Result<CountryStyle> {
        let mut style = CountryStyle::default();
        for (name, raw) in &self.country_style {
            let state = name
                .parse::<CountryState>()
                .map_err(|_| SchemaError::UnknownState {
                    state: name.clone(),
                })?;
            let resolved = StateStyle {
                outline: self.substitute(&raw.outline, key)?,
                fill: self.substitute(&raw.fill, key)?,
            };
            style.insert(state, resolved);
        }
        Ok(style)
    }

    fn substitute(&self, value: &str, key: &str) -> Result<String> {
        let Some(token) = COLOUR_TOKEN.captures(value).and_then(|c| c.get(1)) else {
            return Ok(value.to_string());
        };
        let token = token.as_str();
        self.colour_codes
            .get(token)
            .and_then(|palette| palette.get(key))
            .cloned()
            .ok_or_else(|| SchemaError::MissingColour {
                token: token.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> StyleSchema {
        serde_json::from_str(
            r##"{
                "country_style": {
                    "open": {"outline": "black", "fill": "CCANDIDATE"},
                    "guessed": {"outline": "grey", "fill": "CSHADOW"}
                },
                "colour_codes": {
                    "CCANDIDATE": {"C1": "#F5A573"},
                    "CSHADOW": {"C1": "#231810"}
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn substitutes_palette_tokens() {
        let style = schema().for_palette("C1").unwrap();
        assert_eq!(
            style.for_state(CountryState::Open),
            StateStyle::new("black", "#F5A573")
        );
        assert_eq!(
            style.for_state(CountryState::Guessed),
            StateStyle::new("grey", "#231810")
        );
    }

    #[test]
    fn plain_colours_pass_through() {
        let schema = schema();
        assert_eq!(schema.substitute("black", "C1").unwrap(), "black");
        assert_eq!(schema.substitute("#006994", "C1").unwrap(), "#006994");
    }

    #[test]
    fn missing_palette_key_is_an_error() {
        let err = schema().for_palette("C9").unwrap_err();
        assert!(matches!(err, SchemaError::MissingColour { ref key, .. } if key == "C9"));
    }

    #[test]
    fn validate_requires_every_state() {
        let err = schema().validate().unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingState {
                state: CountryState::Highlighted
            }
        ));
    }
}
