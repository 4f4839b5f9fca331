//! Static per-country reference data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Static reference data for one country, loaded once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySchema {
    /// Unique key; also the name offered by autocomplete.
    pub name: String,
    /// Spellings accepted as a correct guess. Always contains `name`.
    pub names: BTreeSet<String>,
    /// Draw rank. Rank 1 is the largest country and is drawn first.
    pub order: u32,
    /// Disputed countries are excluded from play and scoring.
    pub disputed: bool,
    /// Palette key substituted into the style schema (e.g. `C3`).
    pub colour: String,
}

impl CountrySchema {
    /// Create a schema entry. `name` is added to the accepted names.
    pub fn new(
        name: impl Into<String>,
        names: impl IntoIterator<Item = String>,
        order: u32,
        disputed: bool,
        colour: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCountryName(name));
        }
        let name = trimmed.to_string();
        let mut names: BTreeSet<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        names.insert(name.clone());
        Ok(Self {
            name,
            names,
            order,
            disputed,
            colour: colour.into(),
        })
    }

    /// Returns true if `guess` is one of the accepted spellings.
    ///
    /// Matching is exact and case-sensitive.
    pub fn accepts(&self, guess: &str) -> bool {
        self.names.contains(guess)
    }
}

/// A closed boundary ring in longitude/latitude degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Vec<[f64; 2]>,
}

/// Country outline as supplied by the region loader.
///
/// Opaque to the quiz core; it is only handed back to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub polygons: Vec<Polygon>,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.exterior.is_empty())
    }
}
