//! Turn the schema files into session setups.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geoquiz_core::CountrySetup;
use geoquiz_schema::{CountryRecord, StyleSchema, load_country_schema};

/// Schema and style file locations, with unset paths taken from the
/// resources directory.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    pub schema: PathBuf,
    pub style: PathBuf,
}

impl ResourcePaths {
    pub fn resolve(schema: Option<&Path>, style: Option<&Path>) -> Self {
        Self {
            schema: schema.map_or_else(geoquiz_schema::country_schema_path, Path::to_path_buf),
            style: style.map_or_else(geoquiz_schema::style_schema_path, Path::to_path_buf),
        }
    }
}

pub fn load_records(paths: &ResourcePaths) -> Result<Vec<CountryRecord>> {
    load_country_schema(&paths.schema)
        .with_context(|| format!("loading country schema {}", paths.schema.display()))
}

/// Load both files and resolve each country's colours from its palette key.
pub fn load_setups(paths: &ResourcePaths) -> Result<Vec<CountrySetup>> {
    let records = load_records(paths)?;
    let style = StyleSchema::load(&paths.style)
        .with_context(|| format!("loading style schema {}", paths.style.display()))?;

    records
        .into_iter()
        .map(|record| {
            let colours = style
                .for_palette(&record.schema.colour)
                .with_context(|| format!("styling {}", record.schema.name))?;
            Ok(CountrySetup {
                style: colours,
                ..CountrySetup::from(record.schema)
            })
        })
        .collect()
}
