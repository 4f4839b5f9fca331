//! Country schema CSV.
//!
//! One row per country:
//!
//! ```text
//! country,names,colour,order,disputed,regions
//! Italy,Italy;Italian Republic,C3,71,false,104
//! ```
//!
//! `names` and `regions` are `;`-separated. `regions` lists the source
//! region rows drawn for the country and is only read by geometry loaders.

use std::collections::BTreeSet;
use std::path::Path;

use geoquiz_model::CountrySchema;

use crate::error::{Result, SchemaError};

pub const HEADERS: [&str; 6] = ["country", "names", "colour", "order", "disputed", "regions"];

/// A schema row plus the region rows it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub schema: CountrySchema,
    pub regions: Vec<usize>,
}

/// Load every country from a schema CSV, in file order.
pub fn load_country_schema(path: &Path) -> Result<Vec<CountryRecord>> {
    let bytes = std::fs::read(path).map_err(|e| SchemaError::io(path, e))?;
    parse_country_schema(&bytes, path)
}

/// Parse schema CSV bytes. `path` is only used in error messages.
pub fn parse_country_schema(bytes: &[u8], path: &Path) -> Result<Vec<CountryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| SchemaError::csv(path, &e))?
        .clone();

    let mut seen = BTreeSet::new();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SchemaError::csv(path, &e))?;
        let line = row.position().map_or(0, csv::Position::line);

        let get = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_matches('\u{feff}') == name)
                .and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
        };
        let invalid = |field: &'static str, message: String| SchemaError::InvalidField {
            path: path.to_path_buf(),
            line,
            field,
            message,
        };

        let name = get("country").ok_or_else(|| invalid("country", "missing".to_string()))?;
        let names = get("names").map(split_list).unwrap_or_default();
        let colour = get("colour").unwrap_or_default();
        let order = match get("order") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| invalid("order", format!("{raw:?}: {e}")))?,
            None => 0,
        };
        let disputed = match get("disputed") {
            Some(raw) => parse_flag(raw).ok_or_else(|| invalid("disputed", format!("{raw:?}")))?,
            None => false,
        };
        let regions = match get("regions") {
            Some(raw) => split_list(raw)
                .into_iter()
                .map(|r| {
                    r.parse::<usize>()
                        .map_err(|e| invalid("regions", format!("{r:?}: {e}")))
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let schema = CountrySchema::new(name, names, order, disputed, colour)
            .map_err(|e| invalid("country", e.to_string()))?;
        if !seen.insert(schema.name.clone()) {
            return Err(SchemaError::DuplicateCountry {
                path: path.to_path_buf(),
                line,
                country: schema.name,
            });
        }
        records.push(CountryRecord { schema, regions });
    }

    tracing::debug!(path = %path.display(), countries = records.len(), "loaded country schema");
    Ok(records)
}

/// Write records in the format read by [`load_country_schema`].
pub fn write_country_schema(path: &Path, records: &[CountryRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| SchemaError::csv(path, &e))?;
    write_records(&mut writer, records).map_err(|e| SchemaError::csv(path, &e))?;
    writer.flush().map_err(|e| SchemaError::io(path, e))
}

/// Render records as CSV text.
pub fn country_schema_to_string(records: &[CountryRecord]) -> std::result::Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, records)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[CountryRecord],
) -> std::result::Result<(), csv::Error> {
    writer.write_record(HEADERS)?;
    for record in records {
        let schema = &record.schema;
        let names = schema.names.iter().cloned().collect::<Vec<_>>().join(";");
        let order = schema.order.to_string();
        let regions = record
            .regions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            schema.name.as_str(),
            names.as_str(),
            schema.colour.as_str(),
            order.as_str(),
            if schema.disputed { "true" } else { "false" },
            regions.as_str(),
        ])?;
    }
    Ok(())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn splits_name_lists() {
        assert_eq!(
            split_list(" Vatican ; Holy See;;"),
            vec!["Vatican".to_string(), "Holy See".to_string()]
        );
    }
}
