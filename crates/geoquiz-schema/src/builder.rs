//! Derive a country schema from a region attribute table.
//!
//! The input has one row per region (a territory drawn as its own shape),
//! using Natural Earth admin-0 column names:
//!
//! ```text
//! SOVEREIGNT,NAME,NAME_LONG,AREA,MAPCOLOR7
//! France,France,French Republic,64.1,7
//! France,Fr. Polynesia,French Polynesia,0.3,7
//! ```
//!
//! Regions are grouped by sovereignty. Each group yields one country whose
//! accepted names are the sovereignty plus the short and long name of its
//! main territory.

use std::collections::BTreeMap;
use std::path::Path;

use geoquiz_match::similarity;
use geoquiz_model::CountrySchema;

use crate::countries::CountryRecord;
use crate::error::{Result, SchemaError};

/// Territory names this close to the sovereignty name mark the main territory.
pub const MAIN_NAME_SIMILARITY: f64 = 95.0;
/// Territories smaller than this share of the main territory may be hidden.
pub const COUNTRY_AREA_FRACTION: f64 = 0.05;
/// Territories smaller than this share of the world may be hidden.
pub const GLOBAL_AREA_FRACTION: f64 = 1e-4;

/// Countries excluded from play.
pub const DISPUTED: [&str; 4] = ["Kashmir", "Northern Cyprus", "Western Sahara", "Somaliland"];
/// Sovereignties left off the map entirely.
pub const EXCLUDED: [&str; 1] = ["Antarctica"];

/// One row of the region attribute table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub sovereignty: String,
    pub name: String,
    pub name_long: String,
    pub area: f64,
    pub map_colour: u8,
}

/// Schema rows plus the regions dropped as too small to draw.
#[derive(Debug, Clone, Default)]
pub struct BuiltSchema {
    pub records: Vec<CountryRecord>,
    /// `(sovereignty, region name)` pairs.
    pub hidden: Vec<(String, String)>,
}

pub fn load_regions(path: &Path) -> Result<Vec<RegionRow>> {
    let bytes = std::fs::read(path).map_err(|e| SchemaError::io(path, e))?;
    parse_regions(&bytes, path)
}

pub fn parse_regions(bytes: &[u8], path: &Path) -> Result<Vec<RegionRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| SchemaError::csv(path, &e))?
        .clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SchemaError::csv(path, &e))?;
        let line = row.position().map_or(0, csv::Position::line);
        let get = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_matches('\u{feff}').eq_ignore_ascii_case(name))
                .and_then(|i| row.get(i))
                .unwrap_or_default()
        };
        let invalid = |field: &'static str, raw: &str| SchemaError::InvalidField {
            path: path.to_path_buf(),
            line,
            field,
            message: format!("{raw:?}"),
        };

        let sovereignty = get("SOVEREIGNT");
        if sovereignty.is_empty() {
            return Err(invalid("SOVEREIGNT", sovereignty));
        }
        let area_raw = get("AREA");
        let area = area_raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| invalid("AREA", area_raw))?;
        let colour_raw = get("MAPCOLOR7");
        let map_colour = colour_raw
            .parse::<u8>()
            .map_err(|_| invalid("MAPCOLOR7", colour_raw))?;

        rows.push(RegionRow {
            sovereignty: sovereignty.to_string(),
            name: get("NAME").to_string(),
            name_long: get("NAME_LONG").to_string(),
            area,
            map_colour,
        });
    }
    Ok(rows)
}

/// Group regions into countries and rank them by total area.
pub fn build_schema(mut regions: Vec<RegionRow>) -> BuiltSchema {
    // Palestine is listed under Israel's sovereignty in the source data.
    for region in &mut regions {
        if region.name == "Palestine" {
            region.sovereignty = "Palestine".to_string();
        }
    }

    let global_area: f64 = regions.iter().map(|r| r.area).sum();
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, region) in regions.iter().enumerate() {
        groups.entry(region.sovereignty.as_str()).or_default().push(idx);
    }

    let mut built = BuiltSchema::default();
    let mut areas = Vec::new();
    for (sovereignty, members) in groups {
        if EXCLUDED.contains(&sovereignty) {
            tracing::debug!(sovereignty, "excluded from map");
            continue;
        }
        let main = main_territory(sovereignty, &members, &regions);
        let main_area = regions[main].area;

        let mut kept = Vec::new();
        for &idx in &members {
            let region = &regions[idx];
            let country_fraction = if main_area > 0.0 {
                region.area / main_area
            } else {
                1.0
            };
            let global_fraction = if global_area > 0.0 {
                region.area / global_area
            } else {
                1.0
            };
            if country_fraction < COUNTRY_AREA_FRACTION && global_fraction < GLOBAL_AREA_FRACTION {
                built
                    .hidden
                    .push((sovereignty.to_string(), region.name.clone()));
            } else {
                kept.push(idx);
            }
        }

        let names = [&regions[main].name, &regions[main].name_long]
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let colour = format!("C{}", regions[members[0]].map_colour);
        let disputed = DISPUTED.contains(&sovereignty);
        let Ok(schema) = CountrySchema::new(sovereignty, names, 0, disputed, colour) else {
            tracing::warn!(sovereignty, "skipping region group with a blank name");
            continue;
        };
        areas.push(members.iter().map(|&i| regions[i].area).sum::<f64>());
        built.records.push(CountryRecord {
            schema,
            regions: kept,
        });
    }

    assign_order(&mut built.records, &areas);
    tracing::info!(
        countries = built.records.len(),
        hidden = built.hidden.len(),
        "built country schema"
    );
    built
}

/// Pick the territory named like the sovereignty, else the largest one.
fn main_territory(sovereignty: &str, members: &[usize], regions: &[RegionRow]) -> usize {
    let named = members.iter().copied().find(|&idx| {
        let region = &regions[idx];
        [&region.name, &region.name_long]
            .into_iter()
            .any(|name| similarity(name, sovereignty) > MAIN_NAME_SIMILARITY)
    });
    named.unwrap_or_else(|| {
        members
            .iter()
            .copied()
            .reduce(|best, idx| {
                if regions[idx].area > regions[best].area {
                    idx
                } else {
                    best
                }
            })
            .unwrap_or_default()
    })
}

/// Rank 1 goes to the largest total area; ties keep name order.
fn assign_order(records: &mut [CountryRecord], areas: &[f64]) {
    let mut ranked: Vec<usize> = (0..records.len()).collect();
    ranked.sort_by(|&a, &b| areas[b].total_cmp(&areas[a]));
    for (rank, idx) in ranked.into_iter().enumerate() {
        records[idx].schema.order = u32::try_from(rank + 1).unwrap_or(u32::MAX);
    }
}
