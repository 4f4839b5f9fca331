#![deny(unsafe_code)]

pub mod builder;
pub mod countries;
pub mod error;
pub mod paths;
pub mod style;

pub use crate::builder::{BuiltSchema, RegionRow, build_schema, load_regions, parse_regions};
pub use crate::countries::{
    CountryRecord, country_schema_to_string, load_country_schema, parse_country_schema,
    write_country_schema,
};
pub use crate::error::{Result, SchemaError};
pub use crate::paths::{country_schema_path, resources_root, style_schema_path};
pub use crate::style::StyleSchema;
