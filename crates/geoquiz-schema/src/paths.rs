//! Resource directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the resources directory.
pub const RESOURCES_ENV_VAR: &str = "GEOQUIZ_RESOURCES_DIR";

pub const COUNTRY_SCHEMA_FILE: &str = "country_schema.csv";
pub const STYLE_SCHEMA_FILE: &str = "style_schema.json";

/// Get the resources root directory.
///
/// Resolution order:
/// 1. `GEOQUIZ_RESOURCES_DIR` environment variable
/// 2. `resources/` directory relative to workspace root
pub fn resources_root() -> PathBuf {
    if let Ok(root) = std::env::var(RESOURCES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources")
}

pub fn country_schema_path() -> PathBuf {
    resources_root().join(COUNTRY_SCHEMA_FILE)
}

pub fn style_schema_path() -> PathBuf {
    resources_root().join(STYLE_SCHEMA_FILE)
}
