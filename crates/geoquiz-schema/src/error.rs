#![deny(unsafe_code)]

use std::path::PathBuf;

use geoquiz_model::CountryState;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: invalid {field}: {message}")]
    InvalidField {
        path: PathBuf,
        line: u64,
        field: &'static str,
        message: String,
    },

    #[error("{path}:{line}: country listed twice: {country}")]
    DuplicateCountry {
        path: PathBuf,
        line: u64,
        country: String,
    },

    #[error("unknown state in style schema: {state}")]
    UnknownState { state: String },

    #[error("style schema has no entry for state {state}")]
    MissingState { state: CountryState },

    #[error("no colour for token {token} and palette key {key}")]
    MissingColour { token: String, key: String },
}

impl SchemaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
