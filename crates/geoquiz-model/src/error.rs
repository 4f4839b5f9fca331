use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid country name: {0:?}")]
    InvalidCountryName(String),
    #[error("unknown country state: {0}")]
    UnknownState(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
