#![deny(unsafe_code)]

pub mod country;
pub mod error;
pub mod state;
pub mod style;

pub use country::{CountrySchema, Geometry, Polygon};
pub use error::{ModelError, Result};
pub use state::{CountryState, StateEvent};
pub use style::{CountryStyle, StateStyle};
