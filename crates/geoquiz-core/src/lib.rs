#![deny(unsafe_code)]

pub mod country;
pub mod event;
pub mod render;
pub mod session;
pub mod status;

pub use country::{Country, TransitionError};
pub use event::{EventOutcome, MapEvent};
pub use render::{LogRenderer, NoopRenderer, Renderer};
pub use session::{CountrySetup, MapSession, Progress, SessionError, VerifyReport};
pub use status::{GUESS_COUNTRY, MAKE_SELECTION, StatusView};
