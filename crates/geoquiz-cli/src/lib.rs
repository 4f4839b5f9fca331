//! Terminal front end for the geography quiz.

pub mod logging;
pub mod play;
pub mod resources;
pub mod summary;
