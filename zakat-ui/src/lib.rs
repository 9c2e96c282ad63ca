pub mod config;
pub mod form;
pub mod logging;
pub mod utils;

pub use config::{ConfigError, Preferences};
pub use form::{FieldAssignment, InputMode, ParseAssignmentError};
