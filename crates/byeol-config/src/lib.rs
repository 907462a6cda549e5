//! Settings persistence for the byeol starfield application.
//!
//! Settings live in a TOML file at the platform configuration directory.
//! Every field has a default, so the file is optional end to end: absent,
//! partial, or broken files all resolve to usable settings.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{DEFAULT_FRAME_RATE, Settings};
