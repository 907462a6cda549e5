//! Core types for the byeol starfield application.
//!
//! This crate holds the pieces shared by the field renderer, the settings
//! file, and the terminal binary: the field configuration snapshot with its
//! validation rules, and the small color vocabulary the pixel surface
//! composites with.

mod color;
mod options;

pub use color::{Rgb, StarColor};
pub use options::{
    DEFAULT_AVERAGE_RADIUS, DEFAULT_BLINK_FREQUENCY, DEFAULT_STARS, FALLBACK_AVERAGE_RADIUS,
    FALLBACK_BLINK_FREQUENCY, FALLBACK_STARS, FieldOptions,
};
