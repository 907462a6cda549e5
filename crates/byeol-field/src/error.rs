//! Field error types.

/// Errors that can occur when mounting a star field.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The drawing surface has no drawable area.
    #[error("drawing surface has no area ({width}x{height})")]
    EmptySurface {
        /// Surface width in pixels.
        width: u16,
        /// Surface height in pixels.
        height: u16,
    },
}
