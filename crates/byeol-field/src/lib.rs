//! A twinkling starfield rendered onto a pixel surface.
//!
//! A [`StarField`] owns a population of [`Star`]s placed by a seeded RNG and
//! redraws them every frame: the surface is cleared, every star advances its
//! sinusoidal brightness cycle, and each is drawn as a filled circle whose
//! radius and opacity both follow the current brightness.
//!
//! [`mount`] is the entry operation. It validates the surface, corrects
//! invalid options, populates the field, and draws the first frame; the
//! embedding application's loop drives every frame after that and stops the
//! effect by simply not ticking it again.

mod error;
mod field;
mod star;
mod surface;

pub use error::FieldError;
pub use field::{StarField, mount};
pub use star::{BRIGHTNESS_STEP, GLOW_BLUR, Star};
pub use surface::{Paint, PixelBuffer, Surface};
