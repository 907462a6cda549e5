//! The single twinkling star entity.

use byeol_core::Rgb;
use rand::Rng;

use crate::surface::{Paint, Surface};

/// Phase advance applied by every twinkle tick.
pub const BRIGHTNESS_STEP: f64 = 0.01;

/// Glow blur radius carried by every star draw, in surface units.
pub const GLOW_BLUR: f64 = 50.0;

/// Span of the randomized initial phase, `Uniform(0, 10)`.
const INITIAL_PHASE_SPAN: f64 = 10.0;

/// One point light with a sinusoidal brightness cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position, fixed at creation.
    x: f64,
    /// Vertical position, fixed at creation.
    y: f64,
    /// Base radius; the drawn radius is scaled by current brightness.
    radius: f64,
    /// Current brightness in [0, 1] once the first tick has run.
    brightness: f64,
    /// Personal oscillation frequency, fixed at creation.
    frequency: f64,
    /// Phase accumulator, advanced by [`BRIGHTNESS_STEP`] per tick.
    brightness_time: f64,
}

impl Star {
    /// Create a star at `(x, y)` with the given base radius and starting
    /// brightness.
    ///
    /// The oscillation frequency is drawn from `Uniform(0, blink_frequency)`
    /// and the initial phase from `Uniform(0, 10)`. A frequency bound of 0
    /// yields a degenerate star whose brightness never changes.
    pub(crate) fn new<R: Rng + ?Sized>(
        x: f64,
        y: f64,
        radius: f64,
        brightness: f64,
        blink_frequency: f64,
        rng: &mut R,
    ) -> Self {
        let frequency = if blink_frequency > 0.0 {
            rng.random_range(0.0..blink_frequency)
        } else {
            0.0
        };
        Self {
            x,
            y,
            radius,
            brightness,
            frequency,
            brightness_time: rng.random_range(0.0..INITIAL_PHASE_SPAN),
        }
    }

    /// Advance the brightness cycle by one tick.
    ///
    /// The phase moves forward by [`BRIGHTNESS_STEP`] and the brightness is
    /// recomputed as `0.5 * sin(frequency * phase) + 0.5`, which lies in
    /// [0, 1] for any finite phase.
    pub fn twinkle(&mut self) {
        self.brightness_time += BRIGHTNESS_STEP;
        self.brightness = 0.5 * (self.frequency * self.brightness_time).sin() + 0.5;
    }

    /// Draw the star as one filled circle.
    ///
    /// The drawn radius is `radius * brightness`, so a dim star shrinks as
    /// well as fades. The paint carries color, opacity, and the fixed
    /// [`GLOW_BLUR`]; nothing persists on the surface between calls.
    pub fn draw(&self, surface: &mut dyn Surface, color: Rgb) {
        surface.fill_circle(
            self.x,
            self.y,
            self.radius * self.brightness,
            Paint {
                color,
                alpha: self.brightness,
                glow: GLOW_BLUR,
            },
        );
    }

    /// Position of the star, `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Base radius drawn at full brightness.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current brightness value.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Personal oscillation frequency.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Current phase accumulator value.
    pub fn brightness_time(&self) -> f64 {
        self.brightness_time
    }
}
