//! Field configuration and its validation rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::StarColor;

/// Star count used when none is configured.
pub const DEFAULT_STARS: i64 = 200;
/// Star count substituted for a non-positive configured value.
pub const FALLBACK_STARS: i64 = 100;
/// Average radius used when none is configured.
pub const DEFAULT_AVERAGE_RADIUS: f64 = 2.0;
/// Average radius substituted for an invalid configured value.
pub const FALLBACK_AVERAGE_RADIUS: f64 = 3.0;
/// Blink frequency bound used when none is configured.
pub const DEFAULT_BLINK_FREQUENCY: f64 = 7.0;
/// Blink frequency bound substituted for an invalid configured value.
pub const FALLBACK_BLINK_FREQUENCY: f64 = 8.0;

/// Configuration snapshot for one star field.
///
/// Note that the fallbacks applied by [`sanitized`](Self::sanitized) differ
/// from the omitted-value defaults: an absent star count means 200, a
/// configured-but-invalid one means 100, and likewise 2.0 vs 3.0 for the
/// radius and 7.0 vs 8.0 for the frequency bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Number of stars placed by field initialization.
    pub stars: i64,
    /// Mean star size; each star draws its radius from `Uniform(0, average_radius)`.
    pub average_radius: f64,
    /// Fill and glow color shared by every star.
    pub color: StarColor,
    /// Upper bound of the per-star random oscillation frequency.
    pub blink_frequency: f64,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            stars: DEFAULT_STARS,
            average_radius: DEFAULT_AVERAGE_RADIUS,
            color: StarColor::White,
            blink_frequency: DEFAULT_BLINK_FREQUENCY,
        }
    }
}

impl FieldOptions {
    /// Replace invalid numeric values with their fallbacks.
    ///
    /// Corrections are silent: a non-positive star count becomes
    /// [`FALLBACK_STARS`], a non-positive or non-finite radius becomes
    /// [`FALLBACK_AVERAGE_RADIUS`], a non-positive or non-finite frequency
    /// bound becomes [`FALLBACK_BLINK_FREQUENCY`]. Each substitution is
    /// reported at debug level.
    pub fn sanitized(mut self) -> Self {
        if self.stars <= 0 {
            debug!(given = self.stars, using = FALLBACK_STARS, "invalid star count");
            self.stars = FALLBACK_STARS;
        }
        if self.average_radius <= 0.0 || !self.average_radius.is_finite() {
            debug!(
                given = self.average_radius,
                using = FALLBACK_AVERAGE_RADIUS,
                "invalid average radius"
            );
            self.average_radius = FALLBACK_AVERAGE_RADIUS;
        }
        if self.blink_frequency <= 0.0 || !self.blink_frequency.is_finite() {
            debug!(
                given = self.blink_frequency,
                using = FALLBACK_BLINK_FREQUENCY,
                "invalid blink frequency"
            );
            self.blink_frequency = FALLBACK_BLINK_FREQUENCY;
        }
        self
    }
}
