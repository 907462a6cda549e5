//! Field lifecycle: population, the per-frame step, and the entry operation.

use byeol_core::{FieldOptions, StarColor};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::FieldError;
use crate::star::Star;
use crate::surface::Surface;

/// The star collection and its per-frame update/draw step.
#[derive(Debug, Clone)]
pub struct StarField {
    /// Sanitized configuration snapshot.
    options: FieldOptions,
    /// Seeded generator behind all star placement.
    rng: ChaCha8Rng,
    /// Stars in insertion order.
    stars: Vec<Star>,
}

impl StarField {
    /// Create an empty field from a sanitized snapshot of `options`.
    ///
    /// The RNG is seeded from `seed`; equal seeds and options produce
    /// identical skies.
    pub fn new(options: FieldOptions, seed: u64) -> Self {
        Self {
            options: options.sanitized(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            stars: Vec::new(),
        }
    }

    /// Populate the field with `options.stars` randomized stars.
    ///
    /// Positions land in `[0, width) x [0, height)` and base radii in
    /// `[0, average_radius)`. A dimension without a positive finite extent
    /// places every star at 0 on that axis; the population count is
    /// unaffected. Calling this a second time appends another population
    /// instead of replacing the first; construct a new field for a fresh
    /// sky.
    pub fn init(&mut self, width: f64, height: f64) {
        for _ in 0..self.options.stars {
            let x = self.sample_axis(width);
            let y = self.sample_axis(height);
            let radius = self.rng.random_range(0.0..self.options.average_radius);
            let brightness = self.rng.random::<f64>();
            self.stars.push(Star::new(
                x,
                y,
                radius,
                brightness,
                self.options.blink_frequency,
                &mut self.rng,
            ));
        }
        debug!(stars = self.stars.len(), "field populated");
    }

    /// Uniform sample in `[0, bound)`; a bound with no positive finite
    /// extent collapses the sample to 0.
    fn sample_axis(&mut self, bound: f64) -> f64 {
        if bound > 0.0 && bound.is_finite() {
            self.rng.random_range(0.0..bound)
        } else {
            0.0
        }
    }

    /// Run one frame: clear the surface, then advance and draw every star.
    ///
    /// Stars are visited in insertion order. Scheduling the next frame is
    /// the caller's job.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        let color = self.options.color.rgb();
        for star in &mut self.stars {
            star.twinkle();
            star.draw(surface, color);
        }
    }

    /// The stars currently in the field, in insertion order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// The sanitized options this field runs with.
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Switch the palette entry used by subsequent draws.
    ///
    /// The bundled binary keeps its configured color for the whole run; this
    /// hook is for embedding applications that restyle a mounted field.
    pub fn set_color(&mut self, color: StarColor) {
        self.options.color = color;
    }
}

/// Validate, populate, and render the first frame of a field on `surface`.
///
/// A zero-area surface is the fatal misuse case, reported before any star is
/// created or pixel touched. Invalid numeric options are corrected silently
/// (see [`FieldOptions::sanitized`]). On success the surface holds the first
/// frame and the caller's loop drives every frame after it.
pub fn mount(
    surface: &mut dyn Surface,
    options: FieldOptions,
    seed: u64,
) -> Result<StarField, FieldError> {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(FieldError::EmptySurface { width, height });
    }

    let mut field = StarField::new(options, seed);
    surface.clear();
    field.init(f64::from(width), f64::from(height));
    field.render_frame(surface);
    info!(
        stars = field.stars.len(),
        width,
        height,
        seed,
        color = %field.options.color,
        "star field mounted"
    );
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Paint;

    const SEED: u64 = 0xB1E0;

    /// Surface double that records every call made to it.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        width: u16,
        height: u16,
        clears: usize,
        circles: Vec<(f64, f64, f64, Paint)>,
    }

    impl RecordingSurface {
        fn new(width: u16, height: u16) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }
    }

    impl Surface for RecordingSurface {
        fn dimensions(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint) {
            self.circles.push((x, y, radius, paint));
        }
    }

    fn options(stars: i64) -> FieldOptions {
        FieldOptions {
            stars,
            ..Default::default()
        }
    }

    #[test]
    fn test_init_places_stars_inside_bounds() {
        let mut field = StarField::new(options(50), SEED);
        field.init(80.0, 48.0);
        assert_eq!(field.stars().len(), 50);
        for star in field.stars() {
            let (x, y) = star.position();
            assert!((0.0..80.0).contains(&x), "x out of bounds: {x}");
            assert!((0.0..48.0).contains(&y), "y out of bounds: {y}");
            assert!(star.radius() < 2.0);
        }
    }

    #[test]
    fn test_init_twice_appends_a_second_population() {
        let mut field = StarField::new(options(30), SEED);
        field.init(80.0, 48.0);
        field.init(80.0, 48.0);
        assert_eq!(field.stars().len(), 60);
    }

    #[test]
    fn test_init_with_zero_width_collapses_that_axis() {
        let mut field = StarField::new(options(10), SEED);
        field.init(0.0, 48.0);
        assert_eq!(field.stars().len(), 10);
        for star in field.stars() {
            let (x, y) = star.position();
            assert_eq!(x, 0.0);
            assert!((0.0..48.0).contains(&y), "y out of bounds: {y}");
        }
    }

    #[test]
    fn test_init_with_negative_height_collapses_that_axis() {
        let mut field = StarField::new(options(10), SEED);
        field.init(80.0, -5.0);
        assert_eq!(field.stars().len(), 10);
        for star in field.stars() {
            assert_eq!(star.position().1, 0.0);
        }
    }

    #[test]
    fn test_init_with_non_finite_dimensions_collapses_to_the_origin() {
        let mut field = StarField::new(options(10), SEED);
        field.init(f64::NAN, f64::INFINITY);
        assert_eq!(field.stars().len(), 10);
        for star in field.stars() {
            assert_eq!(star.position(), (0.0, 0.0));
        }
    }

    #[test]
    fn test_same_seed_produces_the_same_sky() {
        let mut a = StarField::new(options(40), SEED);
        let mut b = StarField::new(options(40), SEED);
        a.init(100.0, 50.0);
        b.init(100.0, 50.0);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_different_seeds_produce_different_skies() {
        let mut a = StarField::new(options(40), SEED);
        let mut b = StarField::new(options(40), SEED + 1);
        a.init(100.0, 50.0);
        b.init(100.0, 50.0);
        assert_ne!(a.stars(), b.stars());
    }

    #[test]
    fn test_render_frame_clears_then_advances_every_star() {
        let mut field = StarField::new(options(25), SEED);
        field.init(80.0, 48.0);
        let mut surface = RecordingSurface::new(80, 48);

        let before: Vec<f64> = field.stars().iter().map(|s| s.brightness_time()).collect();
        field.render_frame(&mut surface);
        field.render_frame(&mut surface);

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.circles.len(), 50); // 25 stars x 2 frames
        for (star, start) in field.stars().iter().zip(before) {
            assert!((star.brightness_time() - (start + 0.02)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_draw_couples_radius_and_alpha_to_brightness() {
        let mut field = StarField::new(options(10), SEED);
        field.init(80.0, 48.0);
        let mut surface = RecordingSurface::new(80, 48);
        field.render_frame(&mut surface);

        for (star, (x, y, radius, paint)) in field.stars().iter().zip(&surface.circles) {
            assert_eq!(star.position(), (*x, *y));
            assert_eq!(*radius, star.radius() * star.brightness());
            assert_eq!(paint.alpha, star.brightness());
            assert_eq!(paint.glow, 50.0);
        }
    }

    #[test]
    fn test_mount_renders_the_first_frame() {
        let mut surface = RecordingSurface::new(80, 48);
        let field = mount(&mut surface, options(20), SEED).unwrap();
        assert_eq!(field.stars().len(), 20);
        // One up-front clear plus the first frame's clear.
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.circles.len(), 20);
    }

    #[test]
    fn test_mount_rejects_an_empty_surface() {
        let mut surface = RecordingSurface::new(0, 48);
        let result = mount(&mut surface, options(20), SEED);
        assert!(matches!(result, Err(FieldError::EmptySurface { .. })));
        assert_eq!(surface.clears, 0);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_mount_substitutes_fallbacks_for_invalid_options() {
        let mut surface = RecordingSurface::new(80, 48);
        let bad = FieldOptions {
            stars: 0,
            average_radius: -5.0,
            blink_frequency: 0.0,
            ..Default::default()
        };
        let field = mount(&mut surface, bad, SEED).unwrap();
        assert_eq!(field.stars().len(), 100);
        assert_eq!(field.options().average_radius, 3.0);
        assert_eq!(field.options().blink_frequency, 8.0);
    }

    #[test]
    fn test_set_color_changes_subsequent_draws() {
        let mut field = StarField::new(options(5), SEED);
        field.init(80.0, 48.0);
        field.set_color(StarColor::Gold);
        let mut surface = RecordingSurface::new(80, 48);
        field.render_frame(&mut surface);
        assert!(
            surface
                .circles
                .iter()
                .all(|(_, _, _, p)| p.color == StarColor::Gold.rgb())
        );
    }
}
