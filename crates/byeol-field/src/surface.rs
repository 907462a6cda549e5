//! The drawing surface the field renders onto.

use byeol_core::Rgb;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Gaussian sigma per unit of glow blur, scaled for cell-resolution pixels.
const GLOW_SIGMA_PER_BLUR: f64 = 1.0 / 8.0;

/// How many sigmas past the circle edge the glow is rasterized.
const GLOW_REACH_SIGMAS: f64 = 3.5;

/// The complete style state of one filled-shape draw call.
///
/// Every draw passes all of it; the surface keeps no style state between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Fill and glow color.
    pub color: Rgb,
    /// Opacity in [0, 1].
    pub alpha: f64,
    /// Glow blur radius in surface units; 0 disables the glow.
    pub glow: f64,
}

/// A 2D pixel target the star field can draw on.
pub trait Surface {
    /// Current size in pixels, `(width, height)`.
    fn dimensions(&self) -> (u16, u16);

    /// Reset every pixel to black.
    fn clear(&mut self);

    /// Composite a filled circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint);
}

/// RGB framebuffer presented to the terminal as half-block glyphs.
///
/// Each character cell stacks two pixels vertically, so a buffer for a
/// `cols x rows` terminal is `cols` pixels wide and `rows * 2` pixels tall.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a black buffer of the given pixel dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    /// Create a buffer sized for a terminal of `cols` columns and `rows` rows.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows.saturating_mul(2))
    }

    /// Pixel at `(x, y)`; out-of-bounds reads are black.
    pub fn pixel(&self, x: u16, y: u16) -> Rgb {
        if x >= self.width || y >= self.height {
            return Rgb::BLACK;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Composite `color` additively onto the pixel at `(x, y)`.
    fn blend(&mut self, x: usize, y: usize, color: Rgb) {
        let idx = y * self.width as usize + x;
        self.pixels[idx] = self.pixels[idx].saturating_add(color);
    }

    /// Render the buffer as one text line per terminal row.
    ///
    /// The upper pixel of each cell becomes the foreground of a `'▀'` span
    /// and the lower pixel its background.
    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.height / 2)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|col| {
                        let top = self.pixel(col, row * 2);
                        let bottom = self.pixel(col, row * 2 + 1);
                        Span::styled("▀", Style::new().fg(top.to_color()).bg(bottom.to_color()))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for PixelBuffer {
    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint) {
        let alpha = paint.alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 || radius < 0.0 {
            return;
        }
        let sigma = paint.glow.max(0.0) * GLOW_SIGMA_PER_BLUR;
        let reach = radius + GLOW_REACH_SIGMAS * sigma;

        let x0 = ((x - reach).floor() as i64).max(0) as usize;
        let y0 = ((y - reach).floor() as i64).max(0) as usize;
        let x1 = ((x + reach).ceil() as i64).min(i64::from(self.width) - 1);
        let y1 = ((y + reach).ceil() as i64).min(i64::from(self.height) - 1);
        if x1 < x0 as i64 || y1 < y0 as i64 {
            return;
        }
        let (x1, y1) = (x1 as usize, y1 as usize);

        for py in y0..=y1 {
            for px in x0..=x1 {
                // Sample at the pixel center.
                let dx = px as f64 + 0.5 - x;
                let dy = py as f64 + 0.5 - y;
                let dist = (dx * dx + dy * dy).sqrt();

                let coverage = if dist <= radius {
                    1.0
                } else if sigma > 0.0 {
                    let past_edge = dist - radius;
                    (-(past_edge * past_edge) / (2.0 * sigma * sigma)).exp()
                } else {
                    0.0
                };

                let level = alpha * coverage;
                // Skip contributions below one 8-bit step.
                if level < 1.0 / 255.0 {
                    continue;
                }
                self.blend(px, py, paint.color.scale(level));
            }
        }
    }
}
