//! Color vocabulary for the starfield.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple with the channel arithmetic the pixel surface needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black, the cleared-surface color.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Scale every channel by `factor`, with `factor` clamped to [0, 1].
    pub fn scale(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f64 * f).round() as u8,
            (self.1 as f64 * f).round() as u8,
            (self.2 as f64 * f).round() as u8,
        )
    }

    /// Add another color channel-wise, saturating at full brightness.
    pub fn saturating_add(self, other: Rgb) -> Rgb {
        Rgb(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }

    /// Convert to a terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Named fill/glow color shared by every star in a field.
///
/// Serialized by lowercase name, so a settings file says `color = "gold"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarColor {
    /// Plain white stars.
    #[default]
    White,
    /// Warm yellow-orange stars.
    Gold,
    /// Pale blue stars.
    SkyBlue,
    /// Soft green stars.
    Mint,
    /// Muted pink stars.
    Rose,
}

impl StarColor {
    /// Resolve the palette entry to its RGB triple.
    pub fn rgb(self) -> Rgb {
        match self {
            StarColor::White => Rgb(255, 255, 255),
            StarColor::Gold => Rgb(255, 215, 0),
            StarColor::SkyBlue => Rgb(135, 206, 235),
            StarColor::Mint => Rgb(127, 255, 212),
            StarColor::Rose => Rgb(255, 150, 170),
        }
    }
}

impl fmt::Display for StarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StarColor::White => "white",
            StarColor::Gold => "gold",
            StarColor::SkyBlue => "skyblue",
            StarColor::Mint => "mint",
            StarColor::Rose => "rose",
        };
        f.write_str(name)
    }
}
