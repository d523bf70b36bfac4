mod metallic;
mod palette;

pub use metallic::{
    dynamic_shift, light_orbit, metallic_gradient, specular_stops, surface_shading,
    LightPosition, SurfaceShading, GAIN_COLOR, LOSS_COLOR,
};
pub use palette::{bubble_colors, BubbleColors, Theme};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// An RGB color with unclamped floating-point channels in `[0, 255]`.
///
/// Blending math runs on raw channel values; clamping and rounding happen
/// only when the color is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Creates a color from channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_owned()).into());
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_owned()))?;
        Ok(Self::new(
            f64::from((value >> 16) & 0xff),
            f64::from((value >> 8) & 0xff),
            f64::from(value & 0xff),
        ))
    }

    /// Formats as lowercase `#rrggbb`, clamping and rounding each channel.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// Blends toward white by `factor`.
    #[must_use]
    pub fn brighten(&self, factor: f64) -> Self {
        Self::new(
            self.r + (255.0 - self.r) * factor,
            self.g + (255.0 - self.g) * factor,
            self.b + (255.0 - self.b) * factor,
        )
    }

    /// Blends toward black by `factor`.
    #[must_use]
    pub fn darken(&self, factor: f64) -> Self {
        Self::new(
            self.r * (1.0 - factor),
            self.g * (1.0 - factor),
            self.b * (1.0 - factor),
        )
    }

    /// Linear blend toward `other` by `factor`, rounded to whole channels.
    #[must_use]
    pub fn interpolate(&self, other: &Self, factor: f64) -> Self {
        Self::new(
            (self.r + (other.r - self.r) * factor).round(),
            (self.g + (other.g - self.g) * factor).round(),
            (self.b + (other.b - self.b) * factor).round(),
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A paint color, opaque or with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb(Rgb),
    Rgba(Rgb, f64),
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => write!(f, "{rgb}"),
            Self::Rgba(rgb, alpha) => write!(
                f,
                "rgba({},{},{},{})",
                channel(rgb.r),
                channel(rgb.g),
                channel(rgb.b),
                alpha.clamp(0.0, 1.0)
            ),
        }
    }
}

/// A gradient stop. `offset` is a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    /// Creates a new stop.
    #[must_use]
    pub fn new(offset: f64, color: impl Into<Color>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}
