use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{Color, ColorStop, Rgb};

/// Target color for positive price moves (`#00ff88`).
pub const GAIN_COLOR: Rgb = Rgb::new(0.0, 255.0, 136.0);

/// Target color for negative price moves (`#ff4444`).
pub const LOSS_COLOR: Rgb = Rgb::new(255.0, 68.0, 68.0);

/// Maximum blend toward [`GAIN_COLOR`] / [`LOSS_COLOR`] at a 100% move.
const MAX_SHIFT: f64 = 0.7;

/// Builds a five-stop chrome gradient around `base_hex`.
///
/// Stops run shadow, mid-shadow, base, mid-highlight, highlight at offsets
/// 0/25/50/75/100. The highlight blends toward white by `0.9 * intensity`
/// and the shadow toward black by `0.7 * intensity`; the mid stops use half
/// of those factors. `intensity` is not clamped: values far outside
/// `[0.5, 2.0]` give washed-out or inverted ramps.
///
/// # Errors
///
/// Returns an error if `base_hex` is not a valid `#rrggbb` color.
pub fn metallic_gradient(base_hex: &str, intensity: f64) -> Result<[ColorStop; 5]> {
    let base = Rgb::from_hex(base_hex)?;
    let highlight = 0.9 * intensity;
    let shadow = 0.7 * intensity;

    Ok([
        ColorStop::new(0.0, base.darken(shadow)),
        ColorStop::new(25.0, base.darken(shadow * 0.5)),
        ColorStop::new(50.0, base),
        ColorStop::new(75.0, base.brighten(highlight * 0.5)),
        ColorStop::new(100.0, base.brighten(highlight)),
    ])
}

/// Shifts `base_hex` toward green or red according to a percentage move.
///
/// `percent_change` is clamped to `[-100, 100]`; the blend factor is
/// `0.7 * |change| / 100`. A zero (or NaN) change returns the base color.
///
/// # Errors
///
/// Returns an error if `base_hex` is not a valid `#rrggbb` color.
pub fn dynamic_shift(base_hex: &str, percent_change: f64) -> Result<Rgb> {
    let base = Rgb::from_hex(base_hex)?;
    let factor = percent_change.clamp(-100.0, 100.0) / 100.0;

    if factor > 0.0 {
        Ok(base.interpolate(&GAIN_COLOR, factor * MAX_SHIFT))
    } else if factor < 0.0 {
        Ok(base.interpolate(&LOSS_COLOR, -factor * MAX_SHIFT))
    } else {
        Ok(base)
    }
}

/// Light direction in normalized screen space (`-1..1` on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for LightPosition {
    /// Top-left key light.
    fn default() -> Self {
        Self { x: 0.3, y: -0.5 }
    }
}

/// Lighting factors for one surface orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceShading {
    pub highlight: f64,
    pub shadow: f64,
    pub specular: f64,
    pub brightness: f64,
}

/// Shades a surface whose normal points at `angle_deg` under `light`.
#[must_use]
pub fn surface_shading(angle_deg: f64, light: LightPosition) -> SurfaceShading {
    let (ny, nx) = angle_deg.to_radians().sin_cos();

    let len = light.x.hypot(light.y);
    let len = if len > 0.0 { len } else { 1.0 };
    let dot = nx * light.x / len + ny * light.y / len;

    let specular = dot.max(0.0).powi(16) * 0.9;
    let brightness = (0.5 + dot * 0.5).clamp(0.0, 1.0);
    let shadow = (0.5 - dot * 0.5).clamp(0.0, 1.0);

    SurfaceShading {
        highlight: brightness * 0.8 + specular * 0.2,
        shadow: shadow * 0.7,
        specular,
        brightness,
    }
}

/// Position of the orbiting key light at animation time `time`.
#[must_use]
pub fn light_orbit(time: f64) -> LightPosition {
    LightPosition {
        x: time.cos() * 0.6,
        y: (time * 0.7).sin() * 0.4 - 0.3,
    }
}

/// White sheen overlay stops, peaking at the middle of the strip.
#[must_use]
pub fn specular_stops() -> [ColorStop; 5] {
    let white = Rgb::new(255.0, 255.0, 255.0);
    [
        ColorStop::new(0.0, Color::Rgba(white, 0.0)),
        ColorStop::new(40.0, Color::Rgba(white, 0.1)),
        ColorStop::new(50.0, Color::Rgba(white, 0.6)),
        ColorStop::new(60.0, Color::Rgba(white, 0.1)),
        ColorStop::new(100.0, Color::Rgba(white, 0.0)),
    ]
}
