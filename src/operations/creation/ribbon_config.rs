use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Scene parameters for a single twisted ribbon.
///
/// All lengths are in screen units. Defaults match the stock spiral bubble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonConfig {
    /// Screen-space X of the spiral origin.
    pub center_x: f64,
    /// Screen-space Y of the spiral origin.
    pub center_y: f64,
    /// Outer (end) radius of the spiral.
    pub radius: f64,
    /// Inner (start) radius of the spiral.
    pub start_radius: f64,
    /// Number of spiral revolutions.
    pub turns: f64,
    /// Number of twists of the strip around its own centerline.
    pub twist: f64,
    /// Number of segments; the ribbon has `segments + 1` samples per edge.
    pub segments: usize,
    /// Strip width.
    pub width: f64,
    /// Depth travelled toward the viewer from start to end.
    pub z_spread: f64,
    /// Perspective focal length.
    pub perspective: f64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            radius: 200.0,
            start_radius: 10.0,
            turns: 2.5,
            twist: 3.0,
            segments: 60,
            width: 30.0,
            z_spread: 150.0,
            perspective: 800.0,
        }
    }
}

impl RibbonConfig {
    /// Base parameters for a burst: coarser sampling and shallower depth, since
    /// each further ribbon adds depth of its own.
    #[must_use]
    pub fn burst() -> Self {
        Self {
            segments: 50,
            z_spread: 100.0,
            ..Self::default()
        }
    }

    /// Screen-space center as a point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.center_x, self.center_y)
    }

    /// Returns a copy centered at `(x, y)`.
    #[must_use]
    pub fn centered_at(self, x: f64, y: f64) -> Self {
        Self {
            center_x: x,
            center_y: y,
            ..self
        }
    }
}
