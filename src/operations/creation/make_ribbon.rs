use crate::error::Result;
use crate::geometry::{BuildRibbon, Ribbon, Spiral};
use crate::math::Projector;
use crate::path::{combine_edges, to_smooth_path, PathString};

use super::RibbonConfig;

/// A twisted ribbon with its drawable outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistedRibbon {
    /// Front edge as an open curve.
    pub front: PathString,
    /// Back edge as an open curve, walked from the outer end inward.
    pub back: PathString,
    /// Closed outline enclosing the strip, suitable for filling.
    pub combined: PathString,
    /// Projected edge points.
    pub ribbon: Ribbon,
}

/// Creates a twisted ribbon from a [`RibbonConfig`].
///
/// Samples a spiral from `start_radius` to `radius`, twists a strip of
/// `width` around it, projects the edges through a perspective camera
/// centered at `(center_x, center_y)` and serializes the result.
pub struct MakeRibbon {
    config: RibbonConfig,
}

impl MakeRibbon {
    /// Creates a new `MakeRibbon` operation.
    #[must_use]
    pub fn new(config: RibbonConfig) -> Self {
        Self { config }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero, the focal length is not
    /// positive, the width is negative, or the ribbon reaches the eye plane
    /// (`z_spread >= perspective`).
    pub fn execute(&self) -> Result<TwistedRibbon> {
        let cfg = &self.config;
        let spiral = Spiral::new(
            cfg.start_radius,
            cfg.radius,
            cfg.turns,
            cfg.segments,
            cfg.z_spread,
        )?;
        let samples: Vec<_> = spiral.samples().collect();
        let projector = Projector::new(cfg.perspective, cfg.center())?;

        let ribbon = BuildRibbon::new(&samples, cfg.twist, cfg.width, projector).execute()?;

        let front_points = ribbon.front_points();
        let back_points = ribbon.back_points();

        Ok(TwistedRibbon {
            front: to_smooth_path(&front_points, false, false),
            back: to_smooth_path(&back_points, true, false),
            combined: combine_edges(&front_points, &back_points),
            ribbon,
        })
    }
}

/// Creates a twisted ribbon with the given shape and remaining options.
///
/// `radius`, `turns`, `width` and `segments` override the corresponding
/// fields of `options`.
///
/// # Errors
///
/// See [`MakeRibbon::execute`].
pub fn create_twisted_ribbon(
    radius: f64,
    turns: f64,
    width: f64,
    segments: usize,
    options: RibbonConfig,
) -> Result<TwistedRibbon> {
    MakeRibbon::new(RibbonConfig {
        radius,
        turns,
        width,
        segments,
        ..options
    })
    .execute()
}
