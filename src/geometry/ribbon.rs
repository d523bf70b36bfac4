use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{rotate_z_vector, Point2, Point3, Projector, Vector3};

use super::spiral::SpiralSample;

/// A projected point on one edge of a ribbon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonEdgePoint {
    /// Screen-space position.
    pub projected: Point2,
    /// Edge position before projection, kept for depth sorting and shading.
    pub original: Point3,
    /// Perspective scale at this point.
    pub scale: f64,
}

/// A twisted strip: two index-aligned edge curves along a spiral.
///
/// `front[i]`, `back[i]` and `centerline[i]` all derive from the same spiral
/// sample, so the three sequences always have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ribbon {
    pub front: Vec<RibbonEdgePoint>,
    pub back: Vec<RibbonEdgePoint>,
    /// Projected spiral centerline.
    pub centerline: Vec<Point2>,
}

impl Ribbon {
    /// Number of samples along the ribbon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    /// Returns whether the ribbon has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Projected positions of the front edge.
    #[must_use]
    pub fn front_points(&self) -> Vec<Point2> {
        self.front.iter().map(|e| e.projected).collect()
    }

    /// Projected positions of the back edge.
    #[must_use]
    pub fn back_points(&self) -> Vec<Point2> {
        self.back.iter().map(|e| e.projected).collect()
    }

    /// Mean depth of both edges, for painter's-order sorting of ribbons.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_depth(&self) -> f64 {
        let n = self.front.len() + self.back.len();
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .front
            .iter()
            .chain(&self.back)
            .map(|e| e.original.z)
            .sum();
        sum / n as f64
    }
}

/// Builds a twisted ribbon around a sequence of spiral samples.
///
/// At each sample the half-width vector points along the sample's tangent
/// direction and is rotated about Z by `t * twist_turns * 2pi`. The front edge
/// takes the rotated vector and the back edge its negation.
pub struct BuildRibbon<'a> {
    samples: &'a [SpiralSample],
    twist_turns: f64,
    width: f64,
    projector: Projector,
}

impl<'a> BuildRibbon<'a> {
    /// Creates a new `BuildRibbon` operation.
    #[must_use]
    pub fn new(
        samples: &'a [SpiralSample],
        twist_turns: f64,
        width: f64,
        projector: Projector,
    ) -> Self {
        Self {
            samples,
            twist_turns,
            width,
            projector,
        }
    }

    /// Executes the build, returning both projected edges.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is negative or either parameter is not
    /// finite, or if any edge point falls on or behind the projector's eye
    /// plane.
    pub fn execute(&self) -> Result<Ribbon> {
        if !self.twist_turns.is_finite() {
            return Err(GeometryError::NonFinite("twist").into());
        }
        if !self.width.is_finite() {
            return Err(GeometryError::NonFinite("width").into());
        }
        if self.width < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "width",
                value: self.width,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let half_width = self.width * 0.5;
        let n = self.samples.len();
        let mut ribbon = Ribbon {
            front: Vec::with_capacity(n),
            back: Vec::with_capacity(n),
            centerline: Vec::with_capacity(n),
        };

        for sample in self.samples {
            let twist = sample.t * self.twist_turns * TAU;
            let (sin, cos) = sample.tangent_angle.sin_cos();
            let offset = Vector3::new(cos * half_width, sin * half_width, 0.0);

            let front = sample.center + rotate_z_vector(offset, twist);
            let back = sample.center + rotate_z_vector(-offset, twist);

            ribbon.front.push(self.edge_point(front)?);
            ribbon.back.push(self.edge_point(back)?);
            ribbon
                .centerline
                .push(self.projector.project(&sample.center)?.point);
        }

        Ok(ribbon)
    }

    fn edge_point(&self, original: Point3) -> Result<RibbonEdgePoint> {
        let projected = self.projector.project(&original)?;
        Ok(RibbonEdgePoint {
            projected: projected.point,
            original,
            scale: projected.scale,
        })
    }
}

/// Builds a ribbon from spiral samples.
///
/// # Errors
///
/// See [`BuildRibbon::execute`].
pub fn build_ribbon(
    samples: &[SpiralSample],
    twist_turns: f64,
    width: f64,
    projector: Projector,
) -> Result<Ribbon> {
    BuildRibbon::new(samples, twist_turns, width, projector).execute()
}
