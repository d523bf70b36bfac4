use crate::error::{GeometryError, Result};

use super::{Point2, Point3, TOLERANCE};

/// A 3D point projected onto the screen plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen-space position.
    pub point: Point2,
    /// Z of the source point.
    pub depth: f64,
    /// Perspective scale factor, `focal / (focal + z)`.
    pub scale: f64,
}

/// Perspective projection with a fixed focal length and screen center.
///
/// Points must satisfy `z > -focal_length`; at `z == -focal_length` the
/// scale factor is singular and behind it the image flips, so both are
/// rejected instead of yielding infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    focal_length: f64,
    center: Point2,
}

impl Projector {
    /// Creates a new projector.
    ///
    /// # Errors
    ///
    /// Returns an error if `focal_length` is not finite and positive, or the
    /// center is not finite.
    pub fn new(focal_length: f64, center: Point2) -> Result<Self> {
        if !focal_length.is_finite() || focal_length <= 0.0 {
            return Err(GeometryError::InvalidFocalLength(focal_length).into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::NonFinite("center").into());
        }
        Ok(Self {
            focal_length,
            center,
        })
    }

    /// Returns the focal length.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Returns the screen center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Projects a 3D point onto the screen.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ProjectionSingularity`] if the point lies on
    /// or behind the eye plane (`focal + z <= 0`).
    pub fn project(&self, point: &Point3) -> Result<Projected> {
        let denom = self.focal_length + point.z;
        if denom <= TOLERANCE || denom.is_nan() {
            return Err(GeometryError::ProjectionSingularity {
                z: point.z,
                focal_length: self.focal_length,
            }
            .into());
        }
        let scale = self.focal_length / denom;
        Ok(Projected {
            point: Point2::new(
                self.center.x + point.x * scale,
                self.center.y + point.y * scale,
            ),
            depth: point.z,
            scale,
        })
    }
}

/// Projects `point` with the given focal length around `center`.
///
/// # Errors
///
/// See [`Projector::new`] and [`Projector::project`].
pub fn project(point: &Point3, focal_length: f64, center: Point2) -> Result<Projected> {
    Projector::new(focal_length, center)?.project(point)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::RibbonError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn point_on_screen_plane_is_unscaled() {
        let r = project(&p(10.0, -5.0, 0.0), 800.0, Point2::new(400.0, 300.0)).unwrap();
        assert_relative_eq!(r.scale, 1.0);
        assert_relative_eq!(r.point.x, 410.0);
        assert_relative_eq!(r.point.y, 295.0);
        assert_relative_eq!(r.depth, 0.0);
    }

    #[test]
    fn nearer_points_are_magnified() {
        let r = project(&p(10.0, 10.0, -400.0), 800.0, Point2::origin()).unwrap();
        assert_relative_eq!(r.scale, 2.0);
        assert_relative_eq!(r.point.x, 20.0);
        assert_relative_eq!(r.point.y, 20.0);
    }

    #[test]
    fn farther_points_shrink() {
        let r = project(&p(10.0, 0.0, 800.0), 800.0, Point2::origin()).unwrap();
        assert_relative_eq!(r.scale, 0.5);
        assert_relative_eq!(r.point.x, 5.0);
    }

    #[test]
    fn huge_focal_length_approaches_orthographic() {
        let r = project(&p(12.0, -7.0, 150.0), 1e12, Point2::new(1.0, 2.0)).unwrap();
        assert_abs_diff_eq!(r.scale, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.point.x, 13.0, epsilon = 1e-8);
        assert_abs_diff_eq!(r.point.y, -5.0, epsilon = 1e-8);
    }

    #[test]
    fn singular_depth_is_rejected() {
        let err = project(&p(1.0, 1.0, -800.0), 800.0, Point2::origin()).unwrap_err();
        assert!(matches!(
            err,
            RibbonError::Geometry(GeometryError::ProjectionSingularity { .. })
        ));
    }

    #[test]
    fn behind_eye_is_rejected() {
        assert!(project(&p(0.0, 0.0, -1000.0), 800.0, Point2::origin()).is_err());
    }

    #[test]
    fn nan_depth_is_rejected() {
        assert!(project(&p(0.0, 0.0, f64::NAN), 800.0, Point2::origin()).is_err());
    }

    #[test]
    fn invalid_focal_length_is_rejected() {
        assert!(Projector::new(0.0, Point2::origin()).is_err());
        assert!(Projector::new(-5.0, Point2::origin()).is_err());
        assert!(Projector::new(f64::INFINITY, Point2::origin()).is_err());
        assert!(Projector::new(800.0, Point2::new(f64::NAN, 0.0)).is_err());
    }
}
