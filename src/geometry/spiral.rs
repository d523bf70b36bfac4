use std::f64::consts::{FRAC_PI_2, TAU};
use std::iter::FusedIterator;

use crate::error::{GeometryError, Result};
use crate::math::{lerp, Point3};

/// One point along a spiral centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralSample {
    /// Centerline position in 3D.
    pub center: Point3,
    /// Polar angle of the sample (radians).
    pub angle: f64,
    /// Direction perpendicular to the radius vector, `angle + pi/2`.
    pub tangent_angle: f64,
    /// Normalized position along the spiral in `[0, 1]`.
    pub t: f64,
    /// Spiral radius at `t`.
    pub radius: f64,
}

/// A widening spiral that recedes toward the viewer.
///
/// The radius grows linearly from `start_radius` to `end_radius` while the
/// depth follows a quarter-sine ease from `0` to `-z_spread`:
///
/// `P(t) = (r(t) cos(a), r(t) sin(a), -z_spread * sin(t * pi/2))`
/// with `a = t * turns * 2pi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spiral {
    start_radius: f64,
    end_radius: f64,
    turns: f64,
    segments: usize,
    z_spread: f64,
}

impl Spiral {
    /// Creates a new spiral.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero or any parameter is not finite.
    pub fn new(
        start_radius: f64,
        end_radius: f64,
        turns: f64,
        segments: usize,
        z_spread: f64,
    ) -> Result<Self> {
        if segments == 0 {
            #[allow(clippy::cast_precision_loss)]
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "segments",
                value: segments as f64,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        for (name, value) in [
            ("start_radius", start_radius),
            ("end_radius", end_radius),
            ("turns", turns),
            ("z_spread", z_spread),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        Ok(Self {
            start_radius,
            end_radius,
            turns,
            segments,
            z_spread,
        })
    }

    /// Returns the number of segments (samples - 1).
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Evaluates the sample at index `i` in `[0, segments]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, i: usize) -> SpiralSample {
        let t = i as f64 / self.segments as f64;
        let angle = t * self.turns * TAU;
        let radius = lerp(self.start_radius, self.end_radius, t);
        let (sin, cos) = angle.sin_cos();
        SpiralSample {
            center: Point3::new(
                cos * radius,
                sin * radius,
                -self.z_spread * (t * FRAC_PI_2).sin(),
            ),
            angle,
            tangent_angle: angle + FRAC_PI_2,
            t,
            radius,
        }
    }

    /// Returns a lazy iterator over all `segments + 1` samples.
    ///
    /// The spiral holds no iteration state, so this can be called again for a
    /// fresh pass.
    #[must_use]
    pub fn samples(&self) -> SpiralSamples {
        SpiralSamples {
            spiral: *self,
            next: 0,
            end: self.segments + 1,
        }
    }
}

impl IntoIterator for &Spiral {
    type Item = SpiralSample;
    type IntoIter = SpiralSamples;

    fn into_iter(self) -> SpiralSamples {
        self.samples()
    }
}

/// Iterator over the samples of a [`Spiral`].
#[derive(Debug, Clone)]
pub struct SpiralSamples {
    spiral: Spiral,
    next: usize,
    end: usize,
}

impl Iterator for SpiralSamples {
    type Item = SpiralSample;

    fn next(&mut self) -> Option<SpiralSample> {
        if self.next >= self.end {
            return None;
        }
        let sample = self.spiral.sample(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SpiralSamples {
    fn next_back(&mut self) -> Option<SpiralSample> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.spiral.sample(self.end))
    }
}

impl ExactSizeIterator for SpiralSamples {}

impl FusedIterator for SpiralSamples {}

/// Generates `segments + 1` spiral samples eagerly.
///
/// # Errors
///
/// See [`Spiral::new`].
pub fn generate_spiral(
    start_radius: f64,
    end_radius: f64,
    turns: f64,
    segments: usize,
    z_spread: f64,
) -> Result<Vec<SpiralSample>> {
    Ok(Spiral::new(start_radius, end_radius, turns, segments, z_spread)?
        .samples()
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn four_segment_spiral_has_exact_parameters() {
        let samples = generate_spiral(10.0, 100.0, 1.0, 4, 0.0).unwrap();
        assert_eq!(samples.len(), 5);

        let ts: Vec<f64> = samples.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let radii: Vec<f64> = samples.iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![10.0, 32.5, 55.0, 77.5, 100.0]);

        for s in &samples {
            assert!(s.center.z == 0.0, "z = {}", s.center.z);
        }
    }

    #[test]
    fn t_is_strictly_increasing() {
        let samples = generate_spiral(5.0, 50.0, 3.0, 37, 80.0).unwrap();
        for w in samples.windows(2) {
            assert!(w[1].t > w[0].t);
        }
    }

    #[test]
    fn depth_follows_quarter_sine() {
        let samples = generate_spiral(10.0, 200.0, 2.5, 60, 150.0).unwrap();
        assert_abs_diff_eq!(samples[0].center.z, 0.0);
        assert_abs_diff_eq!(samples[60].center.z, -150.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            samples[30].center.z,
            -150.0 * (PI / 4.0).sin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn tangent_is_perpendicular_to_radius() {
        for s in Spiral::new(10.0, 100.0, 1.75, 12, 40.0).unwrap().samples() {
            assert_abs_diff_eq!(s.tangent_angle - s.angle, PI / 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(s.center.x.hypot(s.center.y), s.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn final_angle_matches_turns() {
        let samples = generate_spiral(10.0, 100.0, 2.5, 10, 0.0).unwrap();
        assert_abs_diff_eq!(samples[10].angle, 2.5 * TAU, epsilon = 1e-12);
    }

    #[test]
    fn iterator_is_restartable_and_sized() {
        let spiral = Spiral::new(10.0, 100.0, 1.0, 8, 20.0).unwrap();
        let first: Vec<_> = spiral.samples().collect();
        let second: Vec<_> = (&spiral).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(spiral.samples().len(), 9);

        let reversed: Vec<_> = spiral.samples().rev().collect();
        assert_eq!(reversed.first(), first.last());
    }

    #[test]
    fn zero_segments_is_rejected() {
        assert!(Spiral::new(10.0, 100.0, 1.0, 0, 0.0).is_err());
    }

    #[test]
    fn non_finite_parameter_is_rejected() {
        assert!(Spiral::new(10.0, f64::NAN, 1.0, 4, 0.0).is_err());
        assert!(Spiral::new(10.0, 100.0, f64::INFINITY, 4, 0.0).is_err());
    }
}
