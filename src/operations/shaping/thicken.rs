use crate::math::Vector2;
use crate::path::PathString;

/// Number of stacked copies used to fake thickness.
const LAYERS: u32 = 3;

/// One stacked copy of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessLayer {
    pub path: PathString,
    /// Translation to apply when drawing this layer.
    pub offset: Vector2,
    pub opacity: f64,
    /// Layer index, 0 on top.
    pub layer: u32,
}

/// Fakes depth by stacking translated, fading copies of a path.
///
/// Layer `i` is shifted diagonally by `i / 2 * thickness` and drawn at
/// opacity `1 - 0.3 * i`. This is a cheap illusion, not a true offset curve.
pub struct Thicken<'a> {
    path: &'a PathString,
    thickness: f64,
}

impl<'a> Thicken<'a> {
    /// Creates a new `Thicken` operation.
    #[must_use]
    pub fn new(path: &'a PathString, thickness: f64) -> Self {
        Self { path, thickness }
    }

    /// Executes the operation, returning the layers top to bottom.
    #[must_use]
    pub fn execute(&self) -> Vec<ThicknessLayer> {
        (0..LAYERS)
            .map(|layer| {
                let i = f64::from(layer);
                let shift = i / f64::from(LAYERS - 1) * self.thickness;
                ThicknessLayer {
                    path: self.path.clone(),
                    offset: Vector2::new(shift, shift),
                    opacity: 1.0 - i * 0.3,
                    layer,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point2;
    use crate::path::to_smooth_path;

    #[test]
    fn three_fading_layers() {
        let path = to_smooth_path(&[Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)], false, true);
        let layers = Thicken::new(&path, 5.0).execute();
        assert_eq!(layers.len(), 3);

        assert_abs_diff_eq!(layers[0].offset.x, 0.0);
        assert_abs_diff_eq!(layers[1].offset.x, 2.5);
        assert_abs_diff_eq!(layers[2].offset.y, 5.0);

        assert_abs_diff_eq!(layers[0].opacity, 1.0);
        assert_abs_diff_eq!(layers[1].opacity, 0.7);
        assert_abs_diff_eq!(layers[2].opacity, 0.4, epsilon = 1e-12);

        assert!(layers.iter().all(|l| l.path == path));
        assert_eq!(layers[2].layer, 2);
    }

    #[test]
    fn zero_thickness_stacks_in_place() {
        let path = PathString::new();
        let layers = Thicken::new(&path, 0.0).execute();
        assert!(layers.iter().all(|l| l.offset == Vector2::zeros()));
    }
}
