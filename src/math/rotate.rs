use super::{Point3, Vector3};

/// Rotates a point around the Z axis by `angle` radians.
///
/// `x' = x*cos(a) - y*sin(a)`, `y' = x*sin(a) + y*cos(a)`; z is unchanged.
#[must_use]
pub fn rotate_z(point: Point3, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(point.x * c - point.y * s, point.x * s + point.y * c, point.z)
}

/// Rotates a vector around the Z axis by `angle` radians.
#[must_use]
pub fn rotate_z_vector(v: Vector3, angle: f64) -> Vector3 {
    rotate_z(Point3::from(v), angle).coords
}
