use crate::math::{Point2, TOLERANCE};

/// Passes [`resolve_collisions`] makes before giving up.
pub const MAX_COLLISION_PASSES: usize = 50;

/// A placed bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Point2,
    pub radius: f64,
}

impl Disc {
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Pushes overlapping discs apart until every pair is at least
/// `min_distance` apart edge to edge.
///
/// Each pass visits every pair once and moves both discs of a crowded pair
/// away from each other by half the shortfall. Discs with identical centers
/// have no direction to move in and are left alone. Returns `true` when a
/// pass finds nothing to fix within [`MAX_COLLISION_PASSES`].
pub fn resolve_collisions(discs: &mut [Disc], min_distance: f64) -> bool {
    for _ in 0..MAX_COLLISION_PASSES {
        let mut moved = false;
        for i in 0..discs.len() {
            for j in i + 1..discs.len() {
                let delta = discs[j].center - discs[i].center;
                let distance = delta.norm();
                let separation = discs[i].radius + discs[j].radius + min_distance;
                if distance <= TOLERANCE || distance + TOLERANCE >= separation {
                    continue;
                }
                moved = true;
                let push = delta * ((separation - distance) * 0.5 / distance);
                discs[i].center -= push;
                discs[j].center += push;
            }
        }
        if !moved {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn min_gap(discs: &[Disc]) -> f64 {
        let mut gap = f64::INFINITY;
        for (i, a) in discs.iter().enumerate() {
            for b in &discs[i + 1..] {
                gap = gap.min((b.center - a.center).norm() - a.radius - b.radius);
            }
        }
        gap
    }

    #[test]
    fn pair_is_split_symmetrically() {
        let mut discs = [
            Disc::new(Point2::new(0.0, 0.0), 55.0),
            Disc::new(Point2::new(50.0, 0.0), 55.0),
        ];
        assert!(resolve_collisions(&mut discs, 10.0));
        assert_abs_diff_eq!(discs[0].center.x, -35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(discs[1].center.x, 85.0, epsilon = 1e-9);
        assert_abs_diff_eq!(discs[0].center.y, 0.0);
    }

    #[test]
    fn cluster_settles_with_gap() {
        let mut discs: Vec<Disc> = (0..6)
            .map(|i| {
                let (col, row) = (f64::from(i % 3), f64::from(i / 3));
                Disc::new(Point2::new(100.0 + col * 15.0, 100.0 + row * 12.0), 20.0)
            })
            .collect();
        assert!(min_gap(&discs) < 0.0);
        assert!(resolve_collisions(&mut discs, 10.0));
        assert!(min_gap(&discs) >= 10.0 - 1e-6);
    }

    #[test]
    fn separated_discs_do_not_move() {
        let original = [
            Disc::new(Point2::new(0.0, 0.0), 10.0),
            Disc::new(Point2::new(100.0, 0.0), 10.0),
        ];
        let mut discs = original;
        assert!(resolve_collisions(&mut discs, 10.0));
        assert_eq!(discs, original);
    }

    #[test]
    fn coincident_centers_are_left_alone() {
        let mut discs = [
            Disc::new(Point2::new(5.0, 5.0), 10.0),
            Disc::new(Point2::new(5.0, 5.0), 10.0),
        ];
        assert!(resolve_collisions(&mut discs, 10.0));
        assert_eq!(discs[0].center, discs[1].center);
    }
}
