use crate::math::Point2;

use super::smooth::smooth_commands;
use super::{PathCommand, PathString};

/// Stitches two ribbon edges into one closed, fillable outline.
///
/// Walks `front` forward as a smooth curve, draws a straight segment to the
/// last point of `back`, walks `back` in reverse as a smooth curve and closes
/// the shape. Returns an empty path if either edge is empty.
#[must_use]
pub fn combine_edges(front: &[Point2], back: &[Point2]) -> PathString {
    let Some(back_last) = back.last() else {
        return PathString::new();
    };
    if front.is_empty() {
        return PathString::new();
    }

    let mut commands = smooth_commands(front);
    commands.push(PathCommand::LineTo(*back_last));

    let reversed: Vec<Point2> = back.iter().rev().copied().collect();
    // The reversed walk starts where the connecting line ended.
    commands.extend(smooth_commands(&reversed).into_iter().skip(1));

    commands.push(PathCommand::Close);
    PathString::from(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_edge_gives_empty_outline() {
        let edge = [pt(0.0, 0.0), pt(1.0, 1.0)];
        assert!(combine_edges(&[], &edge).is_empty());
        assert!(combine_edges(&edge, &[]).is_empty());
    }

    #[test]
    fn outline_walks_front_then_back_reversed() {
        let front = [pt(0.0, 0.0), pt(10.0, 0.0), pt(20.0, 0.0)];
        let back = [pt(0.0, 10.0), pt(10.0, 10.0), pt(20.0, 10.0)];
        let path = combine_edges(&front, &back);
        assert_eq!(
            path.to_string(),
            "M 0.00 0.00 Q 0.00 0.00 5.00 0.00 Q 10.00 0.00 15.00 0.00 T 20.00 0.00 \
             L 20.00 10.00 Q 20.00 10.00 15.00 10.00 Q 10.00 10.00 5.00 10.00 T 0.00 10.00 Z"
        );
    }

    #[test]
    fn single_point_edges_form_a_segment() {
        let path = combine_edges(&[pt(1.0, 1.0)], &[pt(2.0, 2.0)]);
        assert_eq!(path.to_string(), "M 1.00 1.00 L 2.00 2.00 Z");
    }

    #[test]
    fn outline_starts_with_move_and_ends_with_close() {
        let front = [pt(0.0, 0.0), pt(3.0, 4.0)];
        let back = [pt(0.0, 1.0), pt(3.0, 5.0)];
        let path = combine_edges(&front, &back);
        assert!(matches!(path.commands.first(), Some(PathCommand::MoveTo(_))));
        assert!(path.is_closed());
    }
}
