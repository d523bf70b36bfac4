use crate::math::{midpoint, Point2};

use super::{PathCommand, PathString};

/// Builds a smoothed path along `points`.
///
/// The curve is anchored at the midpoints between consecutive points and
/// uses the points themselves as quadratic controls, so it bends toward
/// each interior point without passing through it. Only the first and last
/// points lie on the path: the walk starts with a curve from `points[0]` to
/// the first midpoint and ends with a smooth continuation (`T`) to the last
/// point.
///
/// Returns an empty path for fewer than two points. With `reverse` the
/// points are walked back to front; with `closed` a close instruction is
/// appended.
#[must_use]
pub fn to_smooth_path(points: &[Point2], reverse: bool, closed: bool) -> PathString {
    if points.len() < 2 {
        return PathString::new();
    }

    let mut commands = if reverse {
        let reversed: Vec<Point2> = points.iter().rev().copied().collect();
        smooth_commands(&reversed)
    } else {
        smooth_commands(points)
    };

    if closed {
        commands.push(PathCommand::Close);
    }
    PathString::from(commands)
}

/// Move to the first point followed by the curve commands for the rest.
///
/// A single point yields just the move.
pub(super) fn smooth_commands(points: &[Point2]) -> Vec<PathCommand> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(PathCommand::MoveTo(*first));
    if points.len() < 2 {
        return commands;
    }

    // Every point except the last controls a curve ending at the midpoint
    // to its successor.
    for pair in points.windows(2) {
        commands.push(PathCommand::QuadTo {
            control: pair[0],
            to: midpoint(&pair[0], &pair[1]),
        });
    }
    commands.push(PathCommand::SmoothQuadTo(*last));
    commands
}
