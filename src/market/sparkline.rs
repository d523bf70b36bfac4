use rand::Rng;

use crate::math::Point2;
use crate::path::{PathCommand, PathString};

/// Samples in a sparkline.
pub const SPARKLINE_POINTS: usize = 24;

/// Chart width in pixels.
pub const SPARKLINE_WIDTH: f64 = 400.0;

/// Baseline the fill area closes against.
pub const SPARKLINE_FLOOR: f64 = 80.0;

/// Lowest value maps here; the highest maps 50 px above.
const SPARKLINE_BOTTOM: f64 = 70.0;
const SPARKLINE_SPAN: f64 = 50.0;

/// Draws an illustrative 24h price trace for a coin that moved
/// `change_24h` percent.
///
/// A random walk from 100 with steps of ±2 plus a drift that grows along the
/// trace in the direction of the change. The walk is then fitted into a
/// `400 × [20, 70]` box, higher values nearer the top. A flat walk sits on
/// the bottom line.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_sparkline<R: Rng>(change_24h: f64, rng: &mut R) -> Vec<Point2> {
    let trend = change_24h / 100.0;
    let mut value = 100.0;
    let values: Vec<f64> = (0..SPARKLINE_POINTS)
        .map(|i| {
            let noise = (rng.random::<f64>() - 0.5) * 4.0;
            let drift = trend * (i as f64 / SPARKLINE_POINTS as f64) * 10.0;
            value += noise + drift * 0.5;
            value
        })
        .collect();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min > 0.0 { max - min } else { 1.0 };
    let step = SPARKLINE_WIDTH / (SPARKLINE_POINTS - 1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Point2::new(
                i as f64 * step,
                SPARKLINE_BOTTOM - (v - min) / range * SPARKLINE_SPAN,
            )
        })
        .collect()
}

/// Stroke and fill outlines of a sparkline.
#[derive(Debug, Clone, PartialEq)]
pub struct SparklinePaths {
    /// Polyline through every sample.
    pub line: PathString,
    /// The polyline closed down to [`SPARKLINE_FLOOR`].
    pub fill: PathString,
    /// Where the trace ends, for the marker dot.
    pub end: Point2,
}

/// Builds the stroke and fill outlines for `points`, or `None` if empty.
#[must_use]
pub fn sparkline_paths(points: &[Point2]) -> Option<SparklinePaths> {
    let (first, rest) = points.split_first()?;
    let end = *points.last()?;

    let mut commands = vec![PathCommand::MoveTo(*first)];
    commands.extend(rest.iter().copied().map(PathCommand::LineTo));
    let line = PathString::from(commands.clone());

    commands.push(PathCommand::LineTo(Point2::new(end.x, SPARKLINE_FLOOR)));
    commands.push(PathCommand::LineTo(Point2::new(first.x, SPARKLINE_FLOOR)));
    commands.push(PathCommand::Close);

    Some(SparklinePaths {
        line,
        fill: PathString::from(commands),
        end,
    })
}
