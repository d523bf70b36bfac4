mod collision;
mod honeycomb;

use rand::Rng;

use crate::math::Point2;

pub use collision::{resolve_collisions, Disc, MAX_COLLISION_PASSES};
pub use honeycomb::{optimal_grid, GridLayout, HoneycombGrid};

/// Fraction of a cell a bubble may drift from the cell center.
const JITTER: f64 = 0.3;

/// Scatters `count` positions over a `width` × `height` area.
///
/// The area is split into a grid with `ceil(sqrt(1.5 * count))` columns and
/// as many rows as needed, filled row by row. Each position is its cell
/// center moved by up to ±15% of the cell size on both axes.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn grid_positions<R: Rng>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Point2> {
    if count == 0 {
        return Vec::new();
    }

    let cols = ((count as f64 * 1.5).sqrt().ceil() as usize).max(1);
    let rows = count.div_ceil(cols);
    let cell_w = width / cols as f64;
    let cell_h = height / rows as f64;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            let jx = (rng.random::<f64>() - 0.5) * cell_w * JITTER;
            let jy = (rng.random::<f64>() - 0.5) * cell_h * JITTER;
            Point2::new(
                col * cell_w + cell_w / 2.0 + jx,
                row * cell_h + cell_h / 2.0 + jy,
            )
        })
        .collect()
}
