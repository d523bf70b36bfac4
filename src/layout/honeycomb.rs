use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Row pitch of a hexagonal packing as a fraction of the column spacing.
const HEX_ROW_RATIO: f64 = 0.866_025_403_784_438_6;

/// Sizing rules for [`optimal_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Smallest allowed distance between neighboring centers.
    pub min_spacing: f64,
    /// Margin kept free on every side.
    pub padding: f64,
    /// Height reserved above the grid.
    pub header: f64,
    /// Upper bound on the bubble radius.
    pub max_radius: f64,
    /// Space left between neighboring bubbles.
    pub gap: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            min_spacing: 120.0,
            padding: 40.0,
            header: 100.0,
            max_radius: 55.0,
            gap: 20.0,
        }
    }
}

/// A honeycomb arrangement: odd rows are shifted by half a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoneycombGrid {
    pub cols: usize,
    pub rows: usize,
    /// Distance between centers in a row.
    pub spacing: f64,
    /// Vertical distance between rows, `spacing * sqrt(3) / 2`.
    pub row_height: f64,
    pub bubble_radius: f64,
    /// Top-left corner of the first cell.
    pub origin: Point2,
}

impl HoneycombGrid {
    /// Total extent including the half-cell offset of odd rows.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> (f64, f64) {
        (
            self.cols as f64 * self.spacing + self.spacing / 2.0,
            self.rows as f64 * self.row_height + self.row_height / 2.0,
        )
    }

    /// Centers of the first `count` cells, filled row by row.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn positions(&self, count: usize) -> Vec<Point2> {
        let cols = self.cols.max(1);
        (0..count)
            .map(|i| {
                let (row, col) = (i / cols, i % cols);
                let shift = if row % 2 == 1 { self.spacing / 2.0 } else { 0.0 };
                Point2::new(
                    self.origin.x + col as f64 * self.spacing + self.spacing / 2.0 + shift,
                    self.origin.y + row as f64 * self.row_height + self.row_height / 2.0,
                )
            })
            .collect()
    }
}

/// Chooses a honeycomb grid for `count` bubbles in a `width` × `height` view.
///
/// Starts from as many columns of `min_spacing` as fit the padded width, then
/// tries every column count up to `ceil(count / 2)` whose spacing is at least
/// `min_spacing` and at most half the width, keeping the last one whose rows
/// fit under the header. Spacing never drops below `min_spacing`; the radius
/// is `min(max_radius, (spacing - gap) / 2)`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn optimal_grid(count: usize, width: f64, height: f64, layout: &GridLayout) -> HoneycombGrid {
    let available_width = (width - layout.padding * 2.0).max(0.0);
    let available_height = height - layout.padding * 2.0 - layout.header;

    let mut best_cols = ((available_width / layout.min_spacing).floor() as usize).max(1);
    let mut best_spacing = layout.min_spacing;

    for cols in 1..=count.div_ceil(2) {
        let spacing = available_width / cols as f64;
        if spacing < layout.min_spacing || spacing > available_width / 2.0 {
            continue;
        }
        let rows = count.div_ceil(cols);
        let row_height = spacing * HEX_ROW_RATIO;
        let offset = if rows > 1 { row_height / 2.0 } else { 0.0 };
        if rows as f64 * row_height + offset <= available_height || cols == 1 {
            best_cols = cols;
            best_spacing = spacing;
        }
    }

    HoneycombGrid {
        cols: best_cols,
        rows: count.div_ceil(best_cols),
        spacing: best_spacing,
        row_height: best_spacing * HEX_ROW_RATIO,
        bubble_radius: layout
            .max_radius
            .min((best_spacing - layout.gap) / 2.0),
        origin: Point2::new(layout.padding, layout.padding + layout.header),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn row_ratio_is_hexagonal() {
        assert_abs_diff_eq!(HEX_ROW_RATIO, 3.0_f64.sqrt() / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn fifty_bubbles_on_a_laptop_screen() {
        let grid = optimal_grid(50, 1280.0, 800.0, &GridLayout::default());
        assert_eq!(grid.cols, 10);
        assert_eq!(grid.rows, 5);
        assert_abs_diff_eq!(grid.spacing, 120.0);
        assert_abs_diff_eq!(grid.row_height, 120.0 * HEX_ROW_RATIO);
        assert_abs_diff_eq!(grid.bubble_radius, 50.0);
        let (w, h) = grid.size();
        assert_abs_diff_eq!(w, 1260.0);
        assert_abs_diff_eq!(h, 5.5 * grid.row_height);
    }

    #[test]
    fn few_bubbles_spread_out() {
        // Five columns of 240 fit in two rows; the radius caps at 55.
        let grid = optimal_grid(10, 1280.0, 800.0, &GridLayout::default());
        assert_eq!((grid.cols, grid.rows), (5, 2));
        assert_abs_diff_eq!(grid.spacing, 240.0);
        assert_abs_diff_eq!(grid.bubble_radius, 55.0);
    }

    #[test]
    fn narrow_view_keeps_minimum_spacing() {
        for (count, width, height) in [(5, 200.0, 300.0), (100, 500.0, 400.0), (3, 10.0, 10.0)] {
            let grid = optimal_grid(count, width, height, &GridLayout::default());
            assert!(grid.spacing >= 120.0);
            assert!(grid.cols >= 1);
            assert_eq!(grid.rows, count.div_ceil(grid.cols));
        }
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid = optimal_grid(0, 1280.0, 800.0, &GridLayout::default());
        assert_eq!(grid.rows, 0);
        assert!(grid.positions(0).is_empty());
    }

    #[test]
    fn odd_rows_are_offset() {
        let grid = optimal_grid(50, 1280.0, 800.0, &GridLayout::default());
        let pts = grid.positions(12);
        assert_abs_diff_eq!(pts[0].x, 40.0 + 60.0);
        assert_abs_diff_eq!(pts[0].y, 140.0 + grid.row_height / 2.0);
        assert_abs_diff_eq!(pts[10].x, pts[0].x + 60.0);
        assert_abs_diff_eq!(pts[10].y - pts[0].y, grid.row_height);
    }

    #[test]
    fn neighbors_never_overlap() {
        let grid = optimal_grid(50, 1280.0, 800.0, &GridLayout::default());
        let pts = grid.positions(50);
        for (i, a) in pts.iter().enumerate() {
            for b in &pts[i + 1..] {
                assert!((b - a).norm() >= grid.bubble_radius * 2.0);
            }
        }
    }
}
