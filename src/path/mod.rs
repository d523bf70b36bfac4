mod combine;
mod smooth;

pub use combine::combine_edges;
pub use smooth::to_smooth_path;

use std::fmt;

use crate::math::{Point2, Vector2};

/// A single 2D drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo(Point2),
    /// Quadratic Bezier with an explicit control point.
    QuadTo { control: Point2, to: Point2 },
    /// Quadratic Bezier whose control point is the reflection of the
    /// previous one.
    SmoothQuadTo(Point2),
    /// Straight segment.
    LineTo(Point2),
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    /// The point this command ends at, if any.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            Self::MoveTo(p) | Self::SmoothQuadTo(p) | Self::LineTo(p) => Some(p),
            Self::QuadTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }

    fn translated(&self, offset: Vector2) -> Self {
        match *self {
            Self::MoveTo(p) => Self::MoveTo(p + offset),
            Self::QuadTo { control, to } => Self::QuadTo {
                control: control + offset,
                to: to + offset,
            },
            Self::SmoothQuadTo(p) => Self::SmoothQuadTo(p + offset),
            Self::LineTo(p) => Self::LineTo(p + offset),
            Self::Close => Self::Close,
        }
    }
}

/// An ordered list of drawing instructions.
///
/// Formats as an SVG path `d` attribute with coordinates fixed to two
/// decimals. An empty path means "nothing to draw".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathString {
    pub commands: Vec<PathCommand>,
}

impl PathString {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// The point of the leading move, if any.
    #[must_use]
    pub fn first_point(&self) -> Option<Point2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// The last drawn point (ignoring a trailing close).
    #[must_use]
    pub fn last_point(&self) -> Option<Point2> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Returns whether the path ends with a close instruction.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let offset = Vector2::new(dx, dy);
        Self {
            commands: self.commands.iter().map(|c| c.translated(offset)).collect(),
        }
    }
}

impl From<Vec<PathCommand>> for PathString {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

/// Formats a coordinate with two decimals, printing `-0` as `0`.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{v:.2}")
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", Coord(p.x), Coord(p.y)),
            Self::QuadTo { control, to } => write!(
                f,
                "Q {} {} {} {}",
                Coord(control.x),
                Coord(control.y),
                Coord(to.x),
                Coord(to.y)
            ),
            Self::SmoothQuadTo(p) => write!(f, "T {} {}", Coord(p.x), Coord(p.y)),
            Self::LineTo(p) => write!(f, "L {} {}", Coord(p.x), Coord(p.y)),
            Self::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
