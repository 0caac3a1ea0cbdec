use std::fmt;

use crate::math::arc_2d::CubicBezier;
use crate::math::Point2;

/// One drawing token of a face boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    CurveTo(CubicBezier),
    Close,
}

/// An ordered sequence of path commands describing one face.
///
/// An empty path is valid and stands for a face that is not visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polyline path: the first point becomes a move, the rest
    /// become lines, and `closed` appends a close token.
    ///
    /// No points gives an empty path, even when `closed` is set.
    #[must_use]
    pub fn to_line_path(points: &[Point2], closed: bool) -> Self {
        let mut path = Self::new();
        let Some((first, rest)) = points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        if closed {
            path.close();
        }
        path
    }

    /// Appends a move command.
    pub fn move_to(&mut self, p: Point2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Appends a line command.
    pub fn line_to(&mut self, p: Point2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Appends cubic curve commands, one per segment.
    pub fn curves(&mut self, segments: impl IntoIterator<Item = CubicBezier>) -> &mut Self {
        self.commands
            .extend(segments.into_iter().map(PathCommand::CurveTo));
        self
    }

    /// Appends a close command.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Returns the commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns the end point of every drawing command, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::CurveTo(b) => Some(b.to),
                PathCommand::Close => None,
            })
            .collect()
    }
}

/// Serialises the path as SVG path data (`M x y L x y C ... Z`).
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::CurveTo(b) => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    b.ctrl1.x, b.ctrl1.y, b.ctrl2.x, b.ctrl2.y, b.to.x, b.to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn line_path_open_and_closed() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 2.0)];
        let open = Path::to_line_path(&pts, false);
        assert_eq!(open.len(), 3);
        assert!(matches!(open.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(open.commands()[2], PathCommand::LineTo(_)));

        let closed = Path::to_line_path(&pts, true);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.commands()[3], PathCommand::Close);
    }

    #[test]
    fn line_path_from_nothing_is_empty() {
        assert!(Path::to_line_path(&[], true).is_empty());
    }

    #[test]
    fn svg_output() {
        let mut path = Path::new();
        path.move_to(Point2::new(0.0, 0.0))
            .line_to(Point2::new(10.0, 0.5))
            .curves([CubicBezier {
                ctrl1: Point2::new(1.0, 2.0),
                ctrl2: Point2::new(3.0, 4.0),
                to: Point2::new(5.0, 6.0),
            }])
            .close();
        assert_eq!(path.to_string(), "M 0 0 L 10 0.5 C 1 2 3 4 5 6 Z");
    }

    #[test]
    fn vertices_skip_close() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)];
        let path = Path::to_line_path(&pts, true);
        assert_eq!(path.vertices(), pts.to_vec());
    }
}
